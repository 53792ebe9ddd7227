
use crate::genome::ReferenceGenome;
use crate::mutation::{Mutation, SequenceType};
use color_eyre::eyre::{eyre, Report, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::EnumIter;

// ----------------------------------------------------------------------------
// Category
// ----------------------------------------------------------------------------

/// The four kinds of mutation filter a dashboard can hold.
///
/// String forms match the field names of the external change payload.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    EnumIter,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub enum Category {
    /// Substitution or deletion on a nucleotide segment.
    #[serde(rename = "nucleotideMutations")]
    NucleotideMutation,
    /// Substitution or deletion on a gene.
    #[serde(rename = "aminoAcidMutations")]
    AminoAcidMutation,
    /// Insertion on a nucleotide segment.
    #[serde(rename = "nucleotideInsertions")]
    NucleotideInsertion,
    /// Insertion on a gene.
    #[serde(rename = "aminoAcidInsertions")]
    AminoAcidInsertion,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::NucleotideMutation => "nucleotideMutations",
            Category::AminoAcidMutation => "aminoAcidMutations",
            Category::NucleotideInsertion => "nucleotideInsertions",
            Category::AminoAcidInsertion => "aminoAcidInsertions",
        };

        write!(f, "{}", name)
    }
}

impl FromStr for Category {
    type Err = Report;

    fn from_str(name: &str) -> Result<Self, Report> {
        let category = match name {
            "nucleotideMutations" => Category::NucleotideMutation,
            "aminoAcidMutations" => Category::AminoAcidMutation,
            "nucleotideInsertions" => Category::NucleotideInsertion,
            "aminoAcidInsertions" => Category::AminoAcidInsertion,
            _ => Err(eyre!("Unknown mutation filter category: {name}"))?,
        };

        Ok(category)
    }
}

// ----------------------------------------------------------------------------
// Classified Mutation
// ----------------------------------------------------------------------------

/// A parsed token paired with its resolved category.
///
/// Equality is by canonical code, which is also the deduplication key in a
/// [`Selection`](crate::selection::Selection).
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ClassifiedMutation {
    pub category: Category,
    pub mutation: Mutation,
}

impl ClassifiedMutation {
    /// Canonical code of the underlying token.
    pub fn code(&self) -> String {
        self.mutation.code()
    }
}

impl PartialEq for ClassifiedMutation {
    fn eq(&self, other: &Self) -> bool {
        self.mutation.code() == other.mutation.code()
    }
}

impl Eq for ClassifiedMutation {}

impl fmt::Display for ClassifiedMutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.mutation.fmt(f)
    }
}

// ----------------------------------------------------------------------------
// Classifier
// ----------------------------------------------------------------------------

/// Classify a raw token against the reference genome.
///
/// The first matching grammar rule wins, then the token's segment is
/// resolved to a sequence type. A token that parses but whose segment
/// cannot be resolved (unknown name, or implicit on a multi-segmented
/// genome) is rejected the same way as one that does not parse at all.
/// Pure and deterministic; never panics on arbitrary input.
pub fn classify(text: &str, genome: &ReferenceGenome) -> Option<ClassifiedMutation> {
    let mutation = Mutation::parse(text)?;
    let sequence_type = genome.resolve_segment(mutation.segment())?;

    let category = match (&mutation, sequence_type) {
        (Mutation::Insertion(_), SequenceType::Nucleotide) => Category::NucleotideInsertion,
        (Mutation::Insertion(_), SequenceType::AminoAcid) => Category::AminoAcidInsertion,
        (_, SequenceType::Nucleotide) => Category::NucleotideMutation,
        (_, SequenceType::AminoAcid) => Category::AminoAcidMutation,
    };

    Some(ClassifiedMutation { category, mutation })
}
