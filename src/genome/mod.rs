
use crate::mutation::SequenceType;
use color_eyre::eyre::{Report, Result, WrapErr};
use serde::{Deserialize, Serialize};

// ----------------------------------------------------------------------------
// Named Sequence
// ----------------------------------------------------------------------------

/// One named sequence entry from the external reference genome value.
///
/// Only `name` is consulted here; the bases are carried along untouched and
/// may be omitted from the input entirely.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct NamedSequence {
    pub name: String,
    #[serde(default)]
    pub sequence: String,
}

impl NamedSequence {
    pub fn named<S: Into<String>>(name: S) -> Self {
        NamedSequence { name: name.into(), sequence: String::new() }
    }
}

// ----------------------------------------------------------------------------
// Reference Genome
// ----------------------------------------------------------------------------

/// Ordered lookup of nucleotide segment and gene names.
///
/// Immutable after construction and read-only for every other component.
/// Created once per session from an external fetch; the [`Default`]
/// placeholder (no segments, no genes) stands in until the real genome
/// arrives. Segment and gene names are assumed unique and non-overlapping,
/// as guaranteed by the fetch layer.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceGenome {
    nucleotide_sequences: Vec<NamedSequence>,
    genes: Vec<NamedSequence>,
}

impl ReferenceGenome {
    /// Create a genome from segment and gene names.
    pub fn new<S, G>(segments: Vec<S>, genes: Vec<G>) -> Self
    where
        S: Into<String>,
        G: Into<String>,
    {
        ReferenceGenome {
            nucleotide_sequences: segments.into_iter().map(NamedSequence::named).collect(),
            genes: genes.into_iter().map(NamedSequence::named).collect(),
        }
    }

    /// Parse the reference genome value supplied by the fetch layer.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// use mutfilter::ReferenceGenome;
    ///
    /// let json = r#"{
    ///     "nucleotideSequences": [{"name": "main", "sequence": "ATTAAAGG"}],
    ///     "genes": [{"name": "ORF1a"}, {"name": "S"}]
    /// }"#;
    /// let genome = ReferenceGenome::from_json(json)?;
    /// assert!(genome.is_single_segmented());
    /// assert!(genome.has_gene("S"));
    /// # Ok::<(), color_eyre::eyre::Report>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self, Report> {
        serde_json::from_str(json).wrap_err("Failed to parse reference genome")
    }

    /// Nucleotide segment names, in genome order.
    pub fn segment_names(&self) -> impl Iterator<Item = &str> {
        self.nucleotide_sequences.iter().map(|s| s.name.as_str())
    }

    /// Gene names, in genome order.
    pub fn gene_names(&self) -> impl Iterator<Item = &str> {
        self.genes.iter().map(|g| g.name.as_str())
    }

    pub fn has_segment(&self, name: &str) -> bool {
        self.segment_names().any(|segment| segment == name)
    }

    pub fn has_gene(&self, name: &str) -> bool {
        self.gene_names().any(|gene| gene == name)
    }

    /// True if the genome has exactly one nucleotide segment, in which case
    /// nucleotide tokens may omit the segment name.
    pub fn is_single_segmented(&self) -> bool {
        self.nucleotide_sequences.len() == 1
    }

    /// True for the placeholder genome with no names at all.
    ///
    /// Callers are expected to refuse mutation input on an empty genome
    /// rather than let tokens fail one by one.
    pub fn is_empty(&self) -> bool {
        self.nucleotide_sequences.is_empty() && self.genes.is_empty()
    }

    /// Resolve an optional segment name to a sequence type.
    ///
    /// An explicit name must match a known segment or gene. An implicit
    /// (absent) name is valid only on a single-segmented genome, where it
    /// means the sole nucleotide segment; there is no default gene, so
    /// amino acid tokens always need an explicit name.
    pub fn resolve_segment(&self, segment: Option<&str>) -> Option<SequenceType> {
        match segment {
            Some(name) if self.has_segment(name) => Some(SequenceType::Nucleotide),
            Some(name) if self.has_gene(name) => Some(SequenceType::AminoAcid),
            Some(_) => None,
            None if self.is_single_segmented() => Some(SequenceType::Nucleotide),
            None => None,
        }
    }
}
