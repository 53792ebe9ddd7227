pub mod tests;

use color_eyre::eyre::{eyre, Report, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ----------------------------------------------------------------------------
// Sequence Type
// ----------------------------------------------------------------------------

/// Whether a token is anchored to a nucleotide segment or an amino acid gene.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum SequenceType {
    #[serde(rename = "nucleotide")]
    Nucleotide,
    #[serde(rename = "amino acid")]
    AminoAcid,
}

impl fmt::Display for SequenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SequenceType::Nucleotide => "nucleotide",
            SequenceType::AminoAcid => "amino acid",
        };

        write!(f, "{}", name)
    }
}

// ----------------------------------------------------------------------------
// Grammar
// ----------------------------------------------------------------------------

lazy_static! {
    /// `[<segment>:]<ref?><position><alt>` where `alt` is a letter or `.`.
    static ref SUBSTITUTION: Regex =
        Regex::new(r"^(?:([^:]+):)?([A-Za-z])?([0-9]+)([A-Za-z.])$").unwrap();

    /// Same shape as a substitution, with the `-` sentinel as the alt.
    static ref DELETION: Regex =
        Regex::new(r"^(?:([^:]+):)?([A-Za-z])?([0-9]+)-$").unwrap();

    /// `ins_[<segment>:]<position>:<symbols>` where `?` is the wildcard.
    static ref INSERTION: Regex =
        Regex::new(r"^ins_(?:([^:]+):)?([0-9]+):([A-Za-z?]+)$").unwrap();
}

/// Try to parse a substitution token, e.g. `S:501Y`, `A23T`, `234.`.
///
/// The reference base is optional documentation supplied by the user; it is
/// not checked against actual sequence data. An alt of `.` records that the
/// position was confirmed unchanged.
pub fn parse_substitution(text: &str) -> Option<Substitution> {
    let caps = SUBSTITUTION.captures(text)?;
    Some(Substitution {
        segment: caps.get(1).map(|m| m.as_str().to_string()),
        reference: caps.get(2).and_then(|m| m.as_str().chars().next()),
        // overflow of the position is a parse failure, not a panic
        position: caps.get(3)?.as_str().parse().ok()?,
        alt: caps.get(4)?.as_str().chars().next()?,
    })
}

/// Try to parse a deletion token, e.g. `S:69-`, `A234-`, `23-`.
pub fn parse_deletion(text: &str) -> Option<Deletion> {
    let caps = DELETION.captures(text)?;
    Some(Deletion {
        segment: caps.get(1).map(|m| m.as_str().to_string()),
        reference: caps.get(2).and_then(|m| m.as_str().chars().next()),
        position: caps.get(3)?.as_str().parse().ok()?,
    })
}

/// Try to parse an insertion token, e.g. `ins_1046:A`, `ins_S:214:?EP?`.
///
/// The inserted sequence may contain the wildcard `?`; an all-wildcard
/// sequence (`ins_1046:???`) means "any insertion present here".
pub fn parse_insertion(text: &str) -> Option<Insertion> {
    let caps = INSERTION.captures(text)?;
    Some(Insertion {
        segment: caps.get(1).map(|m| m.as_str().to_string()),
        position: caps.get(2)?.as_str().parse().ok()?,
        sequence: caps.get(3)?.as_str().to_string(),
    })
}

// ----------------------------------------------------------------------------
// Substitution
// ----------------------------------------------------------------------------

/// A base or residue at one position that differs from the reference.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Substitution {
    /// Explicit segment or gene name, absent for the implicit segment.
    pub segment: Option<String>,
    /// Reference base the user wrote down, purely informational.
    pub reference: Option<char>,
    /// 1-based genomic or protein position.
    pub position: usize,
    /// Substituted base, or `.` for confirmed unchanged. Never `-`.
    pub alt: char,
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(segment) = &self.segment {
            write!(f, "{}:", segment)?;
        }
        if let Some(reference) = self.reference {
            write!(f, "{}", reference)?;
        }
        write!(f, "{}{}", self.position, self.alt)
    }
}

// ----------------------------------------------------------------------------
// Deletion
// ----------------------------------------------------------------------------

/// A base or residue at one position that is absent from the sample.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Deletion {
    pub segment: Option<String>,
    pub reference: Option<char>,
    pub position: usize,
}

impl fmt::Display for Deletion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(segment) = &self.segment {
            write!(f, "{}:", segment)?;
        }
        if let Some(reference) = self.reference {
            write!(f, "{}", reference)?;
        }
        write!(f, "{}-", self.position)
    }
}

// ----------------------------------------------------------------------------
// Insertion
// ----------------------------------------------------------------------------

/// Symbols inserted between `position` and `position + 1`.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Insertion {
    pub segment: Option<String>,
    /// 1-based position of the left flank.
    pub position: usize,
    /// Inserted symbols, wildcard `?` allowed.
    pub sequence: String,
}

impl fmt::Display for Insertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ins_")?;
        if let Some(segment) = &self.segment {
            write!(f, "{}:", segment)?;
        }
        write!(f, "{}:{}", self.position, self.sequence)
    }
}

// ----------------------------------------------------------------------------
// Mutation
// ----------------------------------------------------------------------------

/// A parsed mutation-notation token.
///
/// The canonical string form ([`code`](Mutation::code)) round-trips: parsing
/// the code of any token yields an equal token.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Mutation {
    Substitution(Substitution),
    Deletion(Deletion),
    Insertion(Insertion),
}

impl Mutation {
    /// Parse a token, trying insertion, then deletion, then substitution.
    ///
    /// The `ins_` prefix and the `-` sentinel keep the three rules disjoint,
    /// so the order is a safety net rather than a semantic choice. Returns
    /// `None` for anything that matches no rule.
    pub fn parse(text: &str) -> Option<Mutation> {
        if let Some(insertion) = parse_insertion(text) {
            return Some(Mutation::Insertion(insertion));
        }
        if let Some(deletion) = parse_deletion(text) {
            return Some(Mutation::Deletion(deletion));
        }
        parse_substitution(text).map(Mutation::Substitution)
    }

    /// Explicit segment or gene name, if the token carried one.
    pub fn segment(&self) -> Option<&str> {
        match self {
            Mutation::Substitution(s) => s.segment.as_deref(),
            Mutation::Deletion(d) => d.segment.as_deref(),
            Mutation::Insertion(i) => i.segment.as_deref(),
        }
    }

    /// 1-based position, the left flank for insertions.
    pub fn position(&self) -> usize {
        match self {
            Mutation::Substitution(s) => s.position,
            Mutation::Deletion(d) => d.position,
            Mutation::Insertion(i) => i.position,
        }
    }

    /// Canonical string form, used for display and deduplication.
    pub fn code(&self) -> String {
        self.to_string()
    }

    /// True for insertion tokens, false for substitutions and deletions.
    pub fn is_insertion(&self) -> bool {
        matches!(self, Mutation::Insertion(_))
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mutation::Substitution(s) => s.fmt(f),
            Mutation::Deletion(d) => d.fmt(f),
            Mutation::Insertion(i) => i.fmt(f),
        }
    }
}

impl FromStr for Mutation {
    type Err = Report;

    fn from_str(text: &str) -> Result<Self, Report> {
        Mutation::parse(text).ok_or_else(|| eyre!("Unrecognized mutation notation: {text:?}"))
    }
}
