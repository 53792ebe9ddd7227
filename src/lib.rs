//! `mutfilter` parses free-text mutation notation and maintains a validated
//! filter selection for genomic surveillance dashboards.
//!
//! A user types tokens such as `S:501Y`, `23T`, `A234-`, or `ins_S:214:?EP?`.
//! Each token is parsed as a substitution, deletion, or insertion, resolved
//! against a [`ReferenceGenome`] to a nucleotide segment or an amino acid
//! gene, and classified into one of four filter categories. A [`Selection`]
//! accumulates the classified filters in insertion order, deduplicated by
//! canonical code, and reports every change as a grouped [`Snapshot`].
//!
//! ## Example
//!
//! ```rust
//! use mutfilter::{classify, Category, ReferenceGenome, Selection};
//!
//! let genome = ReferenceGenome::new(vec!["main"], vec!["ORF1a", "S"]);
//!
//! // the genome has a single nucleotide segment, so "23T" needs no segment name
//! let filter = classify("23T", &genome).unwrap();
//! assert_eq!(filter.category, Category::NucleotideMutation);
//!
//! let mut selection = Selection::new(genome);
//! let outcome = selection.add_bulk("23T, S:501Y, notAMutation");
//! assert_eq!(outcome.accepted, vec!["23T", "S:501Y"]);
//! assert_eq!(outcome.rejected, vec!["notAMutation"]);
//! ```

pub mod filter;
pub mod genome;
pub mod mutation;
pub mod placeholder;
pub mod selection;

#[doc(inline)]
pub use crate::filter::{classify, Category, ClassifiedMutation};
#[doc(inline)]
pub use crate::genome::ReferenceGenome;
#[doc(inline)]
pub use crate::mutation::{Mutation, SequenceType};
#[doc(inline)]
pub use crate::selection::{BulkOutcome, InitialValue, Reject, Selection, Snapshot};
