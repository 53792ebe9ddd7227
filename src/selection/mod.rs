
use crate::filter::{classify, Category, ClassifiedMutation};
use crate::genome::ReferenceGenome;
use itertools::Itertools;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use strum::IntoEnumIterator;

// ----------------------------------------------------------------------------
// Reject
// ----------------------------------------------------------------------------

/// Why an interactive add refused a token.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Reject {
    /// The token matches no grammar rule, or its segment is unknown to the
    /// reference genome. Callers are not expected to tell the two apart.
    Unrecognized(String),
    /// The token parsed and resolved, but its category is switched off.
    /// Reported distinctly so the caller can explain why.
    Disabled(Category),
}

impl fmt::Display for Reject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reject::Unrecognized(text) => write!(f, "Unrecognized mutation: {text:?}"),
            Reject::Disabled(category) => write!(f, "Filter category is disabled: {category}"),
        }
    }
}

// ----------------------------------------------------------------------------
// Bulk Outcome
// ----------------------------------------------------------------------------

/// Per-fragment results of a bulk (comma-separated) add.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BulkOutcome {
    /// Canonical codes merged into the selection, in input order.
    pub accepted: Vec<String>,
    /// Refused fragments: the trimmed input text when it did not classify,
    /// the canonical code when its category was disabled.
    pub rejected: Vec<String>,
}

// ----------------------------------------------------------------------------
// Snapshot
// ----------------------------------------------------------------------------

/// Change-event payload: selected codes grouped by category.
///
/// Each list keeps insertion order. Field names serialize to the external
/// payload keys (`nucleotideMutations`, ...).
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Snapshot {
    pub nucleotide_mutations: Vec<String>,
    pub amino_acid_mutations: Vec<String>,
    pub nucleotide_insertions: Vec<String>,
    pub amino_acid_insertions: Vec<String>,
}

impl Snapshot {
    /// The code list for one category.
    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::NucleotideMutation => &self.nucleotide_mutations,
            Category::AminoAcidMutation => &self.amino_acid_mutations,
            Category::NucleotideInsertion => &self.nucleotide_insertions,
            Category::AminoAcidInsertion => &self.amino_acid_insertions,
        }
    }

    fn push(&mut self, category: Category, code: String) {
        match category {
            Category::NucleotideMutation => self.nucleotide_mutations.push(code),
            Category::AminoAcidMutation => self.amino_acid_mutations.push(code),
            Category::NucleotideInsertion => self.nucleotide_insertions.push(code),
            Category::AminoAcidInsertion => self.amino_acid_insertions.push(code),
        }
    }
}

// ----------------------------------------------------------------------------
// Initial Value
// ----------------------------------------------------------------------------

/// Starting selection, either a flat list of raw tokens or the grouped
/// snapshot shape.
///
/// Unlike interactive adds, entries that fail classification are dropped
/// silently (logged, no feedback). Downstream callers rely on this
/// leniency for stored dashboard state, so it is deliberate.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum InitialValue {
    Flat(Vec<String>),
    Grouped(Snapshot),
}

impl InitialValue {
    fn tokens(&self) -> Vec<&str> {
        match self {
            InitialValue::Flat(tokens) => tokens.iter().map(String::as_str).collect_vec(),
            InitialValue::Grouped(snapshot) => Category::iter()
                .flat_map(|category| snapshot.get(category))
                .map(String::as_str)
                .collect_vec(),
        }
    }
}

// ----------------------------------------------------------------------------
// Selection
// ----------------------------------------------------------------------------

/// Callback invoked with the new [`Snapshot`] after every state change.
pub type OnChange = Box<dyn FnMut(&Snapshot)>;

/// An ordered, deduplicated set of classified mutation filters.
///
/// Owned by a single consuming widget: every operation is synchronous and
/// total, and rejected input never enters the list. Dedup and removal scan
/// linearly, which is fine for selections of a few dozen entries.
pub struct Selection {
    genome: ReferenceGenome,
    entries: Vec<ClassifiedMutation>,
    enabled: BTreeSet<Category>,
    on_change: Option<OnChange>,
}

impl fmt::Debug for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selection")
            .field("genome", &self.genome)
            .field("entries", &self.entries)
            .field("enabled", &self.enabled)
            .finish()
    }
}

impl Selection {
    /// Create an empty selection with all four categories enabled.
    pub fn new(genome: ReferenceGenome) -> Self {
        Selection {
            genome,
            entries: Vec::new(),
            enabled: Category::iter().collect(),
            on_change: None,
        }
    }

    /// Seed a selection from an initial value, dropping invalid entries.
    pub fn with_initial(genome: ReferenceGenome, initial: &InitialValue) -> Self {
        let mut selection = Selection::new(genome);

        for token in initial.tokens() {
            let token = token.trim();
            match classify(token, &selection.genome) {
                Some(entry) if selection.enabled.contains(&entry.category) => {
                    if !selection.contains(&entry.code()) {
                        selection.entries.push(entry);
                    }
                }
                _ => warn!("Dropping invalid initial mutation filter: {token:?}"),
            }
        }

        selection
    }

    /// Register the change callback. It fires once per state-changing
    /// operation, after the state has been updated.
    pub fn set_on_change(&mut self, on_change: impl FnMut(&Snapshot) + 'static) {
        self.on_change = Some(Box::new(on_change));
    }

    /// Classify and append a single token.
    ///
    /// A token whose code is already selected is a silent no-op, not an
    /// error, and emits no event.
    pub fn add(&mut self, text: &str) -> Result<(), Reject> {
        let text = text.trim();
        let entry =
            classify(text, &self.genome).ok_or_else(|| Reject::Unrecognized(text.to_string()))?;

        if !self.enabled.contains(&entry.category) {
            return Err(Reject::Disabled(entry.category));
        }
        if self.contains(&entry.code()) {
            return Ok(());
        }

        debug!("Selected mutation filter: {} ({})", entry.code(), entry.category);
        self.entries.push(entry);
        self.notify();

        Ok(())
    }

    /// Split on commas and merge every valid fragment in one atomic update.
    ///
    /// Empty fragments are skipped. At most one change event is emitted for
    /// the whole batch, and only if the selection actually changed.
    pub fn add_bulk(&mut self, text: &str) -> BulkOutcome {
        let mut outcome = BulkOutcome::default();
        let mut changed = false;

        for fragment in text.split(',').map(str::trim).filter(|f| !f.is_empty()) {
            match classify(fragment, &self.genome) {
                None => outcome.rejected.push(fragment.to_string()),
                Some(entry) if !self.enabled.contains(&entry.category) => {
                    outcome.rejected.push(entry.code());
                }
                Some(entry) => {
                    let code = entry.code();
                    if !self.contains(&code) {
                        self.entries.push(entry);
                        changed = true;
                    }
                    outcome.accepted.push(code);
                }
            }
        }

        if !outcome.rejected.is_empty() {
            debug!("Rejected mutation filters: {}", outcome.rejected.iter().join(", "));
        }
        if changed {
            self.notify();
        }

        outcome
    }

    /// Remove the entry with this canonical code. No-op without an event if
    /// the code is not selected.
    pub fn remove(&mut self, code: &str) {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.code() != code);

        if self.entries.len() != before {
            self.notify();
        }
    }

    /// Replace the enabled category set, evicting entries whose category is
    /// no longer enabled, and emit the filtered snapshot.
    pub fn set_enabled_categories(&mut self, categories: impl IntoIterator<Item = Category>) {
        self.enabled = categories.into_iter().collect();

        let enabled = self.enabled.clone();
        self.entries.retain(|entry| enabled.contains(&entry.category));
        self.notify();
    }

    /// Current selection grouped by category, insertion order within each.
    pub fn snapshot(&self) -> Snapshot {
        let mut snapshot = Snapshot::default();
        for entry in &self.entries {
            snapshot.push(entry.category, entry.code());
        }
        snapshot
    }

    /// All selected codes in insertion order, across categories.
    pub fn codes(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.code()).collect_vec()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.iter().any(|entry| entry.code() == code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn enabled_categories(&self) -> Vec<Category> {
        self.enabled.iter().copied().collect_vec()
    }

    pub fn genome(&self) -> &ReferenceGenome {
        &self.genome
    }

    fn notify(&mut self) {
        let snapshot = self.snapshot();
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(&snapshot);
        }
    }
}
