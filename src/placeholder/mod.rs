pub mod tests;

use crate::genome::ReferenceGenome;
use itertools::Itertools;

// ----------------------------------------------------------------------------
// Placeholder
// ----------------------------------------------------------------------------

/// Example tokens to prompt the user with, derived from the genome's names.
///
/// Nucleotide examples use the implicit form on a single-segmented genome
/// and the first segment name otherwise; amino acid examples use the first
/// gene name. An empty genome yields no examples.
pub fn examples(genome: &ReferenceGenome) -> Vec<String> {
    let mut examples = Vec::new();

    if let Some(segment) = genome.segment_names().next() {
        if genome.is_single_segmented() {
            examples.push("G13371A".to_string());
            examples.push("ins_1046:A".to_string());
        } else {
            examples.push(format!("{segment}:G13371A"));
            examples.push(format!("ins_{segment}:1046:A"));
        }
    }
    if let Some(gene) = genome.gene_names().next() {
        examples.push(format!("{gene}:57Q"));
        examples.push(format!("ins_{gene}:214:EPE"));
    }

    examples
}

/// One-line input prompt listing the example tokens.
pub fn text(genome: &ReferenceGenome) -> String {
    let examples = examples(genome);
    if examples.is_empty() {
        "Enter a mutation".to_string()
    } else {
        format!("Enter a mutation (e.g. {})", examples.iter().join(", "))
    }
}
