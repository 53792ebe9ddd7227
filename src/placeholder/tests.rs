use crate::genome::ReferenceGenome;
use crate::placeholder;

use color_eyre::eyre::{Report, Result};

#[test]
fn single_segmented_examples_are_implicit() -> Result<(), Report> {
    let genome = ReferenceGenome::new(vec!["main"], vec!["ORF1a", "S"]);

    let observed = placeholder::examples(&genome);
    let expected = vec!["G13371A", "ins_1046:A", "ORF1a:57Q", "ins_ORF1a:214:EPE"];
    assert_eq!(expected, observed);
    Ok(())
}

#[test]
fn multi_segmented_examples_name_the_segment() -> Result<(), Report> {
    let genome = ReferenceGenome::new(vec!["seg1", "seg2"], vec!["HA"]);

    let observed = placeholder::examples(&genome);
    let expected = vec!["seg1:G13371A", "ins_seg1:1046:A", "HA:57Q", "ins_HA:214:EPE"];
    assert_eq!(expected, observed);
    Ok(())
}

#[test]
fn examples_classify_against_their_genome() -> Result<(), Report> {
    // every prompted example must be accepted by the classifier
    let genomes = vec![
        ReferenceGenome::new(vec!["main"], vec!["ORF1a", "S"]),
        ReferenceGenome::new(vec!["seg1", "seg2"], vec!["HA"]),
        ReferenceGenome::new(vec!["main"], Vec::<String>::new()),
    ];

    for genome in genomes {
        for example in placeholder::examples(&genome) {
            assert!(
                crate::filter::classify(&example, &genome).is_some(),
                "example {example:?} did not classify"
            );
        }
    }
    Ok(())
}

#[test]
fn prompt_text() -> Result<(), Report> {
    let genome = ReferenceGenome::new(vec!["main"], Vec::<String>::new());
    let observed = placeholder::text(&genome);
    assert_eq!("Enter a mutation (e.g. G13371A, ins_1046:A)", observed);

    let empty = ReferenceGenome::default();
    assert_eq!("Enter a mutation", placeholder::text(&empty));
    Ok(())
}
