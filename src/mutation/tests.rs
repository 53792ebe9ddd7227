use crate::mutation::{parse_deletion, parse_insertion, parse_substitution, Mutation};

use color_eyre::eyre::{Report, Result};

#[test]
fn substitution_with_segment() -> Result<(), Report> {
    let observed = parse_substitution("S:501Y").unwrap();
    assert_eq!(Some("S"), observed.segment.as_deref());
    assert_eq!(None, observed.reference);
    assert_eq!(501, observed.position);
    assert_eq!('Y', observed.alt);
    assert_eq!("S:501Y", observed.to_string());
    Ok(())
}

#[test]
fn substitution_implicit_segment() -> Result<(), Report> {
    let observed = parse_substitution("23T").unwrap();
    assert_eq!(None, observed.segment);
    assert_eq!(None, observed.reference);
    assert_eq!(23, observed.position);
    assert_eq!('T', observed.alt);
    assert_eq!("23T", observed.to_string());
    Ok(())
}

#[test]
fn substitution_with_reference_base() -> Result<(), Report> {
    let observed = parse_substitution("A123T").unwrap();
    assert_eq!(Some('A'), observed.reference);
    assert_eq!(123, observed.position);
    assert_eq!("A123T", observed.to_string());
    Ok(())
}

#[test]
fn substitution_confirmed_unchanged() -> Result<(), Report> {
    // '.' is a valid alt meaning the position was confirmed unchanged
    let observed = parse_substitution("A234.").unwrap();
    assert_eq!('.', observed.alt);
    assert_eq!("A234.", observed.to_string());
    Ok(())
}

#[test]
fn substitution_rejects_deletion_sentinel() -> Result<(), Report> {
    assert_eq!(None, parse_substitution("A234-"));
    Ok(())
}

#[test]
fn deletion() -> Result<(), Report> {
    let observed = parse_deletion("A234-").unwrap();
    assert_eq!(None, observed.segment);
    assert_eq!(Some('A'), observed.reference);
    assert_eq!(234, observed.position);
    assert_eq!("A234-", observed.to_string());

    let observed = parse_deletion("S:69-").unwrap();
    assert_eq!(Some("S"), observed.segment.as_deref());
    assert_eq!(None, observed.reference);
    assert_eq!("S:69-", observed.to_string());
    Ok(())
}

#[test]
fn deletion_and_confirmed_unchanged_are_distinct() -> Result<(), Report> {
    let deletion = Mutation::parse("A234-").unwrap();
    let confirmed = Mutation::parse("A234.").unwrap();
    assert!(matches!(deletion, Mutation::Deletion(_)));
    assert!(matches!(confirmed, Mutation::Substitution(_)));
    assert_ne!(deletion.code(), confirmed.code());
    Ok(())
}

#[test]
fn insertion() -> Result<(), Report> {
    let observed = parse_insertion("ins_1046:A").unwrap();
    assert_eq!(None, observed.segment);
    assert_eq!(1046, observed.position);
    assert_eq!("A", observed.sequence);
    assert_eq!("ins_1046:A", observed.to_string());

    let observed = parse_insertion("ins_S:214:EPE").unwrap();
    assert_eq!(Some("S"), observed.segment.as_deref());
    assert_eq!(214, observed.position);
    assert_eq!("EPE", observed.sequence);
    assert_eq!("ins_S:214:EPE", observed.to_string());
    Ok(())
}

#[test]
fn insertion_wildcards() -> Result<(), Report> {
    // mixed: an insertion containing EP, with optional flanking symbols
    let observed = parse_insertion("ins_S:214:?EP?").unwrap();
    assert_eq!("?EP?", observed.sequence);
    assert_eq!("ins_S:214:?EP?", observed.to_string());

    // all-wildcard: any insertion present at the position
    let observed = parse_insertion("ins_1046:???").unwrap();
    assert_eq!("???", observed.sequence);
    Ok(())
}

#[test]
fn parse_order_is_insertion_deletion_substitution() -> Result<(), Report> {
    assert!(matches!(Mutation::parse("ins_1046:A").unwrap(), Mutation::Insertion(_)));
    assert!(matches!(Mutation::parse("A234-").unwrap(), Mutation::Deletion(_)));
    assert!(matches!(Mutation::parse("A234T").unwrap(), Mutation::Substitution(_)));
    Ok(())
}

#[test]
fn code_round_trips() -> Result<(), Report> {
    let codes = vec![
        "23T",
        "A123T",
        "S:501Y",
        "seg1:A123T",
        "A234.",
        "23-",
        "A234-",
        "ORF1a:3675-",
        "ins_1046:A",
        "ins_S:214:EPE",
        "ins_S:214:?EP?",
        "ins_1046:???",
    ];

    for code in codes {
        let token = Mutation::parse(code).unwrap();
        assert_eq!(code, token.code());
        assert_eq!(Some(token.clone()), Mutation::parse(&token.code()));
    }
    Ok(())
}

#[test]
fn unparseable_tokens() -> Result<(), Report> {
    let rejected = vec![
        "",
        " ",
        ":",
        "notAMutation",
        "S:",
        ":23T",
        "23",
        "A23",
        "T23T4",
        "a:b:23T",
        "ins_",
        "ins_S:",
        "ins_S:214:",
        "ins_S:214:E-P",
        "ins_S:abc:EPE",
        "A23\u{0}T",
        // position overflows usize, must be a parse failure and not a panic
        "A99999999999999999999999999T",
    ];

    for text in rejected {
        assert_eq!(None, Mutation::parse(text), "expected rejection of {text:?}");
    }
    Ok(())
}

#[test]
fn parse_is_linear_on_long_input() -> Result<(), Report> {
    // pathological lengths must neither panic nor match
    let long = "A".repeat(100_000);
    assert_eq!(None, Mutation::parse(&long));

    let long_insertion = format!("ins_1:{}", "E".repeat(100_000));
    let observed = Mutation::parse(&long_insertion).unwrap();
    assert_eq!(long_insertion, observed.code());
    Ok(())
}

#[test]
fn from_str() -> Result<(), Report> {
    let observed: Mutation = "S:501Y".parse()?;
    assert_eq!("S:501Y", observed.code());
    assert!("notAMutation".parse::<Mutation>().is_err());
    Ok(())
}
