use crate::reference::ReferenceError;

use super::*;

#[test]
fn parse_with_default_wiki() {
    let r = reference("Main.WebHome");
    assert_eq!(r.wiki(), "xwiki");
    assert_eq!(r.spaces(), &["Main".to_string()]);
    assert_eq!(r.page(), "WebHome");
    assert_eq!(r.serialize(), "xwiki:Main.WebHome");
}

#[test]
fn parse_with_wiki_and_nested_spaces() {
    let r = DocumentReference::parse("dev:Sandbox.Drafts.Test Page", "xwiki").unwrap();
    assert_eq!(r.wiki(), "dev");
    assert_eq!(r.spaces(), &["Sandbox".to_string(), "Drafts".to_string()]);
    assert_eq!(r.page(), "Test Page");
    assert_eq!(r.to_string(), "dev:Sandbox.Drafts.Test Page");
}

#[test]
fn colon_after_a_space_is_part_of_the_name() {
    let r = reference("Main.Time: 10.Notes");
    assert_eq!(r.wiki(), "xwiki");
    assert_eq!(r.spaces(), &["Main".to_string(), "Time: 10".to_string()]);
    assert_eq!(r.page(), "Notes");
}

#[test]
fn escapes() {
    let r = reference("A\\.B.C\\:D");
    assert_eq!(r.spaces(), &["A.B".to_string()]);
    assert_eq!(r.page(), "C:D");
    assert_eq!(r.serialize(), "xwiki:A\\.B.C\\:D");

    let r = DocumentReference::new("w", vec!["back\\slash"], "p").unwrap();
    assert_eq!(r.serialize(), "w:back\\\\slash.p");
    assert_eq!(DocumentReference::parse(&r.serialize(), "xwiki").unwrap(), r);
}

#[test]
fn serialized_form_parses_back() {
    for input in &[
        "Main.WebHome",
        "dev:A.B.C",
        "x:Odd\\.Space.Odd\\:Page",
        "Sandbox.Ünïcödé page",
    ] {
        let r = reference(input);
        assert_eq!(DocumentReference::parse(&r.serialize(), "other").unwrap(), r);
    }
}

#[test]
fn errors() {
    assert_eq!(DocumentReference::parse("", "xwiki"), Err(ReferenceError::Empty));
    assert_eq!(DocumentReference::parse("  ", "xwiki"), Err(ReferenceError::Empty));
    assert_eq!(
        DocumentReference::parse("WebHome", "xwiki"),
        Err(ReferenceError::MissingSpace("xwiki:WebHome".to_string()))
    );
    assert!(matches!(
        DocumentReference::parse("Main.", "xwiki"),
        Err(ReferenceError::EmptyName(..))
    ));
    assert!(matches!(
        DocumentReference::parse("Main..Page", "xwiki"),
        Err(ReferenceError::EmptyName(..))
    ));
    assert!(matches!(
        DocumentReference::parse(":Main.Page", "xwiki"),
        Err(ReferenceError::EmptyName(..))
    ));
    assert!(matches!(
        DocumentReference::new("xwiki", Vec::<String>::new(), "Page"),
        Err(ReferenceError::MissingSpace(..))
    ));
}

#[test]
fn parameters_from_raw_values() {
    let parameters =
        LinkGroupParameters::from_parameters(&raw_parameters(&[("reference", "Main.Help")]), "dev")
            .unwrap();
    assert_eq!(parameters.reference.serialize(), "dev:Main.Help");

    let parameters =
        LinkGroupParameters::from_parameters(&raw_parameters(&[("REFERENCE", "Main.Help")]), "dev")
            .unwrap();
    assert_eq!(parameters.reference.page(), "Help");
}

#[test]
fn parameters_errors() {
    assert!(matches!(
        LinkGroupParameters::from_parameters(&raw_parameters(&[("ref", "Main.Help")]), "xwiki"),
        Err(MacroError::MissingParameter("reference"))
    ));

    match LinkGroupParameters::from_parameters(&raw_parameters(&[("reference", "Help")]), "xwiki")
    {
        Err(MacroError::InvalidReference { value, source }) => {
            assert_eq!(value, "Help");
            assert_eq!(source, ReferenceError::MissingSpace("xwiki:Help".to_string()));
        }
        other => panic!("unexpected {:?}", other),
    }
}
