use safebuy_domain::constants::ABOUT;
use safebuy_domain::sections::{SectionId, SectionSet};

#[test]
fn anchor_matches_section_constant() {
    assert_eq!(SectionId::About.anchor(), ABOUT);
    assert_eq!(SectionId::About.to_string(), "about");
}

#[test]
fn section_set_parses_names() {
    assert_eq!(SectionSet::from("header"), SectionSet::HEADER);
    assert_eq!(SectionSet::from("about"), SectionSet::ABOUT);
    assert_eq!(SectionSet::from("footer"), SectionSet::FOOTER);
    assert_eq!(SectionSet::from("all"), SectionSet::ALL);
    assert_eq!(SectionSet::from("checkout"), SectionSet::empty());
}

#[test]
fn default_set_includes_every_section() {
    assert_eq!(SectionSet::default(), SectionSet::ALL);
    assert!(SectionSet::default().contains(SectionSet::from(SectionId::About)));
}

#[test]
fn section_set_round_trips_as_bits() {
    let set = SectionSet::HEADER | SectionSet::FOOTER;
    let json = serde_json::to_string(&set).expect("serialize");
    assert_eq!(json, "5");

    let back: SectionSet = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, set);
    assert!(!back.contains(SectionSet::ABOUT));
}
