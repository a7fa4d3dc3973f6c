use grouped_property_order::matcher::{GroupRef, PropertyIndex};
use proptest::prelude::*;

const LITERALS: &[&str] = &[
    "transform",
    "font-smoothing",
    "border-width",
    "box-sizing",
    "user-select",
    "appearance",
];

const PREFIXES: &[&str] = &["-webkit-", "-moz-", "-ms-", "-o-", "-moz-osx-", "-webkit-osx-"];

/// Literals in groups 0..n, plus `border*` in its own group.
fn sample_index() -> PropertyIndex {
    let mut idx = PropertyIndex::new();
    for (i, name) in LITERALS.iter().enumerate() {
        idx.insert(
            *name,
            GroupRef {
                name: format!("g{}", i),
                index: i,
            },
        );
    }
    idx.insert(
        "border*",
        GroupRef {
            name: "borders".into(),
            index: LITERALS.len(),
        },
    );
    idx.insert(
        "--*",
        GroupRef {
            name: "vars".into(),
            index: LITERALS.len() + 1,
        },
    );
    idx
}

/// Strategy for hyphenated, property-like names.
fn arb_property() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,8}", 1..5).prop_map(|words| words.join("-"))
}

proptest! {
    #[test]
    fn resolve_is_deterministic(name in "\\PC{0,40}") {
        let idx = sample_index();
        prop_assert_eq!(idx.resolve(&name), idx.resolve(&name));
    }

    #[test]
    fn vendor_prefix_is_transparent(
        literal in prop::sample::select(LITERALS),
        prefix in prop::sample::select(PREFIXES),
    ) {
        let idx = sample_index();
        let prefixed = format!("{}{}", prefix, literal);
        prop_assert_eq!(idx.resolve(&prefixed), idx.resolve(literal));
        prop_assert!(idx.resolve(literal).is_some());
    }

    #[test]
    fn border_family_resolves_unless_literal(tail in arb_property()) {
        let idx = sample_index();
        let name = format!("border-{}", tail);
        let got = idx.resolve(&name).expect("border* catches the family");
        if tail == "width" || tail.starts_with("width-") {
            prop_assert_eq!(got.name, "g2");
        } else {
            prop_assert_eq!(got.name, "borders");
        }
    }

    #[test]
    fn custom_properties_always_hit_sentinel(tail in "[a-z0-9-]{0,20}") {
        let idx = sample_index();
        let got = idx.resolve(&format!("--{}", tail));
        prop_assert_eq!(got.map(|g| g.name), Some("vars".to_string()));
    }

    #[test]
    fn unknown_families_never_match(name in arb_property()) {
        let idx = sample_index();
        let known = LITERALS.iter().any(|l| name == *l || name.starts_with(&format!("{}-", l)))
            || name == "border"
            || name.starts_with("border-");
        if !known {
            prop_assert!(idx.resolve(&name).is_none(), "{} matched", name);
        }
    }
}
