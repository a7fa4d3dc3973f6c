use grouped_property_order::*;
use proptest::prelude::*;

/// One property per group, group i owns `PROPS[i]`.
const PROPS: &[&str] = &["position", "width", "margin", "color", "opacity"];

fn linter(extended_hinting: bool) -> GroupOrderLinter {
    let mut groups = GroupTable::new();
    for (i, prop) in PROPS.iter().enumerate() {
        groups.insert(format!("g{}", i), GroupSpec::List(vec![prop.to_string()]));
    }
    let config = Config {
        extended_hinting,
        defaults: Some(GroupDefaults {
            space_around: Some(false),
            max_no_space: None,
        }),
        ..Config::with_groups(groups)
    };
    compile(&config, &NoPresets).expect("config should compile")
}

/// Declarations two lines apart, one per group index.
fn declarations(indices: &[usize]) -> Vec<Declaration> {
    indices
        .iter()
        .enumerate()
        .map(|(i, &g)| Declaration::new(PROPS[g], 1 + 2 * i, NodeId(i)))
        .collect()
}

fn arb_indices() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0..PROPS.len(), 0..20)
}

proptest! {
    #[test]
    fn sorted_groups_never_violate(mut indices in arb_indices(), hinting in any::<bool>()) {
        indices.sort_unstable();
        let report = linter(hinting).check_declarations(&declarations(&indices));
        prop_assert!(report.well_ordered);
        prop_assert!(report.violations.is_empty());
    }

    #[test]
    fn violations_are_exactly_the_regressions(indices in arb_indices(), hinting in any::<bool>()) {
        let report = linter(hinting).check_declarations(&declarations(&indices));

        let mut highest = 0;
        let mut expected = Vec::new();
        for (i, &g) in indices.iter().enumerate() {
            if g < highest {
                expected.push(i);
            }
            highest = highest.max(g);
        }

        let actual: Vec<usize> = report.violations.iter().map(|v| v.node.0).collect();
        prop_assert_eq!(&actual, &expected);
        prop_assert_eq!(report.well_ordered, expected.is_empty());
        for v in &report.violations {
            prop_assert_eq!(v.kind, ViolationKind::OutOfOrder);
        }
    }

    #[test]
    fn hints_always_name_a_declaration_of_the_node(indices in arb_indices()) {
        let decls = declarations(&indices);
        let report = linter(true).check_declarations(&decls);
        for v in &report.violations {
            let anchor = v
                .message
                .rsplit('`')
                .nth(1)
                .expect("message carries a back-quoted anchor");
            prop_assert!(decls.iter().any(|d| d.property == anchor), "{}", v.message);
        }
    }
}
