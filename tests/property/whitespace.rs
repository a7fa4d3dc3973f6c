use grouped_property_order::*;
use proptest::prelude::*;

const PROPS: &[&str] = &["position", "width", "margin", "color", "opacity"];

fn linter(space_between_groups: bool) -> GroupOrderLinter {
    let mut groups = GroupTable::new();
    for (i, prop) in PROPS.iter().enumerate() {
        groups.insert(
            format!("g{}", i),
            GroupSpec::Detailed {
                properties: vec![prop.to_string()],
                space_around: Some(true),
                max_no_space: Some(0),
            },
        );
    }
    let config = Config {
        space_between_groups,
        ..Config::with_groups(groups)
    };
    compile(&config, &NoPresets).expect("config should compile")
}

/// Sorted group indices with a line step per declaration.
fn arb_layout() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..PROPS.len(), 1usize..4), 0..16).prop_map(|mut v| {
        v.sort_by_key(|(g, _)| *g);
        v
    })
}

fn declarations(layout: &[(usize, usize)]) -> Vec<Declaration> {
    let mut line = 0;
    layout
        .iter()
        .enumerate()
        .map(|(i, &(g, step))| {
            line += step;
            Declaration::new(PROPS[g], line, NodeId(i))
        })
        .collect()
}

proptest! {
    #[test]
    fn blank_lines_everywhere_are_clean(layout in arb_layout(), global in any::<bool>()) {
        let spaced: Vec<(usize, usize)> = layout.iter().map(|&(g, _)| (g, 2)).collect();
        let report = linter(global).check_declarations(&declarations(&spaced));
        prop_assert!(report.violations.is_empty(), "{:?}", report.violations);
    }

    #[test]
    fn boundary_reported_at_most_once(layout in arb_layout()) {
        let l = linter(false);
        let decls = declarations(&layout);
        let report = l.check_declarations(&decls);

        let group_of = |v: &Violation| l.groups().resolve(&v.property).map(|g| g.index);
        for before in report.violations.iter().filter(|v| v.kind == ViolationKind::MissingSpaceBefore) {
            let g = group_of(before).unwrap();
            // sorted input: the previous encountered group is the nearest lower index present
            let prev = layout.iter().map(|&(x, _)| x).filter(|&x| x < g).max();
            let duplicated = report.violations.iter().any(|after| {
                after.kind == ViolationKind::MissingSpaceAfter && group_of(after) == prev
            });
            prop_assert!(!duplicated, "{:?}", report.violations);
        }
    }

    #[test]
    fn global_policy_flags_each_tight_boundary(layout in arb_layout()) {
        let decls = declarations(&layout);
        let report = linter(true).check_declarations(&decls);

        let mut expected = Vec::new();
        let present: std::collections::BTreeSet<usize> = layout.iter().map(|&(g, _)| g).collect();
        if present.len() >= 2 {
            let mut prev_last: Option<usize> = None;
            for g in &present {
                let lines: Vec<&Declaration> =
                    decls.iter().filter(|d| d.property == PROPS[*g]).collect();
                let first = lines.first().unwrap();
                if let Some(last) = prev_last
                    && first.line < last + 2
                {
                    expected.push(first.node);
                }
                prev_last = Some(lines.last().unwrap().line);
            }
        }

        let actual: Vec<NodeId> = report.violations.iter().map(|v| v.node).collect();
        prop_assert_eq!(actual, expected);
    }
}
