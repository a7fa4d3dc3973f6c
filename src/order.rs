//! Group-order check.
//!
//! Declarations must appear in non-decreasing group order. Groups need not be
//! contiguous: `a b a` is only wrong at the second `a`, and skipping a group
//! is never an error.

use crate::accumulate::{Accumulated, MatchedDeclaration};
use crate::compile::CompiledGroups;
use crate::matcher::is_custom_property;
use crate::report::{Violation, ViolationKind};

/// Outcome of [`check_order`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderReport {
    pub well_ordered: bool,
    pub violations: Vec<Violation>,
}

/// Where a misplaced declaration belongs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Hint {
    After(String),
    Before(String),
}

/// Flags every declaration whose group comes before the furthest group
/// already reached. A flagged declaration does not move the cursor.
pub fn check_order(
    groups: &CompiledGroups,
    acc: &Accumulated,
    extended_hinting: bool,
) -> OrderReport {
    let mut current = 0;
    let mut violations = Vec::new();

    for decl in &acc.declarations {
        let idx = decl.group.index;
        if idx == current {
            continue;
        }
        if idx > current {
            current = idx;
            continue;
        }

        let (kind, message) = if groups.variables_first() && is_custom_property(&decl.name) {
            (
                ViolationKind::CustomPropertyFirst,
                format!(
                    "Custom property `{}` must be declared before all other properties",
                    decl.name
                ),
            )
        } else if extended_hinting {
            let message = match hint_for(groups, decl, acc) {
                Hint::After(anchor) => format!(
                    "Property `{}` should be placed after `{}`",
                    decl.name, anchor
                ),
                Hint::Before(anchor) => format!(
                    "Property `{}` should be placed before `{}`",
                    decl.name, anchor
                ),
            };
            (ViolationKind::OutOfOrder, message)
        } else {
            let found_in = groups
                .definition(current)
                .map(|d| d.name.as_str())
                .unwrap_or_default();
            (
                ViolationKind::OutOfOrder,
                format!(
                    "Found property `{}` in group `{}` (should be in `{}`)",
                    decl.name, found_in, decl.group.name
                ),
            )
        };
        violations.push(Violation {
            node: decl.node,
            line: decl.line,
            property: decl.name.clone(),
            kind,
            message,
        });
    }

    OrderReport {
        well_ordered: violations.is_empty(),
        violations,
    }
}

/// Finds the anchor a misplaced declaration should be moved next to.
///
/// Prefers the first member of its own group, then the last member of the
/// nearest earlier group present in the node, then the node's first
/// declaration.
pub fn hint_for(groups: &CompiledGroups, decl: &MatchedDeclaration, acc: &Accumulated) -> Hint {
    let target = decl.group.index;

    if let Some(first) = acc.first_member(target)
        && first.position != decl.position
    {
        return Hint::After(first.name.clone());
    }

    for idx in (0..target.min(groups.len())).rev() {
        if let Some(last) = acc.last_member(idx) {
            return Hint::After(last.name.clone());
        }
    }

    let first = acc
        .declarations
        .first()
        .map(|d| d.name.clone())
        .unwrap_or_default();
    Hint::Before(first)
}
