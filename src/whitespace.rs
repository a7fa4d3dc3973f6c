//! Blank-line separation between consecutive groups.

use crate::accumulate::{Accumulated, MatchedDeclaration};
use crate::compile::CompiledGroups;
use crate::report::{Violation, ViolationKind};
use serde::{Deserialize, Serialize};

/// How group spacing is enforced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "policy")]
pub enum SpacingPolicy {
    /// Each group's `space_around` / `max_no_space` decide, checked against
    /// the groups encountered right before and after it.
    PerGroup,
    /// Every group with at least `min_group_size` members needs a blank line
    /// above it, relative to the previous group present in the node.
    GlobalMinimum { min_group_size: usize },
}

/// Default `min_group_size` for [`SpacingPolicy::GlobalMinimum`].
pub const DEFAULT_MIN_GROUP_SIZE: usize = 1;

/// True when there is no blank line between `last_line` and `next_first_line`.
pub fn missing_blank_line(last_line: usize, next_first_line: usize) -> bool {
    next_first_line
        .checked_sub(last_line)
        .is_none_or(|gap| gap < 2)
}

/// Runs the spacing check selected by `policy`.
///
/// Marks records as flagged as it goes, so `acc` is updated in place.
pub fn check_whitespace(
    groups: &CompiledGroups,
    acc: &mut Accumulated,
    policy: SpacingPolicy,
) -> Vec<Violation> {
    match policy {
        SpacingPolicy::PerGroup => check_per_group(groups, acc),
        SpacingPolicy::GlobalMinimum { min_group_size } => {
            check_global_minimum(groups, acc, min_group_size)
        }
    }
}

fn check_per_group(groups: &CompiledGroups, acc: &mut Accumulated) -> Vec<Violation> {
    let mut violations = Vec::new();
    let order = acc.encounter_order.clone();

    for (pos, &idx) in order.iter().enumerate() {
        let Some(def) = groups.definition(idx) else {
            continue;
        };
        let Some(current) = acc.record(idx) else {
            continue;
        };
        if !def.space_around || current.len() <= def.max_declarations_without_space {
            continue;
        }
        let (first_line, last_line) = (current.first_line, current.last_line);

        if let Some(&next_idx) = order.get(pos + 1)
            && let Some(next) = acc.records.get_mut(&next_idx)
            && missing_blank_line(last_line, next.first_line)
        {
            next.already_flagged_above = true;
            if let Some(last) = acc.last_member(idx) {
                violations.push(spacing_violation(
                    last,
                    ViolationKind::MissingSpaceAfter,
                    "after",
                ));
            }
        }

        let flagged = acc
            .record(idx)
            .is_some_and(|r| r.already_flagged_above);
        if pos > 0
            && !flagged
            && let Some(prev) = acc.record(order[pos - 1])
            && missing_blank_line(prev.last_line, first_line)
            && let Some(first) = acc.first_member(idx)
        {
            violations.push(spacing_violation(
                first,
                ViolationKind::MissingSpaceBefore,
                "before",
            ));
        }
    }

    violations
}

fn check_global_minimum(
    groups: &CompiledGroups,
    acc: &Accumulated,
    min_group_size: usize,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut previous_last_line: Option<usize> = None;

    for idx in 0..groups.len() {
        let Some(record) = acc.record(idx) else {
            continue;
        };
        if record.len() >= min_group_size
            && let Some(prev_last) = previous_last_line
            && missing_blank_line(prev_last, record.first_line)
            && let Some(first) = acc.first_member(idx)
        {
            violations.push(spacing_violation(
                first,
                ViolationKind::MissingSpaceAbove,
                "above",
            ));
        }
        previous_last_line = Some(record.last_line);
    }

    violations
}

fn spacing_violation(
    decl: &MatchedDeclaration,
    kind: ViolationKind,
    direction: &str,
) -> Violation {
    Violation {
        node: decl.node,
        line: decl.line,
        property: decl.name.clone(),
        kind,
        message: format!(
            "Must be at least one empty line {} `{}`",
            direction, decl.name
        ),
    }
}
