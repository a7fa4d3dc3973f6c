//! Groups one node's declarations by the group they resolve to.

use crate::compile::CompiledGroups;
use crate::matcher::GroupRef;
use crate::tree::{Declaration, NodeId};
use std::collections::HashMap;

/// A declaration that resolved to a group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchedDeclaration {
    pub name: String,
    pub line: usize,
    pub group: GroupRef,
    pub node: NodeId,
    /// Position among the node's matched declarations.
    pub position: usize,
}

/// Running summary of one group's members within a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupRecord {
    pub first_line: usize,
    pub last_line: usize,
    /// Positions into [`Accumulated::declarations`], in source order.
    pub members: Vec<usize>,
    /// Set once a missing blank line above this group has been reported.
    pub already_flagged_above: bool,
}

impl GroupRecord {
    fn new() -> Self {
        GroupRecord {
            first_line: usize::MAX,
            last_line: 0,
            members: Vec::new(),
            already_flagged_above: false,
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Matched declarations and per-group records for one node.
#[derive(Clone, Debug, Default)]
pub struct Accumulated {
    pub declarations: Vec<MatchedDeclaration>,
    pub records: HashMap<usize, GroupRecord>,
    /// Group indices in order of first appearance.
    pub encounter_order: Vec<usize>,
}

impl Accumulated {
    pub fn record(&self, group: usize) -> Option<&GroupRecord> {
        self.records.get(&group)
    }

    pub fn first_member(&self, group: usize) -> Option<&MatchedDeclaration> {
        self.record(group)
            .and_then(|r| r.members.first())
            .map(|&p| &self.declarations[p])
    }

    pub fn last_member(&self, group: usize) -> Option<&MatchedDeclaration> {
        self.record(group)
            .and_then(|r| r.members.last())
            .map(|&p| &self.declarations[p])
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

/// Resolves every declaration and builds the per-group records.
///
/// Unmatched declarations are dropped here and take no part in any check.
pub fn accumulate<'a>(
    groups: &CompiledGroups,
    declarations: impl IntoIterator<Item = &'a Declaration>,
) -> Accumulated {
    let mut acc = Accumulated::default();

    for decl in declarations {
        let Some(group) = groups.resolve(&decl.property) else {
            continue;
        };

        let position = acc.declarations.len();
        let record = acc.records.entry(group.index).or_insert_with(|| {
            acc.encounter_order.push(group.index);
            GroupRecord::new()
        });
        record.first_line = record.first_line.min(decl.line);
        record.last_line = record.last_line.max(decl.line);
        record.members.push(position);

        acc.declarations.push(MatchedDeclaration {
            name: decl.property.clone(),
            line: decl.line,
            group,
            node: decl.node,
            position,
        });
    }

    acc
}
