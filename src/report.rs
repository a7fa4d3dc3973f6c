//! Violations and the reporting seam towards the host framework.

use crate::tree::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a [`Violation`] is about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A declaration from an earlier group follows one from a later group.
    OutOfOrder,
    /// A custom property follows a regular declaration.
    CustomPropertyFirst,
    /// No blank line after the last member of a group.
    MissingSpaceAfter,
    /// No blank line before the first member of a group.
    MissingSpaceBefore,
    /// No blank line above a group (global-minimum spacing policy).
    MissingSpaceAbove,
}

/// A non-fatal finding attached to one declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub node: NodeId,
    pub line: usize,
    pub property: String,
    pub kind: ViolationKind,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.line, self.message)
    }
}

/// Receives violations for rendering. Presentation is entirely the sink's concern.
pub trait ReportSink {
    fn add_lint(&mut self, node: NodeId, message: &str);
}

impl ReportSink for Vec<(NodeId, String)> {
    fn add_lint(&mut self, node: NodeId, message: &str) {
        self.push((node, message.to_string()));
    }
}

/// Forwards every violation, in order, to `sink`.
pub fn report(violations: &[Violation], sink: &mut dyn ReportSink) {
    for v in violations {
        sink.add_lint(v.node, &v.message);
    }
}
