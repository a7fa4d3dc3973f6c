//! The linter entry point: one compiled configuration, checked against any
//! number of nodes.

use crate::accumulate::accumulate;
use crate::compile::{CompiledGroups, compile_groups};
use crate::config::Config;
use crate::error::ConfigError;
use crate::order::check_order;
use crate::preset::PresetStore;
use crate::report::{ReportSink, Violation, report};
use crate::tree::{Declaration, Node, Visitor, walk};
use crate::whitespace::{DEFAULT_MIN_GROUP_SIZE, SpacingPolicy, check_whitespace};

/// Checks declaration order and group spacing.
///
/// Holds only read-only state, so one linter can be shared across files.
#[derive(Clone, Debug)]
pub struct GroupOrderLinter {
    groups: CompiledGroups,
    extended_hinting: bool,
    spacing: SpacingPolicy,
}

/// Violations for one flat list of declarations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeReport {
    pub well_ordered: bool,
    pub violations: Vec<Violation>,
}

/// Compile `config` into a linter, loading a `style` preset from `presets`
/// when no inline groups are configured.
pub fn compile(config: &Config, presets: &dyn PresetStore) -> Result<GroupOrderLinter, ConfigError> {
    let groups = compile_groups(config, presets)?;
    let spacing = if config.space_between_groups {
        SpacingPolicy::GlobalMinimum {
            min_group_size: config.min_group_size.unwrap_or(DEFAULT_MIN_GROUP_SIZE),
        }
    } else {
        SpacingPolicy::PerGroup
    };
    Ok(GroupOrderLinter {
        groups,
        extended_hinting: config.extended_hinting,
        spacing,
    })
}

impl GroupOrderLinter {
    pub fn groups(&self) -> &CompiledGroups {
        &self.groups
    }

    pub fn spacing(&self) -> SpacingPolicy {
        self.spacing
    }

    /// Checks `node` and every rule-like node nested in it, including else
    /// branches. Violations come back in traversal order.
    pub fn check(&self, node: &Node) -> Vec<Violation> {
        let mut collector = Collector {
            linter: self,
            violations: Vec::new(),
        };
        walk(node, &mut collector);
        collector.violations
    }

    /// Checks only the direct declarations of `node`.
    pub fn check_node(&self, node: &Node) -> NodeReport {
        self.check_declarations(node.declarations())
    }

    /// Checks one list of sibling declarations in source order.
    pub fn check_declarations<'a>(
        &self,
        declarations: impl IntoIterator<Item = &'a Declaration>,
    ) -> NodeReport {
        let mut acc = accumulate(&self.groups, declarations);
        if acc.is_empty() {
            return NodeReport {
                well_ordered: true,
                violations: Vec::new(),
            };
        }

        let order = check_order(&self.groups, &acc, self.extended_hinting);
        let mut violations = order.violations;
        if acc.records.len() >= 2 {
            violations.extend(check_whitespace(&self.groups, &mut acc, self.spacing));
        }

        NodeReport {
            well_ordered: order.well_ordered,
            violations,
        }
    }

    /// Checks `node` recursively and forwards every violation to `sink`.
    pub fn report(&self, node: &Node, sink: &mut dyn ReportSink) {
        report(&self.check(node), sink);
    }
}

struct Collector<'a> {
    linter: &'a GroupOrderLinter,
    violations: Vec<Violation>,
}

impl Visitor for Collector<'_> {
    fn visit(&mut self, node: &Node) {
        let checked = self.linter.check_node(node);
        self.violations.extend(checked.violations);
    }
}
