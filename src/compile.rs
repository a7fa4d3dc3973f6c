//! Compiles a raw [`Config`] into the immutable group order and property index.
//!
//! Compilation happens once per analysis run. The result is read-only and is
//! shared by every node the linter visits.

use crate::config::{Config, GroupSpec, GroupTable};
use crate::error::{ConfigError, ConfigErrorKind};
use crate::matcher::{CUSTOM_PROPERTY_PATTERN, GroupRef, PropertyIndex};
use crate::preset::PresetStore;

/// Name of the synthetic group created by `css_variables_first`.
pub const VARIABLES_GROUP: &str = "custom-properties";

/// `space_around` when neither the group nor `defaults` set it.
pub const DEFAULT_SPACE_AROUND: bool = true;

/// `max_no_space` when neither the group nor `defaults` set it.
pub const DEFAULT_MAX_NO_SPACE: usize = 3;

/// A fully resolved group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupDefinition {
    pub name: String,
    /// Position in the group order; lower means earlier.
    pub index: usize,
    pub patterns: Vec<String>,
    /// Require blank lines between this group and its neighbours.
    pub space_around: bool,
    /// Groups with at most this many members are exempt from spacing.
    pub max_declarations_without_space: usize,
}

/// The group order, definitions and property index for one analysis run.
#[derive(Clone, Debug)]
pub struct CompiledGroups {
    definitions: Vec<GroupDefinition>,
    index: PropertyIndex,
    variables_first: bool,
}

impl CompiledGroups {
    /// Definitions in group order; `definitions()[i].index == i`.
    pub fn definitions(&self) -> &[GroupDefinition] {
        &self.definitions
    }

    pub fn definition(&self, index: usize) -> Option<&GroupDefinition> {
        self.definitions.get(index)
    }

    pub fn order(&self) -> impl Iterator<Item = &str> {
        self.definitions.iter().map(|d| d.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn property_index(&self) -> &PropertyIndex {
        &self.index
    }

    /// Resolves a property name to its group.
    pub fn resolve(&self, property: &str) -> Option<GroupRef> {
        self.index.resolve(property)
    }

    /// Whether the synthetic custom-property group leads the order.
    pub fn variables_first(&self) -> bool {
        self.variables_first
    }
}

/// Resolve the group source and compile it.
///
/// Inline `groups` take precedence over a `style` preset. An empty `groups`
/// table counts as absent. Fails when neither is available or the preset
/// cannot be loaded.
pub fn compile_groups(
    config: &Config,
    presets: &dyn PresetStore,
) -> Result<CompiledGroups, ConfigError> {
    let loaded;
    let inline = config.groups.as_ref().filter(|g| !g.is_empty());
    let table = match (inline, &config.style) {
        (Some(groups), style) => {
            if let Some(style) = style {
                log::warn!(
                    "both 'groups' and 'style: {}' are configured; using 'groups'",
                    style
                );
            }
            groups
        }
        (None, Some(style)) => {
            loaded = presets.load_preset(style)?;
            &loaded
        }
        (None, None) => {
            return Err(ConfigError::new(
                ConfigErrorKind::MissingGroups,
                "no property groups configured: set 'groups' or 'style'",
            ));
        }
    };

    Ok(build(config, table))
}

fn build(config: &Config, table: &GroupTable) -> CompiledGroups {
    let default_space_around = config
        .defaults
        .as_ref()
        .and_then(|d| d.space_around)
        .unwrap_or(DEFAULT_SPACE_AROUND);
    let default_max_no_space = config
        .defaults
        .as_ref()
        .and_then(|d| d.max_no_space)
        .unwrap_or(DEFAULT_MAX_NO_SPACE);

    let mut definitions = Vec::with_capacity(table.len() + 1);

    if config.css_variables_first {
        // Always spaced, even with a single member.
        let mut patterns = vec![CUSTOM_PROPERTY_PATTERN.to_string()];
        let mut space_around = true;
        let mut max_no_space = 0;
        if let Some(spec) = table.get(VARIABLES_GROUP) {
            patterns.extend(spec.properties().iter().map(|p| normalize_pattern(p)));
            space_around = spec.space_around().unwrap_or(space_around);
            max_no_space = spec.max_no_space().unwrap_or(max_no_space);
        }
        definitions.push(GroupDefinition {
            name: VARIABLES_GROUP.to_string(),
            index: 0,
            patterns,
            space_around,
            max_declarations_without_space: max_no_space,
        });
    }

    for (name, spec) in table.iter() {
        if config.css_variables_first && name == VARIABLES_GROUP {
            continue;
        }
        definitions.push(define(
            name,
            definitions.len(),
            spec,
            default_space_around,
            default_max_no_space,
        ));
    }

    let mut index = PropertyIndex::new();
    for def in &definitions {
        for pattern in def.patterns.iter().filter(|p| !p.is_empty()) {
            // Later groups overwrite earlier ones for the same pattern.
            index.insert(
                pattern.clone(),
                GroupRef {
                    name: def.name.clone(),
                    index: def.index,
                },
            );
        }
    }

    log::debug!(
        "compiled {} property groups ({} patterns)",
        definitions.len(),
        index.len()
    );

    CompiledGroups {
        definitions,
        index,
        variables_first: config.css_variables_first,
    }
}

fn define(
    name: &str,
    index: usize,
    spec: &GroupSpec,
    default_space_around: bool,
    default_max_no_space: usize,
) -> GroupDefinition {
    GroupDefinition {
        name: name.to_string(),
        index,
        patterns: spec.properties().iter().map(|p| normalize_pattern(p)).collect(),
        space_around: spec.space_around().unwrap_or(default_space_around),
        max_declarations_without_space: spec.max_no_space().unwrap_or(default_max_no_space),
    }
}

/// `border-*` is accepted as a spelling of `border*`.
fn normalize_pattern(pattern: &str) -> String {
    let pattern = pattern.trim();
    match pattern.strip_suffix("-*") {
        Some(family) if !family.is_empty() => format!("{}*", family),
        _ => pattern.to_string(),
    }
}
