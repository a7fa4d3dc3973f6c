//! Resolves declaration property names to groups.
//!
//! Matching tolerates vendor prefixes and falls back from specific names to
//! their hyphen-delimited families, so `-webkit-border-top-left-radius` can be
//! matched by `border-top-left-radius`, `border-top-left-radius*`,
//! `border-top-left*`, ..., `border*`, in that order.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Custom properties all start with this marker.
pub const CUSTOM_PROPERTY_MARKER: &str = "--";

/// Suffix marking a pattern as a hyphen-family wildcard.
pub const WILDCARD: char = '*';

/// The pattern every custom property resolves through.
pub const CUSTOM_PROPERTY_PATTERN: &str = "--*";

/// At most one leading vendor prefix: `-webkit-`, `-moz-`, `-moz-osx-`, ...
static VENDOR_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-\w+(-osx)?-").unwrap());

/// The group a property resolved to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GroupRef {
    pub name: String,
    /// Position of the group in the configured order.
    pub index: usize,
}

/// Whether `name` is a custom property (`--brand-color`).
pub fn is_custom_property(name: &str) -> bool {
    name.starts_with(CUSTOM_PROPERTY_MARKER)
}

/// Removes a single leading vendor prefix, if any.
pub fn strip_vendor_prefix(name: &str) -> &str {
    match VENDOR_PREFIX_RE.find(name) {
        Some(m) => &name[m.end()..],
        None => name,
    }
}

/// Pattern → group lookup. Built once, read-only while matching.
#[derive(Clone, Debug, Default)]
pub struct PropertyIndex {
    patterns: HashMap<String, GroupRef>,
}

impl PropertyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a literal name or a `family*` wildcard. The last insert wins.
    pub fn insert(&mut self, pattern: impl Into<String>, group: GroupRef) {
        self.patterns.insert(pattern.into(), group);
    }

    pub fn get(&self, pattern: &str) -> Option<&GroupRef> {
        self.patterns.get(pattern)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Resolves a declaration's property name to its group.
    ///
    /// Custom properties are looked up through the `--` sentinel. Otherwise a
    /// single vendor prefix is stripped, then the name is shortened one
    /// hyphen-delimited word at a time. At every depth an exact match wins
    /// over `name*`, which wins over the parent family `parent*`. The parent
    /// family is tried before the shorter exact name, so with `margin` in one
    /// group and `margin*` in another, `margin-top` goes to the `margin*`
    /// group.
    pub fn resolve(&self, property: &str) -> Option<GroupRef> {
        let name = if is_custom_property(property) {
            CUSTOM_PROPERTY_MARKER
        } else {
            strip_vendor_prefix(property)
        };

        let mut current = name;
        while let Some(cut) = current.rfind('-') {
            if let Some(group) = self.lookup(current, Some(&current[..cut])) {
                return Some(group.clone());
            }
            current = &current[..cut];
        }

        self.lookup(current, None).cloned()
    }

    fn lookup(&self, name: &str, parent: Option<&str>) -> Option<&GroupRef> {
        if name.is_empty() {
            return None;
        }
        if let Some(group) = self.patterns.get(name) {
            return Some(group);
        }
        if let Some(group) = self.patterns.get(&format!("{}{}", name, WILDCARD)) {
            return Some(group);
        }
        match parent {
            Some(parent) if !parent.is_empty() => {
                self.patterns.get(&format!("{}{}", parent, WILDCARD))
            }
            _ => None,
        }
    }
}
