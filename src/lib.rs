//! Grouped property order checks for stylesheets.
//!
//! Declarations inside a rule are assigned to named, ordered groups
//! (positioning, box model, typography, ...). The linter verifies that no
//! declaration from an earlier group follows one from a later group, and that
//! consecutive groups are separated by a blank line.
//!
//! ```text
//! parse_config(yaml) → Config → compile(config, presets) → GroupOrderLinter
//!                                       GroupOrderLinter::check(&Node) → Vec<Violation>
//! ```
//!
//! Parsing the stylesheet itself is the host's job: it hands over [`Node`]s
//! carrying each declaration's property name and source line.
//!
//! # Quick Start
//!
//! ```rust
//! use grouped_property_order::{Child, Declaration, Node, NodeId, NoPresets};
//!
//! let yaml = r#"
//! groups:
//!   positioning: [position, top, left]
//!   sizing: [width, height]
//! "#;
//! let linter = grouped_property_order::load(yaml, &NoPresets).expect("valid config");
//!
//! let rule = Node::block(
//!     NodeId(0),
//!     vec![
//!         Child::Declaration(Declaration::new("width", 1, NodeId(1))),
//!         Child::Declaration(Declaration::new("top", 2, NodeId(2))),
//!     ],
//! );
//! let violations = linter.check(&rule);
//! assert_eq!(violations.len(), 1);
//! assert_eq!(violations[0].message, "Property `top` should be placed before `width`");
//! ```
//!
//! # Feature Flags
//!
//! | Feature            | Default | Description |
//! |--------------------|---------|-------------|
//! | `embedded-presets` | yes     | Built-in `style` presets via [`preset::EmbeddedPresets`]. |

pub mod accumulate;
pub mod compile;
pub mod config;
pub mod error;
pub mod lint;
pub mod matcher;
pub mod order;
pub mod parse;
pub mod preset;
pub mod report;
pub mod tree;
pub mod whitespace;

pub use config::*;
pub use error::*;
pub use report::*;
pub use tree::*;

// Re-export entry points at the crate root for convenience.
pub use compile::compile_groups;
pub use lint::{GroupOrderLinter, NodeReport, compile};
pub use parse::{parse_config, parse_preset};
#[cfg(feature = "embedded-presets")]
pub use preset::EmbeddedPresets;
pub use preset::{DirectoryPresetStore, NoPresets, PresetStore};
pub use whitespace::SpacingPolicy;

/// Convenience entry point composing parse → compile.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the configuration does not parse, names no
/// groups, or names a preset `presets` cannot provide.
///
/// # Example
///
/// ```rust
/// use grouped_property_order::{ConfigErrorKind, NoPresets};
///
/// let err = grouped_property_order::load("style: missing", &NoPresets).unwrap_err();
/// assert_eq!(err.kind, ConfigErrorKind::PresetNotFound);
/// ```
pub fn load(input: &str, presets: &dyn PresetStore) -> Result<GroupOrderLinter, ConfigError> {
    let config = parse::parse_config(input)?;
    lint::compile(&config, presets)
}
