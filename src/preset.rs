//! Named group presets, selectable with the `style` option.

use crate::config::GroupTable;
use crate::error::{ConfigError, ConfigErrorKind};
use crate::parse::parse_preset;
use std::path::{Path, PathBuf};

/// Looks up a group mapping by preset name.
pub trait PresetStore {
    fn load_preset(&self, name: &str) -> Result<GroupTable, ConfigError>;
}

fn not_found(name: &str) -> ConfigError {
    ConfigError::preset(
        ConfigErrorKind::PresetNotFound,
        name,
        "no preset with this name",
    )
}

// ─── NoPresets ───────────────────────────────────────────────────────────────

/// A store with no presets at all.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPresets;

impl PresetStore for NoPresets {
    fn load_preset(&self, name: &str) -> Result<GroupTable, ConfigError> {
        Err(not_found(name))
    }
}

// ─── DirectoryPresetStore ────────────────────────────────────────────────────

/// Reads presets from `<root>/<name>.yml`.
#[derive(Clone, Debug)]
pub struct DirectoryPresetStore {
    root: PathBuf,
}

impl DirectoryPresetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirectoryPresetStore { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
            return None;
        }
        Some(self.root.join(format!("{}.yml", name)))
    }
}

impl PresetStore for DirectoryPresetStore {
    fn load_preset(&self, name: &str) -> Result<GroupTable, ConfigError> {
        let path = self.path_for(name).ok_or_else(|| not_found(name))?;
        log::debug!("loading preset '{}' from {}", name, path.display());

        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(not_found(name)),
            Err(e) => {
                return Err(ConfigError::preset(
                    ConfigErrorKind::PresetUnreadable,
                    name,
                    format!("failed to read {}: {}", path.display(), e),
                ));
            }
        };
        parse_preset(name, &content)
    }
}

// ─── EmbeddedPresets ─────────────────────────────────────────────────────────

/// A preset shipped inside the crate.
#[cfg(feature = "embedded-presets")]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresetEntry {
    pub name: &'static str,
    pub source: &'static str,
}

/// The built-in preset catalog.
#[cfg(feature = "embedded-presets")]
pub static PRESET_CATALOG: &[PresetEntry] = &[
    PresetEntry {
        name: "default",
        source: include_str!("../presets/default.yml"),
    },
    PresetEntry {
        name: "concentric",
        source: include_str!("../presets/concentric.yml"),
    },
];

/// Serves presets from [`PRESET_CATALOG`].
#[cfg(feature = "embedded-presets")]
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbeddedPresets;

#[cfg(feature = "embedded-presets")]
impl EmbeddedPresets {
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        PRESET_CATALOG.iter().map(|p| p.name)
    }
}

#[cfg(feature = "embedded-presets")]
impl PresetStore for EmbeddedPresets {
    fn load_preset(&self, name: &str) -> Result<GroupTable, ConfigError> {
        let entry = PRESET_CATALOG
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| not_found(name))?;
        log::debug!("loading embedded preset '{}'", name);
        parse_preset(name, entry.source)
    }
}
