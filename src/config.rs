use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

// ─── Config ──────────────────────────────────────────────────────────────────

/// Raw linter configuration, as handed over by the host.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<GroupTable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<GroupDefaults>,
    /// Name of a preset to load when `groups` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Synthesize a leading group for custom properties (`--*`).
    #[serde(default)]
    pub css_variables_first: bool,
    /// Report "should be placed after/before" hints instead of group names.
    #[serde(default = "default_true")]
    pub extended_hinting: bool,
    /// Select the global-minimum spacing policy instead of the per-group one.
    #[serde(default)]
    pub space_between_groups: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_group_size: Option<usize>,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            groups: None,
            defaults: None,
            style: None,
            css_variables_first: false,
            extended_hinting: true,
            space_between_groups: false,
            min_group_size: None,
        }
    }
}

impl Config {
    /// A configuration with inline groups and every option at its default.
    pub fn with_groups(groups: GroupTable) -> Self {
        Config {
            groups: Some(groups),
            ..Config::default()
        }
    }
}

/// Configuration-wide fallbacks for per-group spacing settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDefaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_around: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_no_space: Option<usize>,
}

// ─── GroupSpec ───────────────────────────────────────────────────────────────

/// One group as written in configuration.
///
/// A bare list of property patterns is accepted as shorthand for the detailed
/// form with no spacing overrides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GroupSpec {
    List(Vec<String>),
    Detailed {
        properties: Vec<String>,
        space_around: Option<bool>,
        max_no_space: Option<usize>,
    },
}

impl GroupSpec {
    pub fn properties(&self) -> &[String] {
        match self {
            GroupSpec::List(props) => props,
            GroupSpec::Detailed { properties, .. } => properties,
        }
    }

    pub fn space_around(&self) -> Option<bool> {
        match self {
            GroupSpec::List(_) => None,
            GroupSpec::Detailed { space_around, .. } => *space_around,
        }
    }

    pub fn max_no_space(&self) -> Option<usize> {
        match self {
            GroupSpec::List(_) => None,
            GroupSpec::Detailed { max_no_space, .. } => *max_no_space,
        }
    }
}

impl Serialize for GroupSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        match self {
            GroupSpec::List(props) => props.serialize(serializer),
            GroupSpec::Detailed {
                properties,
                space_around,
                max_no_space,
            } => {
                let mut map = serializer.serialize_map(None)?;
                map.serialize_entry("properties", properties)?;
                if let Some(s) = space_around {
                    map.serialize_entry("space_around", s)?;
                }
                if let Some(m) = max_no_space {
                    map.serialize_entry("max_no_space", m)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for GroupSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        match value {
            Value::Array(_) => {
                let props: Vec<String> =
                    serde_json::from_value(value).map_err(serde::de::Error::custom)?;
                Ok(GroupSpec::List(props))
            }
            Value::Object(map) => {
                let properties = match map.get("properties") {
                    Some(v) => serde_json::from_value::<Vec<String>>(v.clone())
                        .map_err(serde::de::Error::custom)?,
                    None => {
                        return Err(serde::de::Error::custom(
                            "group object must have a 'properties' list",
                        ));
                    }
                };
                let space_around = match map.get("space_around") {
                    None | Some(Value::Null) => None,
                    Some(Value::Bool(b)) => Some(*b),
                    Some(other) => {
                        return Err(serde::de::Error::custom(format!(
                            "space_around must be a boolean, got {}",
                            other
                        )));
                    }
                };
                let max_no_space = match map.get("max_no_space") {
                    None | Some(Value::Null) => None,
                    Some(v) => Some(
                        v.as_u64()
                            .and_then(|n| usize::try_from(n).ok())
                            .ok_or_else(|| {
                                serde::de::Error::custom(format!(
                                    "max_no_space must be a non-negative integer, got {}",
                                    v
                                ))
                            })?,
                    ),
                };
                Ok(GroupSpec::Detailed {
                    properties,
                    space_around,
                    max_no_space,
                })
            }
            _ => Err(serde::de::Error::custom(
                "group must be a list of properties or an object with 'properties'",
            )),
        }
    }
}

// ─── GroupTable ──────────────────────────────────────────────────────────────

/// Named groups in configuration order. The order is significant: it is the
/// priority order declarations are checked against.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupTable {
    entries: Vec<(String, GroupSpec)>,
}

impl GroupTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a group at the end, or replaces an existing group of the same
    /// name in place.
    pub fn insert(&mut self, name: impl Into<String>, spec: GroupSpec) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = spec,
            None => self.entries.push((name, spec)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&GroupSpec> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, spec)| spec)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &GroupSpec)> {
        self.entries.iter().map(|(n, s)| (n.as_str(), s))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, GroupSpec)> for GroupTable {
    fn from_iter<I: IntoIterator<Item = (N, GroupSpec)>>(iter: I) -> Self {
        let mut table = GroupTable::new();
        for (name, spec) in iter {
            table.insert(name, spec);
        }
        table
    }
}

impl Serialize for GroupTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, spec) in &self.entries {
            map.serialize_entry(name, spec)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for GroupTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // serde_json is built with `preserve_order`, so the map keeps key order.
        let map = serde_json::Map::<String, Value>::deserialize(deserializer)?;
        let mut table = GroupTable::new();
        for (name, value) in map {
            let spec: GroupSpec = serde_json::from_value(value)
                .map_err(|e| serde::de::Error::custom(format!("group '{}': {}", name, e)))?;
            table.insert(name, spec);
        }
        Ok(table)
    }
}
