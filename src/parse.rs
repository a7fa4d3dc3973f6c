use crate::config::{Config, GroupTable};
use crate::error::{ConfigError, ConfigErrorKind};
use serde_json::Value;

/// Parse a YAML (or JSON) string into an uncompiled [`Config`].
///
/// Performs deserialization and shape checks only. Whether a group source is
/// actually available is decided by [`crate::compile`].
pub fn parse_config(input: &str) -> Result<Config, ConfigError> {
    let value = parse_mapping(input, "configuration root must be a mapping")?;
    // The YAML already parsed, so anything left is a shape problem.
    serde_json::from_value(value)
        .map_err(|e| ConfigError::new(ConfigErrorKind::TypeMismatch, e.to_string()))
}

/// Parse a preset document. A preset must be a mapping with a non-empty
/// `groups` key.
pub fn parse_preset(name: &str, input: &str) -> Result<GroupTable, ConfigError> {
    let value = parse_mapping(input, "preset root must be a mapping").map_err(|e| {
        ConfigError::preset(ConfigErrorKind::PresetMalformed, name, e.message)
    })?;

    let groups = match value {
        Value::Object(mut obj) => obj.remove("groups"),
        _ => None,
    };
    let Some(groups) = groups else {
        return Err(ConfigError::preset(
            ConfigErrorKind::PresetMalformed,
            name,
            "missing 'groups' key",
        ));
    };

    let table: GroupTable = serde_json::from_value(groups)
        .map_err(|e| ConfigError::preset(ConfigErrorKind::PresetMalformed, name, e.to_string()))?;
    if table.is_empty() {
        return Err(ConfigError::preset(
            ConfigErrorKind::PresetMalformed,
            name,
            "preset defines no groups",
        ));
    }
    Ok(table)
}

fn parse_mapping(input: &str, root_message: &str) -> Result<Value, ConfigError> {
    if input.trim().is_empty() {
        return Err(ConfigError::new(ConfigErrorKind::Syntax, "empty input"));
    }

    let value: Value = serde_saphyr::from_str(input)
        .map_err(|e| ConfigError::new(ConfigErrorKind::Syntax, e.to_string()))?;

    if !value.is_object() {
        return Err(ConfigError::new(ConfigErrorKind::TypeMismatch, root_message));
    }
    Ok(value)
}
