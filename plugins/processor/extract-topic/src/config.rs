use std::collections::HashMap;

use regex::Regex;
use schemaroute_api::config::{ConfigParam, ConfigValues, ParamType};

use crate::error::ExtractTopicError;

/// `schemaName:topic` pairs, exact-match overrides.
pub const TOPIC_MAP_PARAM: &str = "schema.name.topic-map";
/// Regex whose first capture group becomes the topic.
pub const REGEX_PARAM: &str = "schema.name.regex";

/// Routing overrides for the extract-topic transform.
///
/// Immutable once built. The regex is compiled and checked here, so nothing
/// in the per-record path can fail on configuration.
#[derive(Debug, Clone, Default)]
pub struct ExtractTopicConfig {
    schema_name_to_topic: Option<HashMap<String, String>>,
    regex: Option<Regex>,
}

impl ExtractTopicConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declarations exported through `qs_config_params`.
    pub fn config_params() -> Vec<ConfigParam> {
        vec![
            ConfigParam::optional(
                TOPIC_MAP_PARAM,
                ParamType::List,
                "Comma-separated schemaName:topic pairs. Takes precedence over the regex.",
            ),
            ConfigParam::optional(
                REGEX_PARAM,
                ParamType::Str,
                "Regex matched against the value schema name; capture group 1 is the topic.",
            ),
        ]
    }

    /// Build from host-validated values. `Ok(None)` when neither option is
    /// set, in which case records go to their schema name.
    pub fn from_config_values(values: &ConfigValues) -> Result<Option<Self>, ExtractTopicError> {
        let mut config = Self::new();

        if let Some(entries) = values.get_list(TOPIC_MAP_PARAM) {
            config = config.with_topic_mapping(parse_topic_map(&entries)?)?;
        }
        if let Some(pattern) = values.get_str(REGEX_PARAM) {
            config = config.with_regex(pattern)?;
        }

        Ok((!config.is_empty()).then_some(config))
    }

    /// Build from a JSON object, e.g.
    /// `{"schema.name.regex": "com\\.acme\\.(\\w+)"}`.
    pub fn from_json(json: &str) -> Result<Option<Self>, ExtractTopicError> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| ExtractTopicError::config(format!("invalid JSON: {e}")))?;
        let values = ConfigValues::from_json(&value, &Self::config_params())
            .map_err(|e| ExtractTopicError::config(e.message))?;
        Self::from_config_values(&values)
    }

    /// Set the override table. An empty table counts as unset; empty
    /// schema names or topics are rejected.
    pub fn with_topic_mapping(
        mut self,
        mapping: HashMap<String, String>,
    ) -> Result<Self, ExtractTopicError> {
        if let Some((name, _)) = mapping.iter().find(|(k, v)| k.is_empty() || v.is_empty()) {
            return Err(ExtractTopicError::config(format!(
                "{TOPIC_MAP_PARAM}: empty schema name or topic in mapping for '{name}'"
            )));
        }
        self.schema_name_to_topic = (!mapping.is_empty()).then_some(mapping);
        Ok(self)
    }

    /// Compile and set the extraction regex. It must have at least one
    /// capture group.
    pub fn with_regex(mut self, pattern: &str) -> Result<Self, ExtractTopicError> {
        let regex = Regex::new(pattern).map_err(|e| {
            ExtractTopicError::config(format!("{REGEX_PARAM}: invalid regex '{pattern}': {e}"))
        })?;
        // captures_len() counts the implicit whole-match group.
        if regex.captures_len() < 2 {
            return Err(ExtractTopicError::config(format!(
                "{REGEX_PARAM}: regex '{pattern}' has no capturing group"
            )));
        }
        self.regex = Some(regex);
        Ok(self)
    }

    pub fn topic_for(&self, schema_name: &str) -> Option<&str> {
        self.schema_name_to_topic
            .as_ref()
            .and_then(|m| m.get(schema_name))
            .map(String::as_str)
    }

    pub fn regex(&self) -> Option<&Regex> {
        self.regex.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.schema_name_to_topic.is_none() && self.regex.is_none()
    }
}

/// Parse `schemaName:topic` entries. Splits at the last `:`, since topic
/// names cannot contain one.
pub fn parse_topic_map<S: AsRef<str>>(
    entries: &[S],
) -> Result<HashMap<String, String>, ExtractTopicError> {
    let mut mapping = HashMap::with_capacity(entries.len());
    for entry in entries {
        let entry = entry.as_ref().trim();
        if entry.is_empty() {
            continue;
        }
        let (name, topic) = entry.rsplit_once(':').ok_or_else(|| {
            ExtractTopicError::config(format!(
                "{TOPIC_MAP_PARAM}: entry '{entry}' is not in schemaName:topic form"
            ))
        })?;
        let (name, topic) = (name.trim(), topic.trim());
        if name.is_empty() || topic.is_empty() {
            return Err(ExtractTopicError::config(format!(
                "{TOPIC_MAP_PARAM}: entry '{entry}' has an empty schema name or topic"
            )));
        }
        if mapping.insert(name.to_string(), topic.to_string()).is_some() {
            return Err(ExtractTopicError::config(format!(
                "{TOPIC_MAP_PARAM}: schema name '{name}' is mapped more than once"
            )));
        }
    }
    Ok(mapping)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
