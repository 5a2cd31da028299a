//! Destination topic resolution.
//!
//! Order, first hit wins:
//! 1. no value schema name: error
//! 2. no config: the schema name
//! 3. exact entry in the topic map
//! 4. capture group 1 of the regex, if it matched and captured something
//! 5. the schema name

use std::fmt;

use regex::Regex;

use crate::config::ExtractTopicConfig;
use crate::error::ExtractTopicError;
use crate::record::Routable;

/// A destination topic name. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedTopic(String);

impl ResolvedTopic {
    /// `None` for an empty name.
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        (!name.is_empty()).then_some(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ResolvedTopic {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResolvedTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of matching the regex against one schema name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction<'a> {
    Matched(&'a str),
    NotMatched,
}

impl<'a> Extraction<'a> {
    /// The captured text. Asking a `NotMatched` for it is a bug.
    pub fn into_captured(self) -> Result<&'a str, ExtractTopicError> {
        match self {
            Extraction::Matched(captured) => Ok(captured),
            Extraction::NotMatched => Err(ExtractTopicError::InvalidPatternState),
        }
    }
}

/// Search `name` for `regex`. Only a match where group 1 took part and
/// captured a non-empty string counts.
pub fn extract<'a>(regex: &Regex, name: &'a str) -> Extraction<'a> {
    match regex.captures(name).and_then(|caps| caps.get(1)) {
        Some(group) if !group.as_str().is_empty() => Extraction::Matched(group.as_str()),
        _ => Extraction::NotMatched,
    }
}

/// Pick the destination topic for `record`.
pub fn resolve<R: Routable>(
    record: &R,
    config: Option<&ExtractTopicConfig>,
) -> Result<ResolvedTopic, ExtractTopicError> {
    let name = record
        .value_schema_name()
        .and_then(ResolvedTopic::new)
        .ok_or_else(|| ExtractTopicError::MissingSchemaName {
            topic: record.topic().to_string(),
        })?;

    let Some(config) = config else {
        return Ok(name);
    };

    if let Some(topic) = config.topic_for(name.as_str()) {
        if let Some(topic) = ResolvedTopic::new(topic) {
            return Ok(topic);
        }
    }

    if let Some(regex) = config.regex() {
        if let Extraction::Matched(captured) = extract(regex, name.as_str()) {
            if let Some(topic) = ResolvedTopic::new(captured) {
                return Ok(topic);
            }
        }
    }

    Ok(name)
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod tests;
