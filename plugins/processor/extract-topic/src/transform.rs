use crate::config::ExtractTopicConfig;
use crate::error::ExtractTopicError;
use crate::record::{Routable, rebuild};
use crate::resolver::{ResolvedTopic, resolve};

/// Per-record transform: route each record to the topic derived from its
/// value schema name.
///
/// Stateless apart from the config it was built with, so one instance can
/// be shared by any number of tasks.
#[derive(Debug, Clone, Default)]
pub struct ExtractTopic {
    config: Option<ExtractTopicConfig>,
}

impl ExtractTopic {
    /// `None` routes every record to its schema name.
    pub fn new(config: Option<ExtractTopicConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> Option<&ExtractTopicConfig> {
        self.config.as_ref()
    }

    pub fn resolve<R: Routable>(&self, record: &R) -> Result<ResolvedTopic, ExtractTopicError> {
        resolve(record, self.config.as_ref())
    }

    /// Resolve, then re-emit the record on the resolved topic. On error the
    /// record is consumed and nothing is emitted.
    pub fn apply<R: Routable>(&self, record: R) -> Result<R, ExtractTopicError> {
        let topic = self.resolve(&record)?;
        Ok(rebuild(record, topic))
    }
}

#[cfg(test)]
#[path = "transform_test.rs"]
mod tests;
