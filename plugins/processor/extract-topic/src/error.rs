use schemaroute_api::error::PluginError;

#[derive(Debug, thiserror::Error)]
pub enum ExtractTopicError {
    /// Raised once, while building the config. Never per record.
    #[error("config error: {0}")]
    Config(String),

    #[error("value schema name is missing for record on topic '{topic}'")]
    MissingSchemaName { topic: String },

    /// A capture group was read from a match that did not produce one.
    #[error("capture group read from a regex match that did not produce one")]
    InvalidPatternState,
}

impl ExtractTopicError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<ExtractTopicError> for PluginError {
    fn from(e: ExtractTopicError) -> Self {
        match e {
            ExtractTopicError::Config(_) => PluginError::config(e.to_string()),
            ExtractTopicError::MissingSchemaName { .. } => PluginError::data(e.to_string()),
            ExtractTopicError::InvalidPatternState => PluginError::logic(e.to_string()),
        }
    }
}
