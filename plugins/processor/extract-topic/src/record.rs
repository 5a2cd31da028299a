use schemaroute_api::record::TopicRecord;

use crate::resolver::ResolvedTopic;

/// What routing needs from a record: its topic, the name of its value
/// schema, and a way to re-emit it on another topic.
pub trait Routable: Sized {
    fn topic(&self) -> &str;

    fn value_schema_name(&self) -> Option<&str>;

    /// The same record on `topic`. Every other field is carried over as-is.
    fn with_topic(self, topic: String) -> Self;
}

impl Routable for TopicRecord {
    fn topic(&self) -> &str {
        &self.topic
    }

    fn value_schema_name(&self) -> Option<&str> {
        TopicRecord::value_schema_name(self)
    }

    fn with_topic(self, topic: String) -> Self {
        TopicRecord { topic, ..self }
    }
}

/// Re-emit `record` on the resolved topic.
pub fn rebuild<R: Routable>(record: R, topic: ResolvedTopic) -> R {
    record.with_topic(topic.into_string())
}

#[cfg(test)]
#[path = "record_test.rs"]
mod tests;
