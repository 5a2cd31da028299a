use crate::schema::Schema;

/// A single record header. Values are opaque bytes; `None` is a null header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub key: String,
    pub value: Option<Vec<u8>>,
}

impl Header {
    pub fn new(key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }
}

/// A record in flight between topics. Owned by the host.
///
/// Plugins read what they need and hand back a record; key, value and
/// schemas are opaque to everything except format plugins.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicRecord {
    /// Topic the record currently belongs to. Writers route by this.
    pub topic: String,
    /// `None` lets the writer pick a partition.
    pub partition: Option<i32>,
    /// Timestamp in milliseconds, if the source carried one.
    pub ts_ms: Option<i64>,
    pub key_schema: Option<Schema>,
    pub key: Option<Vec<u8>>,
    pub value_schema: Option<Schema>,
    /// `None` is a tombstone.
    pub value: Option<Vec<u8>>,
    pub headers: Vec<Header>,
}

impl TopicRecord {
    /// Record with a value and nothing else set.
    pub fn new(topic: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            topic: topic.into(),
            partition: None,
            ts_ms: None,
            key_schema: None,
            key: None,
            value_schema: None,
            value: Some(value.into()),
            headers: Vec::new(),
        }
    }

    /// Name of the value schema, if there is a schema and it is named.
    pub fn value_schema_name(&self) -> Option<&str> {
        self.value_schema.as_ref().and_then(Schema::name)
    }
}
