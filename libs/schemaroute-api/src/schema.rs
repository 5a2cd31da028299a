use std::collections::HashMap;

/// Logical type of a schema or field. Mirrors the primitive/complex split
/// used by Kafka Connect converters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
    Boolean,
    String,
    Bytes,
    Array,
    Map,
    Struct,
}

/// A single named field of a `Struct` schema.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Field {
    pub name: String,
    pub schema: Schema,
}

/// Schema attached to a record key or value.
///
/// The name is the logical record type (e.g. `"com.acme.Order"`) and is what
/// routing plugins look at. It may be absent: anonymous schemas are legal
/// on the wire.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Schema {
    pub schema_type: SchemaType,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<i32>,
    #[serde(default)]
    pub optional: bool,
    /// Only meaningful for `Struct`. Order is significant.
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Free-form schema parameters, passed through untouched.
    #[serde(default)]
    pub params: HashMap<String, serde_json::Value>,
}

impl Schema {
    /// Unnamed schema of the given type.
    pub fn new(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            name: None,
            version: None,
            optional: false,
            fields: Vec::new(),
            params: HashMap::new(),
        }
    }

    /// Named `Struct` schema with no fields.
    pub fn named_struct(name: impl Into<String>) -> Self {
        Self::new(SchemaType::Struct).with_name(name)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.fields.push(Field {
            name: name.into(),
            schema,
        });
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
