use crate::error::PluginError;

/// Parameter type for plugin configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    Bool,
    I64,
    Str,
    /// Ordered list of strings. Accepts an array or a comma-separated string.
    List,
}

/// Declaration of a single config parameter.
///
/// Plugins export these via `qs_config_params()`; the host validates config
/// against them before creating the plugin.
#[derive(Debug, Clone)]
pub struct ConfigParam {
    pub name: String,
    pub param_type: ParamType,
    pub required: bool,
    pub default: Option<ParamValue>,
    pub description: String,
}

impl ConfigParam {
    /// Optional parameter without a default.
    pub fn optional(
        name: impl Into<String>,
        param_type: ParamType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            param_type,
            required: false,
            default: None,
            description: description.into(),
        }
    }
}

/// Typed config value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Bool(bool),
    I64(i64),
    Str(String),
    List(Vec<String>),
}

/// Validated config values, passed to a plugin at creation time.
///
/// Plugins read values via typed getters, no parsing needed.
#[derive(Debug, Clone, Default)]
pub struct ConfigValues {
    entries: Vec<(String, ParamValue)>,
}

impl ConfigValues {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build values from a JSON object, checked against `params`.
    ///
    /// Unknown keys are rejected. Absent params take their default; absent
    /// required params are an error. `null` means absent.
    pub fn from_json(
        json: &serde_json::Value,
        params: &[ConfigParam],
    ) -> Result<Self, PluginError> {
        let empty = serde_json::Map::new();
        let obj = match json {
            serde_json::Value::Object(obj) => obj,
            serde_json::Value::Null => &empty,
            _ => return Err(PluginError::config("plugin config must be an object")),
        };

        for key in obj.keys() {
            if !params.iter().any(|p| &p.name == key) {
                return Err(PluginError::config(format!("unknown parameter '{key}'")));
            }
        }

        let mut values = Self::new();
        for param in params {
            match obj.get(&param.name).filter(|v| !v.is_null()) {
                Some(v) => values.set(&param.name, json_to_param_value(v, param)?),
                None => {
                    if let Some(ref default) = param.default {
                        values.set(&param.name, default.clone());
                    } else if param.required {
                        return Err(PluginError::config(format!(
                            "missing required parameter '{}'",
                            param.name
                        )));
                    }
                }
            }
        }
        Ok(values)
    }

    pub fn set(&mut self, name: impl Into<String>, value: ParamValue) {
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| k == &name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        match self.get(name) {
            Some(ParamValue::Bool(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn get_i64(&self, name: &str) -> Option<i64> {
        match self.get(name) {
            Some(ParamValue::I64(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(ParamValue::Str(v)) => Some(v),
            _ => None,
        }
    }

    /// List value. A `Str` is split on commas, the way list-typed options
    /// are usually written in flat config files. Items are trimmed and empty
    /// items dropped.
    pub fn get_list(&self, name: &str) -> Option<Vec<String>> {
        let items: Vec<String> = match self.get(name)? {
            ParamValue::List(items) => items.iter().map(|s| s.trim().to_string()).collect(),
            ParamValue::Str(s) => s.split(',').map(|s| s.trim().to_string()).collect(),
            _ => return None,
        };
        Some(items.into_iter().filter(|s| !s.is_empty()).collect())
    }
}

fn json_to_param_value(
    val: &serde_json::Value,
    param: &ConfigParam,
) -> Result<ParamValue, PluginError> {
    let expected = |what: &str| {
        PluginError::config(format!("parameter '{}': expected {what}", param.name))
    };
    match param.param_type {
        ParamType::Bool => val.as_bool().map(ParamValue::Bool).ok_or_else(|| expected("bool")),
        ParamType::I64 => val.as_i64().map(ParamValue::I64).ok_or_else(|| expected("integer")),
        ParamType::Str => val
            .as_str()
            .map(|s| ParamValue::Str(s.to_string()))
            .ok_or_else(|| expected("string")),
        ParamType::List => match val {
            serde_json::Value::String(s) => Ok(ParamValue::Str(s.clone())),
            serde_json::Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .map(ParamValue::List)
                .ok_or_else(|| expected("list of strings")),
            _ => Err(expected("list of strings")),
        },
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
