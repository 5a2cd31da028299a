//! Tests for extract-topic config

use schemaroute_api::config::ParamValue;

use super::*;

#[test]
fn test_default_config_is_empty() {
    let config = ExtractTopicConfig::default();
    assert!(config.is_empty());
    assert!(config.regex().is_none());
    assert!(config.topic_for("anything").is_none());
}

#[test]
fn test_regex_without_group_rejected() {
    let err = ExtractTopicConfig::new().with_regex(r"com\.acme\.\w+").unwrap_err();
    assert!(matches!(err, ExtractTopicError::Config(_)));
    assert!(err.to_string().contains("no capturing group"));
}

#[test]
fn test_non_capturing_group_only_rejected() {
    assert!(ExtractTopicConfig::new().with_regex(r"(?:abc)+").is_err());
}

#[test]
fn test_invalid_regex_rejected() {
    let err = ExtractTopicConfig::new().with_regex(r"(unclosed").unwrap_err();
    assert!(err.to_string().contains("invalid regex"));
}

#[test]
fn test_regex_with_group_accepted() {
    let config = ExtractTopicConfig::new().with_regex(r"(a)?b").unwrap();
    assert!(!config.is_empty());
    assert!(config.regex().is_some());
}

#[test]
fn test_parse_topic_map() {
    let mapping = parse_topic_map(&[" com.acme.Order:orders ", "", "com.acme.Invoice:invoices"]).unwrap();
    assert_eq!(mapping.len(), 2);
    assert_eq!(mapping["com.acme.Order"], "orders");
    assert_eq!(mapping["com.acme.Invoice"], "invoices");
}

#[test]
fn test_parse_topic_map_splits_at_last_colon() {
    let mapping = parse_topic_map(&["urn:acme:Order:orders"]).unwrap();
    assert_eq!(mapping["urn:acme:Order"], "orders");
}

#[test]
fn test_parse_topic_map_rejects_malformed() {
    for entry in ["no-separator", ":orders", "com.acme.Order:", " : "] {
        let err = parse_topic_map(&[entry]).unwrap_err();
        assert!(matches!(err, ExtractTopicError::Config(_)), "entry {entry:?}");
    }
}

#[test]
fn test_parse_topic_map_rejects_duplicates() {
    let err = parse_topic_map(&["a:x", "a:y"]).unwrap_err();
    assert!(err.to_string().contains("more than once"));
}

#[test]
fn test_empty_mapping_counts_as_unset() {
    let config = ExtractTopicConfig::new()
        .with_topic_mapping(HashMap::new())
        .unwrap();
    assert!(config.is_empty());
}

#[test]
fn test_mapping_with_empty_topic_rejected() {
    let mapping = HashMap::from([("com.acme.Order".to_string(), String::new())]);
    assert!(ExtractTopicConfig::new().with_topic_mapping(mapping).is_err());
}

#[test]
fn test_from_config_values_empty_is_none() {
    let config = ExtractTopicConfig::from_config_values(&ConfigValues::new()).unwrap();
    assert!(config.is_none());
}

#[test]
fn test_from_config_values() {
    let mut values = ConfigValues::new();
    values.set(
        TOPIC_MAP_PARAM,
        ParamValue::Str("com.acme.Order:orders-v2,com.acme.Invoice:invoices".into()),
    );
    values.set(REGEX_PARAM, ParamValue::Str(r"com\.acme\.(\w+)".into()));

    let config = ExtractTopicConfig::from_config_values(&values).unwrap().unwrap();
    assert_eq!(config.topic_for("com.acme.Order"), Some("orders-v2"));
    assert_eq!(config.topic_for("com.acme.Invoice"), Some("invoices"));
    assert!(config.regex().is_some());
}

#[test]
fn test_from_config_values_bad_regex_fails() {
    let mut values = ConfigValues::new();
    values.set(REGEX_PARAM, ParamValue::Str("abc".into()));
    assert!(ExtractTopicConfig::from_config_values(&values).is_err());
}

#[test]
fn test_from_json() {
    let config = ExtractTopicConfig::from_json(
        r#"{"schema.name.topic-map": ["com.acme.Order:orders"], "schema.name.regex": "(\\w+)$"}"#,
    )
    .unwrap()
    .unwrap();
    assert_eq!(config.topic_for("com.acme.Order"), Some("orders"));
    assert!(config.regex().is_some());
}

#[test]
fn test_from_json_empty_object_is_none() {
    assert!(ExtractTopicConfig::from_json("{}").unwrap().is_none());
}

#[test]
fn test_from_json_rejects_unknown_key() {
    let err = ExtractTopicConfig::from_json(r#"{"schema.name.regexp": "(x)"}"#).unwrap_err();
    assert!(err.to_string().contains("unknown parameter"));
}

#[test]
fn test_from_json_rejects_invalid_json() {
    let err = ExtractTopicConfig::from_json("{").unwrap_err();
    assert!(err.to_string().contains("invalid JSON"));
}

#[test]
fn test_config_params_declared() {
    let params = ExtractTopicConfig::config_params();
    let names: Vec<&str> = params.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec![TOPIC_MAP_PARAM, REGEX_PARAM]);
    assert!(params.iter().all(|p| !p.required));
}
