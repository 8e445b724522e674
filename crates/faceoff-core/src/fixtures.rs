//! Hard-coded JSON inputs shared by the demos and timing loops

/// Well-formed B with a text value
pub const JSON_INPUT: &str = r#"{ "id": 3, "str": "string3" }"#;

/// B whose non-nullable text is `null`
pub const JSON_WITH_NULL: &str = r#"{ "id": 3, "str": null }"#;
