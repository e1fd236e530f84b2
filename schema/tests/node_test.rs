use brine_zod_schema::*;
use serde_json::json;

fn parse(value: serde_json::Value) -> Schema {
    serde_json::from_value(value).expect("valid schema")
}

#[test]
fn test_string_node_fields() {
    let schema = parse(json!({
        "type": "string",
        "format": "ipv4",
        "pattern": "x",
        "minLength": 1,
        "maxLength": 2,
        "contentEncoding": "base64",
        "errorMessage": { "format": "ayy", "minLength": "deez" }
    }));

    let Schema::String(node) = schema else { panic!("expected a string node") };
    assert_eq!(node.string_format(), Some(StringFormat::Ipv4));
    assert_eq!(node.encoding(), Some(ContentEncoding::Base64));
    assert_eq!(node.pattern.as_deref(), Some("x"));
    assert_eq!((node.min_length, node.max_length), (Some(1), Some(2)));
    assert_eq!(node.error_message.get("format"), Some("ayy"));
    assert_eq!(node.error_message.get("minLength"), Some("deez"));
    assert_eq!(node.error_message.get("pattern"), None);
}

#[test]
fn test_unknown_format_is_kept_but_unrecognized() {
    let Schema::String(node) = parse(json!({ "type": "string", "format": "hostname" })) else {
        panic!("expected a string node")
    };
    assert_eq!(node.format.as_deref(), Some("hostname"));
    assert_eq!(node.string_format(), None);
}

#[test]
fn test_format_keywords_round_trip() {
    for keyword in [
        "date-time", "email", "ip", "ipv4", "ipv6", "uri", "uuid", "time", "date", "duration", "binary",
    ] {
        let format = StringFormat::from_keyword(keyword).expect(keyword);
        assert_eq!(format.as_keyword(), keyword);
    }
}

#[test]
fn test_json_media_types() {
    assert!(is_json_media_type("application/json"));
    assert!(is_json_media_type("application/json;charset=utf-8"));
    assert!(is_json_media_type("application/ld+json"));
    assert!(!is_json_media_type("application/jsonl"));
    assert!(!is_json_media_type("text/plain"));
    assert!(!is_json_media_type("json"));
}

#[test]
fn test_type_dispatch() {
    assert_eq!(parse(json!({ "type": "integer", "minimum": 3 })).kind(), "integer");
    assert_eq!(parse(json!({ "type": "boolean" })), Schema::Boolean);
    assert_eq!(parse(json!({ "description": "no type" })), Schema::Any);
    assert_eq!(parse(json!({ "type": "tuple" })), Schema::Any);
}

#[test]
fn test_object_properties_and_required() {
    let Schema::Object(node) = parse(json!({
        "type": "object",
        "properties": {
            "b": { "type": "string" },
            "a": { "type": "array", "items": { "type": "null" } }
        },
        "required": ["a"]
    })) else {
        panic!("expected an object node")
    };

    let names: Vec<&str> = node.properties.keys().map(String::as_str).collect();
    assert_eq!(names, ["b", "a"]);
    assert!(node.is_required("a"));
    assert!(!node.is_required("b"));
    assert_eq!(
        node.properties["a"],
        Schema::Array(ArraySchema {
            items: Some(Box::new(Schema::Null)),
            ..Default::default()
        })
    );
}

#[test]
fn test_content_schema_is_nested_node() {
    let Schema::String(node) = parse(json!({
        "type": "string",
        "contentMediaType": "application/json",
        "contentSchema": { "type": "number", "maximum": 2.5 }
    })) else {
        panic!("expected a string node")
    };

    assert!(node.has_json_content());
    assert_eq!(
        node.content_schema.as_deref(),
        Some(&Schema::Number(NumberSchema { maximum: Some(2.5), ..Default::default() }))
    );
}

#[test]
fn test_error_message_keeps_only_string_entries() {
    let Schema::String(node) = parse(json!({
        "type": "string",
        "minLength": 1,
        "errorMessage": {
            "minLength": "too short",
            "required": { "a": "need a" },
            "properties": ["x"],
            "maxLength": 3,
            "pattern": null
        }
    })) else {
        panic!("expected a string node")
    };

    assert_eq!(node.error_message, ErrorMessages::from_iter([("minLength", "too short")]));
}

#[test]
fn test_non_map_error_message_is_ignored() {
    let Schema::Object(node) = parse(json!({
        "type": "object",
        "properties": {
            "a": { "type": "string", "errorMessage": "catch-all" },
            "b": { "type": "array", "errorMessage": null }
        },
        "errorMessage": "bad object"
    })) else {
        panic!("expected an object node")
    };

    let Schema::String(a) = &node.properties["a"] else { panic!("expected a string node") };
    assert!(a.error_message.is_empty());
    assert_eq!(node.properties["b"], Schema::Array(ArraySchema::default()));
}
