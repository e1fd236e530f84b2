use brine_zod_compiler::{compile_schema, parse_schema, ZodGenError};

fn generate(text: &str) -> String {
    let (_schema, expr) = compile_schema(text).expect("compile_schema failed");
    expr.to_string()
}

#[test]
fn test_scalar_types() {
    assert_eq!(generate(r#"{ "type": "boolean" }"#), "z.boolean()");
    assert_eq!(generate(r#"{ "type": "null" }"#), "z.null()");
    assert_eq!(generate(r#"{ "type": "integer" }"#), "z.number().int()");
    assert_eq!(generate(r#"{ "type": "number" }"#), "z.number()");
    assert_eq!(generate(r#"{}"#), "z.any()");
    assert_eq!(generate(r#"{ "type": "bigint" }"#), "z.any()");
}

#[test]
fn test_number_constraints() {
    assert_eq!(
        generate(r#"{
            "type": "integer",
            "multipleOf": 5,
            "maximum": 100,
            "minimum": 0,
            "errorMessage": { "maximum": "too big" }
        }"#),
        r#"z.number().int().gte(0).lte(100, "too big").multipleOf(5)"#
    );
    assert_eq!(
        generate(r#"{ "type": "number", "exclusiveMinimum": 0.5, "exclusiveMaximum": 1 }"#),
        "z.number().gt(0.5).lt(1)"
    );
}

#[test]
fn test_array() {
    assert_eq!(generate(r#"{ "type": "array" }"#), "z.array(z.any())");
    assert_eq!(
        generate(r#"{
            "type": "array",
            "items": { "type": "string", "format": "email" },
            "minItems": 1,
            "maxItems": 3,
            "errorMessage": { "minItems": "need one" }
        }"#),
        r#"z.array(z.string().email()).min(1, "need one").max(3)"#
    );
}

#[test]
fn test_object_keeps_property_order() {
    assert_eq!(
        generate(r#"{
            "type": "object",
            "properties": {
                "zeta": { "type": "string" },
                "alpha": { "type": "number" },
                "my-key": { "type": "boolean" }
            },
            "required": ["zeta"]
        }"#),
        r#"z.object({ "zeta": z.string(), "alpha": z.number().optional(), "my-key": z.boolean().optional() })"#
    );
    assert_eq!(generate(r#"{ "type": "object" }"#), "z.object({})");
}

#[test]
fn test_parse_error_reports_path() {
    let err = parse_schema(
        r#"{
            "type": "object",
            "properties": {
                "name": { "type": "string", "minLength": -1 }
            }
        }"#,
    )
    .unwrap_err();

    match err {
        ZodGenError::ParseError { path, .. } => assert_eq!(path, "properties.name.minLength"),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_parse_error_on_malformed_json() {
    let err = parse_schema(r#"{ "type": "string", "#).unwrap_err();
    assert!(matches!(err, ZodGenError::ParseError { .. }));
    assert!(err.to_string().starts_with("Schema parse error at"));
}

#[test]
fn test_unknown_keywords_are_ignored() {
    assert_eq!(
        generate(r#"{
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "title": "Code",
            "type": "string",
            "minLength": 4,
            "examples": ["abcd"]
        }"#),
        "z.string().min(4)"
    );
}
