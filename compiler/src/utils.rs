use serde_json::Value;

/// Renders `text` as a double-quoted string literal. JSON string literals are
/// valid JavaScript string literals.
pub fn quote(text: &str) -> String {
    Value::String(text.to_owned()).to_string()
}
