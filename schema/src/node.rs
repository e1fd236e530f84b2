use indexmap::IndexMap;
use serde::Deserialize;

use crate::{
    format::{is_json_media_type, ContentEncoding, StringFormat},
    messages::ErrorMessages,
};

/// A JSON Schema node, split by its `type` keyword.
///
/// Nodes without a `type`, or with a type this crate does not model, become
/// [`Schema::Any`]. Keywords that do not apply to the selected type are dropped.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawSchema")]
pub enum Schema {
    String(StringSchema),
    Integer(NumberSchema),
    Number(NumberSchema),
    Boolean,
    Null,
    Array(ArraySchema),
    Object(ObjectSchema),
    Any,
}

impl Schema {
    /// The JSON Schema `type` name of this node, or `"any"`.
    pub fn kind(&self) -> &'static str {
        match self {
            Schema::String(_)  => "string",
            Schema::Integer(_) => "integer",
            Schema::Number(_)  => "number",
            Schema::Boolean    => "boolean",
            Schema::Null       => "null",
            Schema::Array(_)   => "array",
            Schema::Object(_)  => "object",
            Schema::Any        => "any",
        }
    }
}

/// A string-typed node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringSchema {
    pub format:             Option<String>,
    pub pattern:            Option<String>,
    pub min_length:         Option<u64>,
    pub max_length:         Option<u64>,
    pub content_encoding:   Option<String>,
    pub content_media_type: Option<String>,
    pub content_schema:     Option<Box<Schema>>,
    pub error_message:      ErrorMessages,
}

impl StringSchema {
    /// The `format` keyword, if it names a format the compiler knows.
    pub fn string_format(&self) -> Option<StringFormat> {
        self.format.as_deref().and_then(StringFormat::from_keyword)
    }

    /// The `contentEncoding` keyword, if it names a known encoding.
    pub fn encoding(&self) -> Option<ContentEncoding> {
        self.content_encoding.as_deref().and_then(ContentEncoding::from_keyword)
    }

    /// True when `contentMediaType` says the string carries JSON text.
    pub fn has_json_content(&self) -> bool {
        self.content_media_type.as_deref().is_some_and(is_json_media_type)
    }
}

/// An `integer` or `number` node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberSchema {
    pub minimum:           Option<f64>,
    pub maximum:           Option<f64>,
    pub exclusive_minimum: Option<f64>,
    pub exclusive_maximum: Option<f64>,
    pub multiple_of:       Option<f64>,
    pub error_message:     ErrorMessages,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArraySchema {
    pub items:         Option<Box<Schema>>,
    pub min_items:     Option<u64>,
    pub max_items:     Option<u64>,
    pub error_message: ErrorMessages,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectSchema {
    /// Properties in document order.
    pub properties: IndexMap<String, Schema>,
    pub required:   Vec<String>,
}

impl ObjectSchema {
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }
}

/// Every keyword any node kind understands. Deserialized in one pass so that
/// error paths reach into nested schemas.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSchema {
    #[serde(rename = "type")]
    type_: Option<String>,

    format:             Option<String>,
    pattern:            Option<String>,
    min_length:         Option<u64>,
    max_length:         Option<u64>,
    content_encoding:   Option<String>,
    content_media_type: Option<String>,
    content_schema:     Option<Box<Schema>>,

    minimum:           Option<f64>,
    maximum:           Option<f64>,
    exclusive_minimum: Option<f64>,
    exclusive_maximum: Option<f64>,
    multiple_of:       Option<f64>,

    items:     Option<Box<Schema>>,
    min_items: Option<u64>,
    max_items: Option<u64>,

    #[serde(default)]
    properties: IndexMap<String, Schema>,
    #[serde(default)]
    required:   Vec<String>,

    #[serde(default)]
    error_message: ErrorMessages,
}

impl From<RawSchema> for Schema {
    fn from(mut raw: RawSchema) -> Self {
        let number = |raw: RawSchema| NumberSchema {
            minimum:           raw.minimum,
            maximum:           raw.maximum,
            exclusive_minimum: raw.exclusive_minimum,
            exclusive_maximum: raw.exclusive_maximum,
            multiple_of:       raw.multiple_of,
            error_message:     raw.error_message,
        };

        match raw.type_.take().as_deref() {
            Some("string") => Schema::String(StringSchema {
                format:             raw.format,
                pattern:            raw.pattern,
                min_length:         raw.min_length,
                max_length:         raw.max_length,
                content_encoding:   raw.content_encoding,
                content_media_type: raw.content_media_type,
                content_schema:     raw.content_schema,
                error_message:      raw.error_message,
            }),
            Some("integer") => Schema::Integer(number(raw)),
            Some("number")  => Schema::Number(number(raw)),
            Some("boolean") => Schema::Boolean,
            Some("null")    => Schema::Null,
            Some("array") => Schema::Array(ArraySchema {
                items:         raw.items,
                min_items:     raw.min_items,
                max_items:     raw.max_items,
                error_message: raw.error_message,
            }),
            Some("object") => Schema::Object(ObjectSchema {
                properties: raw.properties,
                required:   raw.required,
            }),
            _ => Schema::Any,
        }
    }
}
