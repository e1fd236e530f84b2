//! Typed JSON Schema nodes for the Brine Zod compiler.
//!
//! Schemas are deserialized straight from JSON with serde. Only the keywords
//! that have a zod counterpart are kept; everything else is ignored.
//!
//! ```
//! use brine_zod_schema::*;
//!
//! let schema: Schema = serde_json::from_str(r#"{ "type": "string", "format": "email" }"#).unwrap();
//!
//! let Schema::String(node) = schema else { panic!("expected a string node") };
//! assert_eq!(node.string_format(), Some(StringFormat::Email));
//! assert!(node.error_message.is_empty());
//! ```

pub mod format;
pub mod messages;
pub mod node;

pub use format::*;
pub use messages::*;
pub use node::*;
