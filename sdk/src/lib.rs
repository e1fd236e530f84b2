//! brine-zod
//!
//! Generates zod validator code from JSON Schema.
//!
//! - `schema_to_zod` for JSON Schema text → code
//! - `compile_node` for already-typed schema nodes
//! - `GenerateOptions` to emit an ES or CommonJS module instead of a bare expression
//!
//! ```
//! use brine_zod::{schema_to_zod, GenerateOptions};
//!
//! let code = schema_to_zod(r#"{ "type": "string", "format": "uuid" }"#, &GenerateOptions::default()).unwrap();
//! assert_eq!(code, "z.string().uuid()");
//! ```

mod options;

pub use brine_zod_compiler::{
    compile_node, compile_schema, parse_schema, CompileAny, Expression, SchemaCompiler,
    StringSchemaCompiler, ZodGenError,
};
pub use brine_zod_schema::{ErrorMessages, Schema, StringFormat, StringSchema};
pub use options::{wrap_module, GenerateOptions, ModuleKind};

/// Generate zod code for JSON Schema text.
pub fn schema_to_zod(text: &str, options: &GenerateOptions) -> Result<String, ZodGenError> {
    let (_schema, expr) = compile_schema(text)?;
    let code = wrap_module(&expr.to_string(), options)?;
    tracing::debug!(module = ?options.module, bytes = code.len(), "generated zod code");
    Ok(code)
}

pub mod error {
    pub use brine_zod_compiler::error::ZodGenError;
}

pub mod schema {
    pub use brine_zod_schema::*;
}
