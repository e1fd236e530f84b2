//! brine-zod-compiler
//!
//! This crate implements:
//!  1) An expression IR for zod builder chains and its renderer (`expr`),
//!  2) The string-schema compiler (`string`), with format, JSON content,
//!     pattern and length constraints plus per-keyword error messages,
//!  3) A dispatcher over every schema type (`dispatch`), which also serves as
//!     the `CompileAny` capability for nested schemas,
//!  4) Text entry points (`parse_schema`, `compile_schema`),
//!  5) Error types (`ZodGenError`).

pub mod error;
pub mod utils;
pub mod expr;
pub mod traits;
pub mod string;
pub mod dispatch;
pub mod compiler;

pub use compiler::{compile_node, compile_schema, parse_schema};
pub use dispatch::SchemaCompiler;
pub use error::ZodGenError;
pub use expr::Expression;
pub use string::StringSchemaCompiler;
pub use traits::CompileAny;
