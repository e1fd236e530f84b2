use brine_zod_schema::Schema;

use crate::{dispatch::SchemaCompiler, error::ZodGenError, expr::Expression};

/// Parse JSON Schema text into a typed `Schema`.
/// Returns `Err(ZodGenError::ParseError)` with the JSON path of the offending value.
pub fn parse_schema(text: &str) -> Result<Schema, ZodGenError> {
    let de = &mut serde_json::Deserializer::from_str(text);
    serde_path_to_error::deserialize(de).map_err(|err| ZodGenError::ParseError {
        path: err.path().to_string(),
        msg:  err.into_inner().to_string(),
    })
}

/// Compile a typed node into its zod expression.
pub fn compile_node(schema: &Schema) -> Expression {
    SchemaCompiler::new().compile(schema)
}

/// Compile JSON Schema text into `(Schema, Expression)`.
pub fn compile_schema(text: &str) -> Result<(Schema, Expression), ZodGenError> {
    let schema = parse_schema(text)?;
    let expr = compile_node(&schema);
    tracing::debug!(kind = schema.kind(), calls = expr.chain.len(), "compiled schema");
    Ok((schema, expr))
}
