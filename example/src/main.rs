// example/src/main.rs

use brine_zod::*;
use serde_json::json;

fn main() -> Result<(), ZodGenError> {

    // A user record whose `settings` field is JSON text embedded in a string.
    let schema = json!({
        "type": "object",
        "properties": {
            "id":    { "type": "string", "format": "uuid" },
            "email": {
                "type": "string",
                "format": "email",
                "maxLength": 254,
                "errorMessage": { "format": "must be an email address" }
            },
            "avatar": { "type": "string", "contentEncoding": "base64" },
            "settings": {
                "type": "string",
                "contentMediaType": "application/json",
                "contentSchema": {
                    "type": "object",
                    "properties": {
                        "theme": { "type": "string", "pattern": "^(light|dark)$" }
                    },
                    "required": ["theme"]
                }
            }
        },
        "required": ["id", "email"]
    });

    // Bare expression.
    let expr = schema_to_zod(&schema.to_string(), &GenerateOptions::default())?;
    println!("{}\n", expr);

    // The same schema as an ES module.
    let options = GenerateOptions::new(ModuleKind::Esm).with_name("userSchema");
    let module = schema_to_zod(&schema.to_string(), &options)?;
    println!("{}", module);

    Ok(())
}
