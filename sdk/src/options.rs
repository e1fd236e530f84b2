use lazy_static::lazy_static;
use regex::Regex;

use brine_zod_compiler::ZodGenError;

lazy_static! {
    static ref IDENTIFIER: Regex = Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap();
}

/// ECMAScript reserved words and strict-mode restrictions. None of these can
/// be bound with `const`.
const RESERVED_WORDS: [&str; 48] = [
    "arguments", "await", "break", "case", "catch", "class", "const", "continue",
    "debugger", "default", "delete", "do", "else", "enum", "eval", "export",
    "extends", "false", "finally", "for", "function", "if", "implements", "import",
    "in", "instanceof", "interface", "let", "new", "null", "package", "private",
    "protected", "public", "return", "static", "super", "switch", "this", "throw",
    "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

fn is_valid_name(name: &str) -> bool {
    IDENTIFIER.is_match(name) && !RESERVED_WORDS.contains(&name)
}

/// How the generated expression is packaged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModuleKind {
    /// The bare expression, or `const <name> = ...` when a name is set.
    #[default]
    Plain,
    /// `import { z } from "zod"` and an `export`.
    Esm,
    /// `require("zod")` and `module.exports`.
    Cjs,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    pub module: ModuleKind,
    /// Binding name for the generated schema. Must be a JavaScript identifier
    /// that is not a reserved word.
    pub name:   Option<String>,
}

impl GenerateOptions {
    pub fn new(module: ModuleKind) -> Self {
        GenerateOptions { module, name: None }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Wraps a rendered expression according to `options`.
pub fn wrap_module(expr: &str, options: &GenerateOptions) -> Result<String, ZodGenError> {
    let name = match options.name.as_deref() {
        Some(name) if !is_valid_name(name) => {
            return Err(ZodGenError::InvalidName(name.to_owned()));
        }
        name => name,
    };

    let code = match (options.module, name) {
        (ModuleKind::Plain, None)       => expr.to_owned(),
        (ModuleKind::Plain, Some(name)) => format!("const {} = {}", name, expr),
        (ModuleKind::Esm, None) => {
            format!("import {{ z }} from \"zod\"\n\nexport default {}", expr)
        }
        (ModuleKind::Esm, Some(name)) => {
            format!("import {{ z }} from \"zod\"\n\nexport const {} = {}", name, expr)
        }
        (ModuleKind::Cjs, None) => {
            format!("const {{ z }} = require(\"zod\")\n\nmodule.exports = {}", expr)
        }
        (ModuleKind::Cjs, Some(name)) => {
            format!("const {{ z }} = require(\"zod\")\n\nmodule.exports = {{ \"{}\": {} }}", name, expr)
        }
    };
    Ok(code)
}
