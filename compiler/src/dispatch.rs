//! Routes schema nodes to the compiler for their type.

use brine_zod_schema::{ArraySchema, ErrorMessages, NumberSchema, ObjectSchema, Schema};

use crate::{
    expr::{Arg, Call, Expression},
    string::StringSchemaCompiler,
    traits::CompileAny,
};

/// Compiles any [`Schema`] into a zod expression.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaCompiler;

impl SchemaCompiler {
    pub fn new() -> Self {
        SchemaCompiler
    }

    pub fn compile(&self, schema: &Schema) -> Expression {
        match schema {
            Schema::String(node) => StringSchemaCompiler::new(self).compile(node),
            Schema::Integer(node) => {
                let base = Expression::new(Call::new("number")).then(Call::new("int"));
                number_constraints(base, node)
            }
            Schema::Number(node) => number_constraints(Expression::new(Call::new("number")), node),
            Schema::Boolean => Expression::new(Call::new("boolean")),
            Schema::Null    => Expression::new(Call::new("null")),
            Schema::Any     => Expression::new(Call::new("any")),
            Schema::Array(node)  => self.compile_array(node),
            Schema::Object(node) => self.compile_object(node),
        }
    }

    fn compile_array(&self, node: &ArraySchema) -> Expression {
        let items = match node.items.as_deref() {
            Some(items) => self.compile(items),
            None => Expression::new(Call::new("any")),
        };
        let mut expr = Expression::new(Call::new("array").arg(Arg::Expr(Box::new(items))));
        let messages = &node.error_message;

        if let Some(min) = node.min_items {
            expr.push(Call::new("min").arg(Arg::Int(min)).message(messages.get("minItems")));
        }
        if let Some(max) = node.max_items {
            expr.push(Call::new("max").arg(Arg::Int(max)).message(messages.get("maxItems")));
        }
        expr
    }

    /// Properties missing from `required` are marked `.optional()`.
    fn compile_object(&self, node: &ObjectSchema) -> Expression {
        let shape = node
            .properties
            .iter()
            .map(|(name, property)| {
                let mut expr = self.compile(property);
                if !node.is_required(name) {
                    expr.push(Call::new("optional"));
                }
                (name.clone(), Arg::Expr(Box::new(expr)))
            })
            .collect();

        Expression::new(Call::new("object").arg(Arg::Shape(shape)))
    }
}

impl CompileAny for SchemaCompiler {
    fn compile_any(&self, node: &Schema) -> Expression {
        self.compile(node)
    }
}

fn number_constraints(mut expr: Expression, node: &NumberSchema) -> Expression {
    let bounds: [(&'static str, &str, Option<f64>); 5] = [
        ("gte", "minimum", node.minimum),
        ("gt", "exclusiveMinimum", node.exclusive_minimum),
        ("lte", "maximum", node.maximum),
        ("lt", "exclusiveMaximum", node.exclusive_maximum),
        ("multipleOf", "multipleOf", node.multiple_of),
    ];

    for (method, keyword, value) in bounds {
        if let Some(value) = value {
            expr.push(numeric_call(method, value, &node.error_message, keyword));
        }
    }
    expr
}

fn numeric_call(method: &'static str, value: f64, messages: &ErrorMessages, keyword: &str) -> Call {
    Call::new(method).arg(Arg::Num(value)).message(messages.get(keyword))
}
