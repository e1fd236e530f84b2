//! Compiles `"type": "string"` nodes into a `z.string()` chain.
//!
//! Each keyword is handled by one rule. Rules run in the order of [`RULES`],
//! which fixes the order of the chained calls: format/encoding, then JSON
//! content (transform and pipe), then pattern, then the length bounds.
//! Every rule reads its custom message from `errorMessage` under its own
//! keyword, so a message never lands on another call.

use brine_zod_schema::{ContentEncoding, StringFormat, StringSchema};

use crate::{
    expr::{Arg, Call, Expression},
    traits::CompileAny,
    utils::quote,
};

/// Callback for `.transform(...)` that parses the string as JSON at
/// validation time and reports a custom issue when parsing fails.
pub const PARSE_JSON_TRANSFORM: &str = "(str, ctx) => { try { return JSON.parse(str); } catch (err) { ctx.addIssue({ code: \"custom\", message: \"Invalid JSON\" }); }}";

type Rule = fn(&StringSchema, &dyn CompileAny) -> Option<Call>;

const RULES: [Rule; 6] = [
    format_rule,
    content_transform_rule,
    content_pipe_rule,
    pattern_rule,
    min_length_rule,
    max_length_rule,
];

pub struct StringSchemaCompiler<'a> {
    any: &'a dyn CompileAny,
}

impl<'a> StringSchemaCompiler<'a> {
    /// `any` compiles schemas nested inside the string (`contentSchema`).
    pub fn new(any: &'a dyn CompileAny) -> Self {
        StringSchemaCompiler { any }
    }

    pub fn compile(&self, node: &StringSchema) -> Expression {
        RULES
            .iter()
            .filter_map(|rule| rule(node, self.any))
            .fold(Expression::new(Call::new("string")), Expression::then)
    }
}

/// At most one call for the `format` / `contentEncoding` pair. A recognized
/// format other than `binary` wins over a base64 encoding.
fn format_rule(node: &StringSchema, _: &dyn CompileAny) -> Option<Call> {
    let message = node.error_message.get("format");

    let format = match node.string_format() {
        Some(format) => format,
        None => {
            if let Some(format) = &node.format {
                tracing::trace!(format = %format, "ignoring unrecognized string format");
            }
            return base64_call(node);
        }
    };

    let call = match format {
        StringFormat::DateTime => {
            Call::new("datetime").arg(Arg::options([("offset", Arg::Bool(true))], message))
        }
        StringFormat::Ipv4 => ip_version("v4", message),
        StringFormat::Ipv6 => ip_version("v6", message),
        StringFormat::Email    => Call::new("email").message(message),
        StringFormat::Ip       => Call::new("ip").message(message),
        StringFormat::Uri      => Call::new("url").message(message),
        StringFormat::Uuid     => Call::new("uuid").message(message),
        StringFormat::Time     => Call::new("time").message(message),
        StringFormat::Date     => Call::new("date").message(message),
        StringFormat::Duration => Call::new("duration").message(message),
        StringFormat::Binary   => return base64_call(node),
    };

    if node.encoding().is_some() {
        tracing::trace!(
            format = format.as_keyword(),
            "format takes precedence over contentEncoding"
        );
    }
    Some(call)
}

fn ip_version(version: &str, message: Option<&str>) -> Call {
    Call::new("ip").arg(Arg::options([("version", Arg::Str(version.to_owned()))], message))
}

/// `.base64()` for `format: binary` or `contentEncoding: base64`. The
/// `contentEncoding` message is preferred over the `format` one.
fn base64_call(node: &StringSchema) -> Option<Call> {
    let binary = node.string_format() == Some(StringFormat::Binary);
    let base64 = node.encoding() == Some(ContentEncoding::Base64);

    if !base64 {
        if let Some(encoding) = &node.content_encoding {
            tracing::trace!(encoding = %encoding, "ignoring unrecognized content encoding");
        }
    }
    if !binary && !base64 {
        return None;
    }

    let message = base64
        .then(|| node.error_message.get("contentEncoding"))
        .flatten()
        .or_else(|| binary.then(|| node.error_message.get("format")).flatten());

    Some(Call::new("base64").message(message))
}

fn content_transform_rule(node: &StringSchema, _: &dyn CompileAny) -> Option<Call> {
    if !node.has_json_content() {
        if let Some(media_type) = &node.content_media_type {
            tracing::trace!(media_type = %media_type, "ignoring non-JSON content media type");
        }
        return None;
    }
    Some(
        Call::new("transform")
            .arg(Arg::Code(PARSE_JSON_TRANSFORM.to_owned()))
            .message(node.error_message.get("contentMediaType")),
    )
}

fn content_pipe_rule(node: &StringSchema, any: &dyn CompileAny) -> Option<Call> {
    if !node.has_json_content() {
        return None;
    }
    let schema = node.content_schema.as_deref()?;
    Some(
        Call::new("pipe")
            .arg(Arg::Expr(Box::new(any.compile_any(schema))))
            .message(node.error_message.get("contentSchema")),
    )
}

fn pattern_rule(node: &StringSchema, _: &dyn CompileAny) -> Option<Call> {
    let pattern = node.pattern.as_deref()?;
    Some(
        Call::new("regex")
            .arg(Arg::Code(format!("new RegExp({})", quote(pattern))))
            .message(node.error_message.get("pattern")),
    )
}

fn min_length_rule(node: &StringSchema, _: &dyn CompileAny) -> Option<Call> {
    let min = node.min_length?;
    Some(Call::new("min").arg(Arg::Int(min)).message(node.error_message.get("minLength")))
}

fn max_length_rule(node: &StringSchema, _: &dyn CompileAny) -> Option<Call> {
    let max = node.max_length?;
    Some(Call::new("max").arg(Arg::Int(max)).message(node.error_message.get("maxLength")))
}
