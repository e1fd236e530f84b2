//! Intermediate representation of a generated zod expression.
//!
//! Constraint selection builds a tree of [`Call`]s; the `Display` impls below
//! are the only place that knows about punctuation.

use std::fmt;

use crate::utils::quote;

/// Identifier the generated code expects zod to be bound to.
pub const ZOD_NAMESPACE: &str = "z";

/// One argument of a chained call.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// String literal, rendered quoted.
    Str(String),
    Int(u64),
    Num(f64),
    Bool(bool),
    /// Options object with bare keys: `{ version: "v4" }`.
    Options(Vec<(&'static str, Arg)>),
    /// Object literal with quoted keys: `{ "name": z.string() }`.
    Shape(Vec<(String, Arg)>),
    /// Nested expression.
    Expr(Box<Expression>),
    /// Code emitted verbatim.
    Code(String),
}

impl Arg {
    /// Builds an options object, appending a `message` entry when one is given.
    pub fn options<I>(entries: I, message: Option<&str>) -> Arg
    where
        I: IntoIterator<Item = (&'static str, Arg)>,
    {
        let mut entries: Vec<_> = entries.into_iter().collect();
        if let Some(message) = message {
            entries.push(("message", Arg::Str(message.to_owned())));
        }
        Arg::Options(entries)
    }
}

/// A method call: `name(args..., "message")`.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub name:    &'static str,
    pub args:    Vec<Arg>,
    /// Custom error message, rendered as the final argument.
    pub message: Option<String>,
}

impl Call {
    pub fn new(name: &'static str) -> Self {
        Call { name, args: Vec::new(), message: None }
    }

    pub fn arg(mut self, arg: Arg) -> Self {
        self.args.push(arg);
        self
    }

    pub fn message(mut self, message: Option<&str>) -> Self {
        self.message = message.map(str::to_owned);
        self
    }
}

/// `z.<base>` followed by chained calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub base:  Call,
    pub chain: Vec<Call>,
}

impl Expression {
    pub fn new(base: Call) -> Self {
        Expression { base, chain: Vec::new() }
    }

    pub fn push(&mut self, call: Call) {
        self.chain.push(call);
    }

    pub fn then(mut self, call: Call) -> Self {
        self.push(call);
        self
    }

    /// Names of the chained calls, in order. The base call is not included.
    pub fn chain_names(&self) -> Vec<&'static str> {
        self.chain.iter().map(|c| c.name).collect()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", ZOD_NAMESPACE, self.base)?;
        for call in &self.chain {
            write!(f, ".{}", call)?;
        }
        Ok(())
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", arg)?;
        }
        if let Some(message) = &self.message {
            if !self.args.is_empty() {
                f.write_str(", ")?;
            }
            f.write_str(&quote(message))?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Str(text)   => f.write_str(&quote(text)),
            Arg::Int(value)  => write!(f, "{}", value),
            Arg::Num(value)  => f.write_str(&number_literal(*value)),
            Arg::Bool(value) => write!(f, "{}", value),
            Arg::Options(entries) => {
                write_object(f, entries.iter().map(|(k, v)| ((*k).to_owned(), v)))
            }
            Arg::Shape(entries) => {
                write_object(f, entries.iter().map(|(k, v)| (quote(k), v)))
            }
            Arg::Expr(expr)  => write!(f, "{}", expr),
            Arg::Code(code)  => f.write_str(code),
        }
    }
}

fn write_object<'a, I>(f: &mut fmt::Formatter<'_>, entries: I) -> fmt::Result
where
    I: Iterator<Item = (String, &'a Arg)>,
{
    let mut entries = entries.peekable();
    if entries.peek().is_none() {
        return f.write_str("{}");
    }
    f.write_str("{ ")?;
    for (i, (key, value)) in entries.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}: {}", key, value)?;
    }
    f.write_str(" }")
}

// Integral values print without a fractional part so `5.0` reads as `5`.
// Magnitudes JavaScript itself would print in exponent form use `1e21` style.
fn number_literal(value: f64) -> String {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
    let magnitude = value.abs();
    if magnitude >= 1e21 || (magnitude != 0.0 && magnitude < 1e-6) {
        format!("{:e}", value)
    } else if value.fract() == 0.0 && magnitude <= MAX_SAFE_INTEGER {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_base_without_chain() {
        assert_eq!(Expression::new(Call::new("string")).to_string(), "z.string()");
    }

    #[test]
    fn message_follows_positional_args() {
        let call = Call::new("min").arg(Arg::Int(3)).message(Some("too short"));
        assert_eq!(call.to_string(), r#"min(3, "too short")"#);

        let call = Call::new("email").message(Some("bad"));
        assert_eq!(call.to_string(), r#"email("bad")"#);
    }

    #[test]
    fn options_merge_message_last() {
        let arg = Arg::options([("version", Arg::Str("v4".into()))], Some("ayy"));
        assert_eq!(arg.to_string(), r#"{ version: "v4", message: "ayy" }"#);
    }

    #[test]
    fn shapes_quote_keys() {
        let shape = Arg::Shape(vec![
            ("a b".into(), Arg::Expr(Box::new(Expression::new(Call::new("any"))))),
        ]);
        assert_eq!(shape.to_string(), r#"{ "a b": z.any() }"#);
        assert_eq!(Arg::Shape(Vec::new()).to_string(), "{}");
    }

    #[test]
    fn numbers_drop_integral_fraction() {
        assert_eq!(Arg::Num(5.0).to_string(), "5");
        assert_eq!(Arg::Num(-0.5).to_string(), "-0.5");
    }

    #[test]
    fn numbers_use_exponents_at_the_extremes() {
        assert_eq!(Arg::Num(1e21).to_string(), "1e21");
        assert_eq!(Arg::Num(-2.5e30).to_string(), "-2.5e30");
        assert_eq!(Arg::Num(1e-7).to_string(), "1e-7");
        assert_eq!(Arg::Num(1e20).to_string(), "100000000000000000000");
        assert_eq!(Arg::Num(0.0).to_string(), "0");
    }

    #[test]
    fn string_literals_are_escaped() {
        let call = Call::new("regex").arg(Arg::Code(format!("new RegExp({})", quote("^\"a\\d$"))));
        assert_eq!(call.to_string(), r#"regex(new RegExp("^\"a\\d$"))"#);
    }
}
