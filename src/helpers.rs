//! Helpers available inside templates.
//!
//! Value helpers (`eq`, `ne`, `or`, `and`, `includes`) return JSON values so
//! they can be used as subexpressions, e.g. `{{#if (includes packages "api")}}`.
//! String helpers write their result directly and treat a missing argument as
//! an empty string. `json` writes its argument as a JSON literal, so
//! templates producing JSON stay valid whatever the answers contain. `ifCond` is a block helper rendering its `else` branch for
//! unknown operators.

use handlebars::{
    handlebars_helper, Context, Handlebars, Helper, HelperResult, JsonTruthy, Output,
    RenderContext, RenderErrorReason, Renderable,
};
use regex::{Captures, Regex};
use serde_json::Value;
use std::cmp::Ordering;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static SEPARATOR_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-_\s]+(.)?").unwrap());
static DECIMAL_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").unwrap());

handlebars_helper!(eq_helper: |a: Json, b: Json| value_eq(a, b));
handlebars_helper!(ne_helper: |a: Json, b: Json| !value_eq(a, b));
handlebars_helper!(or_helper: |a: Json, b: Json| {
    if a.is_truthy(false) { a.clone() } else { b.clone() }
});
handlebars_helper!(and_helper: |a: Json, b: Json| {
    if a.is_truthy(false) { b.clone() } else { a.clone() }
});
handlebars_helper!(includes_helper: |container: Json, item: Json| includes(container, item));

/// Registers every template helper on `registry`, replacing any helper
/// already registered under the same name.
pub fn register_helpers(registry: &mut Handlebars<'_>) {
    registry.register_helper("eq", Box::new(eq_helper));
    registry.register_helper("ne", Box::new(ne_helper));
    registry.register_helper("or", Box::new(or_helper));
    registry.register_helper("and", Box::new(and_helper));
    registry.register_helper("includes", Box::new(includes_helper));
    registry.register_helper("capitalize", Box::new(capitalize_helper));
    registry.register_helper("kebabCase", Box::new(kebab_case_helper));
    registry.register_helper("camelCase", Box::new(camel_case_helper));
    registry.register_helper("ifCond", Box::new(if_cond_helper));
    registry.register_helper("json", Box::new(json_helper));
}

/// Uppercases the first character and leaves the remainder unchanged.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Replaces whitespace runs with a single hyphen and lowercases the result.
pub fn kebab_case(value: &str) -> String {
    WHITESPACE_RUN.replace_all(value, "-").to_lowercase()
}

/// Removes hyphen, underscore and whitespace runs, uppercasing the character
/// that follows each run. The first character is left as is.
pub fn camel_case(value: &str) -> String {
    SEPARATOR_RUN
        .replace_all(value, |caps: &Captures| {
            caps.get(1).map(|c| c.as_str().to_uppercase()).unwrap_or_default()
        })
        .into_owned()
}

/// True iff `container` is a non-empty array or string holding `item`.
pub fn includes(container: &Value, item: &Value) -> bool {
    match container {
        Value::Array(items) => items.iter().any(|candidate| value_eq(candidate, item)),
        Value::String(s) => item.as_str().is_some_and(|needle| s.contains(needle)),
        _ => false,
    }
}

/// Evaluates `lhs <operator> rhs`; `None` for an unrecognized operator.
pub fn compare(lhs: &Value, operator: &str, rhs: &Value) -> Option<bool> {
    compare_operands(Some(lhs), operator, Some(rhs))
}

/// Like [`compare`], with `None` standing for a reference missing from the
/// context. A missing operand only equals another missing operand or null,
/// and never orders against anything.
pub fn compare_operands(
    lhs: Option<&Value>,
    operator: &str,
    rhs: Option<&Value>,
) -> Option<bool> {
    let result = match operator {
        "==" => loose_eq(lhs, rhs),
        "===" => strict_eq(lhs, rhs),
        "!=" => !loose_eq(lhs, rhs),
        "!==" => !strict_eq(lhs, rhs),
        "<" => order(lhs, rhs).is_some_and(Ordering::is_lt),
        "<=" => order(lhs, rhs).is_some_and(Ordering::is_le),
        ">" => order(lhs, rhs).is_some_and(Ordering::is_gt),
        ">=" => order(lhs, rhs).is_some_and(Ordering::is_ge),
        _ => return None,
    };
    Some(result)
}

fn value_eq(lhs: &Value, rhs: &Value) -> bool {
    match (lhs, rhs) {
        (Value::Number(a), Value::Number(b)) => a.as_f64() == b.as_f64(),
        _ => lhs == rhs,
    }
}

fn strict_eq(lhs: Option<&Value>, rhs: Option<&Value>) -> bool {
    match (lhs, rhs) {
        (Some(a), Some(b)) => value_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

fn loose_eq(lhs: Option<&Value>, rhs: Option<&Value>) -> bool {
    let (lhs, rhs) = match (lhs, rhs) {
        (Some(a), Some(b)) => (a, b),
        (None, None) | (None, Some(Value::Null)) | (Some(Value::Null), None) => return true,
        _ => return false,
    };
    match (lhs, rhs) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(_) | Value::Object(_), _) | (_, Value::Array(_) | Value::Object(_)) => {
            value_eq(lhs, rhs)
        }
        _ => matches!((to_number(lhs), to_number(rhs)), (Some(a), Some(b)) if a == b),
    }
}

fn order(lhs: Option<&Value>, rhs: Option<&Value>) -> Option<Ordering> {
    match (lhs?, rhs?) {
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (a, b) => to_number(a)?.partial_cmp(&to_number(b)?),
    }
}

/// Numeric value of a JSON operand; `None` where the coercion yields NaN.
fn to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null => Some(0.0),
        Value::String(s) => parse_numeric_string(s.trim()),
        _ => None,
    }
}

/// Accepts decimal and exponent literals, `0x`/`0o`/`0b` integers and the
/// spelled-out `Infinity`. Everything else, `inf` and `nan` included, is NaN.
fn parse_numeric_string(s: &str) -> Option<f64> {
    if s.is_empty() {
        return Some(0.0);
    }
    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    if DECIMAL_LITERAL.is_match(s) {
        return s.parse().ok();
    }
    let radix = match s.get(..2) {
        Some("0x" | "0X") => 16,
        Some("0o" | "0O") => 8,
        Some("0b" | "0B") => 2,
        _ => return None,
    };
    u64::from_str_radix(&s[2..], radix).ok().map(|n| n as f64)
}

fn string_param<'a>(h: &'a Helper<'_>, index: usize) -> &'a str {
    h.param(index).and_then(|v| v.value().as_str()).unwrap_or("")
}

fn capitalize_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    out.write(&capitalize(string_param(h, 0)))?;
    Ok(())
}

fn kebab_case_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    out.write(&kebab_case(string_param(h, 0)))?;
    Ok(())
}

fn camel_case_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    out.write(&camel_case(string_param(h, 0)))?;
    Ok(())
}

fn json_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let literal = match h.param(0).filter(|p| !p.is_value_missing()) {
        Some(p) => serde_json::to_string(p.value()).map_err(RenderErrorReason::SerdeError)?,
        None => "null".to_string(),
    };
    out.write(&literal)?;
    Ok(())
}

fn if_cond_helper<'reg, 'rc>(
    h: &Helper<'rc>,
    r: &'reg Handlebars<'reg>,
    ctx: &'rc Context,
    rc: &mut RenderContext<'reg, 'rc>,
    out: &mut dyn Output,
) -> HelperResult {
    let operand = |index: usize| {
        h.param(index)
            .filter(|p| !p.is_value_missing())
            .map(|p| p.value())
    };
    let matched = operand(1)
        .and_then(Value::as_str)
        .and_then(|op| compare_operands(operand(0), op, operand(2)))
        .unwrap_or(false);

    let branch = if matched { h.template() } else { h.inverse() };
    match branch {
        Some(t) => t.render(r, ctx, rc, out),
        None => Ok(()),
    }
}
