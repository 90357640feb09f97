//! Render pipeline: clause joining and named-placeholder substitution.

use crate::clause;
use crate::error::{QueryError, QueryResult};
use serde::Serialize;
use serde_json::Value;

/// Join rendered clause parts with single spaces.
///
/// Absent clauses (empty strings) are dropped; the result is normalized and
/// trimmed so no space runs or join artifacts survive.
pub fn join(parts: &[String]) -> String {
    let joined = parts
        .iter()
        .filter(|part| !part.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    clause::normalize(&joined).trim().to_string()
}

/// Replace every `:key` token with the single-quoted value for `key`.
///
/// `placeholders` must be a JSON object, anything else fails with
/// [`QueryError::TypeArgument`]. Strings substitute as their content, every
/// other value as its compact JSON text, and the result is always wrapped
/// in single quotes, numbers included. Tokens without a matching key are
/// left untouched.
///
/// Replacement is a plain substring search with no token boundary check, so
/// callers must not use placeholder names that are prefixes of one another.
pub fn substitute(sql: &str, placeholders: &Value) -> QueryResult<String> {
    let Some(map) = placeholders.as_object() else {
        return Err(QueryError::argument(format!(
            "placeholders must be an object, got {}",
            kind(placeholders)
        )));
    };

    let mut out = sql.to_string();
    for (key, value) in map {
        let token = format!(":{key}");
        if !out.contains(token.as_str()) {
            continue;
        }
        out = out.replace(&token, &format!("'{}'", literal(value)));
        tracing::trace!(target: "qbuild.sql", token = %token, "substituted placeholder");
    }
    Ok(out)
}

/// The unquoted literal text for a placeholder value.
fn literal(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// JSON type name for error messages.
fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Rendering surface shared by every query kind.
///
/// A query renders by walking its fixed clause order, joining the present
/// clauses, and optionally substituting placeholder tokens.
pub trait Render {
    /// Rendered clause parts in this query's fixed order.
    fn clauses(&self) -> Vec<String>;

    /// The query text without placeholder substitution.
    fn to_sql(&self) -> String {
        join(&self.clauses())
    }

    /// Render the query, substituting `:name` tokens from `placeholders`.
    ///
    /// Rendering is a pure projection; it can be repeated with different
    /// maps without touching clause state.
    fn render(&self, placeholders: &Value) -> QueryResult<String> {
        let sql = substitute(&self.to_sql(), placeholders)?;
        tracing::debug!(target: "qbuild.sql", sql = %sql, "rendered query");
        Ok(sql)
    }

    /// Render with any serializable map or struct as the placeholder source.
    fn render_with<T: Serialize>(&self, placeholders: &T) -> QueryResult<String> {
        let value = serde_json::to_value(placeholders)
            .map_err(|err| QueryError::argument(err.to_string()))?;
        self.render(&value)
    }
}
