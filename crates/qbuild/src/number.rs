//! Tagged numeric input for validated clause arguments.

use crate::error::{QueryError, QueryResult};

/// Input accepted by the numeric clause setters (LIMIT, OFFSET, id).
///
/// Text is parsed on demand; the conversion decides whether a fractional
/// part is rejected or truncated.
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    /// An integer value
    Int(i64),
    /// A floating point value
    Float(f64),
    /// Text parsed at conversion time
    Text(String),
}

impl Number {
    /// Interpret as a whole number, rejecting values with a fractional part.
    pub fn to_whole(&self) -> QueryResult<i64> {
        match self {
            Number::Int(value) => Ok(*value),
            Number::Float(value) => {
                if value.fract() != 0.0 {
                    return Err(not_whole(value));
                }
                Ok(*value as i64)
            }
            Number::Text(text) => {
                let trimmed = text.trim();
                if let Ok(value) = trimmed.parse::<i64>() {
                    return Ok(value);
                }
                match trimmed.parse::<f64>() {
                    Ok(value) if value.fract() == 0.0 => Ok(value as i64),
                    _ => Err(not_whole(text)),
                }
            }
        }
    }

    /// Interpret as a whole number, truncating any fractional part.
    pub fn to_whole_lossy(&self) -> QueryResult<i64> {
        match self {
            Number::Int(value) => Ok(*value),
            Number::Float(value) => {
                if !value.is_finite() {
                    return Err(not_whole(value));
                }
                Ok(value.trunc() as i64)
            }
            Number::Text(text) => {
                let trimmed = text.trim();
                if let Ok(value) = trimmed.parse::<i64>() {
                    return Ok(value);
                }
                match trimmed.parse::<f64>() {
                    Ok(value) if value.is_finite() => Ok(value.trunc() as i64),
                    _ => Err(not_whole(text)),
                }
            }
        }
    }
}

fn not_whole(value: impl std::fmt::Display) -> QueryError {
    QueryError::conversion(format!("'{value}' is not a whole number"))
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(value.into())
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<&str> for Number {
    fn from(value: &str) -> Self {
        Number::Text(value.to_string())
    }
}

impl From<String> for Number {
    fn from(value: String) -> Self {
        Number::Text(value)
    }
}
