//! SELECT query builder.

use crate::clause::{AND, COMMA, Clause};
use crate::condition::Conditional;
use crate::error::QueryResult;
use crate::fragment::Fragment;
use crate::number::Number;
use crate::render::Render;
use serde_json::Value;

/// SELECT query: target text, optional WHERE, ORDER BY with a direction,
/// and LIMIT with an optional offset.
#[must_use]
#[derive(Clone, Debug)]
pub struct Select {
    /// Columns and FROM expression
    select: Clause,
    /// WHERE predicate
    where_clause: Clause,
    /// ORDER BY columns
    order_by: Clause,
    /// Bare ASC/DESC slot
    direction: Clause,
    /// Row count with optional offset
    limit: Clause,
}

impl Select {
    /// Create a SELECT query from its target text, e.g. `"* FROM users u"`.
    pub fn new(target: impl Into<Fragment>) -> Self {
        let mut query = Self::empty();
        query.select.set(target);
        query
    }

    fn empty() -> Self {
        Self {
            select: Clause::new("SELECT", COMMA),
            where_clause: Clause::new("WHERE", AND),
            order_by: Clause::new("ORDER BY", COMMA),
            direction: Clause::new("", COMMA),
            limit: Clause::new("LIMIT", COMMA),
        }
    }

    /// Seed clauses from a JSON object holding `select`, `where`,
    /// `order_by` and `limit` keys.
    ///
    /// String values set the clause text as-is and arrays of strings join
    /// with the clause separator. Missing keys, non-string elements and
    /// non-object input silently leave clauses unset.
    pub fn from_value(data: &Value) -> Self {
        let mut query = Self::empty();
        if let Some(map) = data.as_object() {
            apply(&mut query.select, map.get("select"));
            apply(&mut query.where_clause, map.get("where"));
            apply(&mut query.order_by, map.get("order_by"));
            apply(&mut query.limit, map.get("limit"));
        }
        query
    }

    // ==================== Clause setters ====================

    /// Replace the select target.
    pub fn select(mut self, target: impl Into<Fragment>) -> Self {
        self.select.set(target);
        self
    }

    /// Set ORDER BY columns and the sort direction.
    pub fn order_by(mut self, columns: impl Into<Fragment>, ascending: bool) -> Self {
        self.order_by.set(columns);
        self.direction.set(if ascending { "ASC" } else { "DESC" });
        self
    }

    // ==================== Pagination ====================

    /// Set LIMIT to a whole-number row count.
    pub fn limit(mut self, value: impl Into<Number>) -> QueryResult<Self> {
        let value = value.into().to_whole()?;
        self.limit.set(value.to_string());
        Ok(self)
    }

    /// Set LIMIT with an offset, rendered as `LIMIT count, offset`.
    ///
    /// The count must be a whole number; a fractional offset is truncated.
    pub fn limit_offset(
        mut self,
        value: impl Into<Number>,
        offset: impl Into<Number>,
    ) -> QueryResult<Self> {
        let value = value.into().to_whole()?;
        let offset = offset.into().to_whole_lossy()?;
        self.limit.set(vec![value.to_string(), offset.to_string()]);
        Ok(self)
    }
}

impl Conditional for Select {
    fn where_clause_mut(&mut self) -> &mut Clause {
        &mut self.where_clause
    }
}

impl Render for Select {
    fn clauses(&self) -> Vec<String> {
        vec![
            self.select.render(),
            self.where_clause.render(),
            self.order_by.render(),
            self.direction.render(),
            self.limit.render(),
        ]
    }
}

fn apply(clause: &mut Clause, value: Option<&Value>) {
    match value {
        Some(Value::String(text)) => clause.set(text.as_str()),
        Some(Value::Array(items)) => {
            let texts: Vec<String> = items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect();
            clause.set(texts);
        }
        _ => {}
    }
}
