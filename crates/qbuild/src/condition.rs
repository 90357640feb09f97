//! Shared WHERE-building capability for query kinds that filter rows.

use crate::clause::Clause;
use crate::error::QueryResult;
use crate::fragment::Fragment;
use crate::number::Number;

/// Placeholder token used when no id value is supplied.
const ID_TOKEN: &str = ":id";

/// WHERE accumulation shared by SELECT, UPDATE and DELETE.
///
/// Conditions accumulate as flat text, not a condition tree; callers
/// parenthesize compound predicates themselves.
pub trait Conditional: Sized {
    /// The WHERE clause slot of this query.
    fn where_clause_mut(&mut self) -> &mut Clause;

    /// Replace the WHERE clause outright, discarding accumulated conditions.
    fn where_clause(mut self, predicate: impl Into<Fragment>) -> Self {
        self.where_clause_mut().set(predicate);
        self
    }

    /// Append `AND predicate` when `guard` is true, otherwise do nothing.
    ///
    /// Starts the clause without a connective while WHERE is still unset,
    /// so optional filters need no branching at the call site.
    fn and(mut self, predicate: impl Into<String>, guard: bool) -> Self {
        let predicate = predicate.into();
        if guard && !predicate.is_empty() {
            self.where_clause_mut().append(" AND ", &predicate);
        }
        self
    }

    /// Append `OR predicate` when `guard` is true, otherwise do nothing.
    fn or(mut self, predicate: impl Into<String>, guard: bool) -> Self {
        let predicate = predicate.into();
        if guard && !predicate.is_empty() {
            self.where_clause_mut().append(" OR ", &predicate);
        }
        self
    }

    /// Set WHERE to `id == :id`, leaving the id for render-time substitution.
    fn where_id(mut self) -> Self {
        self.where_clause_mut().set(format!("id == {ID_TOKEN}"));
        self
    }

    /// Set WHERE to `id == value` for a validated whole-number id.
    ///
    /// The literal token `:id` passes through untouched; any other value
    /// must be a whole number or the call fails with
    /// [`TypeConversion`](crate::QueryError::TypeConversion).
    fn where_id_eq(mut self, id: impl Into<Number>) -> QueryResult<Self> {
        let id = id.into();
        if let Number::Text(text) = &id {
            if text.as_str() == ID_TOKEN {
                return Ok(self.where_id());
            }
        }
        let id = id.to_whole()?;
        self.where_clause_mut().set(format!("id == {id}"));
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::query::delete;
    use crate::render::Render;

    use super::*;

    #[test]
    fn test_where_clause_replaces_accumulated_conditions() {
        let query = delete("users")
            .where_clause("id == :id")
            .and("age > :age", true)
            .where_clause("name == :name");
        assert_eq!(query.to_sql(), "DELETE FROM users WHERE name == :name");
    }

    #[test]
    fn test_guard_false_is_a_no_op() {
        let query = delete("users")
            .where_clause("id == :id")
            .and("age > :age", false)
            .or("role == :role", false);
        assert_eq!(query.to_sql(), "DELETE FROM users WHERE id == :id");
    }

    #[test]
    fn test_empty_predicate_is_a_no_op() {
        let query = delete("users").where_clause("id == :id").and("", true);
        assert_eq!(query.to_sql(), "DELETE FROM users WHERE id == :id");
    }

    #[test]
    fn test_and_or_chain() {
        let query = delete("users")
            .where_clause("id == :id")
            .and("age > :age", true)
            .or("role == :role", true);
        assert_eq!(
            query.to_sql(),
            "DELETE FROM users WHERE id == :id AND age > :age OR role == :role"
        );
    }

    #[test]
    fn test_where_id_uses_the_placeholder_token() {
        let query = delete("users").where_id();
        assert_eq!(query.to_sql(), "DELETE FROM users WHERE id == :id");
    }

    #[test]
    fn test_where_id_eq_validates() {
        let query = delete("users").where_id_eq("5").unwrap();
        assert_eq!(query.to_sql(), "DELETE FROM users WHERE id == 5");

        let query = delete("users").where_id_eq(":id").unwrap();
        assert_eq!(query.to_sql(), "DELETE FROM users WHERE id == :id");

        assert!(delete("users").where_id_eq("5.5").unwrap_err().is_conversion());
        assert!(delete("users").where_id_eq("abc").unwrap_err().is_conversion());
    }
}

#[cfg(test)]
mod proptests {
    use crate::query::delete;
    use crate::render::Render;

    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_false_guard_never_mutates(
            initial in "[a-z =:0-9]*",
            predicate in "[a-z =:0-9]*",
        ) {
            let base = delete("users").where_clause(initial.as_str());
            let before = base.to_sql();
            let after_and = base.clone().and(predicate.as_str(), false).to_sql();
            let after_or = base.clone().or(predicate.as_str(), false).to_sql();
            prop_assert_eq!(after_and, before.clone());
            prop_assert_eq!(after_or, before);
        }
    }
}
