//! UPDATE query builder.

use crate::clause::{AND, COMMA, Clause};
use crate::condition::Conditional;
use crate::render::Render;

/// UPDATE query: table, SET assignments, optional WHERE.
///
/// Every column becomes a `column = :column` assignment; the WHERE clause
/// starts absent until a [`Conditional`] setter is called.
#[must_use]
#[derive(Clone, Debug)]
pub struct Update {
    /// Table name
    update: Clause,
    /// Column assignments
    set: Clause,
    /// WHERE predicate
    where_clause: Clause,
}

impl Update {
    /// Create an UPDATE for a table and the columns it assigns.
    pub fn new(
        table: impl Into<String>,
        columns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let assignments: Vec<String> = columns
            .into_iter()
            .map(|column| {
                let column = column.into();
                format!("{column} = :{column}")
            })
            .collect();

        let mut update = Clause::new("UPDATE", COMMA);
        update.set(table.into());
        let mut set = Clause::new("SET", COMMA);
        set.set(assignments);

        Self {
            update,
            set,
            where_clause: Clause::new("WHERE", AND),
        }
    }
}

impl Conditional for Update {
    fn where_clause_mut(&mut self) -> &mut Clause {
        &mut self.where_clause
    }
}

impl Render for Update {
    fn clauses(&self) -> Vec<String> {
        vec![
            self.update.render(),
            self.set.render(),
            self.where_clause.render(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_assigns_a_placeholder_per_column() {
        let query = Update::new("USER", ["name", "surname"]);
        assert_eq!(
            query.to_sql(),
            "UPDATE USER SET name = :name, surname = :surname"
        );
    }

    #[test]
    fn test_update_where_starts_absent() {
        let query = Update::new("USER", ["name"]);
        assert_eq!(query.to_sql(), "UPDATE USER SET name = :name");

        let query = query.where_id();
        assert_eq!(query.to_sql(), "UPDATE USER SET name = :name WHERE id == :id");
    }

    #[test]
    fn test_update_renders_assignments() {
        let sql = Update::new("USER", ["name", "surname"])
            .where_id_eq(7)
            .unwrap()
            .render(&json!({"name": "ana", "surname": "ivic"}))
            .unwrap();
        assert_eq!(
            sql,
            "UPDATE USER SET name = 'ana', surname = 'ivic' WHERE id == 7"
        );
    }
}
