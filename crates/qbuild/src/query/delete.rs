//! DELETE query builder.

use crate::clause::{AND, COMMA, Clause};
use crate::condition::Conditional;
use crate::render::Render;

/// DELETE query: table and optional WHERE.
#[must_use]
#[derive(Clone, Debug)]
pub struct Delete {
    /// Table name
    delete_from: Clause,
    /// WHERE predicate
    where_clause: Clause,
}

impl Delete {
    /// Create a DELETE for a table.
    pub fn new(table: impl Into<String>) -> Self {
        let mut delete_from = Clause::new("DELETE FROM", COMMA);
        delete_from.set(table.into());
        Self {
            delete_from,
            where_clause: Clause::new("WHERE", AND),
        }
    }
}

impl Conditional for Delete {
    fn where_clause_mut(&mut self) -> &mut Clause {
        &mut self.where_clause
    }
}

impl Render for Delete {
    fn clauses(&self) -> Vec<String> {
        vec![self.delete_from.render(), self.where_clause.render()]
    }
}
