//! INSERT query builder.

use crate::clause::{COMMA, Clause};
use crate::render::Render;

/// INSERT query: table with a column list and auto-named VALUES tokens.
///
/// Every column gets a `:column` placeholder, so the map passed to
/// `render` uses the column names as keys.
#[must_use]
#[derive(Clone, Debug)]
pub struct Insert {
    /// Table with parenthesized column list
    insert_into: Clause,
    /// Parenthesized placeholder list
    values: Clause,
}

impl Insert {
    /// Create an INSERT for a table and its column list.
    pub fn new(
        table: impl Into<String>,
        columns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        let tokens: Vec<String> = columns.iter().map(|column| format!(":{column}")).collect();

        let mut insert_into = Clause::new("INSERT INTO", COMMA);
        insert_into.set(format!("{} ({})", table.into(), columns.join(", ")));
        let mut values = Clause::new("VALUES", COMMA);
        values.set(format!("({})", tokens.join(", ")));

        Self { insert_into, values }
    }
}

impl Render for Insert {
    fn clauses(&self) -> Vec<String> {
        vec![self.insert_into.render(), self.values.render()]
    }
}
