//! Query variants and their fluent constructors.
//!
//! Each variant declares its clause slots in a fixed render order and
//! exposes only the setters matching its SQL shape. Rendering walks that
//! order, joins the present clauses, and substitutes `:name` placeholders
//! from a JSON object.
//!
//! ```
//! use qbuild::{Conditional, Render, query};
//! use serde_json::json;
//!
//! # fn main() -> qbuild::QueryResult<()> {
//! let sql = query::select("* FROM users u")
//!     .where_clause("u.id == :id")
//!     .limit(10)?
//!     .render(&json!({"id": 5}))?;
//!
//! assert_eq!(sql, "SELECT * FROM users u WHERE u.id == '5' LIMIT 10");
//! # Ok(())
//! # }
//! ```

mod delete;
mod insert;
mod select;
mod update;

pub use delete::Delete;
pub use insert::Insert;
pub use select::Select;
pub use update::Update;

use crate::fragment::Fragment;

/// Create a SELECT query from its target text.
///
/// # Example
/// ```
/// use qbuild::Render;
///
/// let query = qbuild::select("* FROM users");
/// assert_eq!(query.to_sql(), "SELECT * FROM users");
/// ```
pub fn select(target: impl Into<Fragment>) -> Select {
    Select::new(target)
}

/// Create an INSERT query for a table and its column list.
///
/// # Example
/// ```
/// use qbuild::Render;
///
/// let query = qbuild::insert("users", ["name"]);
/// assert_eq!(query.to_sql(), "INSERT INTO users (name) VALUES (:name)");
/// ```
pub fn insert(
    table: impl Into<String>,
    columns: impl IntoIterator<Item = impl Into<String>>,
) -> Insert {
    Insert::new(table, columns)
}

/// Create an UPDATE query for a table and the columns it assigns.
///
/// # Example
/// ```
/// use qbuild::Render;
///
/// let query = qbuild::update("users", ["name"]);
/// assert_eq!(query.to_sql(), "UPDATE users SET name = :name");
/// ```
pub fn update(
    table: impl Into<String>,
    columns: impl IntoIterator<Item = impl Into<String>>,
) -> Update {
    Update::new(table, columns)
}

/// Create a DELETE query for a table.
///
/// # Example
/// ```
/// use qbuild::{Conditional, Render};
///
/// let query = qbuild::delete("users").where_id();
/// assert_eq!(query.to_sql(), "DELETE FROM users WHERE id == :id");
/// ```
pub fn delete(table: impl Into<String>) -> Delete {
    Delete::new(table)
}
