//! # qbuild
//!
//! A fluent SQL query-string builder.
//!
//! ## Features
//!
//! - **Clause slots**: each clause knows its keyword, separator, and absent state
//! - **Fluent chaining**: every setter consumes and returns the query
//! - **Guarded conditions**: `and`/`or` take a guard flag, so optional filters need no branching
//! - **Named placeholders**: `:name` tokens substituted from a JSON object at render time
//! - **Typed failures**: whole-number validation and mapping checks return [`QueryError`]
//!
//! ## Example
//!
//! ```
//! use qbuild::{Conditional, Render, query};
//! use serde_json::json;
//!
//! # fn main() -> qbuild::QueryResult<()> {
//! let sql = query::select("* FROM USER u")
//!     .where_clause("u.id == :id")
//!     .and("u.avg > :avg", true)
//!     .order_by(["u.name", "u.surname"], true)
//!     .limit(10)?
//!     .render(&json!({"id": 5, "avg": 6.6}))?;
//!
//! assert_eq!(
//!     sql,
//!     "SELECT * FROM USER u WHERE u.id == '5' AND u.avg > '6.6' \
//!      ORDER BY u.name, u.surname ASC LIMIT 10"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Substitution wraps every value in single quotes, numbers included, and
//! replaces tokens by plain substring search. Both are deliberate: the
//! output is an unexecuted debug/display string, not an escaped statement
//! ready for a database.

pub mod clause;
pub mod condition;
pub mod error;
pub mod fragment;
pub mod number;
pub mod query;
pub mod render;

pub use clause::Clause;
pub use condition::Conditional;
pub use error::{QueryError, QueryResult};
pub use fragment::Fragment;
pub use number::Number;
pub use render::{Render, join, substitute};

// Re-export the query module surface for easy access
pub use query::{Delete, Insert, Select, Update, delete, insert, select, update};
