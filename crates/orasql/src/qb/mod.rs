//! Statement builders for orasql.
//!
//! Each builder accumulates already-resolved clause fragments and a named
//! parameter map, then renders deterministic statement text on demand.
//! Setters validate eagerly and return `SqlResult<Self>` for `?`-chaining.
//!
//! # Usage
//!
//! ```ignore
//! use orasql::{Value, qb};
//!
//! // SELECT
//! let query = qb::select_with_alias("hr", "employees", "e")?
//!     .select("first_name")?
//!     .left_join_table("departments", "d", "d.id = e.department_id")?
//!     .where_clause("e.status = {}", &[Value::from("active")])?
//!     .order_by(&["last_name"])?
//!     .limit(50);
//! let (sql, params) = (query.to_sql(), query.params());
//!
//! // INSERT
//! let insert = qb::insert("hr", "employees")?
//!     .set("first_name", "Ada")?
//!     .set("Description", "joined via import")?;
//!
//! // UPDATE
//! let update = qb::update("hr", "employees")?
//!     .set("status", "inactive")?
//!     .where_clause("id = {}", &[Value::from(7)])?;
//!
//! // DELETE
//! let delete = qb::delete("hr", "employees")?
//!     .where_clause("id = {}", &[Value::from(7)])?;
//! ```

mod core;
mod delete;
mod insert;
mod select;
mod select_count;
mod traits;
mod update;

pub use delete::Delete;
pub use insert::Insert;
pub use select::{OrderDirection, Select};
pub use select_count::SelectCount;
pub use traits::SqlStatement;
pub use update::Update;

use crate::error::SqlResult;

/// Create a SELECT builder for `database.table`.
pub fn select(database: &str, table: &str) -> SqlResult<Select> {
    Select::new(database, table)
}

/// Create a SELECT builder for `database.table AS "alias"`.
pub fn select_with_alias(database: &str, table: &str, alias: &str) -> SqlResult<Select> {
    Select::with_alias(database, table, alias)
}

/// Create a SELECT builder over another builder's rendered text as a
/// derived table. The alias is mandatory.
pub fn select_from(inner: &Select, alias: &str) -> SqlResult<Select> {
    Select::from_subquery(inner, alias)
}

/// Create a SELECT COUNT(*) builder for `database.table`.
pub fn select_count(database: &str, table: &str) -> SqlResult<SelectCount> {
    SelectCount::new(database, table)
}

/// Create a SELECT COUNT(*) builder for `database.table AS "alias"`.
pub fn select_count_with_alias(
    database: &str,
    table: &str,
    alias: &str,
) -> SqlResult<SelectCount> {
    SelectCount::with_alias(database, table, alias)
}

/// Create an INSERT builder for `database.table`.
pub fn insert(database: &str, table: &str) -> SqlResult<Insert> {
    Insert::new(database, table)
}

/// Create an UPDATE builder for `database.table`.
pub fn update(database: &str, table: &str) -> SqlResult<Update> {
    Update::new(database, table)
}

/// Create a DELETE builder for `database.table`.
pub fn delete(database: &str, table: &str) -> SqlResult<Delete> {
    Delete::new(database, table)
}

#[cfg(test)]
mod tests;
