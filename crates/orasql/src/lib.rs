//! # orasql
//!
//! A fluent, parameter-safe Oracle SQL statement builder.
//!
//! orasql turns method-chained clause declarations into syntactically valid,
//! safely quoted statement text plus a separately tracked map of named
//! `:parameters`, so callers compose queries programmatically instead of
//! hand-concatenating strings.
//!
//! ## Features
//!
//! - **Identifier resolution**: free-form expression text is classified
//!   into bare columns, dotted paths, wildcards, numeric literals, reserved
//!   keywords, function calls, string literals, and placeholders, and each
//!   piece is quoted, upper-cased, or passed through by its own rule
//! - **Named parameters**: values bind under `:name` placeholders; inline
//!   condition values get collision-free auto-generated names
//! - **Virtual fields**: alias an arbitrary expression under a bare name
//!   and reference it anywhere an expression is accepted
//! - **Fail fast**: every setter validates its arguments and returns
//!   `SqlResult<Self>`; rendering accumulated-valid state never fails
//! - **Pure rendering**: `to_sql()` is a deterministic projection; call it
//!   as often as you like
//!
//! ## Example
//!
//! ```ignore
//! use orasql::{Value, qb};
//!
//! let query = qb::select_with_alias("hr", "employees", "e")?
//!     .select("first_name")?
//!     .select_as("salary", "pay")?
//!     .left_join_table("departments", "d", "d.id = e.department_id")?
//!     .where_clause("e.status = {}", &[Value::from("active")])?
//!     .order_by(&["last_name"])?
//!     .limit(50);
//!
//! let sql = query.to_sql();
//! let params = query.params();
//! ```

pub mod config;
pub mod error;
pub mod keyword;
pub mod params;
pub mod qb;
pub mod value;

mod resolve;

pub use config::SqlConfig;
pub use error::{SqlError, SqlResult};
pub use params::{Params, VirtualFields};
pub use value::Value;

// Re-export the builders and constructors for easy access
pub use qb::{
    Delete, Insert, OrderDirection, Select, SelectCount, SqlStatement, Update, delete, insert,
    select, select_count, select_count_with_alias, select_from, select_with_alias, update,
};
