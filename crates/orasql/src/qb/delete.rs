//! DELETE statement builder.

use std::fmt;

use crate::config::SqlConfig;
use crate::error::SqlResult;
use crate::params::Params;
use crate::qb::core::QueryCore;
use crate::qb::traits::SqlStatement;
use crate::value::Value;

/// Fluent DELETE builder: identity plus WHERE accumulation only.
#[derive(Debug, Clone)]
pub struct Delete {
    core: QueryCore,
    wheres: Vec<String>,
}

impl Delete {
    /// Create a builder for `database.table`.
    pub fn new(database: &str, table: &str) -> SqlResult<Self> {
        Ok(Self {
            core: QueryCore::new(database, table)?,
            wheres: Vec::new(),
        })
    }

    /// Attach a configuration (debug logging, execution hints).
    pub fn config(mut self, config: SqlConfig) -> Self {
        self.core.config = config;
        self
    }

    /// Bind a named parameter (`:name`).
    pub fn set_parameter(mut self, name: &str, value: impl Into<Value>) -> SqlResult<Self> {
        self.core.set_parameter(name, value)?;
        Ok(self)
    }

    /// Merge externally built parameter maps; later maps win on shared keys.
    pub fn merge_parameters(mut self, maps: &[Params]) -> Self {
        self.core.merge_parameters(maps);
        self
    }

    /// Append a WHERE predicate; `{}` holes bind `:where_condition_N`
    /// parameters. Fragments render joined by a single space, each carrying
    /// its own boolean connective.
    pub fn where_clause(self, statement: &str, values: &[Value]) -> SqlResult<Self> {
        self.where_clause_if(true, statement, values)
    }

    /// Conditionally append a WHERE predicate; with `condition` false
    /// nothing is touched.
    pub fn where_clause_if(
        mut self,
        condition: bool,
        statement: &str,
        values: &[Value],
    ) -> SqlResult<Self> {
        if !condition {
            return Ok(self);
        }
        let fragment = self
            .core
            .bind_condition("where_condition", statement, values)?;
        self.wheres.push(fragment);
        Ok(self)
    }

    /// Emit the rendered statement through `tracing` when debug is enabled.
    pub fn log_query(&self) {
        self.core.log_query(&self.to_sql());
    }

    /// Emit the bound parameters through `tracing` when debug is enabled.
    pub fn log_parameters(&self) {
        self.core.log_parameters();
    }

    /// Render the statement text.
    pub fn to_sql(&self) -> String {
        let mut sql = format!(
            "DELETE FROM {}",
            QueryCore::qualified(&self.core.database, &self.core.table)
        );
        if !self.wheres.is_empty() {
            sql.push_str(&format!("\nWHERE\n\t({})", self.wheres.join(" ")));
        }
        sql
    }

    /// The bound parameters, in insertion order.
    pub fn params(&self) -> &Params {
        &self.core.params
    }
}

impl SqlStatement for Delete {
    fn to_sql(&self) -> String {
        Delete::to_sql(self)
    }

    fn params(&self) -> &Params {
        Delete::params(self)
    }
}

impl fmt::Display for Delete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}
