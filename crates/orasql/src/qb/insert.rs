//! INSERT statement builder.

use std::fmt;

use crate::config::SqlConfig;
use crate::error::SqlResult;
use crate::params::Params;
use crate::qb::core::{QueryCore, derive_param_name, is_valid_expression, validate_identity};
use crate::qb::traits::SqlStatement;
use crate::value::Value;

/// Fluent INSERT builder.
///
/// Each `set` call classifies its value: the null marker embeds the literal
/// `NULL`, booleans embed `1`/`0`, numbers embed as bare literals, text of
/// simple identifier shape embeds as a quoted string literal, and anything
/// else is bound under an auto-derived `:parameter` name.
#[derive(Debug, Clone)]
pub struct Insert {
    core: QueryCore,
    inserts: Vec<(String, String)>,
}

impl Insert {
    /// Create a builder for `database.table`.
    pub fn new(database: &str, table: &str) -> SqlResult<Self> {
        Ok(Self {
            core: QueryCore::new(database, table)?,
            inserts: Vec::new(),
        })
    }

    /// Attach a configuration (debug logging, execution hints).
    pub fn config(mut self, config: SqlConfig) -> Self {
        self.core.config = config;
        self
    }

    /// Merge externally built parameter maps; later maps win on shared keys.
    pub fn merge_parameters(mut self, maps: &[Params]) -> Self {
        self.core.merge_parameters(maps);
        self
    }

    /// Add a field/value pair to the column list. Re-setting a field
    /// overwrites its value in place.
    pub fn set(self, field: &str, value: impl Into<Value>) -> SqlResult<Self> {
        self.set_if(true, field, value)
    }

    /// Conditionally add a field/value pair; with `condition` false nothing
    /// is touched.
    pub fn set_if(
        mut self,
        condition: bool,
        field: &str,
        value: impl Into<Value>,
    ) -> SqlResult<Self> {
        if !condition {
            return Ok(self);
        }
        validate_identity("Field", field)?;
        let value = value.into();
        let rendered = if value.is_null() {
            "NULL".to_string()
        } else if let Value::Bool(flag) = &value {
            if *flag { "1" } else { "0" }.to_string()
        } else if value.is_numeric() {
            value.to_string()
        } else {
            let text = value.to_string();
            if is_valid_expression(&text) {
                format!("'{text}'")
            } else {
                let name = derive_param_name(field);
                self.core.params.set(&name, value)?;
                name
            }
        };
        match self.inserts.iter_mut().find(|(key, _)| key == field) {
            Some((_, slot)) => *slot = rendered,
            None => self.inserts.push((field.to_string(), rendered)),
        }
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
        let fields: Vec<String> = self
            .inserts
            .iter()
            .map(|(field, _)| self.core.resolve(field))
            .collect();
        let values: Vec<&str> = self
            .inserts
            .iter()
            .map(|(_, value)| value.as_str())
            .collect();
        format!(
            "INSERT INTO {}\n\t({})\nVALUES\n\t({})",
            QueryCore::qualified(&self.core.database, &self.core.table),
            fields.join(",\n\t"),
            values.join(",\n\t"),
        )
    }

    /// The bound parameters, in insertion order.
    pub fn params(&self) -> &Params {
        &self.core.params
    }
}

impl SqlStatement for Insert {
    fn to_sql(&self) -> String {
        Insert::to_sql(self)
    }

    fn params(&self) -> &Params {
        Insert::params(self)
    }
}

impl fmt::Display for Insert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}
