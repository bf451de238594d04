//! UPDATE statement builder.

use std::fmt;

use crate::config::SqlConfig;
use crate::error::SqlResult;
use crate::params::Params;
use crate::qb::core::{QueryCore, derive_param_name, is_valid_expression, validate_identity};
use crate::qb::traits::SqlStatement;
use crate::value::Value;

/// Fluent UPDATE builder.
///
/// Value classification matches [`Insert`](crate::qb::Insert) except that
/// numbers take no bare-literal shortcut here: a numeric value whose text
/// matches the simple expression shape embeds as a quoted literal instead.
/// WHERE fragments are joined with an explicit ` AND `.
#[derive(Debug, Clone)]
pub struct Update {
    core: QueryCore,
    updates: Vec<(String, String)>,
    wheres: Vec<String>,
}

impl Update {
    /// Create a builder for `database.table`.
    pub fn new(database: &str, table: &str) -> SqlResult<Self> {
        Ok(Self {
            core: QueryCore::new(database, table)?,
            updates: Vec::new(),
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

    /// Add a field/value pair to the SET clause. Re-setting a field
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
        match self.updates.iter_mut().find(|(key, _)| key == field) {
            Some((_, slot)) => *slot = rendered,
            None => self.updates.push((field.to_string(), rendered)),
        }
        Ok(self)
    }

    /// Append a WHERE predicate; `{}` holes bind `:where_condition_N`
    /// parameters. Fragments render joined with ` AND `.
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
        let assignments: Vec<String> = self
            .updates
            .iter()
            .map(|(field, value)| format!("{} = {value}", self.core.resolve(field)))
            .collect();
        let mut sql = format!(
            "UPDATE {}\nSET\n\t{}",
            QueryCore::qualified(&self.core.database, &self.core.table),
            assignments.join(",\n\t"),
        );
        if !self.wheres.is_empty() {
            sql.push_str(&format!("\nWHERE\n\t({})", self.wheres.join(" AND ")));
        }
        sql
    }

    /// The bound parameters, in insertion order.
    pub fn params(&self) -> &Params {
        &self.core.params
    }
}

impl SqlStatement for Update {
    fn to_sql(&self) -> String {
        Update::to_sql(self)
    }

    fn params(&self) -> &Params {
        Update::params(self)
    }
}

impl fmt::Display for Update {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_update() {
        let query = Update::new("hr", "employees")
            .unwrap()
            .set("status", "inactive")
            .unwrap()
            .where_clause("id = {}", &[Value::from(7)])
            .unwrap();
        assert_eq!(
            query.to_sql(),
            "UPDATE \"hr\".\"employees\"\nSET\n\t\"employees\".\"status\" = 'inactive'\nWHERE\n\t(\"employees\".\"id\" = :where_condition_1)"
        );
    }

    #[test]
    fn numbers_embed_as_quoted_literals() {
        let query = Update::new("hr", "employees")
            .unwrap()
            .set("age", 31)
            .unwrap();
        assert!(query.to_sql().contains("= '31'"));
        assert!(query.params().is_empty());
    }

    #[test]
    fn null_and_bool_embed_as_literals() {
        let query = Update::new("hr", "employees")
            .unwrap()
            .set("ended_on", Value::Null)
            .unwrap()
            .set("active", false)
            .unwrap();
        let sql = query.to_sql();
        assert!(sql.contains("\"ended_on\" = NULL"));
        assert!(sql.contains("\"active\" = 0"));
    }

    #[test]
    fn free_text_binds_snake_cased_parameter() {
        let query = Update::new("hr", "employees")
            .unwrap()
            .set("FirstName", "Ada Lovelace")
            .unwrap();
        assert!(query.to_sql().contains("= :First_Name"));
        assert_eq!(
            query.params().get(":First_Name"),
            Some(&Value::Text("Ada Lovelace".into()))
        );
    }

    #[test]
    fn where_fragments_join_with_and() {
        let query = Update::new("hr", "employees")
            .unwrap()
            .set("status", "retired")
            .unwrap()
            .where_clause("age > {}", &[Value::from(65)])
            .unwrap()
            .where_clause("tenure > {}", &[Value::from(10)])
            .unwrap();
        assert!(
            query
                .to_sql()
                .contains(":where_condition_1 AND \"employees\".\"tenure\" > :where_condition_2")
        );
    }

    #[test]
    fn set_if_false_is_a_no_op() {
        let query = Update::new("hr", "employees")
            .unwrap()
            .set("status", "x")
            .unwrap()
            .set_if(false, "Description", "hello world")
            .unwrap();
        assert!(!query.to_sql().contains("Description"));
        assert!(query.params().is_empty());
    }

    #[test]
    fn set_parameter_is_exposed() {
        let query = Update::new("hr", "employees")
            .unwrap()
            .set_parameter(":region", "emea")
            .unwrap();
        assert_eq!(
            query.params().get(":region"),
            Some(&Value::Text("emea".into()))
        );
    }
}
