//! SELECT COUNT(*) statement builder.

use std::fmt;

use crate::config::SqlConfig;
use crate::error::{SqlError, SqlResult};
use crate::params::Params;
use crate::qb::core::{QueryCore, validate_identity};
use crate::qb::select::Select;
use crate::qb::traits::SqlStatement;
use crate::resolve::{enclose, indent, strip_quotes};
use crate::value::Value;

/// Fluent row-count builder: the projection is fixed to `COUNT(*)` and only
/// the FROM target, joins, and WHERE predicates are configurable.
#[derive(Debug, Clone)]
pub struct SelectCount {
    core: QueryCore,
    from: String,
    joins: Vec<String>,
    wheres: Vec<String>,
}

impl SelectCount {
    /// Create a counting builder for `database.table`.
    pub fn new(database: &str, table: &str) -> SqlResult<Self> {
        let core = QueryCore::new(database, table)?;
        let from = QueryCore::qualified(database, table);
        Ok(Self {
            core,
            from,
            joins: Vec::new(),
            wheres: Vec::new(),
        })
    }

    /// Create a counting builder for `database.table AS "alias"`.
    pub fn with_alias(database: &str, table: &str, alias: &str) -> SqlResult<Self> {
        let mut core = QueryCore::new(database, table)?;
        let alias = strip_quotes(alias);
        if alias.trim().is_empty() {
            return Err(SqlError::invalid_argument(
                "TableAlias argument should not be empty.",
            ));
        }
        core.table_alias = alias.clone();
        let from = format!(
            "{} AS {}",
            QueryCore::qualified(database, table),
            enclose(&alias)
        );
        Ok(Self {
            core,
            from,
            joins: Vec::new(),
            wheres: Vec::new(),
        })
    }

    /// Attach a configuration (debug logging, execution hints).
    pub fn config(mut self, config: SqlConfig) -> Self {
        self.core.config = config;
        self
    }

    /// Define a virtual field usable inside join and WHERE conditions.
    pub fn virtual_field(mut self, name: &str, expression: &str) -> SqlResult<Self> {
        self.core.set_virtual_field(name, expression)?;
        Ok(self)
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

    // ==================== JOIN ====================

    /// LEFT JOIN a table in another database.
    pub fn left_join(
        self,
        database: &str,
        table: &str,
        alias: &str,
        condition: &str,
    ) -> SqlResult<Self> {
        self.join_database("LEFT", database, table, alias, condition)
    }

    /// LEFT JOIN a table in the builder's own database.
    pub fn left_join_table(self, table: &str, alias: &str, condition: &str) -> SqlResult<Self> {
        self.join_sibling("LEFT", table, alias, condition)
    }

    /// LEFT JOIN the builder's own table under another alias.
    pub fn left_join_self(self, alias: &str, condition: &str) -> SqlResult<Self> {
        self.join_own("LEFT", alias, condition)
    }

    /// LEFT JOIN another SELECT builder's rendered text as a derived table.
    pub fn left_join_select(
        self,
        select: &Select,
        alias: &str,
        condition: &str,
    ) -> SqlResult<Self> {
        self.join_derived("LEFT", select, alias, condition)
    }

    /// LEFT JOIN a UNION of several SELECT builders as one derived table.
    pub fn left_join_union(
        self,
        selects: &[&Select],
        alias: &str,
        condition: &str,
    ) -> SqlResult<Self> {
        self.join_union("LEFT", selects, alias, condition)
    }

    /// RIGHT JOIN a table in another database.
    pub fn right_join(
        self,
        database: &str,
        table: &str,
        alias: &str,
        condition: &str,
    ) -> SqlResult<Self> {
        self.join_database("RIGHT", database, table, alias, condition)
    }

    /// RIGHT JOIN a table in the builder's own database.
    pub fn right_join_table(self, table: &str, alias: &str, condition: &str) -> SqlResult<Self> {
        self.join_sibling("RIGHT", table, alias, condition)
    }

    /// RIGHT JOIN the builder's own table under another alias.
    pub fn right_join_self(self, alias: &str, condition: &str) -> SqlResult<Self> {
        self.join_own("RIGHT", alias, condition)
    }

    /// RIGHT JOIN another SELECT builder's rendered text as a derived table.
    pub fn right_join_select(
        self,
        select: &Select,
        alias: &str,
        condition: &str,
    ) -> SqlResult<Self> {
        self.join_derived("RIGHT", select, alias, condition)
    }

    /// RIGHT JOIN a UNION of several SELECT builders as one derived table.
    pub fn right_join_union(
        self,
        selects: &[&Select],
        alias: &str,
        condition: &str,
    ) -> SqlResult<Self> {
        self.join_union("RIGHT", selects, alias, condition)
    }

    fn join_database(
        mut self,
        keyword: &str,
        database: &str,
        table: &str,
        alias: &str,
        condition: &str,
    ) -> SqlResult<Self> {
        validate_identity("Database", database)?;
        validate_identity("Table", table)?;
        let target = QueryCore::qualified(database, table);
        let fragment = self.core.join_fragment(keyword, &target, alias, condition)?;
        self.joins.push(fragment);
        Ok(self)
    }

    fn join_sibling(
        mut self,
        keyword: &str,
        table: &str,
        alias: &str,
        condition: &str,
    ) -> SqlResult<Self> {
        validate_identity("Table", table)?;
        let target = QueryCore::qualified(&self.core.database, table);
        let fragment = self.core.join_fragment(keyword, &target, alias, condition)?;
        self.joins.push(fragment);
        Ok(self)
    }

    fn join_own(mut self, keyword: &str, alias: &str, condition: &str) -> SqlResult<Self> {
        let target = QueryCore::qualified(&self.core.database, &self.core.table);
        let fragment = self.core.join_fragment(keyword, &target, alias, condition)?;
        self.joins.push(fragment);
        Ok(self)
    }

    fn join_derived(
        mut self,
        keyword: &str,
        select: &Select,
        alias: &str,
        condition: &str,
    ) -> SqlResult<Self> {
        let query = select.to_sql();
        if query.trim().is_empty() {
            return Err(SqlError::null_argument(
                "Select argument should not be empty.",
            ));
        }
        let target = format!("(\n{}\n)", indent(&query));
        let fragment = self.core.join_fragment(keyword, &target, alias, condition)?;
        self.joins.push(fragment);
        Ok(self)
    }

    fn join_union(
        mut self,
        keyword: &str,
        selects: &[&Select],
        alias: &str,
        condition: &str,
    ) -> SqlResult<Self> {
        if selects.is_empty() {
            return Err(SqlError::null_argument(
                "Selects argument should not be empty.",
            ));
        }
        let mut queries = Vec::with_capacity(selects.len());
        for select in selects {
            let query = select.to_sql();
            if query.trim().is_empty() {
                return Err(SqlError::null_argument(
                    "A member of Selects argument should not be empty.",
                ));
            }
            queries.push(query);
        }
        let combined = format!("({})", queries.join(") UNION ("));
        let target = format!("(\n{}\n)", indent(&combined));
        let fragment = self.core.join_fragment(keyword, &target, alias, condition)?;
        self.joins.push(fragment);
        Ok(self)
    }

    // ==================== WHERE ====================

    /// Append a WHERE predicate; `{}` holes bind `:where_condition_N`
    /// parameters.
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

    // ==================== Output ====================

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
        let mut sql = String::new();
        sql.push_str("SELECT\n\tCOUNT(*)\n");
        sql.push_str("FROM ");
        sql.push_str(&self.from);
        sql.push('\n');
        if !self.joins.is_empty() {
            sql.push_str(&self.joins.join("\n"));
            sql.push('\n');
        }
        if !self.wheres.is_empty() {
            sql.push_str(&format!("WHERE\n\t({})\n", self.wheres.join(" ")));
        }
        sql.trim().to_string()
    }

    /// The bound parameters, in insertion order.
    pub fn params(&self) -> &Params {
        &self.core.params
    }
}

impl SqlStatement for SelectCount {
    fn to_sql(&self) -> String {
        SelectCount::to_sql(self)
    }

    fn params(&self) -> &Params {
        SelectCount::params(self)
    }
}

impl fmt::Display for SelectCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_count() {
        let query = SelectCount::new("hr", "employees").unwrap();
        assert_eq!(
            query.to_sql(),
            "SELECT\n\tCOUNT(*)\nFROM \"hr\".\"employees\""
        );
    }

    #[test]
    fn count_with_alias_join_and_where() {
        let query = SelectCount::with_alias("hr", "employees", "e")
            .unwrap()
            .left_join_table("departments", "d", "d.id = e.department_id")
            .unwrap()
            .where_clause("e.status = {}", &[Value::from("active")])
            .unwrap();
        let sql = query.to_sql();
        assert!(sql.starts_with("SELECT\n\tCOUNT(*)\nFROM \"hr\".\"employees\" AS \"e\""));
        assert!(sql.contains("LEFT JOIN \"hr\".\"departments\" AS \"d\""));
        assert!(sql.contains("WHERE\n\t(\"e\".\"status\" = :where_condition_1)"));
    }

    #[test]
    fn where_if_false_is_a_no_op() {
        let query = SelectCount::new("hr", "employees")
            .unwrap()
            .where_clause_if(false, "status = {}", &[Value::from("active")])
            .unwrap();
        assert!(query.params().is_empty());
        assert!(!query.to_sql().contains("WHERE"));
    }
}
