//! SELECT statement builder.

use std::fmt;

use crate::config::SqlConfig;
use crate::error::{SqlError, SqlResult};
use crate::params::Params;
use crate::qb::core::{QueryCore, is_valid_expression, validate_identity};
use crate::qb::traits::SqlStatement;
use crate::resolve::{enclose, indent, strip_quotes};
use crate::value::Value;

/// Sort direction for ORDER BY expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    /// `ASC`
    #[default]
    Ascending,
    /// `DESC`
    Descending,
}

impl OrderDirection {
    fn as_sql(self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}

/// Fluent SELECT builder.
///
/// Clause setters validate their arguments eagerly and return
/// `SqlResult<Self>` for `?`-chaining; rendering a builder that only
/// accumulated valid state always succeeds.
///
/// # Example
/// ```ignore
/// use orasql::{Value, qb};
///
/// let query = qb::select_with_alias("hr", "employees", "e")?
///     .select("first_name")?
///     .left_join_table("departments", "d", "d.id = e.department_id")?
///     .where_clause("e.status = {}", &[Value::from("active")])?
///     .order_by(&["last_name"])?;
/// let sql = query.to_sql();
/// ```
#[derive(Debug, Clone)]
pub struct Select {
    core: QueryCore,
    from: String,
    is_distinct: bool,
    fields: Vec<String>,
    joins: Vec<String>,
    wheres: Vec<String>,
    groups: Vec<String>,
    rollup: bool,
    havings: Vec<String>,
    orders: Vec<String>,
    limit_rows: u64,
}

impl Select {
    /// Create a builder for `database.table`. Bare columns resolve against
    /// the table name.
    pub fn new(database: &str, table: &str) -> SqlResult<Self> {
        let core = QueryCore::new(database, table)?;
        let from = QueryCore::qualified(database, table);
        Ok(Self::with_parts(core, from))
    }

    /// Create a builder for `database.table AS "alias"`. Bare columns
    /// resolve against the alias.
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
        Ok(Self::with_parts(core, from))
    }

    /// Create a builder over another builder's rendered text as a derived
    /// table. The alias is mandatory and becomes the quoting context.
    pub fn from_subquery(select: &Select, alias: &str) -> SqlResult<Self> {
        let query = select.to_sql();
        if query.trim().is_empty() {
            return Err(SqlError::null_argument(
                "Select argument should not be empty.",
            ));
        }
        let alias = strip_quotes(alias);
        if alias.trim().is_empty() {
            return Err(SqlError::invalid_argument(
                "TableAlias argument should not be empty.",
            ));
        }
        let table_text = format!("(\n{}\n)", indent(&query));
        let from = format!("{} AS {}", table_text, enclose(&alias));
        Ok(Self::with_parts(QueryCore::for_subquery(table_text, &alias), from))
    }

    fn with_parts(core: QueryCore, from: String) -> Self {
        Self {
            core,
            from,
            is_distinct: false,
            fields: Vec::new(),
            joins: Vec::new(),
            wheres: Vec::new(),
            groups: Vec::new(),
            rollup: false,
            havings: Vec::new(),
            orders: Vec::new(),
            limit_rows: 0,
        }
    }

    /// Attach a configuration (debug logging, execution hints).
    pub fn config(mut self, config: SqlConfig) -> Self {
        self.core.config = config;
        self
    }

    /// Define a virtual field: a bare name aliasing an arbitrary expression,
    /// substituted verbatim wherever the name appears unqualified.
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

    /// Toggle the DISTINCT flag. The flag is observable through
    /// [`Select::is_distinct`]; the renderer does not emit it.
    pub fn distinct(mut self, distinct: bool) -> Self {
        self.is_distinct = distinct;
        self
    }

    /// Current state of the DISTINCT flag.
    pub fn is_distinct(&self) -> bool {
        self.is_distinct
    }

    // ==================== Projection ====================

    /// Add an expression/column to the SELECT clause.
    pub fn select(self, expression: &str) -> SqlResult<Self> {
        self.select_with(expression, None)
    }

    /// Add an expression/column with an explicit alias.
    pub fn select_as(self, expression: &str, alias: &str) -> SqlResult<Self> {
        self.select_with(expression, Some(alias))
    }

    fn select_with(mut self, expression: &str, alias: Option<&str>) -> SqlResult<Self> {
        if expression.trim().is_empty() {
            return Err(SqlError::invalid_argument(
                "Expression argument should not be empty.",
            ));
        }
        if !is_valid_expression(expression) {
            return Err(SqlError::invalid_argument(format!(
                "Expression argument '{expression}' is not a valid format.",
            )));
        }
        // A virtual field keeps its own name as the alias unless one is given.
        let alias = match alias {
            Some(a) if !a.trim().is_empty() => Some(strip_quotes(a)),
            _ if self.core.virtual_fields.contains(expression) => Some(expression.to_string()),
            _ => None,
        };
        let resolved = self.core.resolve(expression);
        let field = match alias {
            Some(a) => format!("{resolved} AS {}", enclose(&a)),
            None => resolved,
        };
        self.fields.push(field);
        Ok(self)
    }

    /// Add another builder's rendered text as a derived-column subquery.
    /// The alias is mandatory.
    pub fn select_subquery(mut self, select: &Select, alias: &str) -> SqlResult<Self> {
        let query = select.to_sql();
        if query.trim().is_empty() {
            return Err(SqlError::null_argument(
                "Select argument should not be empty.",
            ));
        }
        if alias.trim().is_empty() {
            return Err(SqlError::invalid_argument(
                "Alias argument should not be empty.",
            ));
        }
        self.fields.push(format!(
            "(\n{}\n) AS {}",
            indent(&query),
            enclose(&strip_quotes(alias))
        ));
        Ok(self)
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

    /// LEFT JOIN another builder's rendered text as a derived table.
    pub fn left_join_select(
        self,
        select: &Select,
        alias: &str,
        condition: &str,
    ) -> SqlResult<Self> {
        self.join_derived("LEFT", select, alias, condition)
    }

    /// LEFT JOIN a UNION of several builders as one derived table.
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

    /// RIGHT JOIN another builder's rendered text as a derived table.
    pub fn right_join_select(
        self,
        select: &Select,
        alias: &str,
        condition: &str,
    ) -> SqlResult<Self> {
        self.join_derived("RIGHT", select, alias, condition)
    }

    /// RIGHT JOIN a UNION of several builders as one derived table.
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

    /// Append a WHERE predicate. Each `{}` hole in the statement is filled
    /// with a fresh `:where_condition_N` parameter bound to the matching
    /// value; the filled text is resolved before being stored. Adjacent
    /// predicates are joined by a single space at render time, so each
    /// fragment carries its own boolean connective.
    pub fn where_clause(self, statement: &str, values: &[Value]) -> SqlResult<Self> {
        self.where_clause_if(true, statement, values)
    }

    /// Conditionally append a WHERE predicate. With `condition` false this
    /// is a strict no-op: neither the accumulator nor the parameter map is
    /// touched.
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

    // ==================== GROUP BY / HAVING ====================

    /// Append expressions to the GROUP BY clause. Blank members are
    /// skipped; each kept member must match the simple expression shape.
    pub fn group_by(mut self, expressions: &[&str]) -> SqlResult<Self> {
        for expression in expressions {
            if expression.trim().is_empty() {
                continue;
            }
            if !is_valid_expression(expression) {
                return Err(SqlError::invalid_argument(format!(
                    "Expression '{expression}' is not a valid format.",
                )));
            }
            let resolved = self.core.resolve(expression);
            self.groups.push(resolved);
        }
        Ok(self)
    }

    /// Toggle `WITH ROLLUP` on the GROUP BY clause.
    pub fn with_rollup(mut self, rollup: bool) -> Self {
        self.rollup = rollup;
        self
    }

    /// Append a HAVING predicate; mirrors [`Select::where_clause`] with the
    /// `having_condition` parameter bucket.
    pub fn having(self, statement: &str, values: &[Value]) -> SqlResult<Self> {
        self.having_if(true, statement, values)
    }

    /// Conditionally append a HAVING predicate.
    pub fn having_if(
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
            .bind_condition("having_condition", statement, values)?;
        self.havings.push(fragment);
        Ok(self)
    }

    // ==================== ORDER BY / LIMIT ====================

    /// Append ascending ORDER BY expressions.
    pub fn order_by(self, expressions: &[&str]) -> SqlResult<Self> {
        self.order_by_dir(OrderDirection::Ascending, expressions)
    }

    /// Append descending ORDER BY expressions.
    pub fn order_by_desc(self, expressions: &[&str]) -> SqlResult<Self> {
        self.order_by_dir(OrderDirection::Descending, expressions)
    }

    /// Append ORDER BY expressions with an explicit direction. Blank
    /// members are skipped; nothing is stored when all members are blank.
    pub fn order_by_dir(
        mut self,
        direction: OrderDirection,
        expressions: &[&str],
    ) -> SqlResult<Self> {
        let mut resolved = Vec::new();
        for expression in expressions {
            if expression.trim().is_empty() {
                continue;
            }
            if !is_valid_expression(expression) {
                return Err(SqlError::invalid_argument(format!(
                    "Expression '{expression}' is not a valid format.",
                )));
            }
            resolved.push(self.core.resolve(expression));
        }
        if !resolved.is_empty() {
            self.orders
                .push(format!("{} {}", resolved.join(", "), direction.as_sql()));
        }
        Ok(self)
    }

    /// Cap the row count. Rendered as a `ROWNUM <=` predicate: appended with
    /// `AND` to an existing WHERE clause, or as a WHERE clause of its own.
    /// A zero cap disables the limit.
    pub fn limit(mut self, row_count: u64) -> Self {
        self.limit_rows = row_count;
        self
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
        sql.push_str("SELECT\n");
        if self.fields.is_empty() {
            sql.push_str("\t*\n");
        } else {
            sql.push('\t');
            sql.push_str(&self.fields.join(",\n\t"));
            sql.push('\n');
        }
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
        if self.limit_rows > 0 {
            if self.wheres.is_empty() {
                sql.push_str(&format!("WHERE\n\t(ROWNUM <= {})\n", self.limit_rows));
            } else {
                sql.push_str(&format!(" AND ROWNUM <= {}\n", self.limit_rows));
            }
        }
        if !self.groups.is_empty() {
            sql.push_str(&format!("GROUP BY {}", self.groups.join(", ")));
            if !self.rollup {
                sql.push('\n');
            }
        }
        if self.rollup {
            sql.push_str(" WITH ROLLUP\n");
        }
        if !self.havings.is_empty() {
            sql.push_str(&format!("HAVING\n\t({})\n", self.havings.join(" ")));
        }
        if !self.orders.is_empty() {
            sql.push_str(&format!("ORDER BY {}\n", self.orders.join(", ")));
        }
        sql.trim().to_string()
    }

    /// The bound parameters, in insertion order.
    pub fn params(&self) -> &Params {
        &self.core.params
    }
}

impl SqlStatement for Select {
    fn to_sql(&self) -> String {
        Select::to_sql(self)
    }

    fn params(&self) -> &Params {
        Select::params(self)
    }
}

impl fmt::Display for Select {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_select() {
        let query = Select::new("hr", "employees").unwrap();
        assert_eq!(query.to_sql(), "SELECT\n\t*\nFROM \"hr\".\"employees\"");
    }

    #[test]
    fn alias_changes_from_and_context() {
        let query = Select::with_alias("hr", "employees", "e")
            .unwrap()
            .select("first_name")
            .unwrap();
        assert_eq!(
            query.to_sql(),
            "SELECT\n\t\"e\".\"first_name\"\nFROM \"hr\".\"employees\" AS \"e\""
        );
    }

    #[test]
    fn rejects_bad_identity() {
        assert!(Select::new("", "t").unwrap_err().is_invalid_argument());
        assert!(Select::new("db", " ").is_err());
        assert!(Select::with_alias("db", "t", "  ").is_err());
    }

    #[test]
    fn select_rejects_complex_expressions() {
        let query = Select::new("hr", "employees").unwrap();
        assert!(query.select("SUM(amount)").unwrap_err().is_invalid_argument());
    }

    #[test]
    fn select_with_alias_strips_quotes() {
        let query = Select::new("hr", "employees")
            .unwrap()
            .select_as("first_name", "\"name\"")
            .unwrap();
        assert!(query.to_sql().contains("\"employees\".\"first_name\" AS \"name\""));
    }

    #[test]
    fn virtual_field_names_itself() {
        let query = Select::with_alias("hr", "orders", "o")
            .unwrap()
            .virtual_field("total", "SUM(o.amount)")
            .unwrap()
            .select("total")
            .unwrap();
        // the virtual expression lands verbatim, with the field's own name as alias
        assert!(query.to_sql().contains("\tSUM(o.amount) AS \"total\"\n"));
    }

    #[test]
    fn where_binds_and_resolves() {
        let query = Select::with_alias("hr", "employees", "e")
            .unwrap()
            .where_clause("status = {}", &[Value::from("active")])
            .unwrap();
        assert!(
            query
                .to_sql()
                .contains("WHERE\n\t(\"e\".\"status\" = :where_condition_1)")
        );
        assert_eq!(
            query.params().get(":where_condition_1"),
            Some(&Value::Text("active".into()))
        );
    }

    #[test]
    fn where_if_false_is_a_no_op() {
        let query = Select::new("hr", "employees")
            .unwrap()
            .where_clause_if(false, "status = {}", &[Value::from("active")])
            .unwrap();
        assert_eq!(query.to_sql(), "SELECT\n\t*\nFROM \"hr\".\"employees\"");
        assert!(query.params().is_empty());
    }

    #[test]
    fn where_fragments_join_with_space() {
        let query = Select::new("hr", "employees")
            .unwrap()
            .where_clause("status = {}", &[Value::from("active")])
            .unwrap()
            .where_clause("AND hired_on > {}", &[Value::from("2024-01-01")])
            .unwrap();
        let sql = query.to_sql();
        assert!(sql.contains(
            ":where_condition_1 AND \"employees\".\"hired_on\" > :where_condition_2"
        ));
    }

    #[test]
    fn limit_without_where_opens_a_where_clause() {
        let query = Select::new("hr", "employees").unwrap().limit(10);
        assert_eq!(
            query.to_sql(),
            "SELECT\n\t*\nFROM \"hr\".\"employees\"\nWHERE\n\t(ROWNUM <= 10)"
        );
    }

    #[test]
    fn limit_with_where_appends_rownum() {
        let query = Select::new("hr", "employees")
            .unwrap()
            .where_clause("status = {}", &[Value::from("active")])
            .unwrap()
            .limit(10);
        let sql = query.to_sql();
        assert!(sql.contains("WHERE\n\t("));
        assert!(sql.contains(")\n AND ROWNUM <= 10"));
        assert_eq!(sql.matches("WHERE").count(), 1);
    }

    #[test]
    fn join_variants() {
        let query = Select::with_alias("hr", "employees", "e")
            .unwrap()
            .left_join("audit", "changes", "c", "c.employee_id = e.id")
            .unwrap()
            .right_join_table("departments", "d", "d.id = e.department_id")
            .unwrap()
            .left_join_self("m", "m.id = e.manager_id")
            .unwrap();
        let sql = query.to_sql();
        assert!(sql.contains(
            "LEFT JOIN \"audit\".\"changes\" AS \"c\"\n\tON (\"c\".\"employee_id\" = \"e\".\"id\")"
        ));
        assert!(sql.contains(
            "RIGHT JOIN \"hr\".\"departments\" AS \"d\"\n\tON (\"d\".\"id\" = \"e\".\"department_id\")"
        ));
        assert!(sql.contains(
            "LEFT JOIN \"hr\".\"employees\" AS \"m\"\n\tON (\"m\".\"id\" = \"e\".\"manager_id\")"
        ));
    }

    #[test]
    fn join_requires_alias_and_condition() {
        let query = Select::new("hr", "employees").unwrap();
        assert!(
            query
                .clone()
                .left_join_table("departments", "", "d.id = 1")
                .unwrap_err()
                .is_invalid_argument()
        );
        assert!(
            query
                .left_join_table("departments", "d", "  ")
                .unwrap_err()
                .is_invalid_argument()
        );
    }

    #[test]
    fn derived_join_and_union() {
        let inner = Select::new("hr", "departments").unwrap();
        let other = Select::new("hr", "teams").unwrap();
        let query = Select::with_alias("hr", "employees", "e")
            .unwrap()
            .left_join_select(&inner, "d", "d.id = e.department_id")
            .unwrap()
            .right_join_union(&[&inner, &other], "u", "u.id = e.unit_id")
            .unwrap();
        let sql = query.to_sql();
        assert!(sql.contains("LEFT JOIN (\nSELECT"));
        assert!(sql.contains(") UNION ("));
        assert!(sql.contains("AS \"u\""));
    }

    #[test]
    fn union_join_rejects_empty_list() {
        let query = Select::new("hr", "employees").unwrap();
        assert!(
            query
                .left_join_union(&[], "u", "u.id = 1")
                .unwrap_err()
                .is_null_argument()
        );
    }

    #[test]
    fn group_having_order_render_in_order() {
        let query = Select::with_alias("hr", "orders", "o")
            .unwrap()
            .select("department_id")
            .unwrap()
            .where_clause("o.status = {}", &[Value::from("paid")])
            .unwrap()
            .group_by(&["department_id"])
            .unwrap()
            .having("SUM(o.amount) > {}", &[Value::from(1000)])
            .unwrap()
            .order_by_desc(&["department_id"])
            .unwrap();
        let sql = query.to_sql();
        let where_at = sql.find("WHERE").unwrap();
        let group_at = sql.find("GROUP BY").unwrap();
        let having_at = sql.find("HAVING").unwrap();
        let order_at = sql.find("ORDER BY").unwrap();
        assert!(where_at < group_at && group_at < having_at && having_at < order_at);
        assert!(sql.contains("GROUP BY \"o\".\"department_id\""));
        assert!(sql.contains("HAVING\n\t(SUM(\"o\".\"amount\") > :having_condition_1)"));
        assert!(sql.contains("ORDER BY \"o\".\"department_id\" DESC"));
    }

    #[test]
    fn rollup_attaches_to_group_by() {
        let query = Select::new("hr", "orders")
            .unwrap()
            .group_by(&["region"])
            .unwrap()
            .with_rollup(true);
        assert!(
            query
                .to_sql()
                .contains("GROUP BY \"orders\".\"region\" WITH ROLLUP")
        );
    }

    #[test]
    fn order_by_skips_blank_members() {
        let query = Select::new("hr", "employees")
            .unwrap()
            .order_by(&["", "  "])
            .unwrap();
        assert_eq!(query.to_sql(), "SELECT\n\t*\nFROM \"hr\".\"employees\"");
    }

    #[test]
    fn render_is_pure() {
        let query = Select::with_alias("hr", "employees", "e")
            .unwrap()
            .select("first_name")
            .unwrap()
            .where_clause("e.status = {}", &[Value::from("active")])
            .unwrap()
            .limit(5);
        let first = query.to_sql();
        let second = query.to_sql();
        assert_eq!(first, second);
        assert_eq!(query.params().len(), 1);
    }

    #[test]
    fn from_subquery_renders_derived_table() {
        let inner = Select::new("hr", "employees").unwrap();
        let outer = Select::from_subquery(&inner, "sub")
            .unwrap()
            .select("id")
            .unwrap();
        let sql = outer.to_sql();
        assert!(sql.starts_with("SELECT\n\t\"sub\".\"id\"\nFROM (\nSELECT"));
        assert!(sql.contains(") AS \"sub\""));
    }

    #[test]
    fn select_subquery_is_a_derived_column() {
        let inner = Select::new("hr", "headcounts").unwrap();
        let query = Select::new("hr", "departments")
            .unwrap()
            .select_subquery(&inner, "counts")
            .unwrap();
        let sql = query.to_sql();
        assert!(sql.contains("(\nSELECT"));
        assert!(sql.contains(") AS \"counts\""));
    }

    #[test]
    fn distinct_flag_is_tracked_not_rendered() {
        let query = Select::new("hr", "employees").unwrap().distinct(true);
        assert!(query.is_distinct());
        assert_eq!(query.to_sql(), "SELECT\n\t*\nFROM \"hr\".\"employees\"");
    }

    #[test]
    fn merge_parameters_last_wins() {
        let mut first = Params::new();
        first.set(":x", 1).unwrap();
        let mut second = Params::new();
        second.set(":x", 2).unwrap();
        let query = Select::new("hr", "employees")
            .unwrap()
            .merge_parameters(&[first, second]);
        assert_eq!(query.params().get(":x"), Some(&Value::Int(2)));
    }
}
