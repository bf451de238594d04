//! State and helpers shared by every statement builder.

use std::sync::OnceLock;

use regex::Regex;

use crate::config::SqlConfig;
use crate::error::{SqlError, SqlResult};
use crate::params::{Params, VirtualFields};
use crate::resolve::{self, ResolveContext};
use crate::value::Value;

fn contains_word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\w").expect("invalid built-in identity regex"))
}

fn expression_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?:\w+\.)?\w+$").expect("invalid built-in expression regex"))
}

/// True for the simple projection shape: a word, optionally qualified by one
/// dotted prefix (`amount`, `e.amount`).
pub(crate) fn is_valid_expression(expression: &str) -> bool {
    expression_re().is_match(expression)
}

/// Validate an identity argument (database, table, field): non-empty and
/// containing at least one word character.
pub(crate) fn validate_identity(argument: &str, value: &str) -> SqlResult<()> {
    if value.trim().is_empty() {
        return Err(SqlError::invalid_argument(format!(
            "{argument} argument should not be empty.",
        )));
    }
    if !contains_word_re().is_match(value) {
        return Err(SqlError::invalid_argument(format!(
            "{argument} argument '{value}' should contain a word character \
             (letter, number, underscore).",
        )));
    }
    Ok(())
}

/// Derive an auto parameter name from a field name: non-word characters
/// become underscores and an underscore lands before each internal capital
/// (`FirstName` becomes `:First_Name`).
pub(crate) fn derive_param_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len() + 4);
    out.push(':');
    for (index, c) in field.chars().enumerate() {
        let c = if c.is_alphanumeric() || c == '_' { c } else { '_' };
        if index > 0 && c.is_ascii_uppercase() {
            out.push('_');
        }
        out.push(c);
    }
    out
}

/// Replace successive `{}` holes with the provided names, left to right.
fn fill_holes(statement: &str, names: &[String]) -> SqlResult<String> {
    let mut out = String::with_capacity(statement.len() + names.len() * 8);
    let mut rest = statement;
    let mut used = 0;
    while let Some(pos) = rest.find("{}") {
        if used >= names.len() {
            return Err(SqlError::invalid_argument(
                "ConditionStatement has more '{}' placeholders than supplied values.",
            ));
        }
        out.push_str(&rest[..pos]);
        out.push_str(&names[used]);
        used += 1;
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    Ok(out)
}

/// State shared by every statement builder: target identity, bound
/// parameters, virtual fields, and configuration.
#[derive(Debug, Clone)]
pub(crate) struct QueryCore {
    pub database: String,
    pub table: String,
    pub table_alias: String,
    pub params: Params,
    pub virtual_fields: VirtualFields,
    pub config: SqlConfig,
}

impl QueryCore {
    pub fn new(database: &str, table: &str) -> SqlResult<Self> {
        validate_identity("Database", database)?;
        validate_identity("Table", table)?;
        Ok(Self {
            database: database.to_string(),
            table: table.to_string(),
            table_alias: table.to_string(),
            params: Params::new(),
            virtual_fields: VirtualFields::new(),
            config: SqlConfig::default(),
        })
    }

    /// Core for a derived-table builder: the table slot holds the
    /// parenthesized subquery text and the alias is mandatory.
    pub fn for_subquery(subquery_text: String, alias: &str) -> Self {
        Self {
            database: String::new(),
            table: subquery_text,
            table_alias: alias.to_string(),
            params: Params::new(),
            virtual_fields: VirtualFields::new(),
            config: SqlConfig::default(),
        }
    }

    /// `"db"."table"` target text.
    pub fn qualified(database: &str, table: &str) -> String {
        format!(
            "{}.{}",
            resolve::enclose(database),
            resolve::enclose(table)
        )
    }

    fn context(&self) -> ResolveContext<'_> {
        ResolveContext {
            table_or_alias: if self.table_alias.trim().is_empty() {
                &self.table
            } else {
                &self.table_alias
            },
            virtual_fields: &self.virtual_fields,
        }
    }

    /// Resolve an expression against this builder's quoting context.
    pub fn resolve(&self, expression: &str) -> String {
        resolve::resolve(expression, &self.context())
    }

    pub fn set_parameter(&mut self, name: &str, value: impl Into<Value>) -> SqlResult<()> {
        self.params.set(name, value)
    }

    pub fn set_virtual_field(&mut self, name: &str, expression: &str) -> SqlResult<()> {
        self.virtual_fields.set(name, expression)
    }

    pub fn merge_parameters(&mut self, maps: &[Params]) {
        for map in maps {
            self.params.merge(map);
        }
    }

    /// Bind `values` under fresh `:{bucket}_{n}` names, fill the statement's
    /// `{}` holes with those names in order, then resolve the filled text.
    pub fn bind_condition(
        &mut self,
        bucket: &str,
        statement: &str,
        values: &[Value],
    ) -> SqlResult<String> {
        let statement = resolve::strip_quotes(statement);
        if statement.trim().is_empty() {
            return Err(SqlError::invalid_argument(
                "ConditionStatement argument should not be empty.",
            ));
        }
        let mut names = Vec::with_capacity(values.len());
        for value in values {
            let name = self.params.unique_name(bucket);
            self.params.set(&name, value.clone())?;
            names.push(name);
        }
        let filled = fill_holes(&statement, &names)?;
        Ok(self.resolve(&filled))
    }

    /// Shared join fragment: `<kw> JOIN <target> AS "alias"\n\tON (<cond>)`.
    pub fn join_fragment(
        &self,
        keyword: &str,
        target: &str,
        alias: &str,
        condition: &str,
    ) -> SqlResult<String> {
        let alias = resolve::strip_quotes(alias);
        if alias.trim().is_empty() {
            return Err(SqlError::invalid_argument(
                "TableAlias argument should not be empty.",
            ));
        }
        let condition = resolve::strip_quotes(condition);
        if condition.trim().is_empty() {
            return Err(SqlError::invalid_argument(
                "ConditionStatement argument should not be empty.",
            ));
        }
        Ok(format!(
            "{keyword} JOIN {target} AS {}\n\tON ({})",
            resolve::enclose(&alias),
            self.resolve(&condition)
        ))
    }

    /// Emit the bound parameters through `tracing` when debug is enabled.
    pub fn log_parameters(&self) {
        if !self.config.debug {
            return;
        }
        if self.params.is_empty() {
            tracing::debug!("no parameters bound");
            return;
        }
        for (index, (name, value)) in self.params.iter().enumerate() {
            tracing::debug!(parameter = index + 1, name, value = %value, "bound parameter");
        }
    }

    /// Emit the rendered statement through `tracing` when debug is enabled.
    pub fn log_query(&self, query: &str) {
        if self.config.debug {
            tracing::debug!(%query, "rendered statement");
        }
    }
}
