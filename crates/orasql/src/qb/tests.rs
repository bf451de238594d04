//! Integration tests for the qb module.

use crate::params::Params;
use crate::qb::{SqlStatement, delete, insert, select, select_count, select_with_alias, update};
use crate::value::Value;

#[test]
fn select_basic() {
    let query = select("hr", "employees").unwrap();
    assert_eq!(query.to_sql(), "SELECT\n\t*\nFROM \"hr\".\"employees\"");
}

#[test]
fn full_chain_renders_sections_in_fixed_order() {
    let query = select_with_alias("hr", "orders", "o")
        .unwrap()
        .select("department_id")
        .unwrap()
        .select_as("amount", "total")
        .unwrap()
        .left_join_table("departments", "d", "d.id = o.department_id")
        .unwrap()
        .where_clause("o.status = {}", &[Value::from("paid")])
        .unwrap()
        .group_by(&["department_id"])
        .unwrap()
        .having("SUM(o.amount) > {}", &[Value::from(1000)])
        .unwrap()
        .order_by(&["department_id"])
        .unwrap()
        .limit(100);

    let sql = query.to_sql();
    let positions: Vec<usize> = [
        "SELECT",
        "FROM",
        "LEFT JOIN",
        "WHERE",
        " AND ROWNUM <= 100",
        "GROUP BY",
        "HAVING",
        "ORDER BY",
    ]
    .iter()
    .map(|section| sql.find(section).unwrap_or_else(|| panic!("missing {section}")))
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn parameter_buckets_count_independently() {
    let query = select("hr", "orders")
        .unwrap()
        .where_clause("status = {}", &[Value::from("paid")])
        .unwrap()
        .where_clause("AND region = {}", &[Value::from("emea")])
        .unwrap()
        .having("SUM(amount) > {}", &[Value::from(1000)])
        .unwrap();

    let names: Vec<&str> = query.params().iter().map(|(name, _)| name).collect();
    assert_eq!(
        names,
        [
            ":where_condition_1",
            ":where_condition_2",
            ":having_condition_1"
        ]
    );
}

#[test]
fn virtual_field_flows_into_conditions() {
    let query = select_with_alias("hr", "orders", "o")
        .unwrap()
        .virtual_field("total", "SUM(o.amount)")
        .unwrap()
        .having("total > {}", &[Value::from(500)])
        .unwrap();
    // the virtual expression substitutes verbatim inside the predicate
    assert!(
        query
            .to_sql()
            .contains("HAVING\n\t(SUM(o.amount) > :having_condition_1)")
    );
}

#[test]
fn select_count_shares_the_resolution_rules() {
    let count = select_count("hr", "employees")
        .unwrap()
        .where_clause("status = {}", &[Value::from("active")])
        .unwrap();
    assert_eq!(
        count.to_sql(),
        "SELECT\n\tCOUNT(*)\nFROM \"hr\".\"employees\"\nWHERE\n\t(\"employees\".\"status\" = :where_condition_1)"
    );
}

#[test]
fn insert_classification_matrix() {
    let query = insert("hr", "employees")
        .unwrap()
        .set("ended_on", Value::Null)
        .unwrap()
        .set("active", true)
        .unwrap()
        .set("Amount", 42)
        .unwrap()
        .set("status", "active")
        .unwrap()
        .set("Description", "hello world")
        .unwrap();

    let sql = query.to_sql();
    assert!(sql.contains("NULL"));
    assert!(sql.contains("1"));
    assert!(sql.contains("42"));
    assert!(sql.contains("'active'"));
    assert!(sql.contains(":Description"));
    assert_eq!(query.params().len(), 1);
}

#[test]
fn update_and_delete_where_asymmetry() {
    let update_sql = update("hr", "employees")
        .unwrap()
        .set("status", "gone")
        .unwrap()
        .where_clause("age > {}", &[Value::from(60)])
        .unwrap()
        .where_clause("tenure > {}", &[Value::from(5)])
        .unwrap()
        .to_sql();
    // Update joins WHERE fragments with an explicit AND
    assert!(update_sql.contains(":where_condition_1 AND "));

    let delete_sql = delete("hr", "employees")
        .unwrap()
        .where_clause("status = {}", &[Value::from("gone")])
        .unwrap()
        .where_clause("OR status = {}", &[Value::from("retired")])
        .unwrap()
        .to_sql();
    // Delete joins fragments with a bare space; connectives come from the caller
    assert!(delete_sql.contains(":where_condition_1 OR "));
}

#[test]
fn statements_render_through_the_trait() {
    let statements: Vec<Box<dyn SqlStatement>> = vec![
        Box::new(select("hr", "a").unwrap()),
        Box::new(select_count("hr", "a").unwrap()),
        Box::new(insert("hr", "a").unwrap().set("x", 1).unwrap()),
        Box::new(update("hr", "a").unwrap().set("x", 1).unwrap()),
        Box::new(delete("hr", "a").unwrap()),
    ];
    for statement in &statements {
        assert!(!statement.to_sql().is_empty());
        assert_eq!(statement.to_sql(), statement.to_sql());
    }
}

#[test]
fn external_parameters_merge_across_builders() {
    let mut shared = Params::new();
    shared.set(":tenant", "acme").unwrap();

    let query = select("hr", "employees")
        .unwrap()
        .where_clause("tenant_id = :tenant", &[])
        .unwrap()
        .merge_parameters(&[shared]);

    assert_eq!(
        query.params().get(":tenant"),
        Some(&Value::Text("acme".into()))
    );
    assert!(query.to_sql().contains("\"employees\".\"tenant_id\" = :tenant"));
}
