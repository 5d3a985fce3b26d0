//! Tests for expression composition.

use crate::builder::AppendSql;
use crate::expr::*;
use crate::stmt::select;
use crate::value::Value;

#[test]
fn test_ident_parses_dotted_paths() {
    assert_eq!(ident("a").to_sql().unwrap().sql, "`a`");
    assert_eq!(ident("t.a").to_sql().unwrap().sql, "`t`.`a`");
    assert_eq!(ident("s.t.a").to_sql().unwrap().sql, "`s`.`t`.`a`");
    assert_eq!(ident("t.*").to_sql().unwrap().sql, "`t`.*");
    assert_eq!(table("users").to_sql().unwrap().sql, "`users`");
}

#[test]
fn test_embedded_quote_is_doubled() {
    assert_eq!(col("we`ird").to_sql().unwrap().sql, "`we``ird`");
}

#[test]
fn test_comparison_against_column() {
    let q = ident("o.user_id").eq(ident("u.id")).to_sql().unwrap();
    assert_eq!(q.sql, "(`o`.`user_id` = `u`.`id`)");
    assert!(q.args.is_empty());
}

#[test]
fn test_comparison_against_sub_query() {
    let sub = select([max("age")]).from("users");
    let q = col("age").eq(sub).to_sql().unwrap();
    assert_eq!(q.sql, "(`age` = (SELECT MAX(`age`) FROM `users`))");
}

#[test]
fn test_in_sub_query() {
    let sub = select(["user_id"])
        .from("orders")
        .where_clause(col("total").gt(100));
    let q = col("id").in_select(sub).to_sql().unwrap();
    assert_eq!(
        q.sql,
        "(`id` IN (SELECT `user_id` FROM `orders` WHERE (`total` > ?)))"
    );
    assert_eq!(q.args, vec![Value::Int(100)]);
}

#[test]
fn test_invert_boolean_and_range() {
    let e = Expression::from(col("a").eq(1));
    assert_eq!(e.invert().unwrap().to_sql().unwrap().sql, "(`a` != ?)");

    let e = Expression::from(col("a").between(1, 2));
    assert_eq!(
        e.invert().unwrap().to_sql().unwrap().sql,
        "(`a` NOT BETWEEN ? AND ?)"
    );
}

#[test]
fn test_invert_twice_is_identity() {
    let e = Expression::from(and([
        Expression::from(col("a").like("x%")),
        Expression::from(or([col("b").is_null(), col("c").in_list([1, 2])])),
    ]));
    let original = e.to_sql().unwrap();
    let twice = e.invert().unwrap().invert().unwrap().to_sql().unwrap();
    assert_eq!(original, twice);
}

#[test]
fn test_invert_unsupported_nodes() {
    for e in [
        Expression::from(col("a")),
        Expression::from(lit("1 = 1", Vec::<Expression>::new())),
        Expression::from(count_star()),
        val(5),
    ] {
        let err = e.invert().unwrap_err();
        assert!(err.is_unsupported_inversion(), "{}", e.kind_name());
    }
}

#[test]
fn test_distinct_function() {
    let q = count(col("user_id").distinct()).to_sql().unwrap();
    assert_eq!(q.sql, "COUNT(DISTINCT(`user_id`))");
}

#[test]
fn test_aggregates() {
    assert_eq!(sum("amount").to_sql().unwrap().sql, "SUM(`amount`)");
    assert_eq!(min("amount").to_sql().unwrap().sql, "MIN(`amount`)");
    assert_eq!(avg("t.amount").to_sql().unwrap().sql, "AVG(`t`.`amount`)");
    assert_eq!(count("*").to_sql().unwrap().sql, "COUNT(*)");
}

#[test]
fn test_function_comparison_binds_after_arguments() {
    let q = func("LOWER", [lit("?", ["X"])]).eq("x").to_sql().unwrap();
    assert_eq!(q.sql, "(LOWER(?) = ?)");
    assert_eq!(q.args, vec![Value::from("X"), Value::from("x")]);
}

#[test]
fn test_value_list_expression() {
    let e = Expression::ValueList(vec![val(1), val("a")]);
    let q = e.to_sql().unwrap();
    assert_eq!(q.sql, "(?,?)");
    assert_eq!(q.args, vec![Value::Int(1), Value::from("a")]);

    let err = Expression::ValueList(Vec::new()).to_sql().unwrap_err();
    assert!(err.is_malformed_operand());
}

#[test]
fn test_shared_fragment_renders_identically() {
    let adults = col("age").gte(18);
    let a = select(["id"]).from("users").where_clause(adults.clone());
    let b = select(["name"]).from("people").where_clause(adults);

    let qa = a.to_sql().unwrap();
    let qb = b.to_sql().unwrap();
    assert!(qa.sql.ends_with("WHERE (`age` >= ?)"));
    assert!(qb.sql.ends_with("WHERE (`age` >= ?)"));
    assert_eq!(qa.args, qb.args);
}

#[test]
fn test_nested_failure_keeps_its_kind() {
    let err = and([col("a").eq(1), col("b").is(3)]).to_sql().unwrap_err();
    assert!(err.is_malformed_operand());
}

#[test]
fn test_optional_values() {
    let q = col("deleted_at").eq(None::<i64>).to_sql().unwrap();
    assert_eq!(q.sql, "(`deleted_at` IS NULL)");

    let q = col("n").eq(Some(3)).to_sql().unwrap();
    assert_eq!(q.sql, "(`n` = ?)");
    assert_eq!(q.args, vec![Value::Int(3)]);
}
