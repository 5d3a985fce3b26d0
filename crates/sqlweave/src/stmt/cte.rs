//! Common table expressions (`WITH` clause).

use super::Select;
use crate::builder::{AppendSql, SqlBuilder};
use crate::error::SqlResult;
use crate::expr::{ColumnList, Identifier, IntoColumn, IntoIdentifier};
use std::sync::Arc;

/// `name [(cols)] AS (query)`, one entry of a `WITH` clause.
#[derive(Clone, Debug)]
pub struct CommonTableExpression {
    recursive: bool,
    name: Identifier,
    columns: ColumnList,
    query: Arc<Select>,
}

impl CommonTableExpression {
    pub fn new(name: impl IntoIdentifier, query: Select) -> Self {
        Self {
            recursive: false,
            name: name.into_identifier(),
            columns: ColumnList::empty(),
            query: Arc::new(query),
        }
    }

    /// A CTE that may reference itself; its query is usually a
    /// `base UNION [ALL] step` compound.
    pub fn recursive(name: impl IntoIdentifier, query: Select) -> Self {
        Self {
            recursive: true,
            ..Self::new(name, query)
        }
    }

    /// Explicit column names.
    pub fn columns<I, C>(mut self, cols: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoColumn,
    {
        self.columns = ColumnList::new(cols);
        self
    }

    pub fn is_recursive(&self) -> bool {
        self.recursive
    }

    pub fn name(&self) -> &Identifier {
        &self.name
    }

    pub fn query(&self) -> &Select {
        &self.query
    }
}

impl AppendSql for CommonTableExpression {
    fn append_sql(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        self.name.append_sql(b)?;
        if !self.columns.is_empty() {
            b.write_literal(" (")?;
            self.columns.append_sql(b)?;
            b.write_char(')')?;
        }
        b.write_literal(" AS (")?;
        self.query.append_sql(b)?;
        b.write_char(')')
    }
}

/// ` WITH [RECURSIVE] cte, ... `, skipped when there are none.
///
/// RECURSIVE is written once, when any entry is recursive.
pub(crate) fn append_with(ctes: &[CommonTableExpression], b: &mut SqlBuilder) -> SqlResult<()> {
    if ctes.is_empty() {
        return Ok(());
    }
    b.write_literal("WITH ")?;
    if ctes.iter().any(CommonTableExpression::is_recursive) {
        b.write_literal("RECURSIVE ")?;
    }
    b.write_separated(ctes.iter(), ", ")?;
    b.write_char(' ')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{Comparable, col};
    use crate::stmt::{select, select_from};
    use crate::value::Value;

    #[test]
    fn named_query_with_columns() {
        let cte = CommonTableExpression::new(
            "active",
            select(["id"]).from("users").where_clause(col("active").eq(true)),
        )
        .columns(["user_id"]);
        let q = cte.to_sql().unwrap();
        assert_eq!(
            q.sql,
            "`active` (`user_id`) AS (SELECT `id` FROM `users` WHERE (`active` = ?))"
        );
        assert_eq!(q.args, vec![Value::Bool(true)]);
    }

    #[test]
    fn recursive_keyword_written_once() {
        let ctes = [
            CommonTableExpression::new("a", select_from("x")),
            CommonTableExpression::recursive("b", select_from("y")),
        ];
        let mut b = SqlBuilder::new();
        append_with(&ctes, &mut b).unwrap();
        assert_eq!(
            b.sql(),
            "WITH RECURSIVE `a` AS (SELECT * FROM `x`), `b` AS (SELECT * FROM `y`) "
        );
    }

    #[test]
    fn no_ctes_write_nothing() {
        let mut b = SqlBuilder::new();
        append_with(&[], &mut b).unwrap();
        assert!(b.is_empty());
    }
}
