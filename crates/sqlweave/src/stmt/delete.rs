//! DELETE statement.

use super::{
    Injector, StatementKind, append_limit, append_order, append_returning, append_where, inject,
    render,
};
use crate::builder::{AppendSql, BuiltQuery, SqlBuilder};
use crate::error::{SqlError, SqlResult};
use crate::expr::{ColumnList, Expression, ExpressionList, IntoColumn, IntoExpression, IntoTable};

/// DELETE statement with optional clause slots.
///
/// A DELETE without WHERE removes every row; nothing guards against that.
#[derive(Clone, Debug, Default)]
pub struct Delete {
    table: Option<Expression>,
    where_list: ExpressionList,
    order_by: ColumnList,
    limit: Option<u64>,
    returning: ColumnList,
}

const DELETE_INJECTORS: &[Injector<Delete>] = &[
    Delete::append_table,
    Delete::append_where,
    Delete::append_order,
    Delete::append_limit,
    Delete::append_returning,
];

impl Delete {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(mut self, table: impl IntoTable) -> Self {
        self.table = Some(table.into_table());
        self
    }

    /// AND a predicate into the WHERE clause.
    pub fn where_clause(mut self, predicate: impl IntoExpression) -> Self {
        self.where_list = self.where_list.append(predicate);
        self
    }

    pub fn order_by<I, C>(mut self, cols: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoColumn,
    {
        self.order_by = ColumnList::new(cols);
        self
    }

    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    pub fn returning<I, C>(mut self, cols: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoColumn,
    {
        self.returning = ColumnList::new(cols);
        self
    }

    fn append_table(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        let table = self
            .table
            .as_ref()
            .ok_or_else(|| SqlError::missing_clause("DELETE requires a target table"))?;
        b.write_literal("DELETE FROM ")?;
        table.append_sql(b)
    }

    fn append_where(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        append_where(&self.where_list, b)
    }

    fn append_order(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        append_order(&self.order_by, b)
    }

    fn append_limit(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        append_limit(self.limit, b)
    }

    fn append_returning(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        append_returning(&self.returning, b)
    }
}

impl AppendSql for Delete {
    fn append_sql(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        inject(self, DELETE_INJECTORS, b)
    }

    fn to_sql(&self) -> SqlResult<BuiltQuery> {
        render(StatementKind::Delete, self)
    }
}
