//! UPDATE statement.

use super::{Injector, StatementKind, append_limit, append_order, append_where, inject, render};
use crate::builder::{AppendSql, BuiltQuery, SqlBuilder};
use crate::error::{SqlError, SqlResult};
use crate::expr::{
    ColumnList, Expression, ExpressionList, IntoColumn, IntoExpression, IntoIdentifier, IntoTable,
    UpdateExpression,
};

/// UPDATE statement with optional clause slots.
#[derive(Clone, Debug, Default)]
pub struct Update {
    table: Option<Expression>,
    sets: Vec<UpdateExpression>,
    where_list: ExpressionList,
    order_by: ColumnList,
    limit: Option<u64>,
}

const UPDATE_INJECTORS: &[Injector<Update>] = &[
    Update::append_table,
    Update::append_sets,
    Update::append_where,
    Update::append_order,
    Update::append_limit,
];

impl Update {
    /// Create an empty UPDATE. It cannot be rendered until a table and at
    /// least one assignment are set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(mut self, table: impl IntoTable) -> Self {
        self.table = Some(table.into_table());
        self
    }

    /// Add `col = value` to the SET list.
    pub fn set(mut self, col: impl IntoIdentifier, value: impl IntoExpression) -> Self {
        self.sets.push(UpdateExpression::new(
            col.into_identifier(),
            value.into_expression(),
        ));
        self
    }

    /// Add prepared assignments to the SET list.
    pub fn set_all<I>(mut self, sets: I) -> Self
    where
        I: IntoIterator<Item = UpdateExpression>,
    {
        self.sets.extend(sets);
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

    // ==================== Injectors ====================

    fn append_table(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        let table = self
            .table
            .as_ref()
            .ok_or_else(|| SqlError::missing_clause("UPDATE requires a target table"))?;
        b.write_literal("UPDATE ")?;
        table.append_sql(b)
    }

    fn append_sets(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        if self.sets.is_empty() {
            return Err(SqlError::missing_clause(
                "UPDATE requires at least one SET assignment",
            ));
        }
        b.write_literal(" SET ")?;
        b.write_separated(self.sets.iter(), ", ")
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
}

impl AppendSql for Update {
    fn append_sql(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        inject(self, UPDATE_INJECTORS, b)
    }

    fn to_sql(&self) -> SqlResult<BuiltQuery> {
        render(StatementKind::Update, self)
    }
}
