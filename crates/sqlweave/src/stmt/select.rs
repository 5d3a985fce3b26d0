//! SELECT statement.

use super::cte::append_with;
use super::{
    CommonTableExpression, CompoundExpression, CompoundType, Injector, JoinCondition,
    JoinExpression, JoinType, StatementKind, append_limit, append_order, append_predicates,
    append_where, inject, render,
};
use crate::builder::{AppendSql, BuiltQuery, SqlBuilder};
use crate::error::{SqlError, SqlResult};
use crate::expr::{
    ColumnList, Expression, ExpressionList, IntoColumn, IntoExpression, IntoIdentifier,
    IntoTable, Window,
};

/// SELECT statement with optional clause slots.
#[derive(Clone, Debug, Default)]
pub struct Select {
    /// WITH entries
    ctes: Vec<CommonTableExpression>,
    /// SELECT DISTINCT
    distinct: bool,
    /// Column list (`*` when empty)
    columns: ColumnList,
    /// FROM sources
    from: Vec<Expression>,
    /// JOIN clauses, in the order added
    joins: Vec<JoinExpression>,
    /// WHERE predicates, ANDed
    where_list: ExpressionList,
    /// GROUP BY
    group_by: ColumnList,
    /// HAVING predicates, ANDed
    having: ExpressionList,
    /// Named windows of the WINDOW clause
    windows: Vec<Window>,
    /// ORDER BY
    order_by: ColumnList,
    limit: Option<u64>,
    offset: Option<u64>,
    /// UNION / INTERSECT parts, in the order added
    compounds: Vec<CompoundExpression>,
}

const SELECT_INJECTORS: &[Injector<Select>] = &[
    Select::append_with,
    Select::append_select,
    Select::append_from,
    Select::append_joins,
    Select::append_where,
    Select::append_group_by,
    Select::append_having,
    Select::append_windows,
    Select::append_order,
    Select::append_limit,
    Select::append_offset,
    Select::append_compounds,
];

impl Select {
    /// Create an empty SELECT. It cannot be rendered until a FROM is set.
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== WITH ====================

    /// `WITH name AS (query)`
    pub fn with(self, name: impl IntoIdentifier, query: Select) -> Self {
        self.with_cte(CommonTableExpression::new(name, query))
    }

    /// `WITH RECURSIVE name AS (query)`
    pub fn with_recursive(self, name: impl IntoIdentifier, query: Select) -> Self {
        self.with_cte(CommonTableExpression::recursive(name, query))
    }

    /// Add a prepared common table expression.
    pub fn with_cte(mut self, cte: CommonTableExpression) -> Self {
        self.ctes.push(cte);
        self
    }

    // ==================== Columns ====================

    /// Replace the column list.
    pub fn columns<I, C>(mut self, cols: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoColumn,
    {
        self.columns = ColumnList::new(cols);
        self
    }

    /// Append to the column list.
    pub fn select_append<I, C>(mut self, cols: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoColumn,
    {
        self.columns = self.columns.append(cols);
        self
    }

    /// SELECT DISTINCT
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    // ==================== FROM / JOIN ====================

    /// Replace the FROM sources with `table`.
    pub fn from(mut self, table: impl IntoTable) -> Self {
        self.from = vec![table.into_table()];
        self
    }

    /// Add another FROM source (`FROM a, b`).
    pub fn from_append(mut self, table: impl IntoTable) -> Self {
        self.from.push(table.into_table());
        self
    }

    /// Add a join.
    pub fn join(mut self, join: JoinExpression) -> Self {
        self.joins.push(join);
        self
    }

    fn join_with(self, kind: JoinType, table: impl IntoTable, on: Option<JoinCondition>) -> Self {
        self.join(JoinExpression::new(kind, table.into_table(), on))
    }

    /// INNER JOIN
    pub fn inner_join(self, table: impl IntoTable, on: JoinCondition) -> Self {
        self.join_with(JoinType::Inner, table, Some(on))
    }

    /// LEFT JOIN
    pub fn left_join(self, table: impl IntoTable, on: JoinCondition) -> Self {
        self.join_with(JoinType::Left, table, Some(on))
    }

    /// RIGHT JOIN
    pub fn right_join(self, table: impl IntoTable, on: JoinCondition) -> Self {
        self.join_with(JoinType::Right, table, Some(on))
    }

    /// FULL JOIN
    pub fn full_join(self, table: impl IntoTable, on: JoinCondition) -> Self {
        self.join_with(JoinType::Full, table, Some(on))
    }

    /// LEFT OUTER JOIN
    pub fn left_outer_join(self, table: impl IntoTable, on: JoinCondition) -> Self {
        self.join_with(JoinType::LeftOuter, table, Some(on))
    }

    /// RIGHT OUTER JOIN
    pub fn right_outer_join(self, table: impl IntoTable, on: JoinCondition) -> Self {
        self.join_with(JoinType::RightOuter, table, Some(on))
    }

    /// FULL OUTER JOIN
    pub fn full_outer_join(self, table: impl IntoTable, on: JoinCondition) -> Self {
        self.join_with(JoinType::FullOuter, table, Some(on))
    }

    /// NATURAL JOIN
    pub fn natural_join(self, table: impl IntoTable) -> Self {
        self.join_with(JoinType::Natural, table, None)
    }

    /// NATURAL LEFT JOIN
    pub fn natural_left_join(self, table: impl IntoTable) -> Self {
        self.join_with(JoinType::NaturalLeft, table, None)
    }

    /// NATURAL RIGHT JOIN
    pub fn natural_right_join(self, table: impl IntoTable) -> Self {
        self.join_with(JoinType::NaturalRight, table, None)
    }

    /// NATURAL FULL JOIN
    pub fn natural_full_join(self, table: impl IntoTable) -> Self {
        self.join_with(JoinType::NaturalFull, table, None)
    }

    /// CROSS JOIN
    pub fn cross_join(self, table: impl IntoTable) -> Self {
        self.join_with(JoinType::Cross, table, None)
    }

    // ==================== WHERE / GROUP BY / HAVING ====================

    /// AND a predicate into the WHERE clause.
    pub fn where_clause(mut self, predicate: impl IntoExpression) -> Self {
        self.where_list = self.where_list.append(predicate);
        self
    }

    /// Drop every WHERE predicate.
    pub fn clear_where(mut self) -> Self {
        self.where_list = ExpressionList::empty();
        self
    }

    pub fn group_by<I, C>(mut self, cols: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoColumn,
    {
        self.group_by = ColumnList::new(cols);
        self
    }

    /// AND a predicate into the HAVING clause.
    pub fn having(mut self, predicate: impl IntoExpression) -> Self {
        self.having = self.having.append(predicate);
        self
    }

    /// Declare a named window for the WINDOW clause.
    pub fn window(mut self, window: Window) -> Self {
        self.windows.push(window);
        self
    }

    // ==================== ORDER BY / LIMIT / OFFSET ====================

    /// Replace the ORDER BY list.
    pub fn order_by<I, C>(mut self, cols: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoColumn,
    {
        self.order_by = ColumnList::new(cols);
        self
    }

    /// Append to the ORDER BY list.
    pub fn order_append<I, C>(mut self, cols: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoColumn,
    {
        self.order_by = self.order_by.append(cols);
        self
    }

    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    pub fn offset(mut self, n: u64) -> Self {
        self.offset = Some(n);
        self
    }

    /// Remove LIMIT and OFFSET.
    pub fn clear_limit(mut self) -> Self {
        self.limit = None;
        self.offset = None;
        self
    }

    // ==================== UNION / INTERSECT ====================

    fn compound(mut self, kind: CompoundType, rhs: Select) -> Self {
        self.compounds.push(CompoundExpression::new(kind, rhs));
        self
    }

    /// `... UNION (rhs)`
    pub fn union(self, rhs: Select) -> Self {
        self.compound(CompoundType::Union, rhs)
    }

    /// `... UNION ALL (rhs)`
    pub fn union_all(self, rhs: Select) -> Self {
        self.compound(CompoundType::UnionAll, rhs)
    }

    /// `... INTERSECT (rhs)`
    pub fn intersect(self, rhs: Select) -> Self {
        self.compound(CompoundType::Intersect, rhs)
    }

    /// `... INTERSECT ALL (rhs)`
    pub fn intersect_all(self, rhs: Select) -> Self {
        self.compound(CompoundType::IntersectAll, rhs)
    }

    // ==================== Injectors ====================

    fn append_with(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        append_with(&self.ctes, b)
    }

    fn append_select(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        b.write_literal("SELECT ")?;
        if self.distinct {
            b.write_literal("DISTINCT ")?;
        }
        self.columns.append_sql(b)
    }

    fn append_from(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        if self.from.is_empty() {
            return Err(SqlError::missing_clause("SELECT requires a FROM clause"));
        }
        b.write_literal(" FROM ")?;
        b.write_separated(self.from.iter(), ", ")
    }

    fn append_joins(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        for join in &self.joins {
            join.append_sql(b)?;
        }
        Ok(())
    }

    fn append_where(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        append_where(&self.where_list, b)
    }

    fn append_group_by(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        if self.group_by.is_empty() {
            return Ok(());
        }
        b.write_literal(" GROUP BY ")?;
        self.group_by.append_sql(b)
    }

    fn append_having(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        append_predicates(" HAVING ", &self.having, b)
    }

    fn append_windows(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        for (i, window) in self.windows.iter().enumerate() {
            b.write_literal(if i == 0 { " WINDOW " } else { ", " })?;
            window.append_definition(b)?;
        }
        Ok(())
    }

    fn append_order(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        append_order(&self.order_by, b)
    }

    fn append_limit(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        append_limit(self.limit, b)
    }

    fn append_offset(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        match self.offset {
            Some(n) => b.write_literal(&format!(" OFFSET {n}")),
            None => Ok(()),
        }
    }

    fn append_compounds(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        for compound in &self.compounds {
            compound.append_sql(b)?;
        }
        Ok(())
    }
}

impl AppendSql for Select {
    fn append_sql(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        inject(self, SELECT_INJECTORS, b)
    }

    fn to_sql(&self) -> SqlResult<BuiltQuery> {
        render(StatementKind::Select, self)
    }
}
