//! INSERT statement.

use super::{
    Injector, Select, StatementKind, append_returning, append_where, inject, render,
};
use crate::builder::{AppendSql, BuiltQuery, SqlBuilder};
use crate::error::{SqlError, SqlResult};
use crate::expr::{
    ColumnList, Expression, ExpressionList, IntoColumn, IntoExpression, IntoIdentifier,
    IntoTable, UpdateExpression,
};
use std::sync::Arc;

/// What to do when an inserted row conflicts.
#[derive(Clone, Debug)]
pub enum ConflictAction {
    /// DO NOTHING
    DoNothing,
    /// DO UPDATE SET ... [WHERE ...]
    DoUpdate {
        sets: Vec<UpdateExpression>,
        where_list: ExpressionList,
    },
}

/// `ON CONFLICT [(target)] DO ...`
#[derive(Clone, Debug)]
pub struct OnConflict {
    target: ColumnList,
    action: ConflictAction,
}

impl OnConflict {
    /// `ON CONFLICT DO NOTHING`
    pub fn do_nothing() -> Self {
        Self {
            target: ColumnList::empty(),
            action: ConflictAction::DoNothing,
        }
    }

    /// `ON CONFLICT DO UPDATE SET ...`
    pub fn do_update<I>(sets: I) -> Self
    where
        I: IntoIterator<Item = UpdateExpression>,
    {
        Self {
            target: ColumnList::empty(),
            action: ConflictAction::DoUpdate {
                sets: sets.into_iter().collect(),
                where_list: ExpressionList::empty(),
            },
        }
    }

    /// Conflict target columns.
    pub fn target<I, C>(mut self, cols: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoColumn,
    {
        self.target = ColumnList::new(cols);
        self
    }

    /// AND a predicate into the DO UPDATE WHERE clause. Ignored for DO NOTHING.
    pub fn where_clause(mut self, predicate: impl IntoExpression) -> Self {
        if let ConflictAction::DoUpdate { where_list, .. } = &mut self.action {
            *where_list = where_list.append(predicate);
        }
        self
    }

    pub fn action(&self) -> &ConflictAction {
        &self.action
    }

    fn append_sql(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        b.write_literal(" ON CONFLICT")?;
        if !self.target.is_empty() {
            b.write_literal(" (")?;
            self.target.append_sql(b)?;
            b.write_char(')')?;
        }
        match &self.action {
            ConflictAction::DoNothing => b.write_literal(" DO NOTHING"),
            ConflictAction::DoUpdate { sets, where_list } => {
                if sets.is_empty() {
                    return Err(SqlError::missing_clause(
                        "ON CONFLICT DO UPDATE requires at least one assignment",
                    ));
                }
                b.write_literal(" DO UPDATE SET ")?;
                b.write_separated(sets.iter(), ", ")?;
                append_where(where_list, b)
            }
        }
    }
}

/// INSERT statement with optional clause slots.
#[derive(Clone, Debug, Default)]
pub struct Insert {
    /// Target table
    table: Option<Expression>,
    /// Column names
    columns: ColumnList,
    /// VALUES tuples
    rows: Vec<Vec<Expression>>,
    /// INSERT ... SELECT source
    source: Option<Arc<Select>>,
    /// ON CONFLICT clause
    conflict: Option<OnConflict>,
    /// RETURNING columns
    returning: ColumnList,
    /// `set` was called on a multi-row insert
    set_on_many_rows: bool,
}

const INSERT_INJECTORS: &[Injector<Insert>] = &[
    Insert::append_table,
    Insert::append_columns,
    Insert::append_values,
    Insert::append_conflict,
    Insert::append_returning,
];

impl Insert {
    /// Create an empty INSERT. It cannot be rendered until a table is set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target table.
    pub fn table(mut self, table: impl IntoTable) -> Self {
        self.table = Some(table.into_table());
        self
    }

    /// Replace the column list.
    pub fn columns<I, C>(mut self, cols: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoColumn,
    {
        self.columns = ColumnList::new(cols);
        self
    }

    /// Append a VALUES tuple.
    pub fn values<I, E>(mut self, row: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: IntoExpression,
    {
        self.rows
            .push(row.into_iter().map(IntoExpression::into_expression).collect());
        self
    }

    /// Set one column of a single-row insert.
    ///
    /// Rendering fails if the insert already holds more than one VALUES row;
    /// use [`Insert::columns`] with [`Insert::values`] for those.
    pub fn set(mut self, col: impl IntoIdentifier, value: impl IntoExpression) -> Self {
        self.set_on_many_rows |= self.rows.len() > 1;
        self.columns = self.columns.append([col.into_identifier()]);
        match self.rows.first_mut() {
            Some(row) => row.push(value.into_expression()),
            None => self.rows.push(vec![value.into_expression()]),
        }
        self
    }

    /// Insert the rows produced by a SELECT instead of VALUES.
    pub fn from_select(mut self, source: Select) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    pub fn on_conflict(mut self, conflict: OnConflict) -> Self {
        self.conflict = Some(conflict);
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

    // ==================== Injectors ====================

    fn append_table(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        let table = self
            .table
            .as_ref()
            .ok_or_else(|| SqlError::missing_clause("INSERT requires a target table"))?;
        b.write_literal("INSERT INTO ")?;
        table.append_sql(b)
    }

    fn append_columns(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        if self.columns.is_empty() {
            return Ok(());
        }
        b.write_literal(" (")?;
        self.columns.append_sql(b)?;
        b.write_char(')')
    }

    fn append_values(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        match (&self.source, self.rows.is_empty()) {
            (Some(_), false) => Err(SqlError::malformed(
                "INSERT cannot have both VALUES rows and a source SELECT",
            )),
            (Some(source), true) => {
                b.write_char(' ')?;
                source.append_sql(b)
            }
            (None, true) => Err(SqlError::missing_clause(
                "INSERT requires VALUES rows or a source SELECT",
            )),
            (None, false) if self.set_on_many_rows => Err(SqlError::malformed(
                "set() only applies to single-row inserts; use columns() and values()",
            )),
            (None, false) => {
                let width = if self.columns.is_empty() {
                    self.rows.first().map_or(0, Vec::len)
                } else {
                    self.columns.len()
                };
                if width == 0 {
                    return Err(SqlError::missing_clause(
                        "INSERT requires at least one value per row",
                    ));
                }
                b.write_literal(" VALUES ")?;
                for (i, row) in self.rows.iter().enumerate() {
                    if row.len() != width {
                        return Err(SqlError::malformed(format!(
                            "VALUES row {i} has {} values, expected {width}",
                            row.len()
                        )));
                    }
                    if i > 0 {
                        b.write_literal(", ")?;
                    }
                    b.write_char('(')?;
                    b.write_separated(row.iter(), ", ")?;
                    b.write_char(')')?;
                }
                Ok(())
            }
        }
    }

    fn append_conflict(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        match &self.conflict {
            Some(conflict) => conflict.append_sql(b),
            None => Ok(()),
        }
    }

    fn append_returning(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        append_returning(&self.returning, b)
    }
}

impl AppendSql for Insert {
    fn append_sql(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        inject(self, INSERT_INJECTORS, b)
    }

    fn to_sql(&self) -> SqlResult<BuiltQuery> {
        render(StatementKind::Insert, self)
    }
}
