//! Statement assemblers.
//!
//! Each statement keeps its clauses in optional slots and renders by running
//! a fixed list of clause injectors in order. An injector is a no-op when its
//! slot is absent, otherwise it writes the clause keyword and renders the
//! slot. The first failing injector aborts the render and the partially
//! written builder is dropped.
//!
//! ```ignore
//! use sqlweave::prelude::*;
//!
//! let q = update("users")
//!     .set("status", "inactive")
//!     .where_clause(col("id").eq(7))
//!     .to_sql()?;
//! assert_eq!(q.sql, "UPDATE `users` SET `status` = ? WHERE (`id` = ?)");
//! ```

mod compound;
mod cte;
mod delete;
mod insert;
mod join;
mod select;
mod update;


pub use compound::{CompoundExpression, CompoundType};
pub use cte::CommonTableExpression;
pub use delete::Delete;
pub use insert::{ConflictAction, Insert, OnConflict};
pub use join::{JoinCondition, JoinExpression, JoinType, on, using};
pub use select::Select;
pub use update::Update;

use crate::builder::{AppendSql, BuiltQuery, SqlBuilder};
use crate::error::SqlResult;
use crate::expr::{ColumnList, ExpressionList, IntoColumn, IntoTable};
use crate::trace;
use std::fmt;

/// Statement kinds, reported on render events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
}

impl StatementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::Insert => "INSERT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One clause of a statement.
pub(crate) type Injector<S> = fn(&S, &mut SqlBuilder) -> SqlResult<()>;

/// Run every injector in order, stopping at the first error.
pub(crate) fn inject<S>(stmt: &S, injectors: &[Injector<S>], b: &mut SqlBuilder) -> SqlResult<()> {
    for injector in injectors {
        injector(stmt, b)?;
    }
    Ok(())
}

/// Render a top-level statement into a fresh builder.
pub(crate) fn render<S: AppendSql>(kind: StatementKind, stmt: &S) -> SqlResult<BuiltQuery> {
    let mut b = SqlBuilder::new();
    stmt.append_sql(&mut b)?;
    let query = b.finish();
    trace::rendered(kind, &query);
    Ok(query)
}

/// ` WHERE ...`, skipped when the predicate list is empty.
pub(crate) fn append_where(predicates: &ExpressionList, b: &mut SqlBuilder) -> SqlResult<()> {
    append_predicates(" WHERE ", predicates, b)
}

pub(crate) fn append_predicates(
    keyword: &str,
    predicates: &ExpressionList,
    b: &mut SqlBuilder,
) -> SqlResult<()> {
    if predicates.is_empty() {
        return Ok(());
    }
    b.write_literal(keyword)?;
    predicates.append_sql(b)
}

/// ` ORDER BY ...`, skipped when empty.
pub(crate) fn append_order(order: &ColumnList, b: &mut SqlBuilder) -> SqlResult<()> {
    append_columns(" ORDER BY ", order, b)
}

/// ` RETURNING ...`, skipped when empty.
pub(crate) fn append_returning(cols: &ColumnList, b: &mut SqlBuilder) -> SqlResult<()> {
    append_columns(" RETURNING ", cols, b)
}

fn append_columns(keyword: &str, cols: &ColumnList, b: &mut SqlBuilder) -> SqlResult<()> {
    if cols.is_empty() {
        return Ok(());
    }
    b.write_literal(keyword)?;
    cols.append_sql(b)
}

/// ` LIMIT n`, rendered inline.
pub(crate) fn append_limit(limit: Option<u64>, b: &mut SqlBuilder) -> SqlResult<()> {
    match limit {
        Some(n) => b.write_literal(&format!(" LIMIT {n}")),
        None => Ok(()),
    }
}

// ==================== Constructors ====================

/// `SELECT cols`. Pass [`ColumnList::empty()`] for `SELECT *`.
pub fn select<I, C>(cols: I) -> Select
where
    I: IntoIterator<Item = C>,
    C: IntoColumn,
{
    Select::new().columns(cols)
}

/// `SELECT * FROM table`
pub fn select_from(table: impl IntoTable) -> Select {
    Select::new().from(table)
}

/// `INSERT INTO table`
pub fn insert_into(table: impl IntoTable) -> Insert {
    Insert::new().table(table)
}

/// `UPDATE table`
pub fn update(table: impl IntoTable) -> Update {
    Update::new().table(table)
}

/// `DELETE FROM table`
pub fn delete_from(table: impl IntoTable) -> Delete {
    Delete::new().table(table)
}
