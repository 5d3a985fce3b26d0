use super::{Expression, IntoColumn};
use crate::builder::{AppendSql, SqlBuilder};
use crate::error::SqlResult;
use std::sync::Arc;

/// Comma separated list of column expressions.
///
/// Used for the SELECT list, GROUP BY, ORDER BY, RETURNING, window partitions
/// and INSERT column names. An empty list renders `*`; clauses that must not
/// default to `*` check [`ColumnList::is_empty`] first.
#[derive(Clone, Debug, Default)]
pub struct ColumnList {
    exprs: Arc<Vec<Expression>>,
}

impl ColumnList {
    pub fn new<I, C>(cols: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoColumn,
    {
        Self {
            exprs: Arc::new(cols.into_iter().map(IntoColumn::into_column).collect()),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn exprs(&self) -> &[Expression] {
        &self.exprs
    }

    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    /// A new list with `cols` appended.
    pub fn append<I, C>(&self, cols: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoColumn,
    {
        let mut exprs = Vec::clone(&self.exprs);
        exprs.extend(cols.into_iter().map(IntoColumn::into_column));
        Self {
            exprs: Arc::new(exprs),
        }
    }
}

impl<C: IntoColumn> FromIterator<C> for ColumnList {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl IntoIterator for ColumnList {
    type Item = Expression;
    type IntoIter = std::vec::IntoIter<Expression>;

    fn into_iter(self) -> Self::IntoIter {
        Arc::unwrap_or_clone(self.exprs).into_iter()
    }
}

impl AppendSql for ColumnList {
    fn append_sql(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        if self.exprs.is_empty() {
            return b.write_char('*');
        }
        b.write_separated(self.exprs.iter(), ", ")
    }
}
