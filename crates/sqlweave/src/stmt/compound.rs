//! Compound SELECTs (`UNION`, `INTERSECT`).

use super::Select;
use crate::builder::{AppendSql, SqlBuilder};
use crate::error::SqlResult;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompoundType {
    Union,
    UnionAll,
    Intersect,
    IntersectAll,
}

impl CompoundType {
    pub fn sql(self) -> &'static str {
        match self {
            Self::Union => "UNION",
            Self::UnionAll => "UNION ALL",
            Self::Intersect => "INTERSECT",
            Self::IntersectAll => "INTERSECT ALL",
        }
    }
}

/// ` UNION (SELECT ...)`
#[derive(Clone, Debug)]
pub struct CompoundExpression {
    kind: CompoundType,
    rhs: Arc<Select>,
}

impl CompoundExpression {
    pub fn new(kind: CompoundType, rhs: Select) -> Self {
        Self {
            kind,
            rhs: Arc::new(rhs),
        }
    }

    pub fn kind(&self) -> CompoundType {
        self.kind
    }

    pub fn rhs(&self) -> &Select {
        &self.rhs
    }
}

impl AppendSql for CompoundExpression {
    fn append_sql(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        b.write_char(' ')?;
        b.write_literal(self.kind.sql())?;
        b.write_literal(" (")?;
        self.rhs.append_sql(b)?;
        b.write_char(')')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stmt::{select, select_from};

    #[test]
    fn keyword_and_parenthesized_rhs() {
        let q = CompoundExpression::new(CompoundType::IntersectAll, select(["id"]).from("b"))
            .to_sql()
            .unwrap();
        assert_eq!(q.sql, " INTERSECT ALL (SELECT `id` FROM `b`)");
    }

    #[test]
    fn rhs_errors_propagate() {
        let err = CompoundExpression::new(CompoundType::Union, select(["id"]))
            .to_sql()
            .unwrap_err();
        assert!(err.is_missing_clause());
        assert!(
            CompoundExpression::new(CompoundType::Union, select_from("a"))
                .to_sql()
                .is_ok()
        );
    }
}
