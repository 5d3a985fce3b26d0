use super::Expression;
use crate::builder::{AppendSql, SqlBuilder};
use crate::error::{SqlError, SqlResult};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeOperation {
    Between,
    NotBetween,
}

impl RangeOperation {
    pub fn inverse(self) -> Self {
        match self {
            Self::Between => Self::NotBetween,
            Self::NotBetween => Self::Between,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Between => "between",
            Self::NotBetween => "notbetween",
        }
    }

    pub fn sql(self) -> &'static str {
        match self {
            Self::Between => "BETWEEN",
            Self::NotBetween => "NOT BETWEEN",
        }
    }
}

impl fmt::Display for RangeOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RangeOperation {
    type Err = SqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Between, Self::NotBetween]
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SqlError::unsupported_operator(format!("unknown range operator {s:?}")))
    }
}

/// Bounds of a range, `start AND end`.
#[derive(Clone, Debug)]
pub struct RangeValue {
    pub start: Expression,
    pub end: Expression,
}

/// `(lhs BETWEEN start AND end)`
#[derive(Clone, Debug)]
pub struct RangeExpression {
    op: RangeOperation,
    lhs: Arc<Expression>,
    range: Arc<RangeValue>,
}

impl RangeExpression {
    pub fn new(op: RangeOperation, lhs: Expression, start: Expression, end: Expression) -> Self {
        Self {
            op,
            lhs: Arc::new(lhs),
            range: Arc::new(RangeValue { start, end }),
        }
    }

    pub fn op(&self) -> RangeOperation {
        self.op
    }

    pub fn lhs(&self) -> &Expression {
        &self.lhs
    }

    pub fn range(&self) -> &RangeValue {
        &self.range
    }

    pub fn invert(&self) -> Self {
        Self {
            op: self.op.inverse(),
            lhs: Arc::clone(&self.lhs),
            range: Arc::clone(&self.range),
        }
    }
}

impl AppendSql for RangeExpression {
    fn append_sql(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        b.write_char('(')?;
        self.lhs.append_sql(b)?;
        b.write_char(' ')?;
        b.write_literal(self.op.sql())?;
        b.write_char(' ')?;
        self.range.start.append_sql(b)?;
        b.write_literal(" AND ")?;
        self.range.end.append_sql(b)?;
        b.write_char(')')
    }
}
