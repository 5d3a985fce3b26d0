use super::Expression;
use crate::builder::{AppendSql, SqlBuilder};
use crate::error::SqlResult;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NullSortType {
    #[default]
    None,
    First,
    Last,
}

/// `expr ASC|DESC [NULLS FIRST|LAST]`
#[derive(Clone, Debug)]
pub struct OrderedExpression {
    expr: Arc<Expression>,
    direction: SortDirection,
    nulls: NullSortType,
}

impl OrderedExpression {
    pub fn new(expr: Expression, direction: SortDirection) -> Self {
        Self {
            expr: Arc::new(expr),
            direction,
            nulls: NullSortType::None,
        }
    }

    pub fn asc(expr: Expression) -> Self {
        Self::new(expr, SortDirection::Asc)
    }

    pub fn desc(expr: Expression) -> Self {
        Self::new(expr, SortDirection::Desc)
    }

    pub fn nulls_first(mut self) -> Self {
        self.nulls = NullSortType::First;
        self
    }

    pub fn nulls_last(mut self) -> Self {
        self.nulls = NullSortType::Last;
        self
    }

    pub fn expr(&self) -> &Expression {
        &self.expr
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn nulls(&self) -> NullSortType {
        self.nulls
    }
}

impl AppendSql for OrderedExpression {
    fn append_sql(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        self.expr.append_sql(b)?;
        b.write_char(' ')?;
        b.write_literal(self.direction.sql())?;
        match self.nulls {
            NullSortType::None => Ok(()),
            NullSortType::First => b.write_literal(" NULLS FIRST"),
            NullSortType::Last => b.write_literal(" NULLS LAST"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::builder::AppendSql;
    use crate::expr::{Orderable, col};

    #[test]
    fn direction_and_nulls() {
        assert_eq!(col("a").desc().to_sql().unwrap().sql, "`a` DESC");
        assert_eq!(
            col("a").asc().nulls_last().to_sql().unwrap().sql,
            "`a` ASC NULLS LAST"
        );
        assert_eq!(
            col("a").desc().nulls_first().to_sql().unwrap().sql,
            "`a` DESC NULLS FIRST"
        );
    }
}
