use crate::builder::{AppendSql, SqlBuilder};
use crate::error::{SqlError, SqlResult};
use crate::expr::{
    ColumnList, Expression, ExpressionList, ExpressionListType, IntoColumn, IntoExpression,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinType {
    Inner,
    FullOuter,
    RightOuter,
    LeftOuter,
    Full,
    Right,
    Left,
    Natural,
    NaturalLeft,
    NaturalRight,
    NaturalFull,
    Cross,
}

impl JoinType {
    pub fn sql(self) -> &'static str {
        match self {
            Self::Inner => "INNER JOIN",
            Self::FullOuter => "FULL OUTER JOIN",
            Self::RightOuter => "RIGHT OUTER JOIN",
            Self::LeftOuter => "LEFT OUTER JOIN",
            Self::Full => "FULL JOIN",
            Self::Right => "RIGHT JOIN",
            Self::Left => "LEFT JOIN",
            Self::Natural => "NATURAL JOIN",
            Self::NaturalLeft => "NATURAL LEFT JOIN",
            Self::NaturalRight => "NATURAL RIGHT JOIN",
            Self::NaturalFull => "NATURAL FULL JOIN",
            Self::Cross => "CROSS JOIN",
        }
    }

    /// Check if this join requires an ON or USING condition.
    pub fn is_conditioned(self) -> bool {
        !matches!(
            self,
            Self::Natural | Self::NaturalLeft | Self::NaturalRight | Self::NaturalFull | Self::Cross
        )
    }
}

#[derive(Clone, Debug)]
pub enum JoinCondition {
    On(ExpressionList),
    Using(ColumnList),
}

impl JoinCondition {
    fn is_empty(&self) -> bool {
        match self {
            Self::On(list) => list.is_empty(),
            Self::Using(cols) => cols.is_empty(),
        }
    }
}

/// `ON (...)`; several predicates are ANDed.
pub fn on<I, E>(predicates: I) -> JoinCondition
where
    I: IntoIterator<Item = E>,
    E: IntoExpression,
{
    JoinCondition::On(ExpressionList::new(ExpressionListType::And, predicates))
}

/// `USING (col, ...)`
pub fn using<I, C>(cols: I) -> JoinCondition
where
    I: IntoIterator<Item = C>,
    C: IntoColumn,
{
    JoinCondition::Using(ColumnList::new(cols))
}

#[derive(Clone, Debug)]
pub struct JoinExpression {
    kind: JoinType,
    table: Expression,
    condition: Option<JoinCondition>,
}

impl JoinExpression {
    pub fn new(kind: JoinType, table: Expression, condition: Option<JoinCondition>) -> Self {
        Self {
            kind,
            table,
            condition,
        }
    }

    pub fn kind(&self) -> JoinType {
        self.kind
    }

    pub fn table(&self) -> &Expression {
        &self.table
    }

    pub fn condition(&self) -> Option<&JoinCondition> {
        self.condition.as_ref()
    }
}

impl AppendSql for JoinExpression {
    fn append_sql(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        let condition = self.condition.as_ref().filter(|c| !c.is_empty());
        match (self.kind.is_conditioned(), condition) {
            (true, None) => {
                return Err(SqlError::missing_clause(format!(
                    "{} requires an ON or USING condition",
                    self.kind.sql()
                )));
            }
            (false, Some(_)) => {
                return Err(SqlError::unsupported_operator(format!(
                    "{} does not take an ON or USING condition",
                    self.kind.sql()
                )));
            }
            _ => {}
        }

        b.write_char(' ')?;
        b.write_literal(self.kind.sql())?;
        b.write_char(' ')?;
        self.table.append_sql(b)?;
        match condition {
            Some(JoinCondition::On(predicates)) => {
                b.write_literal(" ON ")?;
                predicates.append_sql(b)
            }
            Some(JoinCondition::Using(cols)) => {
                b.write_literal(" USING (")?;
                cols.append_sql(b)?;
                b.write_char(')')
            }
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{Comparable, ident, table};

    fn join(kind: JoinType, condition: Option<JoinCondition>) -> JoinExpression {
        JoinExpression::new(kind, table("orders").into_expression(), condition)
    }

    #[test]
    fn on_condition() {
        let q = join(
            JoinType::Inner,
            Some(on([ident("orders.user_id").eq(ident("users.id"))])),
        )
        .to_sql()
        .unwrap();
        assert_eq!(
            q.sql,
            " INNER JOIN `orders` ON (`orders`.`user_id` = `users`.`id`)"
        );
    }

    #[test]
    fn using_condition() {
        let q = join(JoinType::Left, Some(using(["user_id", "tenant_id"])))
            .to_sql()
            .unwrap();
        assert_eq!(q.sql, " LEFT JOIN `orders` USING (`user_id`, `tenant_id`)");
    }

    #[test]
    fn conditioned_join_without_condition_fails() {
        let err = join(JoinType::FullOuter, None).to_sql().unwrap_err();
        assert!(err.is_missing_clause());

        let err = join(JoinType::Inner, Some(on(Vec::<Expression>::new())))
            .to_sql()
            .unwrap_err();
        assert!(err.is_missing_clause());
    }

    #[test]
    fn natural_and_cross_joins_reject_conditions() {
        assert_eq!(
            join(JoinType::NaturalLeft, None).to_sql().unwrap().sql,
            " NATURAL LEFT JOIN `orders`"
        );
        let err = join(JoinType::Cross, Some(using(["id"])))
            .to_sql()
            .unwrap_err();
        assert!(err.is_unsupported_operator());
    }
}
