use super::{Expression, IntoExpression};
use crate::builder::{AppendSql, SqlBuilder};
use crate::error::SqlResult;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionListType {
    And,
    Or,
}

impl ExpressionListType {
    pub fn inverse(self) -> Self {
        match self {
            Self::And => Self::Or,
            Self::Or => Self::And,
        }
    }

    pub fn sql(self) -> &'static str {
        match self {
            Self::And => " AND ",
            Self::Or => " OR ",
        }
    }
}

/// AND / OR list of predicates.
///
/// Empty members are skipped when rendering. A single remaining member is
/// rendered alone; several are joined and wrapped in parentheses, and every
/// member that does not bracket itself gets its own pair. An empty list
/// renders nothing.
#[derive(Clone, Debug)]
pub struct ExpressionList {
    kind: ExpressionListType,
    exprs: Arc<Vec<Expression>>,
}

impl ExpressionList {
    pub fn new<I, E>(kind: ExpressionListType, exprs: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: IntoExpression,
    {
        Self {
            kind,
            exprs: Arc::new(exprs.into_iter().map(IntoExpression::into_expression).collect()),
        }
    }

    /// An empty AND list.
    pub fn empty() -> Self {
        Self {
            kind: ExpressionListType::And,
            exprs: Arc::new(Vec::new()),
        }
    }

    pub fn kind(&self) -> ExpressionListType {
        self.kind
    }

    pub fn exprs(&self) -> &[Expression] {
        &self.exprs
    }

    /// Check if every member is empty (or there are none).
    pub fn is_empty(&self) -> bool {
        self.exprs.iter().all(Expression::is_empty)
    }

    /// A new list with `expr` appended.
    pub fn append(&self, expr: impl IntoExpression) -> Self {
        let mut exprs = Vec::with_capacity(self.exprs.len() + 1);
        exprs.extend(self.exprs.iter().cloned());
        exprs.push(expr.into_expression());
        Self {
            kind: self.kind,
            exprs: Arc::new(exprs),
        }
    }

    /// Check if the rendered text is already enclosed in parentheses.
    pub(crate) fn is_parenthesized(&self) -> bool {
        let mut members = self.exprs.iter().filter(|e| !e.is_empty());
        match (members.next(), members.next()) {
            (Some(only), None) => is_parenthesized(only),
            _ => true,
        }
    }

    /// De Morgan: flip AND/OR and invert every member.
    pub fn invert(&self) -> SqlResult<Self> {
        let exprs = self
            .exprs
            .iter()
            .map(Expression::invert)
            .collect::<SqlResult<Vec<_>>>()?;
        Ok(Self {
            kind: self.kind.inverse(),
            exprs: Arc::new(exprs),
        })
    }
}

impl Default for ExpressionList {
    fn default() -> Self {
        Self::empty()
    }
}

impl AppendSql for ExpressionList {
    fn append_sql(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        let members: Vec<&Expression> = self.exprs.iter().filter(|e| !e.is_empty()).collect();
        match members.as_slice() {
            [] => Ok(()),
            [only] => only.append_sql(b),
            _ => {
                b.write_char('(')?;
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        b.write_literal(self.kind.sql())?;
                    }
                    if is_parenthesized(member) {
                        member.append_sql(b)?;
                    } else {
                        b.write_char('(')?;
                        member.append_sql(b)?;
                        b.write_char(')')?;
                    }
                }
                b.write_char(')')
            }
        }
    }
}

fn is_parenthesized(expr: &Expression) -> bool {
    match expr {
        Expression::Boolean(_)
        | Expression::Range(_)
        | Expression::SubQuery(_)
        | Expression::ValueList(_) => true,
        Expression::List(list) => list.is_parenthesized(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{Comparable, and, col, func, lit, or};
    use crate::value::Value;

    #[test]
    fn single_member_renders_alone() {
        let q = and([col("a").eq(1)]).to_sql().unwrap();
        assert_eq!(q.sql, "(`a` = ?)");
    }

    #[test]
    fn nested_lists_keep_argument_order() {
        let q = and([
            Expression::from(col("a").eq(1)),
            Expression::from(or([col("b").eq(2), col("c").eq(3)])),
        ])
        .to_sql()
        .unwrap();
        assert_eq!(q.sql, "((`a` = ?) AND ((`b` = ?) OR (`c` = ?)))");
        assert_eq!(q.args, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
    }

    #[test]
    fn raw_members_get_their_own_parentheses() {
        let q = and([
            Expression::from(lit("`a` = ? OR `b` = ?", [1, 2])),
            Expression::from(col("c").eq(3)),
        ])
        .to_sql()
        .unwrap();
        assert_eq!(q.sql, "((`a` = ? OR `b` = ?) AND (`c` = ?))");
        assert_eq!(q.args, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
    }

    #[test]
    fn function_and_value_members_are_wrapped() {
        let q = or([
            Expression::from(func("is_admin", [col("id")])),
            Expression::from(Value::Bool(true)),
        ])
        .to_sql()
        .unwrap();
        assert_eq!(q.sql, "((is_admin(`id`)) OR (?))");
    }

    #[test]
    fn single_member_list_inside_list_is_wrapped_once() {
        let q = and([
            Expression::from(and([lit("`a` OR `b`", Vec::<Expression>::new())])),
            Expression::from(and([col("c").eq(1)])),
        ])
        .to_sql()
        .unwrap();
        assert_eq!(q.sql, "((`a` OR `b`) AND (`c` = ?))");
    }

    #[test]
    fn empty_members_are_skipped() {
        let q = and([
            Expression::from(ExpressionList::empty()),
            Expression::from(col("a").eq(1)),
            Expression::from(or(Vec::<Expression>::new())),
        ])
        .to_sql()
        .unwrap();
        assert_eq!(q.sql, "(`a` = ?)");
        assert_eq!(q.args.len(), 1);
    }

    #[test]
    fn empty_list_renders_nothing() {
        let q = or(Vec::<Expression>::new()).to_sql().unwrap();
        assert_eq!(q.sql, "");
        assert!(q.args.is_empty());
        assert!(and([ExpressionList::empty()]).is_empty());
    }

    #[test]
    fn append_leaves_original_untouched() {
        let base = and([col("a").eq(1)]);
        let more = base.append(col("b").eq(2));
        assert_eq!(base.exprs().len(), 1);
        assert_eq!(more.to_sql().unwrap().sql, "((`a` = ?) AND (`b` = ?))");
    }

    #[test]
    fn invert_applies_de_morgan() {
        let q = and([col("a").eq(1), col("b").gt(2)])
            .invert()
            .unwrap()
            .to_sql()
            .unwrap();
        assert_eq!(q.sql, "((`a` != ?) OR (`b` <= ?))");
    }

    #[test]
    fn invert_fails_on_non_boolean_member() {
        let err = and([Expression::from(col("a"))]).invert().unwrap_err();
        assert!(err.is_unsupported_inversion());
    }
}
