//! Capability traits.
//!
//! Every operation an expression supports comes from one of these traits.
//! Node types opt in one trait at a time, so an operation a node cannot take
//! is a compile error rather than a render failure.

use super::{
    AliasedExpression, BooleanExpression, BooleanOperation, CastExpression, Expression,
    IntoExpression, IntoIdentifier, Literal, OrderedExpression, RangeExpression, RangeOperation,
    SqlFunction, UpdateExpression, Window, WindowFunction,
};
use crate::stmt::Select;
use crate::value::Value;
use std::sync::Arc;

/// Conversion of a node into the [`Expression`] enum.
pub trait AsExpression {
    fn to_expression(&self) -> Expression;
}

/// `expr AS alias`
pub trait Aliaseable: AsExpression {
    fn alias(&self, name: impl IntoIdentifier) -> AliasedExpression {
        AliasedExpression::new(self.to_expression(), name.into_identifier())
    }
}

/// Binary comparisons.
pub trait Comparable: AsExpression {
    fn eq(&self, rhs: impl IntoExpression) -> BooleanExpression {
        self.compare_with(BooleanOperation::Eq, rhs)
    }

    fn neq(&self, rhs: impl IntoExpression) -> BooleanExpression {
        self.compare_with(BooleanOperation::Neq, rhs)
    }

    fn gt(&self, rhs: impl IntoExpression) -> BooleanExpression {
        self.compare_with(BooleanOperation::Gt, rhs)
    }

    fn gte(&self, rhs: impl IntoExpression) -> BooleanExpression {
        self.compare_with(BooleanOperation::Gte, rhs)
    }

    fn lt(&self, rhs: impl IntoExpression) -> BooleanExpression {
        self.compare_with(BooleanOperation::Lt, rhs)
    }

    fn lte(&self, rhs: impl IntoExpression) -> BooleanExpression {
        self.compare_with(BooleanOperation::Lte, rhs)
    }

    /// Build a boolean node for any operator.
    fn compare_with(&self, op: BooleanOperation, rhs: impl IntoExpression) -> BooleanExpression {
        BooleanExpression::new(op, self.to_expression(), rhs.into_expression())
    }
}

/// `IN` / `NOT IN`.
pub trait Inable: AsExpression {
    /// `expr IN (?, ...)`. An empty list fails at render time.
    fn in_list<I, E>(&self, values: I) -> BooleanExpression
    where
        I: IntoIterator<Item = E>,
        E: IntoExpression,
    {
        BooleanExpression::new(BooleanOperation::In, self.to_expression(), value_list(values))
    }

    fn not_in<I, E>(&self, values: I) -> BooleanExpression
    where
        I: IntoIterator<Item = E>,
        E: IntoExpression,
    {
        BooleanExpression::new(
            BooleanOperation::NotIn,
            self.to_expression(),
            value_list(values),
        )
    }

    /// `expr IN (SELECT ...)`
    fn in_select(&self, query: Select) -> BooleanExpression {
        BooleanExpression::new(
            BooleanOperation::In,
            self.to_expression(),
            Expression::SubQuery(Arc::new(query)),
        )
    }

    /// `expr NOT IN (SELECT ...)`
    fn not_in_select(&self, query: Select) -> BooleanExpression {
        BooleanExpression::new(
            BooleanOperation::NotIn,
            self.to_expression(),
            Expression::SubQuery(Arc::new(query)),
        )
    }
}

fn value_list<I, E>(values: I) -> Expression
where
    I: IntoIterator<Item = E>,
    E: IntoExpression,
{
    Expression::ValueList(values.into_iter().map(IntoExpression::into_expression).collect())
}

/// `IS` / `IS NOT` against NULL, TRUE or FALSE.
pub trait Isable: AsExpression {
    /// `expr IS v`. The operand must be NULL or a boolean.
    fn is(&self, v: impl Into<Value>) -> BooleanExpression {
        BooleanExpression::new(
            BooleanOperation::Is,
            self.to_expression(),
            Expression::Value(v.into()),
        )
    }

    fn is_not(&self, v: impl Into<Value>) -> BooleanExpression {
        BooleanExpression::new(
            BooleanOperation::IsNot,
            self.to_expression(),
            Expression::Value(v.into()),
        )
    }

    fn is_null(&self) -> BooleanExpression {
        self.is(Value::Null)
    }

    fn is_not_null(&self) -> BooleanExpression {
        self.is_not(Value::Null)
    }

    fn is_true(&self) -> BooleanExpression {
        self.is(true)
    }

    fn is_not_true(&self) -> BooleanExpression {
        self.is_not(true)
    }

    fn is_false(&self) -> BooleanExpression {
        self.is(false)
    }

    fn is_not_false(&self) -> BooleanExpression {
        self.is_not(false)
    }
}

/// Pattern matching.
pub trait Likeable: AsExpression {
    fn like(&self, pattern: impl IntoExpression) -> BooleanExpression {
        self.pattern(BooleanOperation::Like, pattern)
    }

    fn not_like(&self, pattern: impl IntoExpression) -> BooleanExpression {
        self.pattern(BooleanOperation::NotLike, pattern)
    }

    fn ilike(&self, pattern: impl IntoExpression) -> BooleanExpression {
        self.pattern(BooleanOperation::ILike, pattern)
    }

    fn not_ilike(&self, pattern: impl IntoExpression) -> BooleanExpression {
        self.pattern(BooleanOperation::NotILike, pattern)
    }

    fn regexp_like(&self, pattern: impl IntoExpression) -> BooleanExpression {
        self.pattern(BooleanOperation::RegexpLike, pattern)
    }

    fn regexp_not_like(&self, pattern: impl IntoExpression) -> BooleanExpression {
        self.pattern(BooleanOperation::RegexpNotLike, pattern)
    }

    fn regexp_ilike(&self, pattern: impl IntoExpression) -> BooleanExpression {
        self.pattern(BooleanOperation::RegexpILike, pattern)
    }

    fn regexp_not_ilike(&self, pattern: impl IntoExpression) -> BooleanExpression {
        self.pattern(BooleanOperation::RegexpNotILike, pattern)
    }

    #[doc(hidden)]
    fn pattern(&self, op: BooleanOperation, pattern: impl IntoExpression) -> BooleanExpression {
        BooleanExpression::new(op, self.to_expression(), pattern.into_expression())
    }
}

/// `BETWEEN` / `NOT BETWEEN`. No ordering check is made on the bounds.
pub trait Rangeable: AsExpression {
    fn between(&self, start: impl IntoExpression, end: impl IntoExpression) -> RangeExpression {
        RangeExpression::new(
            RangeOperation::Between,
            self.to_expression(),
            start.into_expression(),
            end.into_expression(),
        )
    }

    fn not_between(
        &self,
        start: impl IntoExpression,
        end: impl IntoExpression,
    ) -> RangeExpression {
        RangeExpression::new(
            RangeOperation::NotBetween,
            self.to_expression(),
            start.into_expression(),
            end.into_expression(),
        )
    }
}

/// Sort direction for ORDER BY.
pub trait Orderable: AsExpression {
    fn asc(&self) -> OrderedExpression {
        OrderedExpression::asc(self.to_expression())
    }

    fn desc(&self) -> OrderedExpression {
        OrderedExpression::desc(self.to_expression())
    }
}

/// `DISTINCT(expr)`
pub trait Distinctable: AsExpression {
    fn distinct(&self) -> SqlFunction {
        SqlFunction::new("DISTINCT", [self.to_expression()])
    }
}

/// `CAST(expr AS type)`
pub trait Castable: AsExpression {
    fn cast(&self, sql_type: &str) -> CastExpression {
        CastExpression::new(self.to_expression(), Literal::raw(sql_type))
    }
}

/// `func(...) OVER ...`
pub trait Windowable {
    /// Attach an inline window specification.
    fn over(&self, window: Window) -> WindowFunction;

    /// Reference a window declared in the WINDOW clause.
    fn over_name(&self, name: impl IntoIdentifier) -> WindowFunction;
}

/// `col = value` in SET lists.
pub trait Updateable {
    fn set(&self, value: impl IntoExpression) -> UpdateExpression;
}
