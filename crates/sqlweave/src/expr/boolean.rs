use super::Expression;
use crate::builder::{AppendSql, SqlBuilder};
use crate::error::{SqlError, SqlResult};
use crate::value::Value;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Operators of a [`BooleanExpression`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BooleanOperation {
    Eq,
    Neq,
    Is,
    IsNot,
    Gt,
    Gte,
    Lt,
    Lte,
    In,
    NotIn,
    Like,
    NotLike,
    ILike,
    NotILike,
    RegexpLike,
    RegexpNotLike,
    RegexpILike,
    RegexpNotILike,
}

impl BooleanOperation {
    pub const ALL: [BooleanOperation; 18] = [
        Self::Eq,
        Self::Neq,
        Self::Is,
        Self::IsNot,
        Self::Gt,
        Self::Gte,
        Self::Lt,
        Self::Lte,
        Self::In,
        Self::NotIn,
        Self::Like,
        Self::NotLike,
        Self::ILike,
        Self::NotILike,
        Self::RegexpLike,
        Self::RegexpNotLike,
        Self::RegexpILike,
        Self::RegexpNotILike,
    ];

    /// The logically negated operator. Applying it twice is the identity.
    pub fn inverse(self) -> Self {
        match self {
            Self::Eq => Self::Neq,
            Self::Neq => Self::Eq,
            Self::Is => Self::IsNot,
            Self::IsNot => Self::Is,
            Self::Gt => Self::Lte,
            Self::Lte => Self::Gt,
            Self::Gte => Self::Lt,
            Self::Lt => Self::Gte,
            Self::In => Self::NotIn,
            Self::NotIn => Self::In,
            Self::Like => Self::NotLike,
            Self::NotLike => Self::Like,
            Self::ILike => Self::NotILike,
            Self::NotILike => Self::ILike,
            Self::RegexpLike => Self::RegexpNotLike,
            Self::RegexpNotLike => Self::RegexpLike,
            Self::RegexpILike => Self::RegexpNotILike,
            Self::RegexpNotILike => Self::RegexpILike,
        }
    }

    /// Operator name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Neq => "neq",
            Self::Is => "is",
            Self::IsNot => "isnot",
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::Lt => "lt",
            Self::Lte => "lte",
            Self::In => "in",
            Self::NotIn => "notin",
            Self::Like => "like",
            Self::NotLike => "notlike",
            Self::ILike => "ilike",
            Self::NotILike => "notilike",
            Self::RegexpLike => "regexplike",
            Self::RegexpNotLike => "regexpnotlike",
            Self::RegexpILike => "regexpilike",
            Self::RegexpNotILike => "regexpnotilike",
        }
    }

    /// SQL operator text.
    pub fn sql(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Neq => "!=",
            Self::Is => "IS",
            Self::IsNot => "IS NOT",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::In => "IN",
            Self::NotIn => "NOT IN",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
            Self::ILike => "ILIKE",
            Self::NotILike => "NOT ILIKE",
            Self::RegexpLike => "~",
            Self::RegexpNotLike => "!~",
            Self::RegexpILike => "~*",
            Self::RegexpNotILike => "!~*",
        }
    }
}

impl fmt::Display for BooleanOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BooleanOperation {
    type Err = SqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SqlError::unsupported_operator(format!("unknown operator {s:?}")))
    }
}

/// `(lhs OP rhs)`
#[derive(Clone, Debug)]
pub struct BooleanExpression {
    op: BooleanOperation,
    lhs: Arc<Expression>,
    rhs: Arc<Expression>,
}

impl BooleanExpression {
    pub fn new(op: BooleanOperation, lhs: Expression, rhs: Expression) -> Self {
        Self {
            op,
            lhs: Arc::new(lhs),
            rhs: Arc::new(rhs),
        }
    }

    pub fn op(&self) -> BooleanOperation {
        self.op
    }

    pub fn lhs(&self) -> &Expression {
        &self.lhs
    }

    pub fn rhs(&self) -> &Expression {
        &self.rhs
    }

    /// Same operands, inverse operator.
    pub fn invert(&self) -> Self {
        Self {
            op: self.op.inverse(),
            lhs: Arc::clone(&self.lhs),
            rhs: Arc::clone(&self.rhs),
        }
    }

    fn append_rhs(&self, op: BooleanOperation, b: &mut SqlBuilder) -> SqlResult<()> {
        match (op, self.rhs.as_ref()) {
            (BooleanOperation::Is | BooleanOperation::IsNot, rhs) => match rhs {
                Expression::Value(Value::Null) => b.write_literal("NULL"),
                Expression::Value(Value::Bool(true)) => b.write_literal("TRUE"),
                Expression::Value(Value::Bool(false)) => b.write_literal("FALSE"),
                other => Err(SqlError::malformed(format!(
                    "{} operand must be NULL, TRUE or FALSE, got {}",
                    op.sql(),
                    other.kind_name()
                ))),
            },
            (BooleanOperation::In | BooleanOperation::NotIn, Expression::Value(v)) => {
                b.write_char('(')?;
                b.write_arg(v.clone())?;
                b.write_char(')')
            }
            (_, rhs) => rhs.append_sql(b),
        }
    }
}

impl AppendSql for BooleanExpression {
    fn append_sql(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        // `= NULL` never matches; compare against NULL with IS instead.
        let op = match (self.op, self.rhs.as_ref()) {
            (BooleanOperation::Eq, Expression::Value(Value::Null)) => BooleanOperation::Is,
            (BooleanOperation::Neq, Expression::Value(Value::Null)) => BooleanOperation::IsNot,
            (op, _) => op,
        };

        b.write_char('(')?;
        self.lhs.append_sql(b)?;
        b.write_char(' ')?;
        b.write_literal(op.sql())?;
        b.write_char(' ')?;
        self.append_rhs(op, b)?;
        b.write_char(')')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{Comparable, Inable, Isable, Likeable, col};

    #[test]
    fn inverse_is_an_involution() {
        for op in BooleanOperation::ALL {
            assert_ne!(op.inverse(), op);
            assert_eq!(op.inverse().inverse(), op);
        }
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for op in BooleanOperation::ALL {
            assert_eq!(op.to_string().parse::<BooleanOperation>().unwrap(), op);
        }
        assert!("between".parse::<BooleanOperation>().is_err());
    }

    #[test]
    fn is_operands_render_as_keywords() {
        assert_eq!(col("a").is_null().to_sql().unwrap().sql, "(`a` IS NULL)");
        assert_eq!(col("a").is_not_true().to_sql().unwrap().sql, "(`a` IS NOT TRUE)");
        assert_eq!(col("a").is_false().to_sql().unwrap().sql, "(`a` IS FALSE)");

        let err = col("a").is(5).to_sql().unwrap_err();
        assert!(err.is_malformed_operand());
    }

    #[test]
    fn eq_null_renders_is_null() {
        let q = col("a").eq(None::<i32>).to_sql().unwrap();
        assert_eq!(q.sql, "(`a` IS NULL)");
        assert!(q.args.is_empty());

        let q = col("a").neq(Value::Null).to_sql().unwrap();
        assert_eq!(q.sql, "(`a` IS NOT NULL)");
    }

    #[test]
    fn in_list_renders_placeholders() {
        let q = col("a").in_list([1, 2, 3]).to_sql().unwrap();
        assert_eq!(q.sql, "(`a` IN (?,?,?))");
        assert_eq!(q.args, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);

        let q = col("a").not_in(["x"]).to_sql().unwrap();
        assert_eq!(q.sql, "(`a` NOT IN (?))");
    }

    #[test]
    fn empty_in_list_is_malformed() {
        let err = col("a").in_list(Vec::<i32>::new()).to_sql().unwrap_err();
        assert!(err.is_malformed_operand());
    }

    #[test]
    fn single_value_in_is_parenthesized() {
        let q = col("a").compare_with(BooleanOperation::In, 7).to_sql().unwrap();
        assert_eq!(q.sql, "(`a` IN (?))");
    }

    #[test]
    fn pattern_operators() {
        assert_eq!(
            col("name").like("a%").to_sql().unwrap().sql,
            "(`name` LIKE ?)"
        );
        assert_eq!(
            col("name").regexp_not_ilike("^a").to_sql().unwrap().sql,
            "(`name` !~* ?)"
        );
    }

    #[test]
    fn invert_keeps_operands() {
        let q = col("a").gt(1).invert().to_sql().unwrap();
        assert_eq!(q.sql, "(`a` <= ?)");
        assert_eq!(q.args, vec![Value::Int(1)]);
    }
}
