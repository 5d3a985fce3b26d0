//! Expression tree.
//!
//! [`Expression`] is a closed enum over every node kind. Nodes are immutable:
//! every modifier returns a new node, and recursive children sit behind `Arc`
//! so a fragment built once can be cloned cheaply into any number of
//! statements.
//!
//! Which operations a node supports is decided by the capability traits in
//! [`capability`] each node type opts into.
//!
//! ```ignore
//! use sqlweave::prelude::*;
//!
//! let adults = col("age").gte(18);
//! let q = select([col("name")]).from("users").where_clause(adults).to_sql()?;
//! assert_eq!(q.sql, "SELECT `name` FROM `users` WHERE (`age` >= ?)");
//! ```

mod alias;
pub mod capability;
mod boolean;
mod columns;
mod function;
mod ident;
mod lateral;
mod list;
mod literal;
mod ordered;
mod range;
mod update;

#[cfg(test)]
mod tests;

pub use alias::{AliasedExpression, CastExpression};
pub use boolean::{BooleanExpression, BooleanOperation};
pub use capability::{
    Aliaseable, AsExpression, Castable, Comparable, Distinctable, Inable, Isable, Likeable,
    Orderable, Rangeable, Updateable, Windowable,
};
pub use columns::ColumnList;
pub use function::{SqlFunction, Window, WindowFunction, WindowRef};
pub use ident::{ColumnRef, Identifier};
pub use lateral::LateralExpression;
pub use list::{ExpressionList, ExpressionListType};
pub use literal::Literal;
pub use ordered::{NullSortType, OrderedExpression, SortDirection};
pub use range::{RangeExpression, RangeOperation, RangeValue};
pub use update::{UpdateExpression, UpdateValue};

use crate::builder::{AppendSql, SqlBuilder};
use crate::error::{SqlError, SqlResult};
use crate::stmt::Select;
use crate::value::Value;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

/// A node of the expression tree.
#[derive(Clone, Debug)]
pub enum Expression {
    Identifier(Identifier),
    Literal(Literal),
    /// A single bound argument.
    Value(Value),
    /// Parenthesized list of values, used by IN / NOT IN.
    ValueList(Vec<Expression>),
    Boolean(BooleanExpression),
    List(ExpressionList),
    Range(RangeExpression),
    Ordered(OrderedExpression),
    Aliased(AliasedExpression),
    Cast(CastExpression),
    Function(SqlFunction),
    WindowFunction(WindowFunction),
    Columns(ColumnList),
    /// A nested SELECT, rendered in parentheses.
    SubQuery(Arc<Select>),
    Lateral(LateralExpression),
}

impl Expression {
    /// Short node name, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expression::Identifier(_) => "identifier",
            Expression::Literal(_) => "literal",
            Expression::Value(_) => "value",
            Expression::ValueList(_) => "value list",
            Expression::Boolean(_) => "boolean expression",
            Expression::List(_) => "expression list",
            Expression::Range(_) => "range expression",
            Expression::Ordered(_) => "ordered expression",
            Expression::Aliased(_) => "aliased expression",
            Expression::Cast(_) => "cast expression",
            Expression::Function(_) => "function",
            Expression::WindowFunction(_) => "window function",
            Expression::Columns(_) => "column list",
            Expression::SubQuery(_) => "sub-query",
            Expression::Lateral(_) => "lateral sub-query",
        }
    }

    /// Check if this node renders to nothing.
    ///
    /// A list is empty when every member is empty; a literal is empty when its
    /// text is blank and it binds nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            Expression::List(list) => list.is_empty(),
            Expression::Literal(literal) => literal.is_empty(),
            _ => false,
        }
    }

    /// Logically negate this node without wrapping it in `NOT (...)`.
    ///
    /// Boolean and range nodes flip their operator; AND/OR lists flip their
    /// type and invert every member. Every other node has no inverse.
    pub fn invert(&self) -> SqlResult<Expression> {
        match self {
            Expression::Boolean(b) => Ok(Expression::Boolean(b.invert())),
            Expression::Range(r) => Ok(Expression::Range(r.invert())),
            Expression::List(l) => Ok(Expression::List(l.invert()?)),
            other => Err(SqlError::unsupported_inversion(format!(
                "{} has no inverse",
                other.kind_name()
            ))),
        }
    }
}

impl AppendSql for Expression {
    fn append_sql(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        match self {
            Expression::Identifier(e) => e.append_sql(b),
            Expression::Literal(e) => e.append_sql(b),
            Expression::Value(v) => b.write_arg(v.clone()),
            Expression::ValueList(values) => {
                if values.is_empty() {
                    return Err(SqlError::malformed("value list cannot be empty"));
                }
                b.write_char('(')?;
                b.write_separated(values.iter(), ",")?;
                b.write_char(')')
            }
            Expression::Boolean(e) => e.append_sql(b),
            Expression::List(e) => e.append_sql(b),
            Expression::Range(e) => e.append_sql(b),
            Expression::Ordered(e) => e.append_sql(b),
            Expression::Aliased(e) => e.append_sql(b),
            Expression::Cast(e) => e.append_sql(b),
            Expression::Function(e) => e.append_sql(b),
            Expression::WindowFunction(e) => e.append_sql(b),
            Expression::Columns(e) => e.append_sql(b),
            Expression::SubQuery(select) => {
                b.write_char('(')?;
                select.append_sql(b)?;
                b.write_char(')')
            }
            Expression::Lateral(e) => e.append_sql(b),
        }
    }
}

// ==================== Conversions ====================

/// Convert an input into an [`Expression`] operand.
///
/// Primitive values become bound arguments; expression nodes are taken as-is.
pub trait IntoExpression {
    fn into_expression(self) -> Expression;
}

impl IntoExpression for Expression {
    fn into_expression(self) -> Expression {
        self
    }
}

impl IntoExpression for Value {
    fn into_expression(self) -> Expression {
        Expression::Value(self)
    }
}

impl From<Value> for Expression {
    fn from(v: Value) -> Self {
        Expression::Value(v)
    }
}

impl<T: Into<Value>> IntoExpression for Option<T> {
    fn into_expression(self) -> Expression {
        Expression::Value(Value::from(self))
    }
}

impl IntoExpression for &str {
    fn into_expression(self) -> Expression {
        Expression::Value(Value::from(self))
    }
}

impl IntoExpression for Select {
    fn into_expression(self) -> Expression {
        Expression::SubQuery(Arc::new(self))
    }
}

macro_rules! impl_value_operand {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntoExpression for $t {
                fn into_expression(self) -> Expression {
                    Expression::Value(Value::from(self))
                }
            }
        )*
    };
}

impl_value_operand!(
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    u64,
    usize,
    f32,
    f64,
    bool,
    String,
    Vec<u8>,
    serde_json::Value,
    Uuid,
    NaiveDate,
    NaiveDateTime,
    DateTime<Utc>,
);

#[cfg(feature = "decimal")]
impl_value_operand!(rust_decimal::Decimal);

macro_rules! impl_node_conversions {
    ($($t:ident),* $(,)?) => {
        $(
            impl From<$t> for Expression {
                fn from(e: $t) -> Self {
                    Expression::$t(e)
                }
            }

            impl IntoExpression for $t {
                fn into_expression(self) -> Expression {
                    Expression::$t(self)
                }
            }
        )*
    };
}

impl_node_conversions!(Identifier, Literal);

macro_rules! impl_node_conversions_as {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$t> for Expression {
                fn from(e: $t) -> Self {
                    Expression::$variant(e)
                }
            }

            impl IntoExpression for $t {
                fn into_expression(self) -> Expression {
                    Expression::$variant(self)
                }
            }
        )*
    };
}

impl_node_conversions_as!(
    BooleanExpression => Boolean,
    ExpressionList => List,
    RangeExpression => Range,
    OrderedExpression => Ordered,
    AliasedExpression => Aliased,
    CastExpression => Cast,
    SqlFunction => Function,
    WindowFunction => WindowFunction,
    ColumnList => Columns,
    LateralExpression => Lateral,
);

/// Convert an input into a column position expression (SELECT list, GROUP BY,
/// ORDER BY, RETURNING).
///
/// Strings are parsed as identifiers (`"a"`, `"t.a"`, `"s.t.a"`, `"t.*"`)
/// rather than bound as text values.
pub trait IntoColumn {
    fn into_column(self) -> Expression;
}

impl IntoColumn for &str {
    fn into_column(self) -> Expression {
        Expression::Identifier(ident(self))
    }
}

impl IntoColumn for String {
    fn into_column(self) -> Expression {
        Expression::Identifier(ident(&self))
    }
}

macro_rules! impl_into_column {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntoColumn for $t {
                fn into_column(self) -> Expression {
                    self.into_expression()
                }
            }
        )*
    };
}

impl_into_column!(
    Expression,
    Identifier,
    Literal,
    BooleanExpression,
    ExpressionList,
    RangeExpression,
    OrderedExpression,
    AliasedExpression,
    CastExpression,
    SqlFunction,
    WindowFunction,
    ColumnList,
    Select,
);

/// Convert an input into a table source (FROM, JOIN, INSERT/UPDATE/DELETE
/// target).
///
/// Strings are parsed as `"table"` or `"schema.table"`.
pub trait IntoTable {
    fn into_table(self) -> Expression;
}

impl IntoTable for &str {
    fn into_table(self) -> Expression {
        Expression::Identifier(parse_table(self))
    }
}

impl IntoTable for String {
    fn into_table(self) -> Expression {
        Expression::Identifier(parse_table(&self))
    }
}

impl IntoTable for Identifier {
    fn into_table(self) -> Expression {
        Expression::Identifier(self)
    }
}

impl IntoTable for AliasedExpression {
    fn into_table(self) -> Expression {
        Expression::Aliased(self)
    }
}

impl IntoTable for Literal {
    fn into_table(self) -> Expression {
        Expression::Literal(self)
    }
}

impl IntoTable for LateralExpression {
    fn into_table(self) -> Expression {
        Expression::Lateral(self)
    }
}

impl IntoTable for Select {
    fn into_table(self) -> Expression {
        Expression::SubQuery(Arc::new(self))
    }
}

impl IntoTable for Expression {
    fn into_table(self) -> Expression {
        self
    }
}

/// Convert an input into an [`Identifier`].
///
/// Strings are parsed with the same dotted rules as [`ident`].
pub trait IntoIdentifier {
    fn into_identifier(self) -> Identifier;
}

impl IntoIdentifier for Identifier {
    fn into_identifier(self) -> Identifier {
        self
    }
}

impl IntoIdentifier for &Identifier {
    fn into_identifier(self) -> Identifier {
        self.clone()
    }
}

impl IntoIdentifier for &str {
    fn into_identifier(self) -> Identifier {
        ident(self)
    }
}

impl IntoIdentifier for String {
    fn into_identifier(self) -> Identifier {
        ident(&self)
    }
}

fn parse_table(s: &str) -> Identifier {
    match s.split_once('.') {
        Some((schema, name)) => Identifier::new().schema(schema).table(name),
        None => Identifier::new().table(s),
    }
}

// ==================== Constructors ====================

/// A column identifier. `"*"` is the unquoted star.
pub fn col(name: &str) -> Identifier {
    Identifier::new().col(name)
}

/// A table identifier.
pub fn table(name: &str) -> Identifier {
    Identifier::new().table(name)
}

/// Parse a dotted identifier: `"col"`, `"table.col"` or `"schema.table.col"`.
///
/// Anything past the third dot stays part of the column name.
pub fn ident(path: &str) -> Identifier {
    let mut parts = path.splitn(3, '.');
    let first = parts.next().unwrap_or_default();
    match (parts.next(), parts.next()) {
        (None, _) => Identifier::new().col(first),
        (Some(second), None) => Identifier::new().table(first).col(second),
        (Some(second), Some(third)) => Identifier::new().schema(first).table(second).col(third),
    }
}

/// A raw SQL fragment with `?` placeholders bound to `args`.
pub fn lit<I, E>(sql: &str, args: I) -> Literal
where
    I: IntoIterator<Item = E>,
    E: IntoExpression,
{
    Literal::new(sql, args)
}

/// A bound argument.
pub fn val(v: impl Into<Value>) -> Expression {
    Expression::Value(v.into())
}

/// An AND list.
pub fn and<I, E>(exprs: I) -> ExpressionList
where
    I: IntoIterator<Item = E>,
    E: IntoExpression,
{
    ExpressionList::new(ExpressionListType::And, exprs)
}

/// An OR list.
pub fn or<I, E>(exprs: I) -> ExpressionList
where
    I: IntoIterator<Item = E>,
    E: IntoExpression,
{
    ExpressionList::new(ExpressionListType::Or, exprs)
}

/// `LATERAL (query)`, for FROM and JOIN sources.
pub fn lateral(query: Select) -> LateralExpression {
    LateralExpression::new(query)
}

/// A SQL function call.
pub fn func<I, E>(name: &str, args: I) -> SqlFunction
where
    I: IntoIterator<Item = E>,
    E: IntoExpression,
{
    SqlFunction::new(name, args)
}

/// `COUNT(expr)`
pub fn count(expr: impl IntoColumn) -> SqlFunction {
    SqlFunction::new("COUNT", [expr.into_column()])
}

/// `COUNT(*)`
pub fn count_star() -> SqlFunction {
    SqlFunction::new("COUNT", [Literal::raw("*")])
}

/// `SUM(expr)`
pub fn sum(expr: impl IntoColumn) -> SqlFunction {
    SqlFunction::new("SUM", [expr.into_column()])
}

/// `MIN(expr)`
pub fn min(expr: impl IntoColumn) -> SqlFunction {
    SqlFunction::new("MIN", [expr.into_column()])
}

/// `MAX(expr)`
pub fn max(expr: impl IntoColumn) -> SqlFunction {
    SqlFunction::new("MAX", [expr.into_column()])
}

/// `AVG(expr)`
pub fn avg(expr: impl IntoColumn) -> SqlFunction {
    SqlFunction::new("AVG", [expr.into_column()])
}

/// An anonymous inline window specification.
pub fn window() -> Window {
    Window::new()
}

/// A named window, for the WINDOW clause.
pub fn window_named(name: &str) -> Window {
    Window::named(name)
}
