//! # sqlweave
//!
//! Composable SQL expression trees rendered to parameterized SQL text.
//!
//! ## Features
//!
//! - **Typed expression nodes**: columns, literals, predicates, ranges, functions and windows
//! - **Capability traits**: each node only offers the operations it supports
//! - **Positional arguments**: values render as `?` and are collected in placeholder order
//! - **Fixed clause order**: statements render through an ordered list of clause injectors
//! - **Errors before SQL**: a missing clause or a bad operand fails the whole render
//!
//! Nothing here talks to a database. A render hands back `(sql, args)` for the
//! caller to execute.
//!
//! ```ignore
//! use sqlweave::prelude::*;
//!
//! let q = select([col("a")])
//!     .from("users")
//!     .where_clause(and([col("a").eq(1), col("b").in_list(["x", "y"])]))
//!     .order_by([col("a").desc()])
//!     .limit(10)
//!     .to_sql()?;
//!
//! assert_eq!(
//!     q.sql,
//!     "SELECT `a` FROM `users` WHERE ((`a` = ?) AND (`b` IN (?,?))) ORDER BY `a` DESC LIMIT 10"
//! );
//! assert_eq!(q.args.len(), 3);
//! ```

pub mod builder;
pub mod error;
pub mod expr;
pub mod prelude;
pub mod stmt;
mod trace;
pub mod value;

pub use builder::{AppendSql, BuiltQuery, SqlBuilder, quote_identifier};
pub use error::{ErrorKind, SqlError, SqlResult};
pub use expr::{
    AliasedExpression, BooleanExpression, BooleanOperation, CastExpression, ColumnList,
    ColumnRef, Expression, ExpressionList, ExpressionListType, Identifier, IntoColumn,
    IntoExpression, IntoIdentifier, IntoTable, LateralExpression, Literal, NullSortType,
    OrderedExpression, RangeExpression, RangeOperation, RangeValue, SortDirection, SqlFunction,
    UpdateExpression, UpdateValue, Window, WindowFunction, WindowRef,
};
pub use expr::{
    and, avg, col, count, count_star, func, ident, lateral, lit, max, min, or, sum, table, val,
    window, window_named,
};
pub use stmt::{
    CommonTableExpression, CompoundExpression, CompoundType, ConflictAction, Delete, Insert,
    JoinCondition, JoinExpression, JoinType, OnConflict, Select, StatementKind, Update,
    delete_from, insert_into, on, select, select_from, update, using,
};
pub use trace::MAX_SQL_BYTES;
pub use value::Value;
