//! Convenient imports for typical `sqlweave` usage.
//!
//! ```ignore
//! use sqlweave::prelude::*;
//! ```

pub use crate::expr::capability::{
    Aliaseable, AsExpression, Castable, Comparable, Distinctable, Inable, Isable, Likeable,
    Orderable, Rangeable, Updateable, Windowable,
};
pub use crate::{
    AppendSql, BuiltQuery, ColumnList, Expression, IntoColumn, IntoExpression, IntoIdentifier,
    IntoTable, SqlError, SqlResult, Value,
};
pub use crate::{
    and, avg, col, count, count_star, delete_from, func, ident, insert_into, lateral, lit, max,
    min, on, or, select, select_from, sum, table, update, using, val, window, window_named,
};
pub use crate::{OnConflict, UpdateExpression};
