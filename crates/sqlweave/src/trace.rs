//! Render events.
//!
//! With the `tracing` feature enabled, every statement rendered through
//! [`AppendSql::to_sql`](crate::AppendSql::to_sql) emits one DEBUG event on
//! the `sqlweave.sql` target. Failed renders are returned to the caller and
//! never logged. Without the feature this module compiles to nothing.

use crate::builder::BuiltQuery;
use crate::stmt::StatementKind;

/// Longest SQL text (in bytes) included in an event.
pub const MAX_SQL_BYTES: usize = 200;

#[cfg(feature = "tracing")]
pub(crate) fn rendered(kind: StatementKind, query: &BuiltQuery) {
    let sql = if query.sql.len() > MAX_SQL_BYTES {
        format!("{}...", truncate_sql_bytes(&query.sql, MAX_SQL_BYTES))
    } else {
        query.sql.clone()
    };
    tracing::debug!(
        target: "sqlweave.sql",
        statement = %kind,
        param_count = query.args.len(),
        sql = %sql,
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn rendered(_kind: StatementKind, _query: &BuiltQuery) {}

/// Cut `sql` to at most `max_bytes`, backing off to a char boundary.
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate_sql_bytes("SELECT 1", 200), "SELECT 1");
        assert_eq!(truncate_sql_bytes("abcdef", 3), "abc");
        // 'é' is two bytes; cutting inside it backs off
        assert_eq!(truncate_sql_bytes("aé", 2), "a");
    }
}
