//! The rendering sink.
//!
//! [`SqlBuilder`] owns the SQL text buffer and the argument list. Text is
//! appended in token order and arguments in placeholder order; a placeholder
//! and its argument are always written together by [`SqlBuilder::write_arg`],
//! so `args[i]` is the value for the i-th `?` in the output, no matter how
//! deeply the expression that produced it was nested.

use crate::error::SqlResult;
use crate::value::Value;
use serde::Serialize;
use std::fmt::Write;

/// Quote character for identifiers.
pub const QUOTE: char = '`';

/// Placeholder emitted for every bound argument.
pub const PLACEHOLDER: &str = "?";

/// Render contract shared by every expression and statement.
pub trait AppendSql {
    /// Render `self` into the builder, text and arguments in order.
    fn append_sql(&self, b: &mut SqlBuilder) -> SqlResult<()>;

    /// Render into a fresh builder and return the finished query.
    ///
    /// On error nothing is returned: the partially filled builder is dropped.
    fn to_sql(&self) -> SqlResult<BuiltQuery> {
        let mut b = SqlBuilder::new();
        self.append_sql(&mut b)?;
        Ok(b.finish())
    }
}

impl<T: AppendSql + ?Sized> AppendSql for &T {
    fn append_sql(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        (**self).append_sql(b)
    }
}

/// SQL text plus the arguments for its placeholders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuiltQuery {
    pub sql: String,
    pub args: Vec<Value>,
    #[serde(skip)]
    placeholders: usize,
}

impl BuiltQuery {
    /// Number of placeholders written while rendering.
    ///
    /// Counted by the builder, so a `?` inside a quoted identifier or raw
    /// literal text is not included.
    pub fn placeholder_count(&self) -> usize {
        self.placeholders
    }

    /// Split into `(sql, args)`.
    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.args)
    }
}

/// Append-only accumulator for SQL text and arguments.
///
/// A builder is created per render and consumed by [`SqlBuilder::finish`];
/// it is not meant to be shared between renders.
#[derive(Debug, Default)]
pub struct SqlBuilder {
    buf: String,
    args: Vec<Value>,
    placeholders: usize,
}

impl SqlBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append raw text verbatim.
    pub fn write_literal(&mut self, text: &str) -> SqlResult<()> {
        self.buf.write_str(text)?;
        Ok(())
    }

    /// Append a single character verbatim.
    pub fn write_char(&mut self, c: char) -> SqlResult<()> {
        self.buf.write_char(c)?;
        Ok(())
    }

    /// Append a placeholder and bind its value.
    pub fn write_arg(&mut self, value: Value) -> SqlResult<()> {
        self.write_literal(PLACEHOLDER)?;
        self.placeholders += 1;
        self.args.push(value);
        Ok(())
    }

    /// Render an expression into this builder.
    pub fn write_expression<E: AppendSql + ?Sized>(&mut self, expr: &E) -> SqlResult<()> {
        expr.append_sql(self)
    }

    /// Render items separated by `sep`; each item's text and arguments are
    /// complete before the separator of the next one is written.
    pub fn write_separated<'a, E, I>(&mut self, items: I, sep: &str) -> SqlResult<()>
    where
        E: AppendSql + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                self.write_literal(sep)?;
            }
            item.append_sql(self)?;
        }
        Ok(())
    }

    /// Append a quoted identifier part. Embedded quote characters are doubled.
    pub fn write_quoted(&mut self, name: &str) -> SqlResult<()> {
        self.buf.write_char(QUOTE)?;
        for ch in name.chars() {
            if ch == QUOTE {
                self.buf.write_char(QUOTE)?;
            }
            self.buf.write_char(ch)?;
        }
        self.buf.write_char(QUOTE)?;
        Ok(())
    }

    /// SQL text written so far.
    pub fn sql(&self) -> &str {
        &self.buf
    }

    /// Arguments collected so far.
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Check if no text has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consume the builder and return the finished query.
    pub fn finish(self) -> BuiltQuery {
        BuiltQuery {
            sql: self.buf,
            args: self.args,
            placeholders: self.placeholders,
        }
    }
}

/// Quote a single identifier part.
pub fn quote_identifier(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    out.push(QUOTE);
    for ch in name.chars() {
        if ch == QUOTE {
            out.push(QUOTE);
        }
        out.push(ch);
    }
    out.push(QUOTE);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_follow_placeholders() {
        let mut b = SqlBuilder::new();
        b.write_literal("a = ").unwrap();
        b.write_arg(Value::Int(1)).unwrap();
        b.write_literal(" AND b = ").unwrap();
        b.write_arg(Value::from("x")).unwrap();

        let q = b.finish();
        assert_eq!(q.sql, "a = ? AND b = ?");
        assert_eq!(q.args, vec![Value::Int(1), Value::Text("x".into())]);
        assert_eq!(q.placeholder_count(), 2);
    }

    #[test]
    fn placeholder_count_ignores_question_marks_in_text() {
        let mut b = SqlBuilder::new();
        b.write_quoted("a?").unwrap();
        b.write_literal(" = ").unwrap();
        b.write_arg(Value::Int(1)).unwrap();

        let q = b.finish();
        assert_eq!(q.sql, "`a?` = ?");
        assert_eq!(q.placeholder_count(), 1);
        assert_eq!(q.placeholder_count(), q.args.len());
    }

    #[test]
    fn quoting_doubles_backticks() {
        let mut b = SqlBuilder::new();
        b.write_quoted("we`ird").unwrap();
        assert_eq!(b.sql(), "`we``ird`");
        assert_eq!(quote_identifier("users"), "`users`");
    }

    #[test]
    fn empty_builder_finishes_empty() {
        let q = SqlBuilder::new().finish();
        assert_eq!(q.sql, "");
        assert!(q.args.is_empty());
        assert_eq!(q.placeholder_count(), 0);
    }
}
