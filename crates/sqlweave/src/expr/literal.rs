use super::{
    Aliaseable, AsExpression, Comparable, Expression, Inable, IntoExpression, Isable, Likeable,
    Orderable, Rangeable,
};
use crate::builder::{AppendSql, PLACEHOLDER, SqlBuilder};
use crate::error::{SqlError, SqlResult};
use std::sync::Arc;

/// Raw SQL text, written verbatim.
///
/// Every `?` in the text is replaced by the matching argument: values become
/// bound placeholders, other expressions are rendered in place. Nothing is
/// escaped.
#[derive(Clone, Debug)]
pub struct Literal {
    sql: Arc<str>,
    args: Arc<[Expression]>,
}

impl Literal {
    pub fn new<I, E>(sql: &str, args: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: IntoExpression,
    {
        Self {
            sql: Arc::from(sql),
            args: args.into_iter().map(IntoExpression::into_expression).collect(),
        }
    }

    /// A literal with no arguments.
    pub fn raw(sql: &str) -> Self {
        Self {
            sql: Arc::from(sql),
            args: Arc::from([]),
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn args(&self) -> &[Expression] {
        &self.args
    }

    /// Check if the text is blank and there is nothing to bind.
    pub fn is_empty(&self) -> bool {
        self.sql.trim().is_empty() && self.args.is_empty()
    }
}

impl AppendSql for Literal {
    fn append_sql(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        let expected = self.sql.matches(PLACEHOLDER).count();
        if expected != self.args.len() {
            return Err(SqlError::malformed(format!(
                "literal {:?} has {expected} placeholders but {} arguments",
                self.sql,
                self.args.len()
            )));
        }

        let mut parts = self.sql.split(PLACEHOLDER);
        if let Some(head) = parts.next() {
            b.write_literal(head)?;
        }
        for (part, arg) in parts.zip(self.args.iter()) {
            arg.append_sql(b)?;
            b.write_literal(part)?;
        }
        Ok(())
    }
}

impl AsExpression for Literal {
    fn to_expression(&self) -> Expression {
        Expression::Literal(self.clone())
    }
}

impl Aliaseable for Literal {}
impl Comparable for Literal {}
impl Inable for Literal {}
impl Isable for Literal {}
impl Likeable for Literal {}
impl Rangeable for Literal {}
impl Orderable for Literal {}
