use super::{Expression, Identifier, IntoIdentifier};
use crate::builder::{AppendSql, SqlBuilder};
use crate::error::SqlResult;

/// Right-hand side of an assignment.
#[derive(Clone, Debug)]
pub enum UpdateValue {
    Expression(Expression),
    /// The same column of the row proposed for insertion.
    Excluded,
}

/// A single `col = value` assignment of a SET list.
#[derive(Clone, Debug)]
pub struct UpdateExpression {
    col: Identifier,
    value: UpdateValue,
}

impl UpdateExpression {
    pub fn new(col: Identifier, value: Expression) -> Self {
        Self {
            col,
            value: UpdateValue::Expression(value),
        }
    }

    /// Assign `col` from the row proposed for insertion: `col = EXCLUDED.col`.
    pub fn excluded(col: impl IntoIdentifier) -> Self {
        Self {
            col: col.into_identifier(),
            value: UpdateValue::Excluded,
        }
    }

    pub fn col(&self) -> &Identifier {
        &self.col
    }

    pub fn value(&self) -> &UpdateValue {
        &self.value
    }
}

impl AppendSql for UpdateExpression {
    fn append_sql(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        self.col.append_sql(b)?;
        b.write_literal(" = ")?;
        match &self.value {
            UpdateValue::Expression(value) => value.append_sql(b),
            UpdateValue::Excluded => {
                b.write_literal("EXCLUDED.")?;
                self.col.append_sql(b)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{Updateable, col, lit};
    use crate::value::Value;

    #[test]
    fn assignment_binds_value() {
        let q = col("name").set("bob").to_sql().unwrap();
        assert_eq!(q.sql, "`name` = ?");
        assert_eq!(q.args, vec![Value::from("bob")]);
    }

    #[test]
    fn assignment_from_expression() {
        let q = col("n").set(lit("`n` + ?", [1])).to_sql().unwrap();
        assert_eq!(q.sql, "`n` = `n` + ?");
        assert_eq!(q.args, vec![Value::Int(1)]);
    }

    #[test]
    fn excluded_reference() {
        let q = UpdateExpression::excluded("email").to_sql().unwrap();
        assert_eq!(q.sql, "`email` = EXCLUDED.`email`");
        assert!(q.args.is_empty());
    }

    #[test]
    fn excluded_reference_with_question_mark() {
        let q = UpdateExpression::excluded(col("a?")).to_sql().unwrap();
        assert_eq!(q.sql, "`a?` = EXCLUDED.`a?`");
        assert!(q.args.is_empty());
        assert_eq!(q.placeholder_count(), 0);
    }
}
