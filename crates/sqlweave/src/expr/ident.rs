use super::{
    Aliaseable, AsExpression, BooleanExpression, BooleanOperation, Castable, Comparable,
    Distinctable, Expression, Inable, IntoExpression, Isable, Likeable, Orderable, Rangeable,
    UpdateExpression, Updateable,
};
use crate::builder::{AppendSql, SqlBuilder};
use crate::error::{SqlError, SqlResult};

/// Column part of an [`Identifier`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ColumnRef {
    #[default]
    None,
    Name(String),
    /// Unquoted `*`.
    Star,
}

/// A possibly qualified name: `col`, `table.col`, `schema.table.col`, or a
/// bare table / `schema.table` when no column is set.
#[derive(Clone, Debug, Default)]
pub struct Identifier {
    schema: Option<String>,
    table: Option<String>,
    col: ColumnRef,
}

impl Identifier {
    /// Create an empty identifier. Rendering it fails until a part is set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the schema part.
    pub fn schema(mut self, schema: &str) -> Self {
        self.schema = non_empty(schema);
        self
    }

    /// Set the table part.
    pub fn table(mut self, table: &str) -> Self {
        self.table = non_empty(table);
        self
    }

    /// Set the column part. `"*"` selects every column.
    pub fn col(mut self, col: &str) -> Self {
        self.col = match col {
            "" => ColumnRef::None,
            "*" => ColumnRef::Star,
            name => ColumnRef::Name(name.to_string()),
        };
        self
    }

    /// `table.*`
    pub fn all(mut self) -> Self {
        self.col = ColumnRef::Star;
        self
    }

    pub fn get_schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    pub fn get_table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    pub fn get_col(&self) -> &ColumnRef {
        &self.col
    }

    /// Check if a table or schema qualifies this identifier.
    pub fn is_qualified(&self) -> bool {
        self.schema.is_some() || self.table.is_some()
    }

    /// Check if no part is set.
    pub fn is_empty(&self) -> bool {
        self.schema.is_none() && self.table.is_none() && self.col == ColumnRef::None
    }

    /// Build a boolean node from an operator name such as `"gte"` or `"notin"`.
    pub fn compare(&self, op: &str, value: impl IntoExpression) -> SqlResult<BooleanExpression> {
        let op: BooleanOperation = op.parse()?;
        Ok(self.compare_with(op, value))
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

impl AppendSql for Identifier {
    fn append_sql(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        if self.is_empty() {
            return Err(SqlError::malformed("identifier has no schema, table or column"));
        }

        let mut first = true;
        for part in [&self.schema, &self.table].into_iter().flatten() {
            if !first {
                b.write_char('.')?;
            }
            b.write_quoted(part)?;
            first = false;
        }

        match &self.col {
            ColumnRef::None => {}
            ColumnRef::Name(name) => {
                if !first {
                    b.write_char('.')?;
                }
                b.write_quoted(name)?;
            }
            ColumnRef::Star => {
                if !first {
                    b.write_char('.')?;
                }
                b.write_char('*')?;
            }
        }
        Ok(())
    }
}

impl AsExpression for Identifier {
    fn to_expression(&self) -> Expression {
        Expression::Identifier(self.clone())
    }
}

impl Aliaseable for Identifier {}
impl Comparable for Identifier {}
impl Inable for Identifier {}
impl Isable for Identifier {}
impl Likeable for Identifier {}
impl Rangeable for Identifier {}
impl Orderable for Identifier {}
impl Distinctable for Identifier {}
impl Castable for Identifier {}

impl Updateable for Identifier {
    fn set(&self, value: impl IntoExpression) -> UpdateExpression {
        UpdateExpression::new(self.clone(), value.into_expression())
    }
}
