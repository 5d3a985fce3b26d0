use super::{
    Aliaseable, AsExpression, Comparable, Distinctable, Expression, Identifier, Inable, Isable,
    Likeable, Literal, Orderable, Rangeable,
};
use crate::builder::{AppendSql, SqlBuilder};
use crate::error::SqlResult;
use std::sync::Arc;

/// `expr AS alias`
#[derive(Clone, Debug)]
pub struct AliasedExpression {
    expr: Arc<Expression>,
    alias: Identifier,
}

impl AliasedExpression {
    pub fn new(expr: Expression, alias: Identifier) -> Self {
        Self {
            expr: Arc::new(expr),
            alias,
        }
    }

    pub fn expr(&self) -> &Expression {
        &self.expr
    }

    pub fn alias(&self) -> &Identifier {
        &self.alias
    }
}

impl AppendSql for AliasedExpression {
    fn append_sql(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        self.expr.append_sql(b)?;
        b.write_literal(" AS ")?;
        self.alias.append_sql(b)
    }
}

/// `CAST(expr AS type)`
#[derive(Clone, Debug)]
pub struct CastExpression {
    expr: Arc<Expression>,
    sql_type: Literal,
}

impl CastExpression {
    pub fn new(expr: Expression, sql_type: Literal) -> Self {
        Self {
            expr: Arc::new(expr),
            sql_type,
        }
    }

    pub fn expr(&self) -> &Expression {
        &self.expr
    }

    pub fn sql_type(&self) -> &Literal {
        &self.sql_type
    }
}

impl AppendSql for CastExpression {
    fn append_sql(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        b.write_literal("CAST(")?;
        self.expr.append_sql(b)?;
        b.write_literal(" AS ")?;
        self.sql_type.append_sql(b)?;
        b.write_char(')')
    }
}

impl AsExpression for CastExpression {
    fn to_expression(&self) -> Expression {
        Expression::Cast(self.clone())
    }
}

impl Aliaseable for CastExpression {}
impl Comparable for CastExpression {}
impl Inable for CastExpression {}
impl Isable for CastExpression {}
impl Likeable for CastExpression {}
impl Rangeable for CastExpression {}
impl Orderable for CastExpression {}
impl Distinctable for CastExpression {}

#[cfg(test)]
mod tests {
    use crate::builder::AppendSql;
    use crate::expr::{Aliaseable, Castable, Comparable, col, count_star};

    #[test]
    fn alias_is_quoted() {
        let q = count_star().alias("n").to_sql().unwrap();
        assert_eq!(q.sql, "COUNT(*) AS `n`");
    }

    #[test]
    fn cast_wraps_expression() {
        let q = col("price").cast("INTEGER").gt(10).to_sql().unwrap();
        assert_eq!(q.sql, "(CAST(`price` AS INTEGER) > ?)");
    }

    #[test]
    fn cast_can_be_aliased() {
        let q = col("a").cast("TEXT").alias("a_text").to_sql().unwrap();
        assert_eq!(q.sql, "CAST(`a` AS TEXT) AS `a_text`");
    }
}
