use super::{Aliaseable, AsExpression, Expression};
use crate::builder::{AppendSql, SqlBuilder};
use crate::error::SqlResult;
use crate::stmt::Select;
use std::sync::Arc;

/// `LATERAL (SELECT ...)`, a sub-query that may reference earlier FROM items.
#[derive(Clone, Debug)]
pub struct LateralExpression {
    query: Arc<Select>,
}

impl LateralExpression {
    pub fn new(query: Select) -> Self {
        Self {
            query: Arc::new(query),
        }
    }

    pub fn query(&self) -> &Select {
        &self.query
    }
}

impl AppendSql for LateralExpression {
    fn append_sql(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        b.write_literal("LATERAL (")?;
        self.query.append_sql(b)?;
        b.write_char(')')
    }
}

impl AsExpression for LateralExpression {
    fn to_expression(&self) -> Expression {
        Expression::Lateral(self.clone())
    }
}

impl Aliaseable for LateralExpression {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{Comparable, ident};
    use crate::stmt::select;
    use crate::value::Value;

    #[test]
    fn renders_sub_query_with_keyword() {
        let sub = select(["o.total"])
            .from("orders")
            .where_clause(ident("o.user_id").eq(ident("u.id")))
            .limit(1);
        let q = LateralExpression::new(sub).alias("last").to_sql().unwrap();
        assert_eq!(
            q.sql,
            "LATERAL (SELECT `o`.`total` FROM `orders` WHERE (`o`.`user_id` = `u`.`id`) LIMIT 1) AS `last`"
        );
        assert_eq!(q.args, Vec::<Value>::new());
    }
}
