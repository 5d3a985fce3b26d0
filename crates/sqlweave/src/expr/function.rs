use super::{
    Aliaseable, AsExpression, ColumnList, Comparable, Expression, Identifier, Inable, IntoColumn,
    IntoExpression, IntoIdentifier, Isable, Likeable, Orderable, Rangeable, Windowable,
};
use crate::builder::{AppendSql, SqlBuilder};
use crate::error::{SqlError, SqlResult};
use std::sync::Arc;

/// `NAME(arg, ...)`
#[derive(Clone, Debug)]
pub struct SqlFunction {
    name: Arc<str>,
    args: Arc<[Expression]>,
}

impl SqlFunction {
    pub fn new<I, E>(name: &str, args: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: IntoExpression,
    {
        Self {
            name: Arc::from(name),
            args: args.into_iter().map(IntoExpression::into_expression).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[Expression] {
        &self.args
    }
}

impl AppendSql for SqlFunction {
    fn append_sql(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        if self.name.is_empty() {
            return Err(SqlError::malformed("function name cannot be empty"));
        }
        b.write_literal(&self.name)?;
        b.write_char('(')?;
        b.write_separated(self.args.iter(), ", ")?;
        b.write_char(')')
    }
}

impl AsExpression for SqlFunction {
    fn to_expression(&self) -> Expression {
        Expression::Function(self.clone())
    }
}

impl Aliaseable for SqlFunction {}
impl Comparable for SqlFunction {}
impl Inable for SqlFunction {}
impl Isable for SqlFunction {}
impl Likeable for SqlFunction {}
impl Rangeable for SqlFunction {}
impl Orderable for SqlFunction {}

impl Windowable for SqlFunction {
    fn over(&self, window: Window) -> WindowFunction {
        WindowFunction::new(self.clone(), WindowRef::Inline(window))
    }

    fn over_name(&self, name: impl IntoIdentifier) -> WindowFunction {
        WindowFunction::new(self.clone(), WindowRef::Named(name.into_identifier()))
    }
}

/// A window specification.
///
/// Used inline after `OVER`, or declared by name in the WINDOW clause of a
/// SELECT.
#[derive(Clone, Debug, Default)]
pub struct Window {
    name: Option<Identifier>,
    parent: Option<Identifier>,
    partition_by: ColumnList,
    order_by: ColumnList,
}

impl Window {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl IntoIdentifier) -> Self {
        Self {
            name: Some(name.into_identifier()),
            ..Self::default()
        }
    }

    /// Build on an existing named window.
    pub fn inherit(mut self, parent: impl IntoIdentifier) -> Self {
        self.parent = Some(parent.into_identifier());
        self
    }

    pub fn partition_by<I, C>(mut self, cols: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoColumn,
    {
        self.partition_by = self.partition_by.append(cols);
        self
    }

    pub fn order_by<I, C>(mut self, cols: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoColumn,
    {
        self.order_by = self.order_by.append(cols);
        self
    }

    pub fn name(&self) -> Option<&Identifier> {
        self.name.as_ref()
    }

    pub fn parent(&self) -> Option<&Identifier> {
        self.parent.as_ref()
    }

    /// `(parent PARTITION BY ... ORDER BY ...)`
    pub(crate) fn append_spec(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        b.write_char('(')?;
        let mut sep = false;
        if let Some(parent) = &self.parent {
            parent.append_sql(b)?;
            sep = true;
        }
        if !self.partition_by.is_empty() {
            if sep {
                b.write_char(' ')?;
            }
            b.write_literal("PARTITION BY ")?;
            self.partition_by.append_sql(b)?;
            sep = true;
        }
        if !self.order_by.is_empty() {
            if sep {
                b.write_char(' ')?;
            }
            b.write_literal("ORDER BY ")?;
            self.order_by.append_sql(b)?;
        }
        b.write_char(')')
    }

    /// `name AS (...)`, as it appears in a WINDOW clause.
    pub(crate) fn append_definition(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        let name = self
            .name
            .as_ref()
            .ok_or_else(|| SqlError::malformed("window in WINDOW clause must be named"))?;
        name.append_sql(b)?;
        b.write_literal(" AS ")?;
        self.append_spec(b)
    }
}

/// How a window function refers to its window.
#[derive(Clone, Debug)]
pub enum WindowRef {
    Inline(Window),
    Named(Identifier),
}

/// `func(...) OVER (...)` or `func(...) OVER name`
#[derive(Clone, Debug)]
pub struct WindowFunction {
    func: SqlFunction,
    window: Arc<WindowRef>,
}

impl WindowFunction {
    pub fn new(func: SqlFunction, window: WindowRef) -> Self {
        Self {
            func,
            window: Arc::new(window),
        }
    }

    pub fn func(&self) -> &SqlFunction {
        &self.func
    }

    pub fn window(&self) -> &WindowRef {
        &self.window
    }
}

impl AppendSql for WindowFunction {
    fn append_sql(&self, b: &mut SqlBuilder) -> SqlResult<()> {
        self.func.append_sql(b)?;
        b.write_literal(" OVER ")?;
        match self.window.as_ref() {
            WindowRef::Inline(window) => window.append_spec(b),
            WindowRef::Named(name) => name.append_sql(b),
        }
    }
}

impl AsExpression for WindowFunction {
    fn to_expression(&self) -> Expression {
        Expression::WindowFunction(self.clone())
    }
}

impl Aliaseable for WindowFunction {}
impl Comparable for WindowFunction {}
impl Inable for WindowFunction {}
impl Isable for WindowFunction {}
impl Likeable for WindowFunction {}
impl Rangeable for WindowFunction {}
impl Orderable for WindowFunction {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{col, count_star, func, sum, window};
    use crate::value::Value;

    #[test]
    fn function_arguments_bind_in_order() {
        let q = func("COALESCE", [col("a").to_expression(), Expression::from(Value::Int(0))])
            .to_sql()
            .unwrap();
        assert_eq!(q.sql, "COALESCE(`a`, ?)");
        assert_eq!(q.args, vec![Value::Int(0)]);
    }

    #[test]
    fn empty_name_is_malformed() {
        let err = func("", Vec::<Expression>::new()).to_sql().unwrap_err();
        assert!(err.is_malformed_operand());
    }

    #[test]
    fn inline_window() {
        let q = sum("amount")
            .over(
                window()
                    .partition_by(["dept"])
                    .order_by([col("hired").desc()]),
            )
            .to_sql()
            .unwrap();
        assert_eq!(
            q.sql,
            "SUM(`amount`) OVER (PARTITION BY `dept` ORDER BY `hired` DESC)"
        );
    }

    #[test]
    fn named_window_reference() {
        let q = count_star().over_name("w").to_sql().unwrap();
        assert_eq!(q.sql, "COUNT(*) OVER `w`");
    }

    #[test]
    fn inherited_window_spec() {
        let q = count_star()
            .over(window().inherit("w").order_by(["a"]))
            .to_sql()
            .unwrap();
        assert_eq!(q.sql, "COUNT(*) OVER (`w` ORDER BY `a`)");
    }

    #[test]
    fn unnamed_window_definition_is_malformed() {
        let mut b = SqlBuilder::new();
        let err = window().append_definition(&mut b).unwrap_err();
        assert!(err.is_malformed_operand());
    }
}
