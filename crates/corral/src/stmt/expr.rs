use super::*;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// AND a set of binary expressions
    And(ExprAnd),

    /// A binary operation on two expressions
    BinaryOp(ExprBinaryOp),

    /// A reference to a model field
    Field(ExprField),

    /// The expression is contained by the given list
    InList(ExprInList),

    /// A value
    Value(Value),
}

impl Expr {
    pub fn eq(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        ExprBinaryOp {
            lhs: Box::new(lhs.into()),
            op: BinaryOp::Eq,
            rhs: Box::new(rhs.into()),
        }
        .into()
    }

    pub fn ne(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        ExprBinaryOp {
            lhs: Box::new(lhs.into()),
            op: BinaryOp::Ne,
            rhs: Box::new(rhs.into()),
        }
        .into()
    }

    pub fn field(field: impl Into<ExprField>) -> Self {
        Self::Field(field.into())
    }

    pub fn field_aliased(field: impl Into<FieldId>, alias: Option<Alias>) -> Self {
        Self::Field(ExprField {
            field: field.into(),
            alias,
        })
    }

    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    pub fn list(items: Vec<Value>) -> Self {
        Self::Value(Value::List(items))
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_field(&self) -> Option<&ExprField> {
        match self {
            Self::Field(field) => Some(field),
            _ => None,
        }
    }

    /// True if no row can ever satisfy the expression.
    ///
    /// Detects membership tests against an empty list, which relation
    /// derivation produces when the source collection has no keys. A
    /// collection bound to such a query materializes empty without touching
    /// the storage adapter.
    pub fn never_matches(&self) -> bool {
        match self {
            Self::InList(expr) => matches!(
                expr.list.as_value(),
                Some(Value::List(items)) if items.is_empty()
            ),
            Self::And(expr) => expr.operands.iter().any(Self::never_matches),
            Self::Value(Value::Bool(false)) => true,
            _ => false,
        }
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Self::Value(value.into())
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::Value(value.into())
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Self::Value(value.into())
    }
}

impl From<FieldId> for Expr {
    fn from(field: FieldId) -> Self {
        Self::Field(field.into())
    }
}
