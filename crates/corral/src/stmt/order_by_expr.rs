use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExpr {
    pub field: ExprField,
    pub direction: Direction,
}

impl OrderByExpr {
    pub fn asc(field: impl Into<ExprField>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Asc,
        }
    }

    pub fn desc(field: impl Into<ExprField>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Desc,
        }
    }
}
