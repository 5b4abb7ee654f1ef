use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct ExprAnd {
    pub operands: Vec<Expr>,
}

impl Expr {
    pub fn and(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        let lhs = lhs.into();
        let rhs = rhs.into();

        match lhs {
            Self::And(mut lhs) => {
                lhs.operands.push(rhs);
                lhs.into()
            }
            lhs => ExprAnd {
                operands: vec![lhs, rhs],
            }
            .into(),
        }
    }

    pub fn and_from_vec(operands: Vec<Self>) -> Self {
        match operands.len() {
            1 => operands.into_iter().next().unwrap(),
            _ => ExprAnd { operands }.into(),
        }
    }
}

impl From<ExprAnd> for Expr {
    fn from(value: ExprAnd) -> Self {
        Self::And(value)
    }
}
