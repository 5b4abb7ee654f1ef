#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOp {
    Eq,
    Ne,
}

impl BinaryOp {
    pub fn is_eq(&self) -> bool {
        matches!(self, Self::Eq)
    }

    pub fn is_ne(&self) -> bool {
        matches!(self, Self::Ne)
    }
}
