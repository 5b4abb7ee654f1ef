#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn is_asc(&self) -> bool {
        matches!(self, Self::Asc)
    }

    pub fn is_desc(&self) -> bool {
        matches!(self, Self::Desc)
    }
}
