use std::fmt;

/// Primitive column types a model property may declare.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Type {
    Bool,
    I64,
    String,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("Bool"),
            Self::I64 => f.write_str("I64"),
            Self::String => f.write_str("String"),
        }
    }
}
