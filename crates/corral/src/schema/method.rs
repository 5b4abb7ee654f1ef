/// A class-level operation every model exposes.
///
/// Dynamic dispatch on a collection resolves these before relations; they
/// delegate to the bound model directly and never trigger loading. The table
/// also reserves its names: a relation accessor may not shadow one.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ModelMethod {
    /// The bound model itself
    Model,

    /// The model's name
    Name,

    /// The names of the model's fields, in declaration order
    Fields,

    /// The name of the model's identity-key field
    PrimaryKey,
}

impl ModelMethod {
    pub const NAMES: [&'static str; 4] = ["model", "name", "fields", "primary_key"];

    pub fn lookup(name: &str) -> Option<Self> {
        match name {
            "model" => Some(Self::Model),
            "name" => Some(Self::Name),
            "fields" => Some(Self::Fields),
            "primary_key" => Some(Self::PrimaryKey),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Name => "name",
            Self::Fields => "fields",
            Self::PrimaryKey => "primary_key",
        }
    }
}
