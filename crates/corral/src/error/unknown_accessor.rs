use super::Error;

/// Dynamic delegation found no matching model method or relation.
#[derive(Debug)]
pub(super) struct UnknownAccessorError {
    pub(super) model: String,
    pub(super) accessor: String,
}

impl core::fmt::Display for UnknownAccessorError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unknown accessor `{}`: neither `{}` nor its relations expose it",
            self.accessor, self.model
        )
    }
}

impl Error {
    /// Creates an error for an accessor name that resolves to neither a model
    /// method nor a registered relation.
    pub fn unknown_accessor(model: impl Into<String>, accessor: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownAccessor(UnknownAccessorError {
            model: model.into(),
            accessor: accessor.into(),
        }))
    }

    /// Returns `true` if this error is an unknown accessor error.
    pub fn is_unknown_accessor(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownAccessor(_))
    }
}
