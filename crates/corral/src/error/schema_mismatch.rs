use super::Error;

/// A raw row did not match the model's declared properties.
#[derive(Debug)]
pub(super) struct SchemaMismatchError {
    pub(super) message: String,
}

impl core::fmt::Display for SchemaMismatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "schema mismatch: {}", self.message)
    }
}

impl Error {
    /// Creates an error for a row whose shape or types do not match the
    /// model's declared properties.
    pub fn schema_mismatch(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::SchemaMismatch(SchemaMismatchError {
            message: message.into(),
        }))
    }

    /// Returns `true` if this error is a schema mismatch.
    pub fn is_schema_mismatch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::SchemaMismatch(_))
    }
}
