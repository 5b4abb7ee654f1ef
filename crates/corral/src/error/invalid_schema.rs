use super::Error;

/// Schema construction failed validation.
#[derive(Debug)]
pub(super) struct InvalidSchemaError {
    pub(super) message: String,
}

impl core::fmt::Display for InvalidSchemaError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema: {}", self.message)
    }
}

impl Error {
    /// Creates an error for a schema that failed builder-time validation.
    pub fn invalid_schema(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidSchema(InvalidSchemaError {
            message: message.into(),
        }))
    }
}
