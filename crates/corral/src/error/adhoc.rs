use super::Error;

/// A formatted, one-off error created via the `err!` and `bail!` macros.
#[derive(Debug)]
pub(super) struct AdhocError {
    pub(super) message: String,
}

impl core::fmt::Display for AdhocError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error {
    #[doc(hidden)]
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        Error::from(super::ErrorKind::Adhoc(AdhocError {
            message: std::fmt::format(args),
        }))
    }
}
