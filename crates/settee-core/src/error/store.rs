use super::Error;

/// A store-reported error that must reach the caller.
///
/// Most store errors are folded into "not ok" write outcomes or empty reads.
/// This kind is used where that is not possible, such as creating the
/// database or provisioning design documents.
#[derive(Debug)]
pub(super) struct StoreError {
    error: Box<str>,
    reason: Option<Box<str>>,
}

impl std::error::Error for StoreError {}

impl core::fmt::Display for StoreError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.reason {
            Some(reason) => write!(f, "store error: {} ({})", self.error, reason),
            None => write!(f, "store error: {}", self.error),
        }
    }
}

impl Error {
    /// Creates a store error from the `error` and `reason` members of a response.
    pub fn store(error: impl Into<String>, reason: Option<String>) -> Error {
        Error::from(super::ErrorKind::Store(StoreError {
            error: error.into().into(),
            reason: reason.map(Into::into),
        }))
    }

    /// Returns `true` if this error was reported by the store.
    pub fn is_store(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Store(_))
    }
}
