use super::Error;

/// Error when the document store endpoint cannot be reached.
///
/// Raised when the connection is refused. The operation is aborted; the
/// endpoint is named so the caller can tell which server was unreachable.
#[derive(Debug)]
pub(super) struct ConnectionError {
    endpoint: Box<str>,
}

impl std::error::Error for ConnectionError {}

impl core::fmt::Display for ConnectionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "could not connect to CouchDB running at '{}'",
            self.endpoint
        )
    }
}

impl Error {
    /// Creates a connection error naming the unreachable endpoint.
    pub fn connection(endpoint: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Connection(ConnectionError {
            endpoint: endpoint.into().into(),
        }))
    }

    /// Returns `true` if this error is a connection error.
    pub fn is_connection(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Connection(_))
    }
}
