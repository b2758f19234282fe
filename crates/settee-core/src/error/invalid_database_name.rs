use crate::Error;

/// Error when a database path does not satisfy the store's naming rules.
///
/// Raised before any request is issued.
#[derive(Debug)]
pub(super) struct InvalidDatabaseName {
    pub(super) path: Box<str>,
}

impl Error {
    pub fn invalid_database_name(path: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidDatabaseName(InvalidDatabaseName {
            path: path.into().into(),
        }))
    }

    pub fn is_invalid_database_name(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidDatabaseName(_))
    }
}

impl std::fmt::Display for InvalidDatabaseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid database path: '{}'", self.path)
    }
}
