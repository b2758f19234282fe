mod adhoc;
mod connection;
mod driver_operation_failed;
mod invalid_connection_url;
mod invalid_database_name;
mod invalid_result;
mod store;
mod type_conversion;
mod unsupported_condition;

use adhoc::AdhocError;
use connection::ConnectionError;
use driver_operation_failed::DriverOperationFailed;
use invalid_connection_url::InvalidConnectionUrl;
use invalid_database_name::InvalidDatabaseName;
use invalid_result::InvalidResult;
use std::sync::Arc;
use store::StoreError;
use type_conversion::TypeConversionError;
use unsupported_condition::UnsupportedCondition;

/// Returns early with an ad-hoc [`Error`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad-hoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur in Settee.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut err = consequent;
        if err.inner.is_none() {
            err = Error::from(ErrorKind::Unknown);
        }

        match err.inner.as_mut().and_then(Arc::get_mut) {
            Some(inner) => {
                assert!(
                    inner.cause.is_none(),
                    "consequent error must not already have a cause"
                );
                inner.cause = Some(self);
                err
            }
            // The consequent is shared; re-create it so the chain can be attached.
            None => self.context_impl(Error::from_args(format_args!("{err}"))),
        }
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::DriverOperationFailed(err) => Some(err),
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    Connection(ConnectionError),
    DriverOperationFailed(DriverOperationFailed),
    InvalidConnectionUrl(InvalidConnectionUrl),
    InvalidDatabaseName(InvalidDatabaseName),
    InvalidResult(InvalidResult),
    Store(StoreError),
    TypeConversion(TypeConversionError),
    UnsupportedCondition(UnsupportedCondition),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            Connection(err) => core::fmt::Display::fmt(err, f),
            DriverOperationFailed(err) => core::fmt::Display::fmt(err, f),
            InvalidConnectionUrl(err) => core::fmt::Display::fmt(err, f),
            InvalidDatabaseName(err) => core::fmt::Display::fmt(err, f),
            InvalidResult(err) => core::fmt::Display::fmt(err, f),
            Store(err) => core::fmt::Display::fmt(err, f),
            TypeConversion(err) => core::fmt::Display::fmt(err, f),
            UnsupportedCondition(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown settee error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_size() {
        // Ensure Error stays at one word (size of pointer/Arc)
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn error_from_args() {
        let err = Error::from_args(format_args!("test error: {}", 42));
        assert_eq!(err.to_string(), "test error: 42");
    }

    #[test]
    fn error_chain_display() {
        let root = Error::from_args(format_args!("root cause"));
        let mid = Error::from_args(format_args!("middle context"));
        let top = Error::from_args(format_args!("top context"));

        let chained = root.context(mid).context(top);
        assert_eq!(
            chained.to_string(),
            "top context: middle context: root cause"
        );
    }

    #[test]
    fn context_with_shared_consequent() {
        let consequent = err!("reading Post");
        let _keep = consequent.clone();

        let chained = Error::connection("http://localhost:5984").context(consequent);
        assert_eq!(
            chained.to_string(),
            "reading Post: could not connect to CouchDB running at 'http://localhost:5984'"
        );
        assert!(!chained.is_connection());
    }

    #[test]
    fn anyhow_bridge() {
        let anyhow_err = anyhow::anyhow!("something failed");
        let our_err: Error = anyhow_err.into();
        assert_eq!(our_err.to_string(), "something failed");
    }

    #[test]
    fn serde_json_bridge() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let our_err: Error = json_err.into();
        assert!(our_err.to_string().contains("EOF"));
    }

    #[test]
    fn connection_error() {
        let err = Error::connection("http://localhost:5984");
        assert!(err.is_connection());
        assert_eq!(
            err.to_string(),
            "could not connect to CouchDB running at 'http://localhost:5984'"
        );
    }

    #[test]
    fn invalid_database_name_error() {
        let err = Error::invalid_database_name("/Bad Name");
        assert!(err.is_invalid_database_name());
        assert_eq!(err.to_string(), "invalid database path: '/Bad Name'");
    }

    #[test]
    fn unsupported_condition_error() {
        let err = Error::unsupported_condition("negated LIKE");
        assert!(err.is_unsupported_condition());
        assert_eq!(err.to_string(), "unsupported condition: negated LIKE");
    }

    #[test]
    fn store_error_with_reason() {
        let err = Error::store("not_found", Some("missing".to_string()));
        assert!(err.is_store());
        assert_eq!(err.to_string(), "store error: not_found (missing)");
    }

    #[test]
    fn type_conversion_error() {
        let err = Error::type_conversion(&serde_json::json!("abc"), "I64");
        assert!(err.is_type_conversion());
        assert_eq!(err.to_string(), "cannot convert string \"abc\" to I64");
    }

    #[test]
    fn invalid_result_error() {
        let err = Error::invalid_result("expected a JSON object");
        assert_eq!(err.to_string(), "invalid result: expected a JSON object");
    }
}
