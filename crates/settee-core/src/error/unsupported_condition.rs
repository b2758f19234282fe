use super::Error;

/// Error when a condition has no translation into a view expression.
///
/// The compiler fails instead of emitting a best-guess clause. The known
/// case is a negated LIKE comparison.
#[derive(Debug)]
pub(super) struct UnsupportedCondition {
    message: Box<str>,
}

impl std::error::Error for UnsupportedCondition {}

impl core::fmt::Display for UnsupportedCondition {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported condition: {}", self.message)
    }
}

impl Error {
    pub fn unsupported_condition(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedCondition(
            UnsupportedCondition {
                message: message.into().into(),
            },
        ))
    }

    pub fn is_unsupported_condition(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedCondition(_))
    }
}
