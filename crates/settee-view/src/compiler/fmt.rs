use super::Formatter;
use settee_core::Result;

macro_rules! fmt {
    ($scope:expr, $f:expr, $( $fragments:expr ),* $(,)?) => {{
        $(
            $fragments.to_js($scope, $f)?;
        )*
    }};
}

/// Negation state of the subtree being rendered.
///
/// Passed by value into every call, so nothing needs restoring when a
/// subtree fails to compile.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(super) struct Scope {
    pub(super) negated: bool,
}

impl Scope {
    pub(super) fn negate(self) -> Self {
        Self {
            negated: !self.negated,
        }
    }
}

pub(super) trait ToJs {
    fn to_js(self, scope: Scope, f: &mut Formatter<'_>) -> Result<()>;
}

impl ToJs for &str {
    fn to_js(self, _scope: Scope, f: &mut Formatter<'_>) -> Result<()> {
        f.dst.push_str(self);
        Ok(())
    }
}
