use super::{Formatter, Scope, ToJs};
use settee_core::Result;

pub(super) struct Delimited<L>(pub(super) L, pub(super) &'static str);

impl<L> ToJs for Delimited<L>
where
    L: IntoIterator,
    L::Item: ToJs,
{
    fn to_js(self, scope: Scope, f: &mut Formatter<'_>) -> Result<()> {
        let mut s = "";
        for i in self.0 {
            fmt!(scope, f, s, i);
            s = self.1;
        }
        Ok(())
    }
}
