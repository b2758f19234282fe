use super::{quote, Formatter, Scope, ToJs};
use settee_core::{schema::Field, Result};

/// A field reference on the map function's `doc` argument.
#[derive(Clone, Copy)]
pub(super) struct FieldRef<'a>(pub(super) &'a Field);

impl ToJs for FieldRef<'_> {
    fn to_js(self, _scope: Scope, f: &mut Formatter<'_>) -> Result<()> {
        f.dst.push_str(&render(self.0.storage_name()));
        Ok(())
    }
}

/// `doc.name`, or `doc['name']` when the name is not an identifier.
pub(super) fn render(name: &str) -> String {
    if is_identifier(name) {
        format!("doc.{name}")
    } else {
        format!("doc[{}]", quote(&name.into()))
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bracket_access_for_non_identifiers() {
        assert_eq!(render("title"), "doc.title");
        assert_eq!(render("_id"), "doc._id");
        assert_eq!(render("url-slug"), "doc['url-slug']");
        assert_eq!(render("2nd"), "doc['2nd']");
        assert_eq!(render("o'clock"), r"doc['o\'clock']");
    }
}
