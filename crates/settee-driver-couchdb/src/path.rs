//! Request paths and query strings.

use crate::Database;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except the RFC 3986 unreserved characters.
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Encodes `value` as a single path segment or query value.
pub(crate) fn segment(value: &str) -> String {
    utf8_percent_encode(value, UNRESERVED).to_string()
}

/// `/<db>`
pub(crate) fn database(db: &Database) -> String {
    format!("/{}", db.encoded())
}

/// `/<db>/<id>`
pub(crate) fn document(db: &Database, id: &str) -> String {
    format!("/{}/{}", db.encoded(), segment(id))
}

/// `/<db>/<id>?rev=<rev>`
pub(crate) fn document_at(db: &Database, id: &str, rev: &str) -> String {
    format!("{}?rev={}", document(db, id), segment(rev))
}

/// `/<db>/_design/<name>`
pub(crate) fn design(db: &Database, name: &str) -> String {
    format!("/{}/_design/{}", db.encoded(), segment(name))
}

/// `/<db>/_design/<name>?rev=<rev>`
pub(crate) fn design_at(db: &Database, name: &str, rev: &str) -> String {
    format!("{}?rev={}", design(db, name), segment(rev))
}

/// `/<db>/_design/<design>/_view/<view>`
pub(crate) fn view(db: &Database, design_name: &str, view: &str) -> String {
    format!("{}/_view/{}", design(db, design_name), segment(view))
}

/// `/<db>/_temp_view`
pub(crate) fn temp_view(db: &Database) -> String {
    format!("/{}/_temp_view", db.encoded())
}

/// Builds a `?a=1&b=2` query string. Values are percent-encoded.
#[derive(Debug, Default)]
pub(crate) struct QueryString {
    pairs: Vec<(&'static str, String)>,
}

impl QueryString {
    pub(crate) fn push(&mut self, key: &'static str, value: impl ToString) {
        self.pairs.push((key, value.to_string()));
    }

    /// Appends the query string, if any, to `path`.
    pub(crate) fn append_to(&self, path: &mut String) {
        let mut delimiter = '?';

        for (key, value) in &self.pairs {
            path.push(delimiter);
            path.push_str(key);
            path.push('=');
            path.push_str(&segment(value));
            delimiter = '&';
        }
    }
}
