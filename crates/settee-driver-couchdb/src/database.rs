use crate::path;
use percent_encoding::percent_decode_str;
use settee_core::{Error, Result};

/// A validated database name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Database {
    /// Decoded name
    name: String,
}

impl Database {
    /// Parses a database path such as `/blog` or `blog/`.
    ///
    /// The name may use lowercase letters, digits, any of `-_+()$` and
    /// percent-escapes. It is validated before any request is made.
    pub fn parse(path: &str) -> Result<Self> {
        let trimmed = path.strip_prefix('/').unwrap_or(path);
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);

        let valid = !trimmed.is_empty()
            && trimmed.bytes().all(|b| {
                matches!(b, b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'+' | b'%' | b'(' | b')' | b'$')
            });

        if !valid {
            return Err(Error::invalid_database_name(path));
        }

        let name = percent_decode_str(trimmed)
            .decode_utf8()
            .map_err(|_| Error::invalid_database_name(path))?;

        Ok(Self {
            name: name.into_owned(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name as a single URL path segment.
    pub fn encoded(&self) -> String {
        path::segment(&self.name)
    }
}
