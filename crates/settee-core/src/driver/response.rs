use crate::{bail, stmt::ResultSet, Result};

#[derive(Debug)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug)]
pub enum Rows {
    /// Rows matched by a read
    Values(ResultSet),

    /// Per-record outcomes of a write
    Written(Written),
}

/// Outcomes of a batch write, index-aligned with the records sent.
///
/// A batch is never aborted by a rejected record; the remaining records are
/// still written.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Written {
    pub outcomes: Vec<WriteOutcome>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WriteOutcome {
    /// The store accepted the write and answered with the document's
    /// identifier and new revision
    Persisted { id: String, rev: String },

    /// The store, or a local precondition, refused the write
    Rejected {
        error: String,
        reason: Option<String>,
    },
}

impl Response {
    pub fn values(result: ResultSet) -> Self {
        Self {
            rows: Rows::Values(result),
        }
    }

    pub fn written(written: Written) -> Self {
        Self {
            rows: Rows::Written(written),
        }
    }

    pub fn into_values(self) -> Result<ResultSet> {
        match self.rows {
            Rows::Values(result) => Ok(result),
            Rows::Written(_) => bail!("expected read rows, got write outcomes"),
        }
    }

    pub fn into_written(self) -> Result<Written> {
        match self.rows {
            Rows::Written(written) => Ok(written),
            Rows::Values(_) => bail!("expected write outcomes, got read rows"),
        }
    }
}

impl Written {
    /// Number of records the store accepted.
    pub fn count(&self) -> u64 {
        self.outcomes.iter().filter(|outcome| outcome.is_persisted()).count() as u64
    }

    pub fn push(&mut self, outcome: WriteOutcome) {
        self.outcomes.push(outcome);
    }
}

impl WriteOutcome {
    pub fn rejected(error: impl Into<String>, reason: Option<String>) -> Self {
        Self::Rejected {
            error: error.into(),
            reason,
        }
    }

    pub fn is_persisted(&self) -> bool {
        matches!(self, Self::Persisted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_skips_rejected_writes() {
        let written = Written {
            outcomes: vec![
                WriteOutcome::Persisted {
                    id: "a".into(),
                    rev: "1-a".into(),
                },
                WriteOutcome::rejected("conflict", Some("Document update conflict.".into())),
                WriteOutcome::Persisted {
                    id: "c".into(),
                    rev: "1-c".into(),
                },
            ],
        };

        assert_eq!(written.count(), 2);
    }

    #[test]
    fn into_values_rejects_write_response() {
        let response = Response::written(Written::default());
        assert!(response.into_values().is_err());
    }
}
