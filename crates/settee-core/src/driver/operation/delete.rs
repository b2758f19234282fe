use super::Operation;
use crate::stmt::Record;

#[derive(Debug)]
pub struct Delete {
    /// Persisted records to delete. Each must carry an id and a revision.
    pub records: Vec<Record>,
}

impl From<Delete> for Operation {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}
