use super::Operation;
use crate::stmt::Record;

#[derive(Debug)]
pub struct Insert {
    /// Records to create, one document each
    pub records: Vec<Record>,
}

impl From<Insert> for Operation {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
