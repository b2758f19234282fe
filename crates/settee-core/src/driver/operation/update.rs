use super::Operation;
use crate::{
    schema::FieldId,
    stmt::{Record, Value},
};

#[derive(Debug)]
pub struct Update {
    /// Field values written to every record before it is sent
    pub assignments: Vec<(FieldId, Value)>,

    /// Persisted records to update. Each must carry an id and a revision.
    pub records: Vec<Record>,
}

impl From<Update> for Operation {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}
