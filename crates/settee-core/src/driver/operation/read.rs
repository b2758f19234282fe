use super::Operation;
use crate::stmt::Query;

#[derive(Debug)]
pub struct Read {
    pub query: Query,
}

impl From<Read> for Operation {
    fn from(value: Read) -> Self {
        Self::Read(value)
    }
}

impl From<Query> for Operation {
    fn from(query: Query) -> Self {
        Self::Read(Read { query })
    }
}
