mod delete;
pub use delete::Delete;

mod insert;
pub use insert::Insert;

mod read;
pub use read::Read;

mod update;
pub use update::Update;

#[derive(Debug)]
pub enum Operation {
    /// Persist new records
    Insert(Insert),

    /// Read documents matching a query
    Read(Read),

    /// Write field assignments to existing records
    Update(Update),

    /// Delete existing records at their current revision
    Delete(Delete),
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Insert(_) => "insert",
            Self::Read(_) => "read",
            Self::Update(_) => "update",
            Self::Delete(_) => "delete",
        }
    }
}
