use super::Direction;
use crate::schema::FieldId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    /// The field to order by
    pub field: FieldId,

    /// Ascending or descending
    pub direction: Direction,
}

impl OrderBy {
    pub fn asc(field: FieldId) -> Self {
        Self {
            field,
            direction: Direction::Asc,
        }
    }

    pub fn desc(field: FieldId) -> Self {
        Self {
            field,
            direction: Direction::Desc,
        }
    }
}
