use super::Value;
use serde_json::Value as Json;

/// The rows matched by a read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    pub rows: Vec<Row>,

    /// Row count reported by the store. For a view this counts every row in
    /// the view, not just the returned page.
    pub total_rows: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    /// Field values in the order the query requested them
    Record(Vec<Value>),

    /// Output of a reduce function. There is no field mapping.
    Reduced { key: Json, value: Json },
}

impl ResultSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates the field tuples, skipping reduced rows.
    pub fn records(&self) -> impl Iterator<Item = &[Value]> + '_ {
        self.rows.iter().filter_map(|row| match row {
            Row::Record(values) => Some(&values[..]),
            Row::Reduced { .. } => None,
        })
    }
}

impl Row {
    pub fn as_record(&self) -> Option<&[Value]> {
        match self {
            Self::Record(values) => Some(values),
            Self::Reduced { .. } => None,
        }
    }

    pub fn is_reduced(&self) -> bool {
        matches!(self, Self::Reduced { .. })
    }
}
