use super::{Condition, OrderBy, ViewRef};
use crate::schema::{FieldId, Model, ModelId};

/// Describes one read.
///
/// A query is built by the caller, handed to the driver and discarded once
/// the read completes.
#[derive(Debug, Clone)]
pub struct Query {
    /// The model being read. Documents of every subtype are matched too.
    pub model: ModelId,

    /// Fields returned for each row, in order
    pub fields: Vec<FieldId>,

    /// Documents must match this condition. `None` matches every document
    /// of the model's family.
    pub filter: Option<Condition>,

    pub order_by: Vec<OrderBy>,

    pub limit: Option<u64>,

    pub offset: u64,

    /// Read through a persistent view instead of a document or ad hoc view
    pub view: Option<ViewRef>,
}

impl Query {
    /// Selects every field of `model`.
    pub fn new(model: &Model) -> Self {
        Self {
            model: model.id,
            fields: model.fields.iter().map(|field| field.id).collect(),
            filter: None,
            order_by: vec![],
            limit: None,
            offset: 0,
            view: None,
        }
    }

    pub fn select(mut self, fields: impl IntoIterator<Item = FieldId>) -> Self {
        self.fields = fields.into_iter().collect();
        self
    }

    /// Adds a condition. Repeated calls are combined with `And`.
    pub fn filter(mut self, condition: impl Into<Condition>) -> Self {
        let condition = condition.into();

        self.filter = Some(match self.filter.take() {
            Some(existing) => Condition::and(existing, condition),
            None => condition,
        });
        self
    }

    pub fn order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by.push(order_by);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    /// Reads through a named view. View rows are selected by the view's key
    /// options only, so such a query must not also carry a filter.
    pub fn view(mut self, view: ViewRef) -> Self {
        self.view = Some(view);
        self
    }

    /// Views sort in one direction only; the first ordering decides it.
    pub fn is_reversed(&self) -> bool {
        self.order_by
            .first()
            .is_some_and(|order_by| order_by.direction.is_desc())
    }
}
