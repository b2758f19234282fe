use super::Value;
use crate::driver::WriteOutcome;
use crate::schema::{FieldId, Model, ModelId};

/// The in-memory state of one resource: a value per model field, plus
/// which fields changed since the resource was last persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub model: ModelId,
    values: Vec<Value>,
    dirty: Vec<bool>,
}

impl Record {
    /// A new, unsaved resource of `model`. Only the discriminator is set.
    pub fn new(model: &Model) -> Self {
        let mut record = Self {
            model: model.id,
            values: vec![Value::Null; model.fields.len()],
            dirty: vec![false; model.fields.len()],
        };
        record.values[Model::DISCRIMINATOR_INDEX] = Value::String(model.name.clone());
        record.dirty[Model::DISCRIMINATOR_INDEX] = true;
        record
    }

    /// A resource loaded from the store. Nothing is dirty.
    ///
    /// Missing trailing values are filled with `Null`.
    pub fn from_values(model: &Model, mut values: Vec<Value>) -> Self {
        values.resize(model.fields.len(), Value::Null);

        Self {
            model: model.id,
            dirty: vec![false; values.len()],
            values,
        }
    }

    #[track_caller]
    pub fn get(&self, field: FieldId) -> &Value {
        assert_eq!(self.model, field.model);
        &self.values[field.index]
    }

    /// Writes a field value and marks the field dirty.
    #[track_caller]
    pub fn set(&mut self, field: FieldId, value: impl Into<Value>) {
        assert_eq!(self.model, field.model);
        self.values[field.index] = value.into();
        self.dirty[field.index] = true;
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn id(&self) -> Option<&str> {
        self.values[Model::KEY_INDEX].as_str()
    }

    pub fn rev(&self) -> Option<&str> {
        self.values[Model::REV_INDEX].as_str()
    }

    pub fn is_dirty(&self, index: usize) -> bool {
        self.dirty.get(index).copied().unwrap_or(false)
    }

    /// Applies the store's answer to a write. A persisted write updates the
    /// identifier and revision and leaves the record clean; a rejected one
    /// leaves it untouched.
    pub fn apply(&mut self, outcome: &WriteOutcome) {
        if let WriteOutcome::Persisted { id, rev } = outcome {
            self.values[Model::KEY_INDEX] = Value::String(id.clone());
            self.values[Model::REV_INDEX] = Value::String(rev.clone());
            self.mark_clean();
        }
    }

    pub fn mark_clean(&mut self) {
        self.dirty.iter_mut().for_each(|dirty| *dirty = false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{stmt::Type, Schema};

    fn schema() -> Schema {
        Schema::builder()
            .model(Model::builder("Post").field("title", Type::String))
            .build()
            .unwrap()
    }

    #[test]
    fn new_record_carries_discriminator() {
        let schema = schema();
        let post = schema.model(ModelId(0));
        let record = Record::new(post);

        assert_eq!(record.values()[Model::DISCRIMINATOR_INDEX], Value::from("Post"));
        assert!(record.is_dirty(Model::DISCRIMINATOR_INDEX));
        assert!(!record.is_dirty(Model::KEY_INDEX));
        assert_eq!(record.id(), None);
    }

    #[test]
    fn apply_persisted_outcome() {
        let schema = schema();
        let post = schema.model(ModelId(0));
        let title = post.field_by_name("title").unwrap().id;

        let mut record = Record::new(post);
        record.set(title, "A");
        assert!(record.is_dirty(title.index));

        record.apply(&WriteOutcome::Persisted {
            id: "abc123".into(),
            rev: "1-x".into(),
        });
        assert_eq!(record.id(), Some("abc123"));
        assert_eq!(record.rev(), Some("1-x"));
        assert!(!record.is_dirty(title.index));
    }

    #[test]
    fn apply_rejected_outcome_keeps_state() {
        let schema = schema();
        let post = schema.model(ModelId(0));
        let title = post.field_by_name("title").unwrap().id;

        let mut record = Record::new(post);
        record.set(title, "A");
        record.apply(&WriteOutcome::Rejected {
            error: "conflict".into(),
            reason: None,
        });

        assert!(record.is_dirty(title.index));
        assert_eq!(record.id(), None);
    }
}
