use super::{Field, FieldId, ModelBuilder, Views};
use std::fmt;

#[derive(Debug, Clone)]
pub struct Model {
    /// Uniquely identifies the model within the schema
    pub id: ModelId,

    /// Name of the model. This is also the discriminator value stored in
    /// each document's `couchdb_type` member.
    pub name: String,

    /// The model this one extends, if any
    pub base: Option<ModelId>,

    /// Fields contained by the model. The reserved document fields always
    /// come first, at the positions given by the `*_INDEX` constants.
    pub fields: Vec<Field>,

    /// Views declared on the model, per repository
    pub views: Views,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct ModelId(pub usize);

impl Model {
    pub const KEY_INDEX: usize = 0;
    pub const REV_INDEX: usize = 1;
    pub const ATTACHMENTS_INDEX: usize = 2;
    pub const DISCRIMINATOR_INDEX: usize = 3;

    pub const KEY_FIELD: &'static str = "_id";
    pub const REV_FIELD: &'static str = "_rev";
    pub const ATTACHMENTS_FIELD: &'static str = "_attachments";
    pub const DISCRIMINATOR_FIELD: &'static str = "couchdb_type";

    pub fn builder(name: impl Into<String>) -> ModelBuilder {
        ModelBuilder::new(name)
    }

    #[track_caller]
    pub fn field(&self, field: impl Into<FieldId>) -> &Field {
        let field_id = field.into();
        assert_eq!(self.id, field_id.model);
        &self.fields[field_id.index]
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name.app_name == name)
    }

    pub fn key_field(&self) -> &Field {
        &self.fields[Self::KEY_INDEX]
    }

    pub fn rev_field(&self) -> &Field {
        &self.fields[Self::REV_INDEX]
    }

    pub fn attachments_field(&self) -> &Field {
        &self.fields[Self::ATTACHMENTS_INDEX]
    }

    pub fn discriminator_field(&self) -> &Field {
        &self.fields[Self::DISCRIMINATOR_INDEX]
    }
}

impl ModelId {
    /// Create a `FieldId` representing the current model's field at index
    /// `index`.
    pub const fn field(self, index: usize) -> FieldId {
        FieldId { model: self, index }
    }
}

impl From<&Model> for ModelId {
    fn from(value: &Model) -> Self {
        value.id
    }
}

impl From<&ModelId> for ModelId {
    fn from(src: &ModelId) -> Self {
        *src
    }
}

impl fmt::Debug for ModelId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ModelId({})", self.0)
    }
}
