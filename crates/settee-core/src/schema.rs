mod builder;
pub use builder::{Builder, ModelBuilder};

mod field;
pub use field::{Field, FieldId, FieldName};

mod model;
pub use model::{Model, ModelId};

mod type_family;
pub use type_family::TypeFamily;

mod view;
pub use view::{ViewSource, ViewSpec, Views};

/// The set of models a driver reads and writes.
///
/// Models are addressed by [`ModelId`], which is the model's position in
/// declaration order.
#[derive(Debug, Default)]
pub struct Schema {
    pub models: Vec<Model>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::new()
    }

    #[track_caller]
    pub fn model(&self, id: impl Into<ModelId>) -> &Model {
        &self.models[id.into().0]
    }

    pub fn model_by_name(&self, name: &str) -> Option<&Model> {
        self.models.iter().find(|model| model.name == name)
    }

    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.iter()
    }

    #[track_caller]
    pub fn field(&self, id: FieldId) -> &Field {
        self.model(id.model).field(id)
    }

    /// Returns the root of the model's inheritance chain.
    ///
    /// Views and design documents are keyed by this model.
    pub fn base_model(&self, id: impl Into<ModelId>) -> &Model {
        let mut model = self.model(id);

        while let Some(base) = model.base {
            model = self.model(base);
        }

        model
    }

    /// Returns every model that directly or transitively extends `id`, in
    /// declaration order.
    pub fn descendants(&self, id: impl Into<ModelId>) -> impl Iterator<Item = &Model> + '_ {
        let id = id.into();

        self.models
            .iter()
            .filter(move |model| model.id != id && self.extends(model.id, id))
    }

    /// Returns the closed set of discriminator values a query on `id` must
    /// match: the model's own type name plus all of its subtype names.
    pub fn type_family(&self, id: impl Into<ModelId>) -> TypeFamily {
        let id = id.into();
        let model = self.model(id);

        TypeFamily::from_names(
            std::iter::once(model.name.clone())
                .chain(self.descendants(id).map(|model| model.name.clone())),
        )
    }

    /// True when `model` is `ancestor` or extends it, i.e. when fields of
    /// `ancestor` are present on `model` at the same positions.
    pub fn inherits(&self, model: impl Into<ModelId>, ancestor: impl Into<ModelId>) -> bool {
        let (model, ancestor) = (model.into(), ancestor.into());
        model == ancestor || self.extends(model, ancestor)
    }

    fn extends(&self, model: ModelId, ancestor: ModelId) -> bool {
        let mut current = self.model(model).base;

        while let Some(base) = current {
            if base == ancestor {
                return true;
            }
            current = self.model(base).base;
        }

        false
    }
}
