use super::{Field, FieldId, FieldName, Model, ModelId, Schema, ViewSource, ViewSpec, Views};
use crate::{bail, stmt::Type, Result};
use indexmap::IndexMap;
use std::sync::Arc;

/// Collects model declarations and assembles them into a [`Schema`].
#[derive(Default)]
pub struct Builder {
    models: Vec<ModelBuilder>,
}

/// Declares one model: its fields, the model it extends and its views.
pub struct ModelBuilder {
    name: String,
    extends: Option<String>,
    fields: Vec<FieldDecl>,
    views: Vec<(String, String, ViewSpec)>,
}

#[derive(Clone)]
struct FieldDecl {
    name: FieldName,
    ty: Type,
}

/// Used to track state during the build process
struct BuildSchema {
    /// Maps model names to identifiers, in declaration order.
    lookup: IndexMap<String, ModelId>,

    /// Declared (non-reserved) fields per model, including inherited ones.
    declared: Vec<Vec<FieldDecl>>,

    models: Vec<Model>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(mut self, model: ModelBuilder) -> Self {
        self.models.push(model);
        self
    }

    pub fn build(self) -> Result<Schema> {
        let mut builder = BuildSchema {
            lookup: IndexMap::new(),
            declared: vec![],
            models: vec![],
        };

        let mut pending_views = vec![];

        for model in self.models {
            let id = ModelId(builder.models.len());

            if builder.lookup.contains_key(&model.name) {
                bail!("model `{}` declared more than once", model.name);
            }

            let base = match &model.extends {
                Some(base) => match builder.lookup.get(base) {
                    Some(base) => Some(*base),
                    None => bail!(
                        "model `{}` extends `{base}`, which must be declared before it",
                        model.name
                    ),
                },
                None => None,
            };

            let mut declared = match base {
                Some(base) => builder.declared[base.0].clone(),
                None => vec![],
            };
            declared.extend(model.fields);

            let fields = builder.build_fields(id, &model.name, &declared)?;

            for (repository, name, spec) in model.views {
                pending_views.push((id, repository, name, spec));
            }

            builder.lookup.insert(model.name.clone(), id);
            builder.declared.push(declared);
            builder.models.push(Model {
                id,
                name: model.name,
                base,
                fields,
                views: Views::default(),
            });
        }

        let mut schema = Schema {
            models: builder.models,
        };

        // One design document aggregates every view of a model family, so
        // views declared on a subtype are stored on the root model.
        for (id, repository, name, spec) in pending_views {
            let root = schema.base_model(id).id;
            schema.models[root.0].views.declare(repository, name, spec);
        }

        Ok(schema)
    }
}

impl BuildSchema {
    fn build_fields(&self, model: ModelId, model_name: &str, declared: &[FieldDecl]) -> Result<Vec<Field>> {
        let reserved = [
            ("id", Model::KEY_FIELD, Type::String),
            ("rev", Model::REV_FIELD, Type::String),
            ("attachments", Model::ATTACHMENTS_FIELD, Type::Json),
            ("couchdb_type", Model::DISCRIMINATOR_FIELD, Type::Discriminator),
        ];

        let fields: Vec<Field> = reserved
            .into_iter()
            .map(|(app_name, storage_name, ty)| FieldDecl {
                name: FieldName {
                    app_name: app_name.to_string(),
                    storage_name: Some(storage_name.to_string()),
                },
                ty,
            })
            .chain(declared.iter().cloned())
            .enumerate()
            .map(|(index, decl)| Field {
                id: FieldId { model, index },
                name: decl.name,
                ty: decl.ty,
                key: index == Model::KEY_INDEX,
            })
            .collect();

        for (i, field) in fields.iter().enumerate() {
            let clash = fields[..i].iter().any(|other| {
                other.name.app_name == field.name.app_name
                    || other.storage_name() == field.storage_name()
            });

            if clash {
                bail!(
                    "model `{model_name}` declares field `{}` more than once or over a reserved field",
                    field.name.app_name
                );
            }
        }

        Ok(fields)
    }
}

impl ModelBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends: None,
            fields: vec![],
            views: vec![],
        }
    }

    /// Makes this model a subtype of `base`. The subtype inherits every
    /// field declared on the base and joins its document family.
    pub fn extends(mut self, base: impl Into<String>) -> Self {
        self.extends = Some(base.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, ty: Type) -> Self {
        self.fields.push(FieldDecl {
            name: FieldName {
                app_name: name.into(),
                storage_name: None,
            },
            ty,
        });
        self
    }

    /// Declares a field stored under a document member with a different name.
    pub fn field_stored_as(
        mut self,
        name: impl Into<String>,
        storage_name: impl Into<String>,
        ty: Type,
    ) -> Self {
        self.fields.push(FieldDecl {
            name: FieldName {
                app_name: name.into(),
                storage_name: Some(storage_name.into()),
            },
            ty,
        });
        self
    }

    /// Declares a named view for `repository`. The body is evaluated lazily,
    /// each time views are materialized.
    pub fn view(
        mut self,
        repository: impl Into<String>,
        name: impl Into<String>,
        spec: impl Fn() -> Option<ViewSource> + Send + Sync + 'static,
    ) -> Self {
        let spec: ViewSpec = Arc::new(spec);
        self.views.push((repository.into(), name.into(), spec));
        self
    }
}
