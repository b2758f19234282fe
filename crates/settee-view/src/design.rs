use indexmap::IndexMap;
use serde::Serialize;
use settee_core::{
    schema::{ModelId, ViewSource},
    Schema,
};

/// The design document holding a model family's persistent views.
///
/// One document per root model, named after it; views declared on subtypes
/// are stored there too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DesignDocument {
    /// Revision of the document being replaced, if one exists
    #[serde(rename = "_rev", skip_serializing_if = "Option::is_none")]
    pub rev: Option<String>,

    pub views: IndexMap<String, ViewSource>,
}

impl DesignDocument {
    /// Materializes the views declared for `repository` on `model`'s family.
    pub fn for_model(schema: &Schema, model: ModelId, repository: &str) -> Self {
        Self {
            rev: None,
            views: schema.base_model(model).views.materialize(repository),
        }
    }

    /// Name of the design document for `model`'s family.
    pub fn name(schema: &Schema, model: ModelId) -> &str {
        &schema.base_model(model).name
    }

    pub fn with_rev(mut self, rev: impl Into<String>) -> Self {
        self.rev = Some(rev.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}
