use super::{client, path, CouchDb, Result};
use settee_core::{schema::ModelId, Error, Schema};
use settee_view::DesignDocument;

impl CouchDb {
    /// Stores the design document holding every view of the model's
    /// family, replacing the current revision if there is one.
    pub(crate) fn exec_create_views(&self, schema: &Schema, model: ModelId) -> Result<()> {
        let name = DesignDocument::name(schema, model);
        let path = path::design(&self.database, name);

        let mut design = DesignDocument::for_model(schema, model, &self.config.repository);

        let existing = self.client.get(&path)?;
        if client::store_error(&existing).is_none() {
            if let Some(rev) = existing.get("_rev").and_then(|rev| rev.as_str()) {
                design = design.with_rev(rev);
            }
        }

        let body = serde_json::to_value(&design)?;
        client::check(self.client.put(&path, Some(&body))?)?;

        tracing::debug!(design = name, views = design.views.len(), "design document stored");
        Ok(())
    }

    /// Removes the model family's design document. A missing design
    /// document is not an error.
    pub(crate) fn exec_destroy_views(&self, schema: &Schema, model: ModelId) -> Result<()> {
        let name = DesignDocument::name(schema, model);

        let existing = self.client.get(&path::design(&self.database, name))?;
        if let Some((error, reason)) = client::store_error(&existing) {
            tracing::warn!(design = name, %error, ?reason, "no design document to remove");
            return Ok(());
        }

        let Some(rev) = existing.get("_rev").and_then(|rev| rev.as_str()) else {
            return Err(Error::invalid_result(format!(
                "design document `{name}` has no revision"
            )));
        };

        let body = self
            .client
            .delete(&path::design_at(&self.database, name, rev))?;

        match client::store_error(&body) {
            Some((error, reason)) if error == "not_found" => {
                tracing::warn!(design = name, %error, ?reason, "design document already removed");
                Ok(())
            }
            Some((error, reason)) => Err(Error::store(error, reason)),
            None => Ok(()),
        }
    }
}
