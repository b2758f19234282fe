use super::{operation, path, to_document, write_outcome, CouchDb, Response, Result, Schema, Written};
use serde_json::Value as Json;
use settee_core::schema::Model;

impl CouchDb {
    /// Creates one document per record. Records carrying an id are stored
    /// under it; the store assigns one otherwise.
    pub(crate) fn exec_insert(&self, schema: &Schema, op: operation::Insert) -> Result<Response> {
        let mut written = Written::default();

        for record in &op.records {
            let model = schema.model(record.model);

            let mut document = to_document(model, record, true);
            document
                .entry(Model::DISCRIMINATOR_FIELD)
                .or_insert_with(|| Json::String(model.name.clone()));
            let document = Json::Object(document);

            let body = match record.id() {
                Some(id) => self.client.put(&path::document(&self.database, id), Some(&document))?,
                None => self.client.post(&path::database(&self.database), &document)?,
            };

            written.push(write_outcome(&body));
        }

        Ok(Response::written(written))
    }
}
