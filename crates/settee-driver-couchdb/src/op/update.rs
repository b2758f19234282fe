use super::{
    operation, path, to_document, unpersisted, write_outcome, CouchDb, Response, Result, Schema,
    Written,
};
use serde_json::Value as Json;
use settee_core::driver::WriteOutcome;

impl CouchDb {
    /// Writes the assignments into each record and stores the whole
    /// document at its current revision.
    pub(crate) fn exec_update(&self, schema: &Schema, op: operation::Update) -> Result<Response> {
        let mut written = Written::default();

        for mut record in op.records {
            let model = schema.model(record.model);

            // Assignments may target fields of a base model; subtypes keep
            // inherited fields at the same positions.
            if let Some((field, _)) = op
                .assignments
                .iter()
                .find(|(field, _)| !schema.inherits(model.id, field.model))
            {
                let owner = &schema.model(field.model).name;
                tracing::warn!(
                    model = %model.name,
                    field_owner = %owner,
                    "assignment targets a field the record does not have; skipped"
                );
                written.push(WriteOutcome::rejected(
                    "invalid_assignment",
                    Some(format!("`{}` records have no field of `{owner}`", model.name)),
                ));
                continue;
            }

            for (field, value) in &op.assignments {
                record.set(model.id.field(field.index), value.clone());
            }

            let (Some(id), Some(_)) = (record.id(), record.rev()) else {
                written.push(unpersisted("update"));
                continue;
            };

            let document = Json::Object(to_document(model, &record, false));
            let body = self
                .client
                .put(&path::document(&self.database, id), Some(&document))?;

            written.push(write_outcome(&body));
        }

        Ok(Response::written(written))
    }
}
