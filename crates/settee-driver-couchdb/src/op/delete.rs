use super::{operation, path, unpersisted, write_outcome, CouchDb, Response, Result, Schema, Written};

impl CouchDb {
    pub(crate) fn exec_delete(&self, _schema: &Schema, op: operation::Delete) -> Result<Response> {
        let mut written = Written::default();

        for record in &op.records {
            let (Some(id), Some(rev)) = (record.id(), record.rev()) else {
                written.push(unpersisted("delete"));
                continue;
            };

            let body = self
                .client
                .delete(&path::document_at(&self.database, id, rev))?;

            written.push(write_outcome(&body));
        }

        Ok(Response::written(written))
    }
}
