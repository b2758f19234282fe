use super::{operation, CouchDb, Response, Result, Schema};
use crate::{assemble::assemble, route::route};
use http::Method;
use serde_json::json;

impl CouchDb {
    pub(crate) fn exec_read(&self, schema: &Schema, op: operation::Read) -> Result<Response> {
        let mut query = op.query;
        let route = route(schema, &self.database, &self.config.repository, &mut query)?;

        let body = if route.method == Method::POST {
            let body = route.body.unwrap_or_else(|| json!({}));
            self.client.post(&route.path, &body)?
        } else {
            self.client.get(&route.path)?
        };

        let result = assemble(schema, &query, route.kind, route.single, body)?;
        Ok(Response::values(result))
    }
}
