use crate::{
    client::{store_error, Body},
    document::from_document,
    route::RouteKind,
};
use serde_json::Value as Json;
use settee_core::{
    schema::Model,
    stmt::{Query, ResultSet, Row},
    Result, Schema,
};

/// Turns a read response into rows of the fields `query` selected.
///
/// A store-reported error, a document outside the queried type family and
/// a response without rows all produce an empty result.
pub(crate) fn assemble(
    schema: &Schema,
    query: &Query,
    kind: RouteKind,
    single: bool,
    body: Body,
) -> Result<ResultSet> {
    if let Some((error, reason)) = store_error(&body) {
        tracing::debug!(%error, ?reason, "read answered with a store error; no rows");
        return Ok(ResultSet::empty());
    }

    let fields: Vec<_> = query.fields.iter().map(|id| schema.field(*id)).collect();

    let mut rows = vec![];

    match kind {
        RouteKind::Document => {
            let family = schema.type_family(query.model);
            let discriminator = body
                .get(Model::DISCRIMINATOR_FIELD)
                .and_then(Json::as_str);

            if discriminator.is_some_and(|name| family.contains(name)) {
                rows.push(Row::Record(from_document(&body, fields.iter().copied())?));
            }
        }
        RouteKind::View { reduce: true } => {
            for row in view_rows(&body) {
                rows.push(Row::Reduced {
                    key: row.get("key").cloned().unwrap_or(Json::Null),
                    value: row.get("value").cloned().unwrap_or(Json::Null),
                });

                if single {
                    break;
                }
            }
        }
        RouteKind::View { reduce: false } | RouteKind::TempView => {
            for row in view_rows(&body) {
                let Some(Json::Object(value)) = row.get("value") else {
                    continue;
                };

                rows.push(Row::Record(from_document(value, fields.iter().copied())?));

                if single {
                    break;
                }
            }
        }
    }

    // A document body has no envelope; its members are user fields.
    let total_rows = match kind {
        _ if single => rows.len() as u64,
        RouteKind::Document => 0,
        _ => body.get("total_rows").and_then(Json::as_u64).unwrap_or(0),
    };

    Ok(ResultSet { rows, total_rows })
}

fn view_rows(body: &Body) -> impl Iterator<Item = &serde_json::Map<String, Json>> {
    body.get("rows")
        .and_then(Json::as_array)
        .into_iter()
        .flatten()
        .filter_map(Json::as_object)
}
