use crate::{
    path::{self, QueryString},
    Database,
};
use http::Method;
use serde_json::{json, Value as Json};
use settee_core::{
    schema::Model,
    stmt::Query,
    Error, Result, Schema,
};
use settee_view::{DesignDocument, MapFunction};

/// How a read is answered.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Route {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) body: Option<Json>,
    pub(crate) kind: RouteKind,

    /// Only the first row is wanted.
    pub(crate) single: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RouteKind {
    /// The response is the document itself.
    Document,

    /// A persistent view. With `reduce`, rows carry reduce output rather
    /// than documents.
    View { reduce: bool },

    /// An ad hoc view emitting whole documents.
    TempView,
}

/// Picks the cheapest way to answer `query`:
///
/// 1. a direct fetch, when the query is a single equality test on the
///    document identifier;
/// 2. the named view, when the query references one;
/// 3. an ad hoc view synthesized from the query otherwise.
///
/// View options are moved out of the query as they are applied.
pub(crate) fn route(
    schema: &Schema,
    db: &Database,
    repository: &str,
    query: &mut Query,
) -> Result<Route> {
    let single = query.limit == Some(1);

    if query.view.is_none() {
        if let Some(id) = direct_key(schema, query) {
            return Ok(Route {
                method: Method::GET,
                path: path::document(db, &id),
                body: None,
                kind: RouteKind::Document,
                single,
            });
        }
    }

    // Named views are precomputed; their rows cannot be filtered.
    if query.view.is_some() && query.filter.is_some() {
        return Err(Error::unsupported_condition(
            "conditions on a named view read",
        ));
    }

    let mut params = QueryString::default();

    let mut route = match query.view.take() {
        Some(mut view) => {
            let options = &mut view.options;

            for (name, value) in [
                ("key", options.key.take()),
                ("startkey", options.startkey.take()),
                ("endkey", options.endkey.take()),
            ] {
                if let Some(value) = value {
                    params.push(name, value);
                }
            }

            let declared_reduce = schema
                .base_model(query.model)
                .views
                .materialize_one(repository, &view.name)
                .is_some_and(|source| source.has_reduce());

            let reduce = options.reduce.take();
            if let Some(reduce) = reduce {
                params.push("reduce", reduce);
            }
            if let Some(group) = options.group.take() {
                params.push("group", group);
            }

            let (method, body) = match options.keys.take() {
                Some(keys) => (Method::POST, Some(json!({ "keys": keys }))),
                None => (Method::GET, None),
            };

            Route {
                method,
                path: path::view(db, DesignDocument::name(schema, query.model), &view.name),
                body,
                kind: RouteKind::View {
                    reduce: declared_reduce && reduce != Some(false),
                },
                single,
            }
        }
        None => {
            let body = MapFunction::new(schema).temp_view(query)?;

            Route {
                method: Method::POST,
                path: path::temp_view(db),
                body: Some(serde_json::to_value(body)?),
                kind: RouteKind::TempView,
                single,
            }
        }
    };

    push_paging(&mut params, query);
    params.append_to(&mut route.path);
    Ok(route)
}

fn push_paging(params: &mut QueryString, query: &Query) {
    if let Some(limit) = query.limit {
        params.push("limit", limit);
    }
    if query.is_reversed() {
        params.push("descending", true);
    }
    if query.offset != 0 {
        params.push("skip", query.offset);
    }
}

/// Returns the identifier when the filter is exactly `_id == <scalar>`,
/// possibly wrapped in single-operand operations.
fn direct_key(schema: &Schema, query: &Query) -> Option<String> {
    let comparison = query.filter.as_ref()?.as_sole_comparison()?;

    if !comparison.op.is_eq()
        || comparison.subject.index != Model::KEY_INDEX
        || !schema.field(comparison.subject).key
    {
        return None;
    }

    comparison
        .value()
        .filter(|value| value.is_scalar())
        .and_then(|value| value.to_key_string())
}
