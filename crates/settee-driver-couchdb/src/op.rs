mod delete;
mod insert;
mod migrate;
mod read;
mod update;

use super::{
    client::{self, Body},
    document::to_document,
    path, CouchDb,
};
use settee_core::{
    driver::{operation, Response, WriteOutcome, Written},
    Result, Schema,
};

/// Reads the outcome of a single-document write.
fn write_outcome(body: &Body) -> WriteOutcome {
    if let Some((error, reason)) = client::store_error(body) {
        tracing::warn!(%error, ?reason, "write rejected by the store");
        return WriteOutcome::Rejected { error, reason };
    }

    let id = body.get("id").and_then(|v| v.as_str());
    let rev = body.get("rev").and_then(|v| v.as_str());

    match (client::is_ok(body), id, rev) {
        (true, Some(id), Some(rev)) => WriteOutcome::Persisted {
            id: id.to_string(),
            rev: rev.to_string(),
        },
        _ => {
            tracing::warn!(?body, "write was not acknowledged");
            WriteOutcome::rejected("not_ok", None)
        }
    }
}

/// A write that could not be sent because the record was never persisted.
fn unpersisted(op: &str) -> WriteOutcome {
    tracing::warn!(op, "record has no id or revision; skipped");
    WriteOutcome::rejected(
        "missing_revision",
        Some(format!("{op} requires a persisted record")),
    )
}
