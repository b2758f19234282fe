mod support;

use http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;
use settee_core::Driver;
use support::*;

#[test]
fn provisioning_stores_every_family_view() {
    let (schema, db, transport) = setup();
    let draft = schema.model_by_name("Draft").unwrap();

    transport
        .respond(StatusCode::NOT_FOUND, not_found())
        .respond(StatusCode::CREATED, json!({"ok": true, "id": "_design/Post", "rev": "1-a"}));

    db.create_model_storage(&schema, draft.id).unwrap();

    assert_eq!(transport.lines(), ["GET /blog/_design/Post", "PUT /blog/_design/Post"]);
    assert_eq!(
        body_of(&transport.request(1)),
        json!({
            "views": {
                "by_title": {
                    "map": "function(doc) { if (doc.couchdb_type == 'Post') { emit(doc.title, doc); } }"
                },
                "count": {
                    "map": "function(doc) { emit(doc.title, 1); }",
                    "reduce": "_sum"
                },
                "by_editor": {
                    "map": "function(doc) { emit(doc.editor, doc); }"
                }
            }
        })
    );
}

#[test]
fn provisioning_replaces_the_current_revision() {
    let (schema, db, transport) = setup();
    let post = schema.model_by_name("Post").unwrap();

    transport
        .ok(json!({"_id": "_design/Post", "_rev": "3-c", "views": {}}))
        .respond(StatusCode::CREATED, json!({"ok": true, "id": "_design/Post", "rev": "4-d"}));

    db.create_model_storage(&schema, post.id).unwrap();

    let body = body_of(&transport.request(1));
    assert_eq!(body["_rev"], json!("3-c"));
}

#[test]
fn provisioning_surfaces_store_errors() {
    let (schema, db, transport) = setup();
    let post = schema.model_by_name("Post").unwrap();

    transport
        .respond(StatusCode::NOT_FOUND, not_found())
        .respond(
            StatusCode::CONFLICT,
            json!({"error": "conflict", "reason": "Document update conflict."}),
        );

    let err = db.create_model_storage(&schema, post.id).unwrap_err();
    assert!(err.is_store());
}

#[test]
fn teardown_deletes_at_the_current_revision() {
    let (schema, db, transport) = setup();
    let post = schema.model_by_name("Post").unwrap();

    transport
        .ok(json!({"_id": "_design/Post", "_rev": "2-b", "views": {}}))
        .ok(json!({"ok": true, "id": "_design/Post", "rev": "3-c"}));

    db.destroy_model_storage(&schema, post.id).unwrap();

    let request = transport.request(1);
    assert!(is(&request, Method::DELETE, "/blog/_design/Post?rev=2-b"));
}

#[test]
fn teardown_twice_is_silent() {
    let (schema, db, transport) = setup();
    let post = schema.model_by_name("Post").unwrap();

    transport
        .ok(json!({"_id": "_design/Post", "_rev": "2-b", "views": {}}))
        .ok(json!({"ok": true, "id": "_design/Post", "rev": "3-c"}))
        .respond(StatusCode::NOT_FOUND, json!({"error": "not_found", "reason": "deleted"}));

    db.destroy_model_storage(&schema, post.id).unwrap();
    db.destroy_model_storage(&schema, post.id).unwrap();

    assert_eq!(
        transport.lines(),
        [
            "GET /blog/_design/Post",
            "DELETE /blog/_design/Post?rev=2-b",
            "GET /blog/_design/Post",
        ]
    );
}
