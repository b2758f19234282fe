mod support;

use http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;
use settee_core::{
    driver::{
        operation::{Delete, Insert, Update},
        WriteOutcome,
    },
    stmt::{Record, Value},
    Driver,
};
use support::*;

#[test]
fn insert_posts_new_documents() {
    let (schema, db, transport) = setup();
    let post = schema.model_by_name("Post").unwrap();
    let title = post.field_by_name("title").unwrap().id;

    transport.respond(
        StatusCode::CREATED,
        json!({"ok": true, "id": "7f3a", "rev": "1-a"}),
    );

    let mut record = Record::new(post);
    record.set(title, "Hello");

    let written = db
        .exec(&schema, Insert { records: vec![record.clone()] }.into())
        .unwrap()
        .into_written()
        .unwrap();

    let request = transport.request(0);
    assert!(is(&request, Method::POST, "/blog"));
    assert_eq!(body_of(&request), json!({"couchdb_type": "Post", "title": "Hello"}));

    assert_eq!(written.count(), 1);
    record.apply(&written.outcomes[0]);
    assert_eq!(record.id(), Some("7f3a"));
    assert_eq!(record.rev(), Some("1-a"));
    assert!(!record.is_dirty(title.index));
}

#[test]
fn insert_with_id_puts_the_document() {
    let (schema, db, transport) = setup();
    let draft = schema.model_by_name("Draft").unwrap();

    transport.respond(
        StatusCode::CREATED,
        json!({"ok": true, "id": "my post", "rev": "1-b"}),
    );

    let mut record = Record::new(draft);
    record.set(draft.key_field().id, "my post");

    db.exec(&schema, Insert { records: vec![record] }.into()).unwrap();

    let request = transport.request(0);
    assert!(is(&request, Method::PUT, "/blog/my%20post"));
    assert_eq!(body_of(&request), json!({"_id": "my post", "couchdb_type": "Draft"}));
}

#[test]
fn batch_insert_counts_accepted_documents() {
    let (schema, db, transport) = setup();
    let comment = schema.model_by_name("Comment").unwrap();

    transport
        .respond(StatusCode::CREATED, json!({"ok": true, "id": "a", "rev": "1-a"}))
        .respond(
            StatusCode::CONFLICT,
            json!({"error": "conflict", "reason": "Document update conflict."}),
        )
        .respond(StatusCode::CREATED, json!({"ok": true, "id": "c", "rev": "1-c"}));

    let records = (0..3).map(|_| Record::new(comment)).collect();
    let written = db
        .exec(&schema, Insert { records }.into())
        .unwrap()
        .into_written()
        .unwrap();

    assert_eq!(transport.requests().len(), 3);
    assert_eq!(written.count(), 2);
    assert_eq!(
        written.outcomes[1],
        WriteOutcome::rejected("conflict", Some("Document update conflict.".to_string()))
    );
}

#[test]
fn update_puts_the_full_document_at_its_revision() {
    let (schema, db, transport) = setup();
    let post = schema.model_by_name("Post").unwrap();
    let views = post.field_by_name("views").unwrap().id;

    transport.respond(
        StatusCode::CREATED,
        json!({"ok": true, "id": "abc123", "rev": "2-b"}),
    );

    let record = Record::from_values(
        post,
        vec![
            Value::from("abc123"),
            Value::from("1-a"),
            Value::Null,
            Value::from("Post"),
            Value::from("Hello"),
            Value::from(5),
        ],
    );

    let written = db
        .exec(
            &schema,
            Update {
                assignments: vec![(views, Value::from(6))],
                records: vec![record],
            }
            .into(),
        )
        .unwrap()
        .into_written()
        .unwrap();

    let request = transport.request(0);
    assert!(is(&request, Method::PUT, "/blog/abc123"));
    assert_eq!(
        body_of(&request),
        json!({
            "_id": "abc123",
            "_rev": "1-a",
            "couchdb_type": "Post",
            "title": "Hello",
            "views": 6
        })
    );
    assert_eq!(
        written.outcomes,
        vec![WriteOutcome::Persisted {
            id: "abc123".to_string(),
            rev: "2-b".to_string()
        }]
    );
}

#[test]
fn base_model_assignments_apply_to_subtype_records() {
    let (schema, db, transport) = setup();
    let post = schema.model_by_name("Post").unwrap();
    let draft = schema.model_by_name("Draft").unwrap();
    let title = post.field_by_name("title").unwrap().id;

    transport.ok(json!({"ok": true, "id": "d", "rev": "2-d"}));

    let record = Record::from_values(
        draft,
        vec![Value::from("d"), Value::from("1-d"), Value::Null, Value::from("Draft")],
    );

    db.exec(
        &schema,
        Update {
            assignments: vec![(title, Value::from("Renamed"))],
            records: vec![record],
        }
        .into(),
    )
    .unwrap();

    assert_eq!(body_of(&transport.request(0))["title"], json!("Renamed"));
}

#[test]
fn assignments_outside_the_record_hierarchy_are_rejected() {
    let (schema, db, transport) = setup();
    let post = schema.model_by_name("Post").unwrap();
    let draft = schema.model_by_name("Draft").unwrap();
    let comment = schema.model_by_name("Comment").unwrap();

    let comment_body = comment.field_by_name("body").unwrap().id;
    let draft_editor = draft.field_by_name("editor").unwrap().id;

    transport.ok(json!({"ok": true, "id": "c", "rev": "2-c"}));

    let persisted = |id: &str| {
        Record::from_values(
            post,
            vec![Value::from(id), Value::from("1-a"), Value::Null, Value::from("Post"), Value::from("Title")],
        )
    };

    for field in [comment_body, draft_editor] {
        let written = db
            .exec(
                &schema,
                Update {
                    assignments: vec![(field, Value::from("changed"))],
                    records: vec![persisted("a")],
                }
                .into(),
            )
            .unwrap()
            .into_written()
            .unwrap();

        assert_eq!(written.count(), 0);
        assert!(matches!(
            &written.outcomes[0],
            WriteOutcome::Rejected { error, .. } if error == "invalid_assignment"
        ));
    }
    assert!(transport.requests().is_empty());

    // Fields of the record's own model still apply.
    let title = post.field_by_name("title").unwrap().id;
    db.exec(
        &schema,
        Update {
            assignments: vec![(title, Value::from("changed"))],
            records: vec![persisted("c")],
        }
        .into(),
    )
    .unwrap();

    assert_eq!(body_of(&transport.request(0))["title"], json!("changed"));
}

#[test]
fn unsaved_records_are_not_sent() {
    let (schema, db, transport) = setup();
    let post = schema.model_by_name("Post").unwrap();

    let written = db
        .exec(&schema, Delete { records: vec![Record::new(post)] }.into())
        .unwrap()
        .into_written()
        .unwrap();

    assert!(transport.requests().is_empty());
    assert_eq!(written.count(), 0);
    assert!(!written.outcomes[0].is_persisted());

    let written = db
        .exec(
            &schema,
            Update {
                assignments: vec![],
                records: vec![Record::new(post)],
            }
            .into(),
        )
        .unwrap()
        .into_written()
        .unwrap();

    assert!(transport.requests().is_empty());
    assert_eq!(written.count(), 0);
}

#[test]
fn delete_sends_the_revision() {
    let (schema, db, transport) = setup();
    let post = schema.model_by_name("Post").unwrap();

    transport
        .ok(json!({"ok": true, "id": "abc123", "rev": "2-c"}))
        .respond(StatusCode::NOT_FOUND, not_found());

    let records = ["abc123", "gone"]
        .into_iter()
        .map(|id| {
            Record::from_values(
                post,
                vec![Value::from(id), Value::from("1-a"), Value::Null, Value::from("Post")],
            )
        })
        .collect();

    let written = db
        .exec(&schema, Delete { records }.into())
        .unwrap()
        .into_written()
        .unwrap();

    assert_eq!(
        transport.lines(),
        ["DELETE /blog/abc123?rev=1-a", "DELETE /blog/gone?rev=1-a"]
    );
    assert_eq!(written.count(), 1);
}

#[test]
fn ensure_database_tolerates_existing_database() {
    let (_, db, transport) = setup();

    transport
        .respond(StatusCode::CREATED, json!({"ok": true}))
        .respond(
            StatusCode::PRECONDITION_FAILED,
            json!({"error": "file_exists", "reason": "The database could not be created, the file already exists."}),
        )
        .respond(
            StatusCode::UNAUTHORIZED,
            json!({"error": "unauthorized", "reason": "You are not a server admin."}),
        );

    db.ensure_database().unwrap();
    db.ensure_database().unwrap();

    let err = db.ensure_database().unwrap_err();
    assert!(err.is_store());
    assert_eq!(transport.lines(), ["PUT /blog", "PUT /blog", "PUT /blog"]);
}
