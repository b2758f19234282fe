#![allow(dead_code)]

use http::{Method, StatusCode};
use serde_json::{json, Value as Json};
use settee_core::{
    schema::{Model, ViewSource},
    stmt::Type,
    Error, Result, Schema,
};
use settee_driver_couchdb::{
    transport::{RawResponse, Request},
    Config, CouchDb, Database, Transport,
};
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

/// Answers requests from a queue and records what was sent.
#[derive(Debug, Clone, Default)]
pub struct FakeTransport {
    state: Arc<Mutex<State>>,
}

#[derive(Debug, Default)]
struct State {
    responses: VecDeque<Result<RawResponse>>,
    requests: Vec<Request>,
}

impl FakeTransport {
    pub fn respond(&self, status: StatusCode, body: Json) -> &Self {
        self.state.lock().unwrap().responses.push_back(Ok(RawResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    pub fn ok(&self, body: Json) -> &Self {
        self.respond(StatusCode::OK, body)
    }

    pub fn fail(&self, error: Error) -> &Self {
        self.state.lock().unwrap().responses.push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn request(&self, index: usize) -> Request {
        self.requests()[index].clone()
    }

    /// `METHOD path` of every request sent so far.
    pub fn lines(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|request| format!("{} {}", request.method, request.path))
            .collect()
    }
}

impl Transport for FakeTransport {
    fn endpoint(&self) -> &str {
        "http://localhost:5984"
    }

    fn send(&self, request: &Request) -> Result<RawResponse> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(request.clone());
        state
            .responses
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected request: {} {}", request.method, request.path))
    }
}

pub fn body_of(request: &Request) -> Json {
    serde_json::from_str(request.body.as_deref().expect("request has no body")).unwrap()
}

pub fn is(request: &Request, method: Method, path: &str) -> bool {
    request.method == method && request.path == path
}

/// `Post` with a `Draft` subtype, plus an unrelated `Comment`.
pub fn schema() -> Schema {
    Schema::builder()
        .model(
            Model::builder("Post")
                .field("title", Type::String)
                .field("views", Type::I64)
                .view("default", "by_title", || {
                    Some(ViewSource::map(
                        "function(doc) { if (doc.couchdb_type == 'Post') { emit(doc.title, doc); } }",
                    ))
                })
                .view("default", "count", || {
                    Some(ViewSource::map("function(doc) { emit(doc.title, 1); }").with_reduce("_sum"))
                }),
        )
        .model(
            Model::builder("Draft")
                .extends("Post")
                .field("editor", Type::String)
                .view("default", "by_editor", || {
                    Some(ViewSource::map("function(doc) { emit(doc.editor, doc); }"))
                }),
        )
        .model(Model::builder("Comment").field("body", Type::String))
        .build()
        .unwrap()
}

pub fn setup() -> (Schema, CouchDb, FakeTransport) {
    let transport = FakeTransport::default();
    let db = CouchDb::new(
        Database::parse("blog").unwrap(),
        transport.clone(),
        Config::default(),
    );
    (schema(), db, transport)
}

pub fn not_found() -> Json {
    json!({"error": "not_found", "reason": "missing"})
}
