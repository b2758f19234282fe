use crate::transport::{Request, Transport};
use http::Method;
use serde_json::{Map, Value as Json};
use settee_core::{Error, Result};

/// A JSON object response body.
pub(crate) type Body = Map<String, Json>;

/// Issues store requests and decodes their JSON bodies.
///
/// Every call is logged before it is sent. Store-reported failures are
/// returned as ordinary bodies carrying an `"error"` member; only failures
/// to complete the exchange are returned as `Err`.
#[derive(Debug)]
pub(crate) struct Client {
    transport: Box<dyn Transport>,
}

impl Client {
    pub(crate) fn new(transport: Box<dyn Transport>) -> Self {
        Self { transport }
    }

    pub(crate) fn endpoint(&self) -> &str {
        self.transport.endpoint()
    }

    pub(crate) fn get(&self, path: &str) -> Result<Body> {
        self.request(Request::new(Method::GET, path))
    }

    pub(crate) fn put(&self, path: &str, body: Option<&Json>) -> Result<Body> {
        let mut request = Request::new(Method::PUT, path);
        if let Some(body) = body {
            request = request.body(body.to_string());
        }
        self.request(request)
    }

    pub(crate) fn post(&self, path: &str, body: &Json) -> Result<Body> {
        self.request(Request::new(Method::POST, path).body(body.to_string()))
    }

    pub(crate) fn delete(&self, path: &str) -> Result<Body> {
        self.request(Request::new(Method::DELETE, path))
    }

    fn request(&self, request: Request) -> Result<Body> {
        tracing::debug!(method = %request.method, path = %request.path, "couchdb request");

        let response = match self.transport.send(&request) {
            Ok(response) => response,
            Err(error) => {
                if error.is_connection() {
                    tracing::error!(endpoint = self.endpoint(), "could not connect to CouchDB");
                } else {
                    tracing::error!(method = %request.method, path = %request.path, %error, "couchdb request failed");
                }
                return Err(error);
            }
        };

        let mut body = if response.body.trim().is_empty() {
            Body::new()
        } else {
            match serde_json::from_str::<Json>(&response.body) {
                Ok(Json::Object(body)) => body,
                Ok(other) => {
                    return Err(Error::invalid_result(format!(
                        "{} {} answered with a non-object body: {other}",
                        request.method, request.path
                    )))
                }
                Err(err) => {
                    return Err(Error::from(err).context(Error::invalid_result(format!(
                        "{} {} answered with a body that is not JSON",
                        request.method, request.path
                    ))))
                }
            }
        };

        if !response.status.is_success() && !body.contains_key("error") {
            body.insert(
                "error".to_string(),
                Json::String(
                    response
                        .status
                        .canonical_reason()
                        .map(|reason| reason.to_lowercase().replace(' ', "_"))
                        .unwrap_or_else(|| response.status.as_u16().to_string()),
                ),
            );
        }

        Ok(body)
    }
}

/// Returns the store-reported error in `body`, if any.
pub(crate) fn store_error(body: &Body) -> Option<(String, Option<String>)> {
    let error = body.get("error")?;

    let error = match error {
        Json::String(error) => error.clone(),
        other => other.to_string(),
    };
    let reason = body
        .get("reason")
        .and_then(Json::as_str)
        .map(str::to_string);

    Some((error, reason))
}

/// Converts a store-reported error into an [`Error`].
pub(crate) fn check(body: Body) -> Result<Body> {
    match store_error(&body) {
        Some((error, reason)) => Err(Error::store(error, reason)),
        None => Ok(body),
    }
}

/// True when a write was acknowledged with `"ok": true`.
pub(crate) fn is_ok(body: &Body) -> bool {
    body.get("ok").and_then(Json::as_bool).unwrap_or(false)
}
