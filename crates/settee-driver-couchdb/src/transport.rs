use crate::Config;
use http::{Method, StatusCode};
use settee_core::{Error, Result};
use std::{fmt, io};

/// One HTTP request to the store. `path` is absolute and already encoded,
/// including any query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub path: String,

    /// JSON request body
    pub body: Option<String>,
}

/// A completed HTTP exchange, whatever its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Sends requests to a store endpoint.
///
/// An implementation returns `Ok` for every response it receives, including
/// non-2xx ones. `Err` is reserved for failures to exchange a request at
/// all; an unreachable endpoint is reported as [`Error::connection`].
pub trait Transport: fmt::Debug + Send + Sync + 'static {
    /// Base URL of the endpoint, e.g. `http://localhost:5984`
    fn endpoint(&self) -> &str;

    fn send(&self, request: &Request) -> Result<RawResponse>;
}

/// [`Transport`] over `ureq`. The agent keeps connections alive between
/// requests.
pub struct HttpTransport {
    endpoint: String,
    agent: ureq::Agent,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>, config: &Config) -> Self {
        let agent_config = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_connect(config.connect_timeout)
            .timeout_recv_response(config.read_timeout)
            .timeout_recv_body(config.read_timeout)
            .build();

        Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            agent: ureq::Agent::new_with_config(agent_config),
        }
    }

    fn dispatch(&self, request: &Request) -> core::result::Result<http::Response<ureq::Body>, ureq::Error> {
        let url = format!("{}{}", self.endpoint, request.path);

        match (&request.method, &request.body) {
            (&Method::GET, _) => self.agent.get(&url).call(),
            (&Method::DELETE, _) => self.agent.delete(&url).call(),
            (&Method::PUT, Some(body)) => self
                .agent
                .put(&url)
                .header("content-type", "application/json")
                .send(body.as_str()),
            (&Method::PUT, None) => self.agent.put(&url).send_empty(),
            (&Method::POST, Some(body)) => self
                .agent
                .post(&url)
                .header("content-type", "application/json")
                .send(body.as_str()),
            (&Method::POST, None) => self.agent.post(&url).send_empty(),
            (method, _) => Err(ureq::Error::Io(io::Error::new(
                io::ErrorKind::Unsupported,
                format!("unsupported request method {method}"),
            ))),
        }
    }
}

impl Transport for HttpTransport {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn send(&self, request: &Request) -> Result<RawResponse> {
        let mut response = self.dispatch(request).map_err(|err| match err {
            ureq::Error::ConnectionFailed | ureq::Error::HostNotFound => {
                Error::connection(&self.endpoint)
            }
            ureq::Error::Io(io) if io.kind() == io::ErrorKind::ConnectionRefused => {
                Error::connection(&self.endpoint)
            }
            err => Error::driver_operation_failed(err),
        })?;

        let status = response.status();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(Error::driver_operation_failed)?;

        Ok(RawResponse { status, body })
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}
