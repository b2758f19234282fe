mod assemble;
mod client;

mod config;
pub use config::Config;

mod database;
pub use database::Database;

mod document;
mod op;
mod path;
mod route;

pub mod transport;
pub use transport::{HttpTransport, Transport};

use client::Client;
use settee_core::{
    driver::{Driver, Operation, Response},
    schema::ModelId,
    Error, Result, Schema,
};
use url::Url;

/// Port CouchDB listens on unless the connection URL names another.
pub const DEFAULT_PORT: u16 = 5984;

/// A CouchDB database driven through its HTTP API.
#[derive(Debug)]
pub struct CouchDb {
    /// Issues requests to the server
    client: Client,

    /// The database every request targets
    database: Database,

    config: Config,
}

impl CouchDb {
    /// Connects to the database named by `url`, e.g.
    /// `couchdb://localhost:5984/blog`.
    pub fn connect(url: &str) -> Result<Self> {
        Self::with_config(url, Config::default())
    }

    pub fn with_config(url: &str, config: Config) -> Result<Self> {
        let url = Url::parse(url).map_err(Error::driver_operation_failed)?;

        let scheme = match url.scheme() {
            "couchdb" | "http" => "http",
            "https" => "https",
            _ => {
                return Err(Error::invalid_connection_url(format!(
                    "connection URL does not have a `couchdb`, `http` or `https` scheme; url={url}"
                )))
            }
        };

        let Some(host) = url.host_str() else {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not name a host; url={url}"
            )));
        };

        let database = Database::parse(url.path())?;
        let endpoint = format!("{scheme}://{host}:{}", url.port().unwrap_or(DEFAULT_PORT));

        let transport = HttpTransport::new(endpoint, &config);
        Ok(Self::new(database, transport, config))
    }

    /// Drives `database` through a caller-supplied transport.
    pub fn new(database: Database, transport: impl Transport, config: Config) -> Self {
        Self {
            client: Client::new(Box::new(transport)),
            database,
            config,
        }
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Creates the database if it does not exist yet.
    pub fn ensure_database(&self) -> Result<()> {
        let response = self.client.put(&path::database(&self.database), None)?;

        match client::store_error(&response) {
            Some((error, _)) if error == "file_exists" => Ok(()),
            Some((error, reason)) => Err(Error::store(error, reason)),
            None => Ok(()),
        }
    }
}

impl Driver for CouchDb {
    fn exec(&self, schema: &Schema, op: Operation) -> Result<Response> {
        match op {
            Operation::Insert(op) => self.exec_insert(schema, op),
            Operation::Read(op) => self.exec_read(schema, op),
            Operation::Update(op) => self.exec_update(schema, op),
            Operation::Delete(op) => self.exec_delete(schema, op),
        }
    }

    fn create_model_storage(&self, schema: &Schema, model: ModelId) -> Result<()> {
        self.exec_create_views(schema, model)
    }

    fn destroy_model_storage(&self, schema: &Schema, model: ModelId) -> Result<()> {
        self.exec_destroy_views(schema, model)
    }
}
