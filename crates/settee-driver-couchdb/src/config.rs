use std::time::Duration;

/// Driver settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Repository whose views are materialized when provisioning design
    /// documents and when checking a view for a reduce function.
    pub repository: String,

    /// Maximum time to establish a connection. `None` waits indefinitely.
    pub connect_timeout: Option<Duration>,

    /// Maximum time to wait for a response once the request is sent. `None`
    /// waits indefinitely.
    pub read_timeout: Option<Duration>,
}

impl Config {
    pub const DEFAULT_REPOSITORY: &'static str = "default";

    pub fn repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = repository.into();
        self
    }

    pub fn connect_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn read_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.read_timeout = timeout;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repository: Self::DEFAULT_REPOSITORY.to_string(),
            connect_timeout: Some(Duration::from_secs(10)),
            read_timeout: None,
        }
    }
}
