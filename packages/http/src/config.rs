//! Client configuration.

use std::sync::Arc;

use crate::error::Error;
use crate::executor::{HttpExecutor, ReqwestExecutor};
use crate::headers::DefaultHeaders;

/// Environment variable read by [`ClientConfig::from_env`].
pub const DEFAULT_HEADERS_ENV: &str = "RELAY_DEFAULT_HEADERS";

/// Everything an [`HttpClient`](crate::HttpClient) needs besides the URL of
/// each call.
#[derive(Clone)]
pub struct ClientConfig {
    pub(crate) default_headers: DefaultHeaders,
    pub(crate) executor: Arc<dyn HttpExecutor>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            default_headers: DefaultHeaders::new(),
            executor: Arc::new(ReqwestExecutor::new()),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read default headers from `RELAY_DEFAULT_HEADERS`, formatted as
    /// `Name: value; Other-Name: value`. An unset variable yields no
    /// defaults.
    pub fn from_env() -> Result<Self, Error> {
        let config = Self::new();
        if let Ok(spec) = std::env::var(DEFAULT_HEADERS_ENV) {
            for (name, value) in parse_header_list(&spec)? {
                config.default_headers.set(&name, &value)?;
            }
        }
        Ok(config)
    }

    /// Share an existing header set, e.g. between several clients.
    pub fn with_default_headers(mut self, default_headers: DefaultHeaders) -> Self {
        self.default_headers = default_headers;
        self
    }

    /// Add a default header sent with every request
    pub fn with_default_header(self, name: &str, value: &str) -> Result<Self, Error> {
        self.default_headers.set(name, value)?;
        Ok(self)
    }

    /// Use a preconfigured reqwest client (proxies, TLS roots, ...).
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.executor = Arc::new(ReqwestExecutor::with_client(client));
        self
    }

    pub fn with_executor(mut self, executor: Arc<dyn HttpExecutor>) -> Self {
        self.executor = executor;
        self
    }

    pub fn default_headers(&self) -> &DefaultHeaders {
        &self.default_headers
    }
}

/// Parse `Name: value; Other: value`. Empty entries are skipped.
pub fn parse_header_list(spec: &str) -> Result<Vec<(String, String)>, Error> {
    spec.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (name, value) = entry.split_once(':').ok_or_else(|| Error::Config {
                message: format!("malformed header entry '{entry}', expected 'Name: value'"),
            })?;
            Ok((name.trim().to_string(), value.trim().to_string()))
        })
        .collect()
}
