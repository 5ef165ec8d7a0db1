//! API server configuration.

/// Port the server listens on unless told otherwise.
pub const DEFAULT_PORT: u16 = 8080;

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "0.0.0.0:8080").
    pub bind_addr: String,
}

impl ApiConfig {
    /// Builds a config listening on `host:port`.
    pub fn new(host: &str, port: u16) -> Self {
        Self {
            bind_addr: format!("{host}:{port}"),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new("0.0.0.0", DEFAULT_PORT)
    }
}
