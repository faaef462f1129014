use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("invalid registry address {address:?}: {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("invalid client config: {0}")]
    InvalidConfig(String),

    #[error("instance {active} is already registered; refusing to register {requested}")]
    AlreadyRegistered { active: String, requested: String },

    #[error("failed to encode register payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("failed to build http client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Failure below HTTP semantics: DNS, connect, TLS, timeout, body read.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("transport failed: {0}")]
    Other(String),
}
