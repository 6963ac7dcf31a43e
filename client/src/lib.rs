pub use crate::config::ClientConfig;
pub use crate::http::Client;
pub use crate::responses::*;

pub mod config;
pub mod http;
pub mod responses;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("JSON serialization/deserialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("Missing configuration: {0} is not set")]
    MissingConfig(&'static str),
    #[error("{0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;
