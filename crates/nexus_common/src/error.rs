//! Error types for the Nexus catalog client.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NexusError {
    #[error("NEXUS_API_KEY environment variable is not set.")]
    MissingApiKey,

    #[error("API key contains characters that cannot be sent in a header")]
    InvalidApiKey,

    #[error("Failed to create HTTP client: {0}")]
    Client(String),

    #[error("Request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("Request to {url} timed out after {secs} seconds")]
    Timeout { url: String, secs: u64 },

    #[error("{url} returned HTTP {status}: {body}")]
    Status { url: String, status: u16, body: String },

    #[error("Invalid JSON from {url}: {message}")]
    InvalidJson { url: String, message: String },

    #[error("Config error in {path}: {message}")]
    Config { path: String, message: String },
}

impl NexusError {
    /// HTTP status carried by the error, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            NexusError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
