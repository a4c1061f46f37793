use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Network request failed for {url}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP request failed for {url} with status {status}: {body}")]
    Api {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Response from {url} is not valid JSON")]
    InvalidJson {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Refresh did not complete within {after:?}")]
    Timeout { after: Duration },

    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),
}

impl TransportError {
    /// The HTTP status of an [`TransportError::Api`] error.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            TransportError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether repeating the request later could succeed.
    ///
    /// Connection problems, timeouts and server-side (5xx) responses are
    /// considered transient. Client-side (4xx) responses are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            TransportError::Network { .. } | TransportError::Timeout { .. } => true,
            TransportError::InvalidJson { .. } => true,
            TransportError::Api { status, .. } => {
                status.is_server_error() || *status == reqwest::StatusCode::TOO_MANY_REQUESTS
            }
            TransportError::ClientBuild(_) => false,
        }
    }
}
