//! Error types for the push gateway client.

use pushgateway_common::ParseTransportError;

/// Failure raised by an [`HttpClient`](crate::HttpClient) implementation.
///
/// The client never wraps or rewrites these; whatever the HTTP layer reports
/// (DNS, refused connection, TLS, timeout) reaches the caller as-is.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Custom(Box<dyn std::error::Error + Send + Sync>),
}

impl TransportError {
    /// Wrap an error from a non-reqwest HTTP client.
    pub fn custom<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        TransportError::Custom(err.into())
    }

    /// Whether the request was abandoned because a timeout elapsed.
    pub fn is_timeout(&self) -> bool {
        match self {
            TransportError::Http(e) => e.is_timeout(),
            TransportError::Custom(_) => false,
        }
    }
}

/// Error types for push gateway operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Unexpected status code {status} received from push gateway {address}: {body}")]
    UnexpectedResponse {
        status: u16,
        body: String,
        address: String,
    },

    #[error("Failed to render metrics: {0}")]
    Render(#[from] prometheus::Error),
}

impl From<ParseTransportError> for Error {
    fn from(err: ParseTransportError) -> Self {
        Error::InvalidConfiguration(err.to_string())
    }
}

impl Error {
    /// Status code of an [`Error::UnexpectedResponse`].
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::UnexpectedResponse { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
