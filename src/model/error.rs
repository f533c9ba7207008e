use thiserror::Error;

/// The standard result type used throughout the application.
pub type StdResult<T> = Result<T, anyhow::Error>;

/// The outcome of a single cards fetch.
pub type FetchResult = Result<Vec<super::Card>, DomainError>;

const DEFAULT_NETWORK_MESSAGE: &str = "Network error";
const DEFAULT_GENERIC_MESSAGE: &str = "Something went wrong";

/// Error surfaced to the presentation layer when a fetch fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The remote service could not be reached (connectivity, IO or timeout failure).
    #[error("{}", .0.as_deref().unwrap_or(DEFAULT_NETWORK_MESSAGE))]
    Network(Option<String>),

    /// Any other failure, including malformed responses.
    #[error("{}", .0.as_deref().unwrap_or(DEFAULT_GENERIC_MESSAGE))]
    Generic(Option<String>),
}

impl DomainError {
    /// Human readable message, falling back to a default for the error kind.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Whether the error is a network error.
    pub fn is_network(&self) -> bool {
        matches!(self, DomainError::Network(_))
    }
}

/// Error raised by a cards service implementation.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Connectivity failure, including timeouts
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },
    /// Non successful HTTP status
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    /// Decoding error
    #[error("Decoding error: {0}")]
    Decode(String),
}

impl ServiceError {
    /// Creates a network error without an underlying transport error.
    pub fn network(message: &str) -> Self {
        ServiceError::Network {
            message: message.to_string(),
            source: None,
        }
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            ServiceError::Decode(error.to_string())
        } else {
            ServiceError::Network {
                message: error.to_string(),
                source: Some(error),
            }
        }
    }
}
