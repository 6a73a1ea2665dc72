use thiserror::Error;

pub type Result<T, E = CoinloreError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum CoinloreError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status} {status_text}")]
    Status {
        status: u16,
        status_text: String,
        body: String,
    },

    #[error("error decoding {endpoint} response body: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The endpoint returned an empty array where exactly one element was expected.
    #[error("{endpoint} returned an empty array")]
    EmptyResponse { endpoint: &'static str },

    #[error("request cancelled")]
    Cancelled,

    #[error("request task failed: {0}")]
    Task(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl CoinloreError {
    /// HTTP status code carried by the failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn status_text(&self) -> Option<&str> {
        match self {
            Self::Status { status_text, .. } => Some(status_text),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
