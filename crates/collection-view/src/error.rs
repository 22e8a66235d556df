use thiserror::Error;

/// Failure of a remote collection call.
///
/// All variants reach the view as a single failure message (`Display`).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Network unreachable, request could not be sent
    #[error("{0}")]
    Transport(String),

    /// Non-success status; `message` comes from the response body
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Response body was not the expected JSON shape
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl SourceError {
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        SourceError::Server {
            status,
            message: message.into(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            SourceError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return SourceError::Decode(err.to_string());
        }
        match err.status() {
            Some(status) => SourceError::server(status.as_u16(), format!("HTTP {}", status)),
            None => SourceError::Transport(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Decode(err.to_string())
    }
}

pub type SourceResult<T> = Result<T, SourceError>;
