use thiserror::Error;

/// The server answered with a non-2xx status.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Request failed with status {status}: {}", .message.as_deref().unwrap_or("no message"))]
pub struct ApiError {
    /// HTTP status code of the response.
    pub status: u16,
    /// `message` field of the error body, if the server sent one.
    pub message: Option<String>,
}

impl ApiError {
    pub fn new(status: u16, message: Option<String>) -> Self {
        Self { status, message }
    }

    /// Server message or the provided fallback.
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.message.as_deref().unwrap_or(fallback)
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

/// The request never completed (DNS failure, connection refused, timeout).
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Network error: {reason}")]
pub struct NetworkError {
    pub reason: String,
    pub timed_out: bool,
}

impl NetworkError {
    pub fn new(reason: impl Into<String>, timed_out: bool) -> Self {
        Self {
            reason: reason.into(),
            timed_out,
        }
    }
}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string(), err.is_timeout())
    }
}
