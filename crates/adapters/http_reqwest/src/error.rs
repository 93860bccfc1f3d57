//! HTTP adapter error types.

use wordclock_domain::error::{ResponseError, WordClockError};

/// Errors specific to the HTTP adapter.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The reqwest client could not be built.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// The request could not be sent or timed out.
    #[error("failed to reach the device")]
    Request(#[source] reqwest::Error),

    /// The response body could not be read.
    #[error("failed to read response body")]
    Body(#[source] reqwest::Error),

    /// The device answered with something unusable.
    #[error("unexpected response")]
    Response(#[source] ResponseError),
}

impl HttpError {
    /// Convert into a [`WordClockError`] for propagation across port
    /// boundaries.
    pub fn into_domain(self) -> WordClockError {
        match self {
            Self::Response(err) => WordClockError::Response(err),
            other => WordClockError::Transport(Box::new(other)),
        }
    }
}

impl From<HttpError> for WordClockError {
    fn from(err: HttpError) -> Self {
        err.into_domain()
    }
}

impl From<ResponseError> for HttpError {
    fn from(err: ResponseError) -> Self {
        Self::Response(err)
    }
}
