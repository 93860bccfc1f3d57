//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`WordClockError`] via `#[from]` at the port boundary.

/// Why a colour string could not be decomposed strictly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    /// The value does not start with `#`.
    #[error("colour must start with '#'")]
    MissingHash,

    /// The value is not exactly `#` followed by six characters.
    #[error("colour must be 7 characters long, got {0}")]
    Length(usize),

    /// One channel is not a two-digit hexadecimal number.
    #[error("{channel} channel {text:?} is not hexadecimal")]
    InvalidChannel {
        channel: &'static str,
        text: String,
    },
}

/// Input rejected before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The colour value is malformed.
    #[error("invalid colour")]
    Color(#[from] ColorParseError),
}

/// The device answered, but not with something the panel can use.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResponseError {
    /// The body is not valid JSON.
    #[error("response is not JSON: {0}")]
    NotJson(String),

    /// The body is JSON but carries no string `msg` field.
    #[error("response has no 'msg' field")]
    MissingMessage,

    /// The device returned a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },
}

/// Top-level error for every panel operation.
#[derive(Debug, thiserror::Error)]
pub enum WordClockError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("request failed")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("unexpected response")]
    Response(#[from] ResponseError),

    #[error("failed to encode request body")]
    Encode(#[from] serde_json::Error),
}

impl WordClockError {
    /// Human readable reason including the innermost cause.
    ///
    /// Used as the `reason` of a failed [`Outcome`](crate::outcome::Outcome).
    #[must_use]
    pub fn reason(&self) -> String {
        match self {
            Self::Validation(err) => match err {
                ValidationError::Color(inner) => format!("{err}: {inner}"),
            },
            Self::Transport(err) => format!("{self}: {err}"),
            Self::Response(err) => err.to_string(),
            Self::Encode(err) => format!("{self}: {err}"),
        }
    }
}
