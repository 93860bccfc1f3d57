//! Request outcomes — what the user is told after every request.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ResponseError, WordClockError};

/// A well-formed device response: a JSON object with a string `msg`.
///
/// Any other fields are kept in `extra` but carry no meaning for the panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestOutcome {
    pub msg: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RequestOutcome {
    #[must_use]
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            extra: Map::new(),
        }
    }

    /// Interpret a raw JSON response body.
    ///
    /// # Errors
    ///
    /// [`ResponseError::NotJson`] when the body does not parse,
    /// [`ResponseError::MissingMessage`] when it has no string `msg`.
    pub fn from_json(body: &str) -> Result<Self, ResponseError> {
        let value: Value =
            serde_json::from_str(body).map_err(|err| ResponseError::NotJson(err.to_string()))?;
        Self::from_value(value)
    }

    /// Interpret an already parsed JSON value.
    ///
    /// # Errors
    ///
    /// [`ResponseError::MissingMessage`] when `value` is not an object with a
    /// string `msg` field.
    pub fn from_value(value: Value) -> Result<Self, ResponseError> {
        match value {
            Value::Object(mut fields) => match fields.remove("msg") {
                Some(Value::String(msg)) => Ok(Self { msg, extra: fields }),
                _ => Err(ResponseError::MissingMessage),
            },
            _ => Err(ResponseError::MissingMessage),
        }
    }

    /// Interpret a response given its HTTP status and body.
    ///
    /// A success status requires a well-formed body. Any other status is an
    /// error, reported with the body's `msg` when there is one.
    ///
    /// # Errors
    ///
    /// See [`from_json`](Self::from_json); additionally
    /// [`ResponseError::Status`] for non-2xx statuses.
    pub fn from_response(status: u16, body: &str) -> Result<Self, ResponseError> {
        if (200..300).contains(&status) {
            return Self::from_json(body);
        }
        let message = Self::from_json(body).map_or_else(|_| format!("HTTP {status}"), |o| o.msg);
        Err(ResponseError::Status { status, message })
    }
}

/// The result of one panel operation, as handed to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Ok { msg: String },
    Err { reason: String },
}

impl Outcome {
    #[must_use]
    pub fn ok(msg: impl Into<String>) -> Self {
        Self::Ok { msg: msg.into() }
    }

    #[must_use]
    pub fn err(reason: impl Into<String>) -> Self {
        Self::Err {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }

    /// The text shown to the user: `msg` on success, `reason` on failure.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Ok { msg } => msg,
            Self::Err { reason } => reason,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl From<Result<RequestOutcome, WordClockError>> for Outcome {
    fn from(result: Result<RequestOutcome, WordClockError>) -> Self {
        match result {
            Ok(outcome) => Self::Ok { msg: outcome.msg },
            Err(err) => Self::Err {
                reason: err.reason(),
            },
        }
    }
}
