//! HTTP client wrapping `gloo-net` for the device's JSON endpoints.

use gloo_net::http::Request;
use serde::Serialize;
use wordclock_domain::endpoint::Endpoint;
use wordclock_domain::error::ResponseError;
use wordclock_domain::outcome::{Outcome, RequestOutcome};

/// Error returned by [`make_request`] before it becomes an [`Outcome`].
#[derive(Debug, Clone)]
pub struct ApiError {
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self {
            message: format!("request failed: {err}"),
        }
    }
}

impl From<ResponseError> for ApiError {
    fn from(err: ResponseError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// POST `payload` as JSON to `/<endpoint>` on the page's own origin.
///
/// Every failure becomes an [`Outcome::Err`]; nothing is retried.
pub async fn make_request<P: Serialize>(endpoint: Endpoint, payload: &P) -> Outcome {
    match post(endpoint, payload).await {
        Ok(outcome) => Outcome::ok(outcome.msg),
        Err(err) => Outcome::Err {
            reason: err.message,
        },
    }
}

async fn post<P: Serialize>(endpoint: Endpoint, payload: &P) -> Result<RequestOutcome, ApiError> {
    let response = Request::post(&endpoint.path()).json(payload)?.send().await?;
    let status = response.status();
    let text = response.text().await?;
    Ok(RequestOutcome::from_response(status, &text)?)
}
