//! Transport port — how a request reaches the device.

use std::future::Future;

use wordclock_domain::control::ControlAction;
use wordclock_domain::endpoint::Endpoint;
use wordclock_domain::error::WordClockError;
use wordclock_domain::outcome::RequestOutcome;

/// Delivers requests to the word clock.
///
/// Implementations decide the base address (see
/// [`Endpoint::mode`](wordclock_domain::endpoint::Endpoint::mode)), the HTTP
/// client and any timeout. They must not retry.
pub trait Transport: Send + Sync {
    /// POST `body` as JSON to `/<endpoint action name>` and interpret the
    /// answer as a [`RequestOutcome`].
    ///
    /// The request carries `Content-Type: application/json`.
    fn post_json(
        &self,
        endpoint: Endpoint,
        body: serde_json::Value,
    ) -> impl Future<Output = Result<RequestOutcome, WordClockError>> + Send;

    /// GET `/control/<action>` and return the plain-text answer.
    fn send_control(
        &self,
        action: ControlAction,
    ) -> impl Future<Output = Result<String, WordClockError>> + Send;
}
