//! Panel service — the form-to-endpoint use-cases.

use std::sync::Arc;

use serde::Serialize;
use tokio::task::JoinHandle;

use wordclock_domain::color::ColorPolicy;
use wordclock_domain::control::ControlAction;
use wordclock_domain::endpoint::{Endpoint, RESTARTING_TO_CONNECT};
use wordclock_domain::error::{ValidationError, WordClockError};
use wordclock_domain::outcome::{Outcome, RequestOutcome};
use wordclock_domain::settings::{BrightnessSetting, TimezoneSetting, WifiCredential};

use crate::ports::{Notification, Notifier, Transport};

/// Turns panel input into device requests and reports every outcome.
///
/// Cloning is cheap: both ports sit behind an [`Arc`]. Operations take
/// `&self` and share no mutable state, so concurrent submits run
/// independently and may be reported in any order.
pub struct PanelService<T, N> {
    transport: Arc<T>,
    notifier: Arc<N>,
    color_policy: ColorPolicy,
}

impl<T, N> Clone for PanelService<T, N> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            notifier: Arc::clone(&self.notifier),
            color_policy: self.color_policy,
        }
    }
}

impl<T, N> PanelService<T, N>
where
    T: Transport + 'static,
    N: Notifier + 'static,
{
    /// Create a new service using the lenient colour policy.
    pub fn new(transport: T, notifier: N) -> Self {
        Self {
            transport: Arc::new(transport),
            notifier: Arc::new(notifier),
            color_policy: ColorPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_color_policy(mut self, color_policy: ColorPolicy) -> Self {
        self.color_policy = color_policy;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Send `payload` to `endpoint` and report the result.
    ///
    /// Serialization, transport and response failures all end up as
    /// [`Outcome::Err`]; nothing is retried.
    pub async fn dispatch<P>(&self, endpoint: Endpoint, payload: &P) -> Outcome
    where
        P: Serialize + Sync + ?Sized,
    {
        let result = match serde_json::to_value(payload) {
            Ok(body) => {
                tracing::debug!(%endpoint, "sending request");
                self.transport.post_json(endpoint, body).await
            }
            Err(err) => Err(WordClockError::from(err)),
        };
        let outcome = Outcome::from(result);
        self.report(&outcome).await;
        outcome
    }

    /// Submit a `#RRGGBB` colour to `controlColor`.
    ///
    /// Under [`ColorPolicy::Lenient`] malformed input is still sent, with
    /// absent channels as `null`. Under [`ColorPolicy::Strict`] it is reported
    /// as an error and nothing is sent.
    #[tracing::instrument(skip(self))]
    pub async fn submit_color(&self, value: &str) -> Outcome {
        match self.color_policy.payload(value) {
            Ok(payload) => {
                tracing::debug!(r = ?payload.r, g = ?payload.g, b = ?payload.b, "decomposed colour");
                self.dispatch(Endpoint::ControlColor, &payload).await
            }
            Err(err) => {
                let err = WordClockError::from(ValidationError::from(err));
                let outcome = Outcome::from(Err::<RequestOutcome, _>(err));
                self.report(&outcome).await;
                outcome
            }
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn submit_timezone(&self, setting: TimezoneSetting) -> Outcome {
        self.dispatch(Endpoint::SetTimeZone, &setting).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn submit_brightness(&self, setting: BrightnessSetting) -> Outcome {
        self.dispatch(Endpoint::SetBrightness, &setting).await
    }

    /// Ask the device to join another network.
    ///
    /// The request runs on its own task and is not awaited: the user is told
    /// [`RESTARTING_TO_CONNECT`] right away, whether or not the device ever
    /// answers. Should an answer arrive, it is reported like any other.
    /// The returned handle resolves to that outcome.
    #[tracing::instrument(skip(self, credential), fields(ssid = %credential.ssid))]
    pub async fn submit_connect(&self, credential: WifiCredential) -> JoinHandle<Outcome> {
        let service = self.clone();
        let request =
            tokio::spawn(async move { service.dispatch(Endpoint::Connect, &credential).await });
        self.notifier
            .notify(Notification::info(RESTARTING_TO_CONNECT))
            .await;
        request
    }

    /// Trigger a one-shot control action; the device's text answer is the
    /// outcome message.
    #[tracing::instrument(skip(self))]
    pub async fn perform_control(&self, action: ControlAction) -> Outcome {
        let result = self
            .transport
            .send_control(action)
            .await
            .map(RequestOutcome::new);
        let outcome = Outcome::from(result);
        self.report(&outcome).await;
        outcome
    }

    async fn report(&self, outcome: &Outcome) {
        match outcome {
            Outcome::Ok { msg } => tracing::info!(msg = %msg, "request succeeded"),
            Outcome::Err { reason } => tracing::warn!(reason = %reason, "request failed"),
        }
        self.notifier.notify(Notification::from(outcome)).await;
    }
}
