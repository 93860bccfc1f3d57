//! [`Transport`] implementation over a shared `reqwest` client.

use std::future::Future;

use reqwest::Client;

use wordclock_app::ports::Transport;
use wordclock_domain::control::ControlAction;
use wordclock_domain::endpoint::{DeviceMode, Endpoint};
use wordclock_domain::error::{ResponseError, WordClockError};
use wordclock_domain::outcome::RequestOutcome;

use crate::config::HttpConfig;
use crate::error::HttpError;

/// Sends panel requests to the word clock over HTTP.
///
/// Each call is a single attempt. A timeout applies only when the
/// configuration sets one.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    config: HttpConfig,
}

impl ReqwestTransport {
    /// Build a transport with its own connection pool.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Client`] if the underlying client cannot be built.
    pub fn new(config: HttpConfig) -> Result<Self, HttpError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(HttpError::Client)?;
        Ok(Self { client, config })
    }

    fn url(&self, mode: DeviceMode, path: &str) -> String {
        format!("{}{path}", self.config.base_url_for(mode))
    }
}

impl Transport for ReqwestTransport {
    fn post_json(
        &self,
        endpoint: Endpoint,
        body: serde_json::Value,
    ) -> impl Future<Output = Result<RequestOutcome, WordClockError>> + Send {
        let request = self
            .client
            .post(self.url(endpoint.mode(), &endpoint.path()))
            .json(&body);

        async move {
            let response = request.send().await.map_err(HttpError::Request)?;
            let status = response.status().as_u16();
            let text = response.text().await.map_err(HttpError::Body)?;
            tracing::debug!(%endpoint, status, "device answered");
            RequestOutcome::from_response(status, &text)
                .map_err(|err| HttpError::from(err).into_domain())
        }
    }

    fn send_control(
        &self,
        action: ControlAction,
    ) -> impl Future<Output = Result<String, WordClockError>> + Send {
        let request = self
            .client
            .get(self.url(DeviceMode::Station, &action.path()));

        async move {
            let response = request.send().await.map_err(HttpError::Request)?;
            let status = response.status();
            let text = response.text().await.map_err(HttpError::Body)?;
            tracing::debug!(%action, status = status.as_u16(), "device answered");
            if !status.is_success() {
                return Err(HttpError::from(ResponseError::Status {
                    status: status.as_u16(),
                    message: format!("HTTP {}", status.as_u16()),
                })
                .into_domain());
            }
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::{Path, State};
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{Value, json};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    type Seen = Arc<Mutex<Vec<Value>>>;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn config_for(url: &str) -> HttpConfig {
        HttpConfig {
            base_url: url.to_string(),
            ap_url: url.to_string(),
            timeout_secs: 0,
        }
    }

    async fn record(State(seen): State<Seen>, Json(body): Json<Value>) -> Json<Value> {
        seen.lock().unwrap().push(body);
        Json(json!({"msg": "Color set"}))
    }

    #[tokio::test]
    async fn should_post_json_body_to_action_path() {
        let seen = Seen::default();
        let url = serve(
            Router::new()
                .route("/controlColor", post(record))
                .with_state(Arc::clone(&seen)),
        )
        .await;
        let transport = ReqwestTransport::new(config_for(&url)).unwrap();

        let outcome = transport
            .post_json(Endpoint::ControlColor, json!({"r": 1, "g": 2, "b": 3}))
            .await
            .unwrap();

        assert_eq!(outcome.msg, "Color set");
        assert_eq!(*seen.lock().unwrap(), vec![json!({"r": 1, "g": 2, "b": 3})]);
    }

    #[tokio::test]
    async fn should_report_status_error_with_body_msg() {
        let url = serve(Router::new().route(
            "/setBrightness",
            post(|| async { (StatusCode::BAD_REQUEST, Json(json!({"msg": "too bright"}))) }),
        ))
        .await;
        let transport = ReqwestTransport::new(config_for(&url)).unwrap();

        let err = transport
            .post_json(Endpoint::SetBrightness, json!({}))
            .await
            .unwrap_err();

        assert_eq!(err.reason(), "too bright");
    }

    #[tokio::test]
    async fn should_report_plain_text_answer_as_not_json() {
        let url = serve(Router::new().route("/setTimeZone", post(|| async { "Timezone set" })))
            .await;
        let transport = ReqwestTransport::new(config_for(&url)).unwrap();

        let err = transport
            .post_json(Endpoint::SetTimeZone, json!({}))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            WordClockError::Response(ResponseError::NotJson(_))
        ));
    }

    #[tokio::test]
    async fn should_route_connect_to_access_point_url() {
        let seen = Seen::default();
        let ap_url = serve(
            Router::new()
                .route("/connect", post(record))
                .with_state(Arc::clone(&seen)),
        )
        .await;
        let config = HttpConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            ap_url,
            timeout_secs: 0,
        };
        let transport = ReqwestTransport::new(config).unwrap();

        transport
            .post_json(Endpoint::Connect, json!({"ssid": "home", "password": "pw"}))
            .await
            .unwrap();

        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_return_control_answer_text() {
        let url = serve(Router::new().route(
            "/control/{action}",
            get(|Path(action): Path<String>| async move { format!("Action ({action}) performed") }),
        ))
        .await;
        let transport = ReqwestTransport::new(config_for(&url)).unwrap();

        let text = transport.send_control(ControlAction::TzSummer).await.unwrap();

        assert_eq!(text, "Action (tz_summer) performed");
    }

    #[tokio::test]
    async fn should_report_transport_error_when_device_unreachable() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);
        let transport = ReqwestTransport::new(config_for(&url)).unwrap();

        let err = transport
            .post_json(Endpoint::ControlColor, json!({}))
            .await
            .unwrap_err();

        assert!(matches!(err, WordClockError::Transport(_)));
    }

    #[tokio::test]
    async fn should_give_up_after_configured_timeout() {
        let url = serve(Router::new().route(
            "/controlColor",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({"msg": "late"}))
            }),
        ))
        .await;
        let mut config = config_for(&url);
        config.timeout_secs = 1;
        let transport = ReqwestTransport::new(config).unwrap();

        let err = transport
            .post_json(Endpoint::ControlColor, json!({}))
            .await
            .unwrap_err();

        assert!(matches!(err, WordClockError::Transport(_)));
    }
}
