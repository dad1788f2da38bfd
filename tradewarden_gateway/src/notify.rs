//! Outbound operator alerts over a JSON webhook.

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::json;
use tracing::debug;

use tradewarden_supervisor::{NotificationChannel, UpstreamError, UpstreamResult};

/// Fire-and-forget webhook channel posting `{"content": ..., "username": ...}`.
///
/// Delivery failures surface as `UpstreamError` so callers can log them; the
/// supervisor treats every alert as best-effort.
pub struct WebhookChannel {
    url: String,
    username: String,
    client: Client,
}

impl WebhookChannel {
    pub fn new(
        url: impl Into<String>,
        username: impl Into<String>,
        timeout: Duration,
    ) -> UpstreamResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| UpstreamError::Transport(err.to_string()))?;
        Ok(Self {
            url: url.into(),
            username: username.into(),
            client,
        })
    }
}

impl NotificationChannel for WebhookChannel {
    fn send(&self, text: &str) -> UpstreamResult<()> {
        let payload = json!({
            "content": text,
            "username": self.username,
        });
        let response = self
            .client
            .post(&self.url)
            .json(&payload)
            .send()
            .map_err(|err| UpstreamError::Transport(err.to_string()))?;

        let status = response.status();
        if status.is_server_error() {
            return Err(UpstreamError::ServerSide(format!("webhook returned {status}")));
        }
        if !status.is_success() {
            return Err(UpstreamError::Transport(format!("webhook returned {status}")));
        }
        debug!(bytes = text.len(), "alert delivered");
        Ok(())
    }
}
