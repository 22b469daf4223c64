use std::time::Duration;

use async_trait::async_trait;
use metrics::counter;
use reqwest::header;

use crate::error::TrackerError;
use crate::event::EventPayload;

#[async_trait]
pub trait EventSink {
    async fn send(&self, event: EventPayload) -> Result<(), TrackerError>;
}

/// Logs events instead of delivering them. Stands in for the real
/// collector in local development and tests.
pub struct PrintSink {}

#[async_trait]
impl EventSink for PrintSink {
    async fn send(&self, event: EventPayload) -> Result<(), TrackerError> {
        tracing::info!("event: {:?}", event);
        counter!("tracker_events_reported_total").increment(1);

        Ok(())
    }
}

/// Delivers events to an HTTP collector as JSON, one POST per event.
pub struct HttpSink {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSink {
    pub fn new(endpoint: String, request_timeout: Duration) -> anyhow::Result<HttpSink> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent("CodeDeBhai Tracker")
            .timeout(request_timeout)
            .build()?;

        Ok(HttpSink { client, endpoint })
    }
}

#[async_trait]
impl EventSink for HttpSink {
    async fn send(&self, event: EventPayload) -> Result<(), TrackerError> {
        let payload = serde_json::to_string(&event)?;

        let response = self
            .client
            .post(&self.endpoint)
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            counter!("tracker_events_reported_total").increment(1);
            Ok(())
        } else if status.is_server_error() {
            counter!("tracker_events_dropped_total", "cause" => "server_error").increment(1);
            Err(TrackerError::RetryableSinkError(status))
        } else {
            counter!("tracker_events_dropped_total", "cause" => "rejected").increment(1);
            Err(TrackerError::RejectedEvent(status))
        }
    }
}
