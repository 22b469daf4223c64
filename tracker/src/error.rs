use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("event submitted with an empty event name")]
    MissingEventName,
    #[error("event submitted with an empty category")]
    MissingEventCategory,

    #[error("failed to serialize event payload: {0}")]
    PayloadSerializationError(#[from] serde_json::Error),

    #[error("failed to deliver event to the sink: {0}")]
    DeliveryError(#[from] reqwest::Error),
    #[error("transient sink error with status {0}, delivery can be retried")]
    RetryableSinkError(reqwest::StatusCode),
    #[error("the sink rejected the event with status {0}")]
    RejectedEvent(reqwest::StatusCode),
}
