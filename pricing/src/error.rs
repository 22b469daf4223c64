use thiserror::Error;

#[derive(Error, Debug)]
pub enum PricingError {
    #[error("failed to request the plan catalog: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("failed to parse the plan catalog: {0}")]
    ResponseParsingError(#[from] serde_json::Error),

    #[error("the catalog endpoint reported an error: {0}")]
    ServerError(String),

    #[error("catalog contains a plan without an id")]
    MissingPlanId,
    #[error("catalog is missing its conversion note")]
    MissingConversionNote,
}
