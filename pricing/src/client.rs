use std::time::Duration;

use metrics::counter;
use reqwest::header;
use tracing::instrument;

use crate::catalog::{Catalog, CatalogResponse};
use crate::config::Config;
use crate::error::PricingError;

/// HTTP client for the plan catalog endpoint.
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: String, request_timeout: Duration) -> anyhow::Result<CatalogClient> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent("CodeDeBhai Pricing")
            .timeout(request_timeout)
            .build()?;

        Ok(CatalogClient { client, base_url })
    }

    pub fn from_config(config: &Config) -> anyhow::Result<CatalogClient> {
        CatalogClient::new(config.base_url.clone(), config.request_timeout.0)
    }

    /// One GET against /get_payment_plans, decoded and validated. There
    /// is no retry and no fallback; callers decide what a failure means
    /// for the page.
    #[instrument(skip(self))]
    pub async fn fetch(&self) -> Result<Catalog, PricingError> {
        let url = format!(
            "{}/get_payment_plans",
            self.base_url.trim_end_matches('/')
        );

        let body = self.client.get(&url).send().await?.text().await?;
        let response: CatalogResponse = serde_json::from_str(&body)?;
        let catalog = Catalog::from_response(response)?;

        counter!("pricing_catalog_fetches_total").increment(1);
        tracing::debug!(plans = catalog.plans.len(), "fetched plan catalog");

        Ok(catalog)
    }
}
