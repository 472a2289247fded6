//! # Fruit Info Client
//!
//! HTTP implementation of [`FruitInfoSource`] for the SmoothieFroot API
//! (`GET <base>/<fruit>`).
use crate::fruit_info::{EnrichmentError, FruitInfoSource};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

/// Public SmoothieFroot endpoint.
pub const DEFAULT_FRUIT_API_BASE: &str = "https://my.smoothiefroot.com/api/fruit";

/// Upper bound on one enrichment request, connect through body.
pub const DEFAULT_FRUIT_API_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the fruit enrichment API.
#[derive(Clone)]
pub struct FruitInfoClient {
    http: reqwest::Client,
    base_url: String,
}

impl FruitInfoClient {
    /// Builds a client whose every request is bounded by `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, EnrichmentError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn url_for(&self, fruit: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), fruit)
    }
}

#[async_trait]
impl FruitInfoSource for FruitInfoClient {
    #[instrument(skip(self))]
    async fn fetch(&self, fruit: &str) -> Result<Value, EnrichmentError> {
        let url = self.url_for(fruit);
        debug!(%url, "Fetching enrichment data");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(EnrichmentError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_fruit() {
        let client = FruitInfoClient::new(DEFAULT_FRUIT_API_BASE, DEFAULT_FRUIT_API_TIMEOUT).unwrap();
        assert_eq!(
            client.url_for("watermelon"),
            "https://my.smoothiefroot.com/api/fruit/watermelon"
        );

        let trailing = FruitInfoClient::new("http://localhost:9/api/", DEFAULT_FRUIT_API_TIMEOUT).unwrap();
        assert_eq!(trailing.url_for("kiwi"), "http://localhost:9/api/kiwi");
    }
}
