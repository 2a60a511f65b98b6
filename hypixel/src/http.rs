use crate::endpoint::Endpoint;
use crate::schema::{BazaarResponse, KeyResponse};
use crate::{Error, MarketRecord, Result};
use log::debug;
use reqwest::Response;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.hypixel.net";

#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, timeout)
    }

    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: reqwest::Client::builder().timeout(timeout).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Sends a GET with the key as a query credential and returns the body of a
    /// successful response.
    async fn get(&self, endpoint: Endpoint, api_key: &str) -> Result<String> {
        debug!("GET {endpoint}");
        let response = self
            .client
            .get(format!("{}{endpoint}", self.base_url))
            .query(&[("key", api_key)])
            .send()
            .await?;

        Self::body(response).await
    }

    async fn body(response: Response) -> Result<String> {
        let status = response.status();
        if status.is_success() {
            Ok(response.text().await?)
        } else {
            Err(Error::HttpStatus(status, response.text().await?))
        }
    }

    /// Fetches the full bazaar snapshot, one record per product.
    pub async fn fetch_snapshot(&self, api_key: &str) -> Result<Vec<MarketRecord>> {
        let text = self.get(Endpoint::Bazaar, api_key).await?;
        let records = parse_snapshot(&text)?;
        debug!("Fetched {} bazaar products", records.len());
        Ok(records)
    }

    /// Checks a key against the key endpoint.
    pub async fn verify_key(&self, api_key: &str) -> Result<()> {
        let text = self.get(Endpoint::Key, api_key).await?;
        parse_key_check(&text)
    }
}

pub(crate) fn parse_snapshot(text: &str) -> Result<Vec<MarketRecord>> {
    let response: BazaarResponse = serde_json::from_str(text)?;
    debug!("Snapshot last updated at {}", response.last_updated);
    Ok(response
        .products
        .0
        .into_iter()
        .map(MarketRecord::from)
        .collect())
}

pub(crate) fn parse_key_check(text: &str) -> Result<()> {
    let response: KeyResponse = serde_json::from_str(text)?;
    if response.success {
        Ok(())
    } else {
        Err(Error::KeyRejected(
            response.cause.unwrap_or_else(|| "no cause given".to_string()),
        ))
    }
}
