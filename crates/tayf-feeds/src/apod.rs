//! NASA astronomy-picture-of-the-day client.

use async_trait::async_trait;
use std::time::Duration;
use tayf_core::{config::FeedsConfig, error::TayfError, record::ApodRecord, traits::ApodFeed};

use crate::http::{build_client, get_json};

const SOURCE: &str = "apod";

/// APOD client. The access key is embedded in the configured URL.
pub struct ApodClient {
    client: reqwest::Client,
    url: String,
}

impl ApodClient {
    pub fn new(url: String, timeout: Option<Duration>) -> Result<Self, TayfError> {
        Ok(Self {
            client: build_client(timeout)?,
            url,
        })
    }

    /// Create from config values.
    pub fn from_config(cfg: &FeedsConfig) -> Result<Self, TayfError> {
        Self::new(cfg.apod_url.clone(), cfg.timeout())
    }
}

#[async_trait]
impl ApodFeed for ApodClient {
    fn name(&self) -> &str {
        SOURCE
    }

    async fn today(&self) -> Result<ApodRecord, TayfError> {
        get_json(&self.client, &self.url, SOURCE).await
    }
}
