//! Upcoming-launch client backed by the Launch Library API.

use async_trait::async_trait;
use std::time::Duration;
use tayf_core::{
    config::FeedsConfig, error::TayfError, record::LaunchPage, traits::LaunchFeed,
};

use crate::http::{build_client, get_json};

const SOURCE: &str = "launches";

/// Launch Library client. The result limit is part of the configured URL.
pub struct LaunchClient {
    client: reqwest::Client,
    url: String,
}

impl LaunchClient {
    pub fn new(url: String, timeout: Option<Duration>) -> Result<Self, TayfError> {
        Ok(Self {
            client: build_client(timeout)?,
            url,
        })
    }

    /// Create from config values.
    pub fn from_config(cfg: &FeedsConfig) -> Result<Self, TayfError> {
        Self::new(cfg.launches_url.clone(), cfg.timeout())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl LaunchFeed for LaunchClient {
    fn name(&self) -> &str {
        SOURCE
    }

    async fn upcoming(&self) -> Result<LaunchPage, TayfError> {
        get_json(&self.client, &self.url, SOURCE).await
    }
}
