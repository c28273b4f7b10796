//! Shared GET-and-decode helper for the feed clients.

use serde::de::DeserializeOwned;
use std::time::Duration;
use tayf_core::error::TayfError;
use tracing::debug;

/// Build a client, applying the request timeout when one is configured.
pub(crate) fn build_client(timeout: Option<Duration>) -> Result<reqwest::Client, TayfError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| TayfError::Feed(format!("failed to build http client: {e}")))
}

/// GET `url` and decode the JSON body.
///
/// Non-2xx statuses, transport failures, and undecodable bodies all map to
/// `TayfError::Feed`; there is no retry.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    source: &str,
) -> Result<T, TayfError> {
    debug!("{source}: GET {url}");

    let resp = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| TayfError::Feed(format!("{source} request failed: {e}")))?;

    if !resp.status().is_success() {
        let status = resp.status();
        return Err(TayfError::Feed(format!("{source} returned {status}")));
    }

    resp.json::<T>()
        .await
        .map_err(|e| TayfError::Feed(format!("{source}: failed to parse response: {e}")))
}
