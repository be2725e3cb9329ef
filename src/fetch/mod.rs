//! Loading a wait-time payload from a URL or a local file.
//!
//! Transport failures and non-success responses are returned as errors.
//! Nothing here retries.

mod basic;

pub use basic::BasicClient;

use anyhow::{Context, Result, anyhow};
use std::time::Instant;
use tracing::{debug, warn};

/// Fetches the body of `url` as text.
#[tracing::instrument(skip(client))]
pub async fn fetch_text(client: &BasicClient, url: &str) -> Result<String> {
    let req = reqwest::Request::new(
        reqwest::Method::GET,
        url.parse().with_context(|| format!("invalid URL '{url}'"))?,
    );

    let started = Instant::now();
    let resp = client
        .execute(req)
        .await
        .with_context(|| format!("request to {url} failed"))?;

    let elapsed = started.elapsed();
    if elapsed.as_secs() > 15 {
        warn!(elapsed_secs = elapsed.as_secs(), "Payload fetch was slow");
    }

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(anyhow!("{url} returned status {status}: {body}"));
    }

    let text = resp.text().await?;
    debug!(bytes = text.len(), "Payload received");
    Ok(text)
}

/// Reads `source` from disk, or fetches it when it looks like an HTTP URL.
#[tracing::instrument]
pub async fn load_source(source: &str) -> Result<String> {
    if source.starts_with("http://") || source.starts_with("https://") {
        let client = BasicClient::new()?;
        fetch_text(&client, source).await
    } else {
        tokio::fs::read_to_string(source)
            .await
            .with_context(|| format!("failed to read {source}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    #[tokio::test]
    async fn test_load_source_reads_local_file() {
        let path = temp_path("ride_waits_test_load.csv");
        fs::write(&path, "ts,name,wait,upd,open\n").unwrap();

        let text = load_source(&path).await.unwrap();
        assert_eq!(text, "ts,name,wait,upd,open\n");

        fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_load_source_missing_file_is_error() {
        let path = temp_path("ride_waits_test_missing.csv");
        let _ = fs::remove_file(&path);

        let err = load_source(&path).await.unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[tokio::test]
    async fn test_fetch_text_rejects_invalid_url() {
        let client = BasicClient::new().unwrap();
        let err = fetch_text(&client, "http://exa mple.com/x.csv").await.unwrap_err();
        assert!(err.to_string().contains("invalid URL"));
    }
}
