//! Composition gateway: bounded outbound calls to peer services.
//!
//! Each service enriches its own records with a minimal projection fetched
//! from one peer. The contract is strict: exactly one outbound GET per
//! composite request, with a bounded timeout, no retries, and no error
//! propagation. Any failure (connect, timeout, non-2xx, malformed payload)
//! collapses to [`Remote::Absent`]; the caller substitutes a fallback
//! projection and the composite response stays 200.

use std::time::Duration;

use anyhow::Context;
use serde::de::DeserializeOwned;
use url::Url;

/// Outcome of a peer fetch.
///
/// Two variants only: either the projection arrived, or it didn't. The
/// transport error never crosses this boundary; it is logged and dropped.
#[derive(Debug)]
pub enum Remote<T> {
    Present(T),
    Absent,
}

impl<T> Remote<T> {
    /// Resolve to the fetched projection or a caller-supplied fallback.
    pub fn unwrap_or_else(self, fallback: impl FnOnce() -> T) -> T {
        match self {
            Remote::Present(value) => value,
            Remote::Absent => fallback(),
        }
    }
}

/// HTTP client bound to one peer service's base address.
///
/// The underlying `reqwest::Client` is built once at startup with the
/// configured timeout and cloned cheaply into request state.
#[derive(Debug, Clone)]
pub struct PeerClient {
    http: reqwest::Client,
    base_url: String,
}

impl PeerClient {
    /// Build a client for the peer at `base_url` with a per-request timeout.
    ///
    /// The base address is validated up front so a misconfigured deployment
    /// fails at startup, not on the first composite request.
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        Url::parse(base_url).with_context(|| format!("invalid peer base URL: {base_url}"))?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Issue exactly one GET to `path` on the peer and decode the body.
    ///
    /// Never fails: unreachable peer, timeout, error status, and undecodable
    /// body all log a warning and return [`Remote::Absent`].
    pub async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Remote<T> {
        let url = format!("{}{}", self.base_url, path);

        let result: Result<T, reqwest::Error> = async {
            self.http
                .get(&url)
                .send()
                .await?
                .error_for_status()?
                .json::<T>()
                .await
        }
        .await;

        match result {
            Ok(value) => Remote::Present(value),
            Err(err) => {
                tracing::warn!("peer call to {} failed: {}", url, err);
                Remote::Absent
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_base_url() {
        assert!(PeerClient::new("not a url", Duration::from_millis(100)).is_err());
    }

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let client = PeerClient::new("http://localhost:8082/", Duration::from_millis(100))
            .expect("valid base url");
        assert_eq!(client.base_url, "http://localhost:8082");
    }

    #[tokio::test]
    async fn unreachable_peer_collapses_to_absent() {
        // Bind a listener to reserve a port, then drop it so nothing answers.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let client = PeerClient::new(&format!("http://{addr}"), Duration::from_millis(200))
            .expect("valid base url");

        let result: Remote<serde_json::Value> = client.fetch("/api/customers/1/info").await;
        assert!(matches!(result, Remote::Absent));
    }
}
