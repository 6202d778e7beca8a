use std::time::Duration;

use reqwest::{Client, Url};
use tokio::time::Instant;
use tracing::debug;

use super::{FailureKind, FetchFailure, FetchOutcome};

/// Perform one GET against `url`, reading the whole body into memory.
///
/// With `Some(timeout)` the deadline covers the entire transfer, headers and
/// body; a request still in flight when it expires is aborted and reported
/// as [`FailureKind::Timeout`]. `None` (or a zero duration) leaves the
/// transport's own limits in charge. The client and its connection are
/// dropped before this returns, on every path.
pub async fn fetch_url(url: &str, timeout: Option<Duration>) -> Result<FetchOutcome, FetchFailure> {
    let start = Instant::now();
    let timeout = timeout.filter(|t| !t.is_zero());

    // A URL that never parses gets no network attempt.
    let target: Url = match url.parse() {
        Ok(u) => u,
        Err(e) => {
            return Err(FetchFailure {
                kind: FailureKind::Network,
                elapsed: start.elapsed(),
                detail: format!("invalid url {url:?}: {e}"),
            });
        }
    };

    let mut builder = Client::builder();
    if let Some(t) = timeout {
        builder = builder.timeout(t);
    }
    let client = match builder.build() {
        Ok(c) => c,
        Err(e) => {
            return Err(FetchFailure {
                kind: FailureKind::Network,
                elapsed: start.elapsed(),
                detail: format!("building http client: {e}"),
            });
        }
    };

    let resp = match client.get(target).send().await {
        Ok(r) => r,
        Err(e) => {
            let kind = if e.is_timeout() {
                FailureKind::Timeout
            } else {
                FailureKind::Network
            };
            return Err(FetchFailure {
                kind,
                elapsed: start.elapsed(),
                detail: e.to_string(),
            });
        }
    };

    let status = resp.status().as_u16();
    debug!(status, url, "response headers received");

    match resp.bytes().await {
        Ok(body) => Ok(FetchOutcome {
            status,
            body: body.to_vec(),
            elapsed: start.elapsed(),
        }),
        Err(e) => {
            // Headers made it through, so anything but a deadline is a
            // broken transfer rather than a broken network.
            let kind = if e.is_timeout() {
                FailureKind::Timeout
            } else {
                FailureKind::Read
            };
            Err(FetchFailure {
                kind,
                elapsed: start.elapsed(),
                detail: e.to_string(),
            })
        }
    }
}
