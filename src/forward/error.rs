//! Forwarding and construction errors.

use thiserror::Error;

use crate::forward::upstream::UpstreamError;

/// Any failure while relaying one request. Terminal for that request.
#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("request body of {length} bytes exceeds the {limit} byte limit")]
    BodyTooLarge { length: u64, limit: usize },

    #[error("failed to read request body")]
    ReadBody(#[source] axum::Error),

    #[error("upstream request failed")]
    Upstream(#[source] reqwest::Error),
}

/// Failure to construct a [`Forwarder`](crate::forward::Forwarder).
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid upstream: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("invalid proxy `{url}`")]
    Proxy {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),
}

/// Render an error and every error in its source chain, one per line.
pub fn describe(error: &(dyn std::error::Error + 'static)) -> String {
    let mut out = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        out.push_str("\ncaused by: ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
