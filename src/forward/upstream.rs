//! Upstream target and URL rewriting.
//!
//! The upstream is a bare origin: scheme, host and an optional port. Rewriting
//! an inbound URI swaps its origin for the upstream one and keeps the path and
//! query as they arrived.

use axum::http::Uri;
use thiserror::Error;
use url::Url;

/// Reasons an upstream base URL is rejected.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("`{url}` is not a valid URL: {source}")]
    Parse {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unsupported scheme `{0}` (expected http or https)")]
    UnsupportedScheme(String),

    #[error("`{0}` has no host")]
    MissingHost(String),

    #[error("`{0}` must not contain credentials")]
    HasCredentials(String),

    #[error("`{0}` must not contain a path, query or fragment")]
    HasPath(String),
}

/// Validated upstream origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upstream {
    base: Url,
}

impl Upstream {
    /// Parse and validate an upstream base URL such as `https://api.openai.com`.
    pub fn parse(base_url: &str) -> Result<Self, UpstreamError> {
        let base = Url::parse(base_url).map_err(|source| UpstreamError::Parse {
            url: base_url.to_string(),
            source,
        })?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(UpstreamError::UnsupportedScheme(base.scheme().to_string()));
        }
        if base.host_str().map_or(true, str::is_empty) {
            return Err(UpstreamError::MissingHost(base_url.to_string()));
        }
        if !base.username().is_empty() || base.password().is_some() {
            return Err(UpstreamError::HasCredentials(base_url.to_string()));
        }
        if base.path() != "/" || base.query().is_some() || base.fragment().is_some() {
            return Err(UpstreamError::HasPath(base_url.to_string()));
        }

        Ok(Self { base })
    }

    /// Host requests are forwarded to.
    pub fn host(&self) -> &str {
        self.base.host_str().unwrap_or_default()
    }

    /// Explicit port, if the base URL carries one.
    pub fn port(&self) -> Option<u16> {
        self.base.port()
    }

    /// Build the outbound URL for an inbound request URI.
    ///
    /// Scheme, host and port come from the upstream. Path and query come from
    /// the inbound URI, including when the client sent an absolute-form URI
    /// naming some other host.
    pub fn rewrite(&self, inbound: &Uri) -> Url {
        let mut url = self.base.clone();
        url.set_path(inbound.path());
        url.set_query(inbound.query());
        url
    }
}

impl std::fmt::Display for Upstream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.base.origin().ascii_serialization())
    }
}
