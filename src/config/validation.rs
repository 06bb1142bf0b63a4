//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (limits > 0, addresses parse)
//! - Validate the upstream base URL shape
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ForwardConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::ForwardConfig;
use crate::forward::upstream::{Upstream, UpstreamError};

/// A single semantic problem with a configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("listener.bind_address `{0}` is not a socket address")]
    BindAddress(String),

    #[error("upstream.base_url: {0}")]
    BaseUrl(#[from] UpstreamError),

    #[error("upstream.proxy `{0}` is not a valid URL")]
    Proxy(String),

    #[error("upstream.timeout_secs must be greater than zero")]
    Timeout,

    #[error("limits.max_body_size must be greater than zero")]
    MaxBodySize,

    #[error("observability.log_level `{0}` is not a valid filter")]
    LogLevel(String),
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &ForwardConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }

    if let Err(e) = Upstream::parse(&config.upstream.base_url) {
        errors.push(ValidationError::BaseUrl(e));
    }

    if let Some(proxy) = &config.upstream.proxy {
        if url::Url::parse(proxy).is_err() {
            errors.push(ValidationError::Proxy(proxy.clone()));
        }
    }

    if config.upstream.timeout_secs == Some(0) {
        errors.push(ValidationError::Timeout);
    }

    if config.limits.max_body_size == 0 {
        errors.push(ValidationError::MaxBodySize);
    }

    if EnvFilter::try_new(&config.observability.log_level).is_err() {
        errors.push(ValidationError::LogLevel(config.observability.log_level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
