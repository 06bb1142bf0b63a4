//! The forwarding operation.
//!
//! One inbound request becomes exactly one outbound request to the upstream:
//! same method, same headers (minus `Host`, which the client derives from the
//! upstream URL), same body bytes. The upstream response is handed back with
//! its status and headers untouched and its body streamed through.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, HeaderMap, Request},
    response::{IntoResponse, Response},
};

use crate::config::{ForwardConfig, LimitsConfig, UpstreamConfig};
use crate::forward::error::{BuildError, ForwardError};
use crate::forward::upstream::Upstream;

/// Relays requests to a single upstream. Cheap to clone; holds no per-request state.
#[derive(Clone)]
pub struct Forwarder {
    upstream: Arc<Upstream>,
    client: reqwest::Client,
    max_body_size: usize,
}

impl Forwarder {
    /// Build a forwarder and its outbound client.
    pub fn new(upstream: &UpstreamConfig, limits: &LimitsConfig) -> Result<Self, BuildError> {
        let target = Upstream::parse(&upstream.base_url)?;

        // Redirects and error statuses are the caller's business.
        let mut builder = reqwest::Client::builder().redirect(reqwest::redirect::Policy::none());

        builder = match &upstream.proxy {
            Some(url) => {
                let proxy = reqwest::Proxy::all(url.as_str()).map_err(|source| BuildError::Proxy {
                    url: url.clone(),
                    source,
                })?;
                builder.proxy(proxy)
            }
            None => builder.no_proxy(),
        };

        if let Some(secs) = upstream.timeout_secs {
            let timeout = Duration::from_secs(secs);
            builder = builder.connect_timeout(timeout).read_timeout(timeout);
        }

        let client = builder.build().map_err(BuildError::Client)?;

        Ok(Self {
            upstream: Arc::new(target),
            client,
            max_body_size: limits.max_body_size,
        })
    }

    pub fn from_config(config: &ForwardConfig) -> Result<Self, BuildError> {
        Self::new(&config.upstream, &config.limits)
    }

    pub fn upstream(&self) -> &Upstream {
        &self.upstream
    }

    /// Forward a request, turning any failure into a 500 response.
    pub async fn forward(&self, request: Request<Body>) -> Response {
        let method = request.method().clone();
        let path = request.uri().path().to_string();

        match self.try_forward(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(
                    method = %method,
                    path = %path,
                    upstream = %self.upstream,
                    error = %crate::forward::describe(&e),
                    "Forwarding failed"
                );
                e.into_response()
            }
        }
    }

    /// Forward a request, surfacing failures to the caller.
    pub async fn try_forward(&self, request: Request<Body>) -> Result<Response, ForwardError> {
        let (parts, body) = request.into_parts();
        let url = self.upstream.rewrite(&parts.uri);

        let mut headers = parts.headers;
        headers.remove(header::HOST);

        if let Some(length) = declared_length(&headers) {
            if length > self.max_body_size as u64 {
                return Err(ForwardError::BodyTooLarge {
                    length,
                    limit: self.max_body_size,
                });
            }
        }

        let body = axum::body::to_bytes(body, self.max_body_size)
            .await
            .map_err(ForwardError::ReadBody)?;

        tracing::debug!(
            method = %parts.method,
            url = %url,
            body_bytes = body.len(),
            "Forwarding request"
        );

        let mut outbound = self.client.request(parts.method, url).headers(headers);
        if !body.is_empty() {
            outbound = outbound.body(body);
        }

        let upstream = outbound.send().await.map_err(ForwardError::Upstream)?;

        tracing::debug!(status = %upstream.status(), "Upstream responded");

        let status = upstream.status();
        let headers = upstream.headers().clone();
        let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        Ok(response)
    }
}

/// Content-Length as sent by the client, if present and well-formed.
fn declared_length(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(header::CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}
