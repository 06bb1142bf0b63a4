//! HTTP forwarder that relays every request to a single upstream host.
//!
//! The inbound request keeps its method, path, query, headers and body; only
//! the destination changes. Upstream responses are returned verbatim. If
//! anything goes wrong on the way, the caller gets a `500` whose body
//! describes the failure.

pub mod config;
pub mod forward;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::ForwardConfig;
pub use forward::Forwarder;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
