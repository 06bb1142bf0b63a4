//! Forwarding subsystem.
//!
//! # Data Flow
//! ```text
//! inbound Request<Body>
//!     → upstream.rs (swap origin, keep path + query)
//!     → forwarder.rs (same method, headers, body; one attempt)
//!     → upstream Response (status, headers, streamed body)
//!
//! On failure:
//!     ForwardError → 500 text/plain with the error chain
//! ```

pub mod error;
pub mod forwarder;
pub mod upstream;

pub use error::{describe, BuildError, ForwardError};
pub use forwarder::Forwarder;
pub use upstream::{Upstream, UpstreamError};
