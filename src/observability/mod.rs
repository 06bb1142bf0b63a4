//! Observability subsystem.
//!
//! Structured logging through `tracing`. Request spans come from
//! `tower_http::trace::TraceLayer` in the HTTP server; the forwarder adds
//! dispatch and failure events.

pub mod logging;

pub use logging::init_logging;
