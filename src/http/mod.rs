//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, HTTP/1.1 + HTTP/2, tracing)
//!     → forward::Forwarder (rewrite host, relay)
//!     → response.rs (failures only: ForwardError → 500)
//!     → Send to client
//! ```

pub mod response;
pub mod server;

pub use server::HttpServer;
