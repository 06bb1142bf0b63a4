//! Mapping forwarding failures to HTTP responses.
//!
//! Every [`ForwardError`] becomes `500 Internal Server Error` with a plain-text
//! body holding the error and its source chain. Upstream responses themselves
//! never pass through here; they are returned untouched.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::forward::{describe, ForwardError};

impl IntoResponse for ForwardError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, describe(&self)).into_response()
    }
}
