//! Error-to-page mapping for the HTML surface

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::api::views;
use crate::domain::DomainError;

/// A request error rendered as the error view.
///
/// Carries the status the error view is served with. BadInput (an identifier
/// that trims to nothing) deliberately keeps status 200, matching the
/// behavior this app preserves; only lookup misses get 404.
#[derive(Debug)]
pub struct PageError {
    pub status: StatusCode,
    pub message: String,
}

impl PageError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Empty or whitespace-only identifier value.
    pub fn bad_input(message: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, message)
    }

    /// Well-formed identifier with zero matches.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Load or render failure; terminal for the request, not the process.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        (self.status, Html(views::error_page(&self.message))).into_response()
    }
}

impl From<DomainError> for PageError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::NotFound { message } => Self::not_found(message),
            DomainError::Validation { message } => Self::bad_input(message),
            DomainError::DataSource { message } => Self::internal(message),
            DomainError::Chart { message } => Self::internal(message),
            DomainError::Internal { message } => Self::internal(message),
        }
    }
}

impl std::fmt::Display for PageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl std::error::Error for PageError {}
