//! # taskflow-api
//!
//! HTTP API layer for TaskFlow built on Axum.
//!
//! Handlers are thin: they parse and validate the request, resolve the
//! caller through the [`extractors::AuthUser`] extractor, and delegate to
//! the services. Every failure is rendered by [`error::ApiError`].

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, serve};
pub use error::ApiError;
pub use state::AppState;
