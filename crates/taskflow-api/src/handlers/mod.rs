//! HTTP request handlers.

pub mod auth;
pub mod comment;
pub mod health;
pub mod invite;
pub mod project;
pub mod task;
pub mod workspace;
