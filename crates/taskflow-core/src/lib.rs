//! # taskflow-core
//!
//! Core crate for TaskFlow. Contains the configuration schema, the unified
//! error system, and helpers shared by every layer (email normalization).
//!
//! This crate has **no** internal dependencies on other TaskFlow crates.

pub mod config;
pub mod email;
pub mod error;
pub mod result;

pub use email::normalize_email;
pub use error::AppError;
pub use result::AppResult;
