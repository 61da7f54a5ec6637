//! # taskflow-entity
//!
//! Domain entity models for TaskFlow. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod comment;
pub mod credential;
pub mod invite;
pub mod project;
pub mod task;
pub mod user;
pub mod workspace;
