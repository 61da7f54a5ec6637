//! Projects within a workspace.

pub mod service;

pub use service::{CreateProjectRequest, ProjectService};
