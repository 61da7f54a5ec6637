//! Projects within a workspace.

pub mod model;

pub use model::{CreateProject, Project};
