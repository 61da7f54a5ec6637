//! Workspace creation and lookup.

pub mod service;

pub use service::WorkspaceService;
