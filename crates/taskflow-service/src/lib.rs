//! # taskflow-service
//!
//! Resource services for TaskFlow. Every operation takes the caller's
//! [`RequestContext`] explicitly and passes through the workspace access
//! checks before touching its own data.
//!
//! Services follow constructor injection: stores and guards are provided
//! at construction time via `Arc` references.

pub mod comment;
pub mod context;
pub mod invite;
pub mod project;
pub mod task;
pub mod workspace;

#[cfg(test)]
mod test_support;

pub use comment::CommentService;
pub use context::RequestContext;
pub use invite::{CreateInviteRequest, InviteAcceptance, InviteService};
pub use project::{CreateProjectRequest, ProjectService};
pub use task::{TaskFilter, TaskService};
pub use workspace::WorkspaceService;
