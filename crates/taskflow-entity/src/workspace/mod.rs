//! Workspaces (tenants), their members, and member roles.

pub mod membership;
pub mod model;
pub mod role;

pub use membership::Membership;
pub use model::Workspace;
pub use role::WorkspaceRole;
