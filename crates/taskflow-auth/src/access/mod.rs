//! Workspace-scoped authorization.
//!
//! - `policy` — which roles may perform which workspace operation
//! - `control` — role resolution and the membership-before-privilege checks
//! - `guards` — per-resource rules layered on top (task ownership, invite targeting)

pub mod control;
pub mod guards;
pub mod policy;

pub use control::AccessControl;
pub use guards::ResourceGuards;
pub use policy::{AccessPolicy, WorkspaceAction};
