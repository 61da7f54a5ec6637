//! # taskflow-database
//!
//! Storage layer for TaskFlow: the narrow store interfaces the auth and
//! service layers consume, PostgreSQL implementations of those interfaces,
//! and an in-memory implementation for tests and local development.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod stores;
pub mod traits;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use stores::Stores;
pub use traits::{
    CommentStore, InviteStore, MembershipStore, ProjectStore, RefreshCredentialStore, TaskStore,
    UserStore, WorkspaceStore,
};
