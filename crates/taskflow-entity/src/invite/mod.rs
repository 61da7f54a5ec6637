//! Workspace invites.

pub mod model;

pub use model::{Invite, InviteState};
