//! Workspace invites: issuance and single-use acceptance.

pub mod service;

pub use service::{CreateInviteRequest, InviteAcceptance, InviteService};
