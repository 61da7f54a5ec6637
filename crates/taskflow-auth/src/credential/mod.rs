//! Credential lifecycle: registration, login, refresh rotation, logout.

pub mod service;

pub use service::{AuthTokens, CredentialService, TOKEN_TYPE};
