//! # taskflow-auth
//!
//! Authentication and authorization core for TaskFlow.
//!
//! ## Modules
//!
//! - `password` — Argon2id password hashing and the registration password policy
//! - `jwt` — stateless access token signing and verification
//! - `secret` — opaque refresh/invite secret generation and digesting
//! - `credential` — register, login, refresh rotation, and logout
//! - `access` — workspace role resolution, the per-operation policy table, and resource guards

pub mod access;
pub mod credential;
pub mod jwt;
pub mod password;
pub mod secret;

pub use access::{AccessControl, AccessPolicy, ResourceGuards, WorkspaceAction};
pub use credential::{AuthTokens, CredentialService};
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::{Argon2PasswordHasher, PasswordHasher, PasswordPolicy};
pub use secret::{OsSecretGenerator, SecretGenerator, digest_secret};
