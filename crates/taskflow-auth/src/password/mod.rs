//! Password hashing and policy enforcement.

pub mod hasher;
pub mod policy;

pub use hasher::{Argon2PasswordHasher, PasswordHasher};
pub use policy::PasswordPolicy;
