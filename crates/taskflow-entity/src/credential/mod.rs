//! Stored refresh credentials.

pub mod refresh;

pub use refresh::RefreshCredential;
