//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Placeholder secrets shipped in defaults and sample files. Anyone can
/// forge tokens signed with them.
pub const PLACEHOLDER_SECRETS: [&str; 2] = [
    "CHANGE_ME_IN_PRODUCTION",
    "change-me-in-production-with-at-least-32-bytes",
];

/// Shortest HMAC key accepted outside the in-memory store.
pub const MIN_SECRET_BYTES: usize = 32;

/// Longest accepted access token lifetime (one day).
pub const MAX_ACCESS_TTL_MINUTES: u64 = 24 * 60;

/// Longest accepted refresh credential lifetime.
pub const MAX_REFRESH_TTL_DAYS: u64 = 365;

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Access token TTL in minutes. Access tokens cannot be revoked
    /// individually, so this bounds the exposure window after logout.
    #[serde(default = "default_access_ttl")]
    pub jwt_access_ttl_minutes: u64,
    /// Refresh credential lifetime in days.
    #[serde(default = "default_refresh_ttl_days")]
    pub refresh_ttl_days: u64,
    /// Minimum password length accepted at registration.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_access_ttl_minutes: default_access_ttl(),
            refresh_ttl_days: default_refresh_ttl_days(),
            password_min_length: default_password_min(),
        }
    }
}

fn default_jwt_secret() -> String {
    PLACEHOLDER_SECRETS[0].to_string()
}

fn default_access_ttl() -> u64 {
    15
}

fn default_refresh_ttl_days() -> u64 {
    7
}

fn default_password_min() -> usize {
    8
}
