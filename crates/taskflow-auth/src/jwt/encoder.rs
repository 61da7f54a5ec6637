//! Access token creation.

use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use taskflow_core::config::{AuthConfig, MAX_ACCESS_TTL_MINUTES};
use taskflow_core::error::AppError;

use super::claims::Claims;

/// Signs short-lived access tokens bound to a user id.
#[derive(Clone)]
pub struct JwtEncoder {
    encoding_key: EncodingKey,
    access_ttl: Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("access_ttl", &self.access_ttl)
            .finish_non_exhaustive()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            // Clamped so an unchecked config cannot overflow chrono.
            access_ttl: Duration::minutes(
                config.jwt_access_ttl_minutes.min(MAX_ACCESS_TTL_MINUTES) as i64,
            ),
        }
    }

    /// Issue an access token for `user_id`.
    pub fn issue_access_token(&self, user_id: Uuid) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id,
            iat: now.timestamp(),
            exp: (now + self.access_ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oversized_ttl_is_clamped() {
        let config = AuthConfig {
            jwt_access_ttl_minutes: u64::MAX,
            ..AuthConfig::default()
        };
        let encoder = JwtEncoder::new(&config);
        assert_eq!(
            encoder.access_ttl,
            Duration::minutes(MAX_ACCESS_TTL_MINUTES as i64)
        );
        assert!(encoder.issue_access_token(Uuid::new_v4()).is_ok());
    }
}
