//! Opaque secret generation and digesting.
//!
//! Refresh secrets carry 256 bits of entropy, so they are stored as a plain
//! SHA-256 digest rather than a slow password hash.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngCore;
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Number of random bytes in a refresh secret.
pub const REFRESH_SECRET_BYTES: usize = 32;

/// Source of unguessable opaque tokens.
///
/// Injected into the services that mint tokens so tests can use
/// deterministic sequences.
pub trait SecretGenerator: Send + Sync + 'static {
    /// A new refresh secret, URL-safe and unpadded.
    fn refresh_secret(&self) -> String;

    /// A new single-use invite token.
    fn invite_token(&self) -> String;
}

/// Secrets drawn from the operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSecretGenerator;

impl SecretGenerator for OsSecretGenerator {
    fn refresh_secret(&self) -> String {
        let mut bytes = [0u8; REFRESH_SECRET_BYTES];
        OsRng.fill_bytes(&mut bytes);
        URL_SAFE_NO_PAD.encode(bytes)
    }

    fn invite_token(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Lowercase hex SHA-256 of a secret, as stored.
pub fn digest_secret(secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_secret_shape() {
        let secret = OsSecretGenerator.refresh_secret();
        // 32 bytes → 43 base64 characters without padding.
        assert_eq!(secret.len(), 43);
        assert!(!secret.contains('='));
        assert!(!secret.contains('+') && !secret.contains('/'));
        assert_ne!(secret, OsSecretGenerator.refresh_secret());
    }

    #[test]
    fn test_digest_known_vector() {
        assert_eq!(
            digest_secret("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_invite_token_is_uuid() {
        let token = OsSecretGenerator.invite_token();
        assert!(Uuid::parse_str(&token).is_ok());
    }
}
