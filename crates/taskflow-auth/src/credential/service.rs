//! Credential service orchestrating password checks, access token issuance,
//! and the single-slot refresh credential.

use std::sync::Arc;

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use taskflow_core::config::{AuthConfig, MAX_REFRESH_TTL_DAYS};
use taskflow_core::email::normalize_email;
use taskflow_core::error::AppError;
use taskflow_database::{RefreshCredentialStore, UserStore};
use taskflow_entity::user::{CreateUser, User};

use crate::jwt::JwtEncoder;
use crate::password::{PasswordHasher, PasswordPolicy};
use crate::secret::{SecretGenerator, digest_secret};

/// Scheme label returned with every token pair.
pub const TOKEN_TYPE: &str = "Bearer";

const INVALID_CREDENTIALS: &str = "Invalid credentials";
const INVALID_REFRESH_TOKEN: &str = "Invalid refresh token";

/// Tokens handed back after register, login, or refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    /// Signed access token.
    pub access_token: String,
    /// Opaque refresh secret. Only its digest is stored.
    pub refresh_token: String,
    /// Always [`TOKEN_TYPE`].
    pub token_type: String,
}

/// Issues, rotates, and revokes credentials.
#[derive(Clone)]
pub struct CredentialService {
    users: Arc<dyn UserStore>,
    refresh_credentials: Arc<dyn RefreshCredentialStore>,
    hasher: Arc<dyn PasswordHasher>,
    secrets: Arc<dyn SecretGenerator>,
    encoder: JwtEncoder,
    policy: PasswordPolicy,
    refresh_ttl: Duration,
}

impl std::fmt::Debug for CredentialService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialService")
            .field("policy", &self.policy)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish_non_exhaustive()
    }
}

impl CredentialService {
    /// Creates the service. Hashing and secret generation are injected.
    pub fn new(
        users: Arc<dyn UserStore>,
        refresh_credentials: Arc<dyn RefreshCredentialStore>,
        hasher: Arc<dyn PasswordHasher>,
        secrets: Arc<dyn SecretGenerator>,
        config: &AuthConfig,
    ) -> Self {
        Self {
            users,
            refresh_credentials,
            hasher,
            secrets,
            encoder: JwtEncoder::new(config),
            policy: PasswordPolicy::new(config),
            refresh_ttl: Duration::days(config.refresh_ttl_days.min(MAX_REFRESH_TTL_DAYS) as i64),
        }
    }

    /// Create an account and sign it in.
    pub async fn register(&self, email: &str, password: &str) -> Result<AuthTokens, AppError> {
        let email = normalize_email(email);
        self.policy.validate(password)?;

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("Email already registered"));
        }

        let user = CreateUser {
            email,
            password_hash: self.hasher.hash(password)?,
        }
        .into_user();
        // A concurrent registration of the same email surfaces as Conflict here.
        self.users.create(&user).await?;

        info!(user_id = %user.id, "User registered");
        self.issue(&user).await
    }

    /// Verify credentials and overwrite the caller's refresh credential.
    ///
    /// Unknown email and wrong password produce the same error.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthTokens, AppError> {
        let email = normalize_email(email);

        let Some(user) = self.users.find_by_email(&email).await? else {
            warn!("Login failed");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        };

        if !self.hasher.verify(password, &user.password_hash)? {
            warn!(user_id = %user.id, "Login failed");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        info!(user_id = %user.id, "User logged in");
        self.issue(&user).await
    }

    /// Exchange a live refresh secret for a new access token and a rotated secret.
    ///
    /// Rotation is a compare-and-swap on the stored digest: of two concurrent
    /// calls presenting the same secret, exactly one succeeds.
    pub async fn refresh(&self, refresh_token: &str) -> Result<AuthTokens, AppError> {
        let now = Utc::now();
        let presented = digest_secret(refresh_token);

        let credential = self
            .refresh_credentials
            .find_live_by_hash(&presented, now)
            .await?
            .ok_or_else(|| AppError::unauthorized(INVALID_REFRESH_TOKEN))?;

        let secret = self.secrets.refresh_secret();
        let rotated = self
            .refresh_credentials
            .rotate(
                credential.user_id,
                &presented,
                &digest_secret(&secret),
                now + self.refresh_ttl,
                now,
            )
            .await?;

        if !rotated {
            warn!(user_id = %credential.user_id, "Refresh token already rotated");
            return Err(AppError::unauthorized(INVALID_REFRESH_TOKEN));
        }

        info!(user_id = %credential.user_id, "Refresh token rotated");
        Ok(AuthTokens {
            access_token: self.encoder.issue_access_token(credential.user_id)?,
            refresh_token: secret,
            token_type: TOKEN_TYPE.to_string(),
        })
    }

    /// Drop the caller's refresh credential. Idempotent.
    pub async fn logout(&self, user_id: Uuid) -> Result<(), AppError> {
        let removed = self.refresh_credentials.delete_by_user(user_id).await?;
        info!(user_id = %user_id, removed, "User logged out");
        Ok(())
    }

    /// Load the authenticated caller, or fail `Unauthorized` if the account is gone.
    pub async fn current_user(&self, user_id: Uuid) -> Result<User, AppError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("Unauthorized"))
    }

    async fn issue(&self, user: &User) -> Result<AuthTokens, AppError> {
        let access_token = self.encoder.issue_access_token(user.id)?;
        let secret = self.secrets.refresh_secret();

        self.refresh_credentials
            .upsert(user.id, &digest_secret(&secret), Utc::now() + self.refresh_ttl)
            .await?;

        Ok(AuthTokens {
            access_token,
            refresh_token: secret,
            token_type: TOKEN_TYPE.to_string(),
        })
    }
}
