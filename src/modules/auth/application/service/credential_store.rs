use email_address::EmailAddress;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::auth::application::domain::entities::{UserId, UserRole};
use crate::auth::application::ports::outgoing::{
    HashError, NewUserData, PasswordHasher, UserQuery, UserQueryError, UserRecord,
    UserRepository, UserRepositoryError,
};

pub const MIN_PASSWORD_LENGTH: usize = 8;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Email already exists")]
    DuplicateEmail,

    #[error("User not found")]
    NotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Hashing error: {0}")]
    Hashing(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl From<HashError> for CredentialError {
    fn from(e: HashError) -> Self {
        CredentialError::Hashing(e.to_string())
    }
}

impl From<UserQueryError> for CredentialError {
    fn from(e: UserQueryError) -> Self {
        CredentialError::Repository(e.to_string())
    }
}

impl From<UserRepositoryError> for CredentialError {
    fn from(e: UserRepositoryError) -> Self {
        match e {
            UserRepositoryError::EmailAlreadyExists => CredentialError::DuplicateEmail,
            UserRepositoryError::UserNotFound => CredentialError::NotFound,
            UserRepositoryError::DatabaseError(msg) => CredentialError::Repository(msg),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewCredential {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

//
// ──────────────────────────────────────────────────────────
// Credential store
// ──────────────────────────────────────────────────────────
//

/// Owns every path where a raw password meets storage: account creation,
/// login verification and password replacement.
#[derive(Clone)]
pub struct CredentialStore {
    user_repository: Arc<dyn UserRepository + Send + Sync>,
    user_query: Arc<dyn UserQuery + Send + Sync>,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl CredentialStore {
    pub fn new(
        user_repository: Arc<dyn UserRepository + Send + Sync>,
        user_query: Arc<dyn UserQuery + Send + Sync>,
        hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            user_repository,
            user_query,
            hasher,
        }
    }

    pub async fn create(&self, credential: NewCredential) -> Result<UserRecord, CredentialError> {
        let name = credential.name.trim().to_string();
        let email = normalize_email(&credential.email);

        if name.is_empty() {
            return Err(CredentialError::InvalidInput("name is required".to_string()));
        }
        validate_email(&email)?;
        validate_password(&credential.password)?;

        let password_hash = self.hasher.hash_password(&credential.password).await?;

        let user = self
            .user_repository
            .create_user(NewUserData {
                name,
                email,
                password_hash,
                role: credential.role,
            })
            .await?;

        debug!(user_id = %user.id, role = %user.role, "credential created");
        Ok(user)
    }

    pub async fn verify(
        &self,
        email: &str,
        password: &str,
    ) -> Result<UserRecord, CredentialError> {
        let email = normalize_email(email);

        let credentials = self
            .user_query
            .find_credentials_by_email(&email)
            .await?
            .ok_or(CredentialError::NotFound)?;

        let matches = self
            .hasher
            .verify_password(password, &credentials.password_hash)
            .await?;

        if !matches {
            return Err(CredentialError::InvalidCredentials);
        }

        if self.hasher.needs_rehash(&credentials.password_hash) {
            self.upgrade_hash(credentials.user.id, password).await;
        }

        Ok(credentials.user)
    }

    pub async fn set_password(
        &self,
        user_id: UserId,
        password: &str,
    ) -> Result<(), CredentialError> {
        validate_password(password)?;

        let password_hash = self.hasher.hash_password(password).await?;

        self.user_repository
            .update_password_hash(user_id, password_hash)
            .await?;

        Ok(())
    }

    // Failure here must not fail the login that triggered it.
    async fn upgrade_hash(&self, user_id: UserId, password: &str) {
        let result = match self.hasher.hash_password(password).await {
            Ok(hash) => self
                .user_repository
                .update_password_hash(user_id, hash)
                .await
                .map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };

        match result {
            Ok(()) => debug!(user_id = %user_id, "legacy password hash upgraded"),
            Err(e) => warn!(
                user_id = %user_id,
                error = %e,
                "failed to upgrade legacy password hash"
            ),
        }
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn validate_email(email: &str) -> Result<(), CredentialError> {
    if EmailAddress::is_valid(email) {
        Ok(())
    } else {
        Err(CredentialError::InvalidInput(
            "email is not a valid address".to_string(),
        ))
    }
}

fn validate_password(password: &str) -> Result<(), CredentialError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CredentialError::InvalidInput(format!(
            "password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }
    Ok(())
}
