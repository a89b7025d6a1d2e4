use async_trait::async_trait;
use std::fmt;

use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::outgoing::UserRecord;

#[derive(Debug, Clone)]
pub struct SignupUserInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupUserError {
    InvalidInput(String),
    EmailAlreadyExists,
    RepositoryError(String),
}

impl fmt::Display for SignupUserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignupUserError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            SignupUserError::EmailAlreadyExists => write!(f, "email already exists"),
            SignupUserError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

impl std::error::Error for SignupUserError {}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SignupUserUseCase: Send + Sync {
    async fn execute(&self, input: SignupUserInput) -> Result<UserRecord, SignupUserError>;
}
