use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserId, UserRole};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    TokenExpired,
    InvalidSignature,
    MalformedToken,
    EncodingError(String),
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::TokenExpired => write!(f, "Token has expired"),
            TokenError::InvalidSignature => write!(f, "Invalid token signature"),
            TokenError::MalformedToken => write!(f, "Malformed token"),
            TokenError::EncodingError(msg) => write!(f, "Token encoding error: {}", msg),
        }
    }
}
impl Error for TokenError {}

/// Signed identity assertion carried in `Authorization: Bearer`.
///
/// An unknown `user_role` string fails deserialization, so such tokens are
/// reported as malformed rather than reaching role checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub user_id: Uuid,
    pub user_role: UserRole,
    pub user_name: String,
    pub exp: i64,
    pub iat: i64,
}

impl TokenClaims {
    pub fn user_id(&self) -> UserId {
        UserId::from(self.user_id)
    }
}

pub trait TokenProvider: Send + Sync {
    fn issue_token(
        &self,
        user_id: UserId,
        role: UserRole,
        display_name: &str,
    ) -> Result<String, TokenError>;

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
