use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::outgoing::UserRecord;

#[derive(Debug, Clone)]
pub struct LoginUserInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginUserOutput {
    pub token: String,
    pub user: UserRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginUserError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Role is not allowed to sign in here")]
    RoleNotAllowed,

    #[error("Token error: {0}")]
    TokenError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    /// `accepted_roles` is the login route's role set, e.g. admin and staff
    /// for the back-office login.
    async fn execute(
        &self,
        input: LoginUserInput,
        accepted_roles: &[UserRole],
    ) -> Result<LoginUserOutput, LoginUserError>;
}
