use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::incoming::use_cases::{
    LoginUserError, LoginUserInput, LoginUserOutput, LoginUserUseCase,
};
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::auth::application::service::credential_store::{CredentialError, CredentialStore};

pub struct LoginUserService {
    credentials: CredentialStore,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl LoginUserService {
    pub fn new(
        credentials: CredentialStore,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            credentials,
            token_provider,
        }
    }
}

#[async_trait]
impl LoginUserUseCase for LoginUserService {
    async fn execute(
        &self,
        input: LoginUserInput,
        accepted_roles: &[UserRole],
    ) -> Result<LoginUserOutput, LoginUserError> {
        let user = self
            .credentials
            .verify(&input.email, &input.password)
            .await
            .map_err(|e| match e {
                // Unknown email and wrong password look the same to callers
                CredentialError::NotFound | CredentialError::InvalidCredentials => {
                    LoginUserError::InvalidCredentials
                }
                other => LoginUserError::RepositoryError(other.to_string()),
            })?;

        if !accepted_roles.contains(&user.role) {
            warn!(user_id = %user.id, role = %user.role, "login rejected for role");
            return Err(LoginUserError::RoleNotAllowed);
        }

        let token = self
            .token_provider
            .issue_token(user.id, user.role, &user.name)
            .map_err(|e| LoginUserError::TokenError(e.to_string()))?;

        info!(user_id = %user.id, "user logged in");
        Ok(LoginUserOutput { token, user })
    }
}
