use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::incoming::use_cases::{
    ResetPasswordError, ResetPasswordUseCase,
};
use crate::auth::application::service::credential_store::{CredentialError, CredentialStore};

pub struct ResetPasswordService {
    credentials: CredentialStore,
}

impl ResetPasswordService {
    pub fn new(credentials: CredentialStore) -> Self {
        Self { credentials }
    }
}

#[async_trait]
impl ResetPasswordUseCase for ResetPasswordService {
    async fn execute(
        &self,
        user_id: UserId,
        new_password: String,
    ) -> Result<(), ResetPasswordError> {
        self.credentials
            .set_password(user_id, &new_password)
            .await
            .map_err(|e| match e {
                CredentialError::InvalidInput(msg) => ResetPasswordError::InvalidInput(msg),
                CredentialError::NotFound => ResetPasswordError::NotFound,
                other => ResetPasswordError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user_id, "password reset");
        Ok(())
    }
}
