use async_trait::async_trait;
use tracing::info;

use crate::auth::application::ports::incoming::use_cases::{
    SignupUserError, SignupUserInput, SignupUserUseCase,
};
use crate::auth::application::ports::outgoing::UserRecord;
use crate::auth::application::service::credential_store::{
    CredentialError, CredentialStore, NewCredential,
};

pub struct SignupUserService {
    credentials: CredentialStore,
}

impl SignupUserService {
    pub fn new(credentials: CredentialStore) -> Self {
        Self { credentials }
    }
}

#[async_trait]
impl SignupUserUseCase for SignupUserService {
    async fn execute(&self, input: SignupUserInput) -> Result<UserRecord, SignupUserError> {
        let user = self
            .credentials
            .create(NewCredential {
                name: input.name,
                email: input.email,
                password: input.password,
                role: input.role,
            })
            .await
            .map_err(|e| match e {
                CredentialError::InvalidInput(msg) => SignupUserError::InvalidInput(msg),
                CredentialError::DuplicateEmail => SignupUserError::EmailAlreadyExists,
                other => SignupUserError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user.id, role = %user.role, "user signed up");
        Ok(user)
    }
}
