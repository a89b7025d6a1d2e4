use tracing::info;

use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::incoming::use_cases::{
    SignupUserError, SignupUserInput, SignupUserUseCase,
};
use crate::shared::config::AdminBootstrap;

/// Creates the first administrator at startup. Running it against a database
/// that already holds the account is a no-op.
pub async fn bootstrap_admin(
    signup: &(dyn SignupUserUseCase + Send + Sync),
    admin: &AdminBootstrap,
) -> Result<(), SignupUserError> {
    let input = SignupUserInput {
        name: admin.name.clone(),
        email: admin.email.clone(),
        password: admin.password.clone(),
        role: UserRole::Admin,
    };

    match signup.execute(input).await {
        Ok(user) => {
            info!(user_id = %user.id, "bootstrap administrator created");
            Ok(())
        }
        Err(SignupUserError::EmailAlreadyExists) => {
            info!("bootstrap administrator already present");
            Ok(())
        }
        Err(e) => Err(e),
    }
}
