use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    GetProfileUseCase, ListUsersUseCase, LoginUserUseCase, ResetPasswordUseCase,
    SignupUserUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub signup: Arc<dyn SignupUserUseCase + Send + Sync>,
    pub login: Arc<dyn LoginUserUseCase + Send + Sync>,
    pub get_profile: Arc<dyn GetProfileUseCase + Send + Sync>,
    pub list_users: Arc<dyn ListUsersUseCase + Send + Sync>,
    pub reset_password: Arc<dyn ResetPasswordUseCase + Send + Sync>,
}
