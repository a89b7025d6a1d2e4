pub mod bootstrap_admin;
pub mod credential_store;
pub mod get_profile_service;
pub mod list_users_service;
pub mod login_user_service;
pub mod reset_password_service;
pub mod signup_user_service;

pub use credential_store::CredentialStore;
pub use get_profile_service::GetProfileService;
pub use list_users_service::ListUsersService;
pub use login_user_service::LoginUserService;
pub use reset_password_service::ResetPasswordService;
pub use signup_user_service::SignupUserService;
