pub mod get_profile;
pub mod list_users;
pub mod login_user;
pub mod reset_password;
pub mod signup_user;

pub use get_profile::{GetProfileError, GetProfileUseCase};
pub use list_users::{ListUsersError, ListUsersUseCase};
pub use login_user::{LoginUserError, LoginUserInput, LoginUserOutput, LoginUserUseCase};
pub use reset_password::{ResetPasswordError, ResetPasswordUseCase};
pub use signup_user::{SignupUserError, SignupUserInput, SignupUserUseCase};
