pub mod get_me;
pub mod list_users;
pub mod login;
pub mod reset_password;
pub mod signup;

pub use get_me::__path_get_me_handler;
pub use get_me::get_me_handler;
pub use list_users::__path_list_users_handler;
pub use list_users::list_users_handler;
pub use login::{__path_admin_login_handler, __path_user_login_handler};
pub use login::{admin_login_handler, user_login_handler};
pub use reset_password::__path_reset_password_handler;
pub use reset_password::reset_password_handler;
pub use signup::{__path_admin_signup_handler, __path_user_signup_handler};
pub use signup::{admin_signup_handler, user_signup_handler};
