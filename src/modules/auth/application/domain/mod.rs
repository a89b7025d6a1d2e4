pub mod entities;

pub use entities::{UnknownRole, UserId, UserRole};
