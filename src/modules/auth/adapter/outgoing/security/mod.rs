pub mod argon2_hasher;
pub mod bcrypt_hasher;
pub mod migrating_hasher;

pub use argon2_hasher::Argon2Hasher;
pub use bcrypt_hasher::BcryptHasher;
pub use migrating_hasher::MigratingPasswordHasher;
