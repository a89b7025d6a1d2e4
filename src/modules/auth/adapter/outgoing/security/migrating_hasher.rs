use async_trait::async_trait;

use super::argon2_hasher::Argon2Hasher;
use super::bcrypt_hasher::BcryptHasher;
use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};

/// Hashes with argon2id and still accepts bcrypt hashes, flagging them for
/// replacement on the next successful login.
#[derive(Debug, Clone, Default)]
pub struct MigratingPasswordHasher {
    current: Argon2Hasher,
    legacy: BcryptHasher,
}

impl MigratingPasswordHasher {
    pub fn new(current: Argon2Hasher, legacy: BcryptHasher) -> Self {
        Self { current, legacy }
    }
}

#[async_trait]
impl PasswordHasher for MigratingPasswordHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        self.current.hash_password(password).await
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        if BcryptHasher::is_bcrypt_hash(hash) {
            self.legacy.verify_password(password, hash).await
        } else {
            self.current.verify_password(password, hash).await
        }
    }

    fn needs_rehash(&self, hash: &str) -> bool {
        BcryptHasher::is_bcrypt_hash(hash)
    }
}
