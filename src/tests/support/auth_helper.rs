use actix_web::web;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::{UserId, UserRole};
use crate::auth::application::ports::outgoing::{
    HashError, NewUserData, PasswordHasher, TokenProvider, UserCredentials, UserListFilter,
    UserQuery, UserQueryError, UserRecord, UserRepository, UserRepositoryError,
};
use crate::auth::application::service::credential_store::CredentialStore;
use crate::shared::pagination::{PageRequest, PageResult};

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_purposes_only";

pub fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: TEST_JWT_SECRET.to_string(),
        access_token_expiry: 3600,
    })
}

/// What `start()` registers for the access gate.
pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(test_jwt_service());
    web::Data::new(provider)
}

/// `Authorization` header value for the given subject.
pub fn bearer_for(user_id: UserId, role: UserRole) -> String {
    let token = test_jwt_service()
        .issue_token(user_id, role, "Test User")
        .expect("test token");
    format!("Bearer {}", token)
}

pub fn bearer(role: UserRole) -> String {
    bearer_for(UserId::from(Uuid::new_v4()), role)
}

pub fn sample_user(role: UserRole) -> UserRecord {
    let now = Utc::now();
    UserRecord {
        id: UserId::from(Uuid::new_v4()),
        email: format!("{}@example.com", role),
        name: "Sample User".to_string(),
        role,
        created_at: now,
        updated_at: now,
    }
}

// ============================================================================
// Hashers
// ============================================================================

/// Fast, deterministic stand-in for argon2.
pub struct PlainHasher;

#[async_trait]
impl PasswordHasher for PlainHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("plain${}", password))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        match hash.strip_prefix("plain$") {
            Some(stored) => Ok(stored == password),
            None => Err(HashError::VerifyFailed),
        }
    }
}

// ============================================================================
// In-memory user store
// ============================================================================

/// Rows keyed by email: `(record, password_hash)`.
#[derive(Default)]
pub struct InMemoryUsers {
    pub rows: Mutex<HashMap<String, (UserRecord, String)>>,
    pub fail_updates: bool,
}

impl InMemoryUsers {
    pub fn hash_of(&self, email: &str) -> Option<String> {
        self.rows
            .lock()
            .unwrap()
            .get(email)
            .map(|(_, hash)| hash.clone())
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create_user(&self, data: NewUserData) -> Result<UserRecord, UserRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.contains_key(&data.email) {
            return Err(UserRepositoryError::EmailAlreadyExists);
        }

        let now = Utc::now();
        let record = UserRecord {
            id: UserId::from(Uuid::new_v4()),
            email: data.email.clone(),
            name: data.name,
            role: data.role,
            created_at: now,
            updated_at: now,
        };
        rows.insert(data.email, (record.clone(), data.password_hash));
        Ok(record)
    }

    async fn update_password_hash(
        &self,
        user_id: UserId,
        password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        if self.fail_updates {
            return Err(UserRepositoryError::DatabaseError(
                "update refused".to_string(),
            ));
        }

        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .values_mut()
            .find(|(user, _)| user.id == user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;
        row.1 = password_hash;
        Ok(())
    }
}

#[async_trait]
impl UserQuery for InMemoryUsers {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<UserRecord>, UserQueryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .find(|(user, _)| user.id == user_id)
            .map(|(user, _)| user.clone()))
    }

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, UserQueryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .get(email)
            .map(|(user, hash)| UserCredentials {
                user: user.clone(),
                password_hash: hash.clone(),
            }))
    }

    async fn list_users(
        &self,
        filter: UserListFilter,
        _page: PageRequest,
    ) -> Result<PageResult<UserRecord>, UserQueryError> {
        let items: Vec<UserRecord> = self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|(user, _)| user.role == filter.role)
            .map(|(user, _)| user.clone())
            .collect();
        let total = items.len() as u64;
        Ok(PageResult { items, total })
    }
}

pub fn in_memory_credentials<H>(hasher: H) -> (CredentialStore, Arc<InMemoryUsers>)
where
    H: PasswordHasher + 'static,
{
    let users = Arc::new(InMemoryUsers::default());
    let store = CredentialStore::new(users.clone(), users.clone(), Arc::new(hasher));
    (store, users)
}

// ============================================================================
// Canned user query
// ============================================================================

pub struct StaticUserQuery {
    user: Option<UserRecord>,
    error: Option<UserQueryError>,
}

impl StaticUserQuery {
    pub fn found(user: UserRecord) -> Self {
        Self {
            user: Some(user),
            error: None,
        }
    }

    pub fn empty() -> Self {
        Self {
            user: None,
            error: None,
        }
    }

    pub fn failing(error: UserQueryError) -> Self {
        Self {
            user: None,
            error: Some(error),
        }
    }

    fn check(&self) -> Result<(), UserQueryError> {
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl UserQuery for StaticUserQuery {
    async fn find_by_id(&self, _user_id: UserId) -> Result<Option<UserRecord>, UserQueryError> {
        self.check()?;
        Ok(self.user.clone())
    }

    async fn find_credentials_by_email(
        &self,
        _email: &str,
    ) -> Result<Option<UserCredentials>, UserQueryError> {
        self.check()?;
        Ok(self.user.clone().map(|user| UserCredentials {
            user,
            password_hash: "plain$secret".to_string(),
        }))
    }

    async fn list_users(
        &self,
        _filter: UserListFilter,
        _page: PageRequest,
    ) -> Result<PageResult<UserRecord>, UserQueryError> {
        self.check()?;
        Ok(match &self.user {
            Some(user) => PageResult {
                items: vec![user.clone()],
                total: 1,
            },
            None => PageResult::empty(),
        })
    }
}
