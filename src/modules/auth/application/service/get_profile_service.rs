use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::incoming::use_cases::{GetProfileError, GetProfileUseCase};
use crate::auth::application::ports::outgoing::{UserQuery, UserRecord};

pub struct GetProfileService<Q>
where
    Q: UserQuery,
{
    user_query: Q,
}

impl<Q> GetProfileService<Q>
where
    Q: UserQuery,
{
    pub fn new(user_query: Q) -> Self {
        Self { user_query }
    }
}

#[async_trait]
impl<Q> GetProfileUseCase for GetProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<UserRecord, GetProfileError> {
        self.user_query
            .find_by_id(user_id)
            .await
            .map_err(|e| GetProfileError::RepositoryError(e.to_string()))?
            .ok_or(GetProfileError::NotFound)
    }
}
