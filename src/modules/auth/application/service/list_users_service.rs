use async_trait::async_trait;

use crate::auth::application::ports::incoming::use_cases::{ListUsersError, ListUsersUseCase};
use crate::auth::application::ports::outgoing::{UserListFilter, UserQuery, UserRecord};
use crate::shared::pagination::{PageRequest, PageResult};

pub struct ListUsersService<Q>
where
    Q: UserQuery,
{
    user_query: Q,
}

impl<Q> ListUsersService<Q>
where
    Q: UserQuery,
{
    pub fn new(user_query: Q) -> Self {
        Self { user_query }
    }
}

#[async_trait]
impl<Q> ListUsersUseCase for ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: UserListFilter,
        page: PageRequest,
    ) -> Result<PageResult<UserRecord>, ListUsersError> {
        self.user_query
            .list_users(filter, page)
            .await
            .map_err(|e| ListUsersError::RepositoryError(e.to_string()))
    }
}
