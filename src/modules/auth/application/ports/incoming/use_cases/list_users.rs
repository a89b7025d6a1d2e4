use async_trait::async_trait;

use crate::auth::application::ports::outgoing::{UserListFilter, UserRecord};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListUsersError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListUsersUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: UserListFilter,
        page: PageRequest,
    ) -> Result<PageResult<UserRecord>, ListUsersError>;
}
