use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::middleware::AccessGate;
use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::incoming::use_cases::ListUsersError;
use crate::auth::application::ports::outgoing::{UserListFilter, UserRecord};
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{normalize_filter, PageRequest};
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListUsersQuery {
    pub current_page: i64,
    pub per_page: i64,
    pub role: UserRole,
    pub name: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserPage {
    pub items: Vec<UserRecord>,
    pub total: u64,
}

/// List users by role
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    params(ListUsersQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "One page of users", body = inline(SuccessResponse<UserPage>)),
        (status = 400, description = "Invalid pagination or role", body = ErrorResponse),
        (status = 401, description = "Admin token required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/users", wrap = "AccessGate::admin()")]
pub async fn list_users_handler(
    query: web::Query<ListUsersQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();

    let page = match PageRequest::from_raw(query.current_page, query.per_page) {
        Ok(page) => page,
        Err(e) => return ApiResponse::bad_request("INVALID_PAGINATION", &e.to_string()),
    };

    let filter = UserListFilter {
        role: query.role,
        name: normalize_filter(query.name.as_deref()),
    };

    match data.auth.list_users.execute(filter, page).await {
        Ok(result) => ApiResponse::success(UserPage {
            items: result.items,
            total: result.total,
        }),
        Err(ListUsersError::RepositoryError(e)) => {
            error!(error = %e, "Failed to list users");
            ApiResponse::internal_error()
        }
    }
}
