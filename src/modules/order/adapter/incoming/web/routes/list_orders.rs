use actix_web::{get, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::Identity;
use crate::auth::adapter::incoming::web::middleware::AccessGate;
use crate::order::application::ports::incoming::use_cases::OrderQueryUseCaseError;
use crate::order::application::ports::outgoing::OrderDetails;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{PageRequest, PageResult};
use crate::AppState;

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct OrderListQuery {
    pub current_page: i64,
    pub per_page: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderPage {
    pub items: Vec<OrderDetails>,
    pub total: u64,
}

fn page_response(result: Result<PageResult<OrderDetails>, OrderQueryUseCaseError>) -> HttpResponse {
    match result {
        Ok(page) => ApiResponse::success(OrderPage {
            items: page.items,
            total: page.total,
        }),
        Err(e) => {
            error!(error = %e, "Failed to list orders");
            ApiResponse::internal_error()
        }
    }
}

/// List my orders
///
/// Newest first, each with its items.
#[utoipa::path(
    get,
    path = "/api/user/me/orders",
    tag = "orders",
    params(OrderListQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "One page of the caller's orders", body = inline(SuccessResponse<OrderPage>)),
        (status = 400, description = "Invalid pagination", body = ErrorResponse),
        (status = 401, description = "Customer token required", body = ErrorResponse),
    )
)]
#[get("/api/user/me/orders", wrap = "AccessGate::customer()")]
pub async fn list_my_orders_handler(
    identity: Identity,
    query: web::Query<OrderListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let page = match PageRequest::from_raw(query.current_page, query.per_page) {
        Ok(page) => page,
        Err(e) => return ApiResponse::bad_request("INVALID_PAGINATION", &e.to_string()),
    };

    page_response(
        data.order
            .list_for_customer
            .execute(identity.user_id, page)
            .await,
    )
}

/// List all orders
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "orders",
    params(OrderListQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "One page of all orders", body = inline(SuccessResponse<OrderPage>)),
        (status = 400, description = "Invalid pagination", body = ErrorResponse),
        (status = 401, description = "Admin token required", body = ErrorResponse),
    )
)]
#[get("/api/orders", wrap = "AccessGate::admin()")]
pub async fn list_all_orders_handler(
    query: web::Query<OrderListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let page = match PageRequest::from_raw(query.current_page, query.per_page) {
        Ok(page) => page,
        Err(e) => return ApiResponse::bad_request("INVALID_PAGINATION", &e.to_string()),
    };

    page_response(data.order.list_all.execute(page).await)
}
