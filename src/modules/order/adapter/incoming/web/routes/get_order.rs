use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::Identity;
use crate::auth::adapter::incoming::web::middleware::AccessGate;
use crate::order::application::ports::incoming::use_cases::{OrderQueryUseCaseError, Requester};
use crate::order::application::ports::outgoing::OrderDetails;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get order
///
/// Customers can only read their own orders; anything else is a 404.
#[utoipa::path(
    get,
    path = "/api/order/{id}",
    tag = "orders",
    params(("id" = Uuid, Path, description = "Order ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Order with its items", body = inline(SuccessResponse<OrderDetails>)),
        (status = 401, description = "Admin or customer token required", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse),
    )
)]
#[get("/api/order/{id}", wrap = "AccessGate::admin_or_customer()")]
pub async fn get_order_handler(
    identity: Identity,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let requester = Requester {
        user_id: identity.user_id,
        role: identity.role,
    };

    match data.order.get.execute(requester, path.into_inner()).await {
        Ok(details) => ApiResponse::success(details),
        Err(OrderQueryUseCaseError::NotFound) => {
            ApiResponse::not_found("ORDER_NOT_FOUND", "Order not found")
        }
        Err(OrderQueryUseCaseError::RepositoryError(e)) => {
            error!(user_id = %identity.user_id, error = %e, "Failed to load order");
            ApiResponse::internal_error()
        }
    }
}
