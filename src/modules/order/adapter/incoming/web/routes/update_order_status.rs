use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::Identity;
use crate::auth::adapter::incoming::web::middleware::AccessGate;
use crate::order::application::ports::incoming::use_cases::UpdateOrderStatusError;
use crate::order::application::ports::outgoing::OrderRecord;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderStatusRequestDto {
    /// pending | processing | shipped | delivered | canceled
    #[schema(example = "shipped")]
    pub status: String,
}

/// Update order status
#[utoipa::path(
    put,
    path = "/api/order/{id}",
    tag = "orders",
    params(("id" = Uuid, Path, description = "Order ID")),
    request_body = UpdateOrderStatusRequestDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Status updated", body = inline(SuccessResponse<OrderRecord>)),
        (status = 400, description = "Unknown status", body = ErrorResponse),
        (status = 401, description = "Admin token required", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse),
    )
)]
#[put("/api/order/{id}", wrap = "AccessGate::admin()")]
pub async fn update_order_status_handler(
    identity: Identity,
    path: web::Path<Uuid>,
    req: web::Json<UpdateOrderStatusRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let order_id = path.into_inner();

    match data
        .order
        .update_status
        .execute(order_id, &req.status)
        .await
    {
        Ok(order) => {
            info!(admin_id = %identity.user_id, order_id = %order_id, status = %order.status, "Order status changed");
            ApiResponse::success(order)
        }
        Err(e @ UpdateOrderStatusError::InvalidStatus(_)) => {
            ApiResponse::validation_error(&e.to_string())
        }
        Err(UpdateOrderStatusError::NotFound) => {
            ApiResponse::not_found("ORDER_NOT_FOUND", "Order not found")
        }
        Err(UpdateOrderStatusError::RepositoryError(e)) => {
            error!(order_id = %order_id, error = %e, "Failed to update order status");
            ApiResponse::internal_error()
        }
    }
}
