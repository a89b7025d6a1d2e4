use actix_web::{post, web, Responder};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::Identity;
use crate::auth::adapter::incoming::web::middleware::AccessGate;
use crate::order::application::domain::entities::RecipientInfo;
use crate::order::application::ports::incoming::use_cases::{PlaceOrderError, PlaceOrderInput};
use crate::order::application::ports::outgoing::OrderDetails;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct PlaceOrderRequestDto {
    #[schema(example = "Ada Lovelace")]
    pub recipient_name: String,

    #[schema(example = "+44 20 7946 0000")]
    pub recipient_phone: String,

    #[schema(example = "ada@example.com")]
    pub recipient_email: String,

    #[schema(example = "12 Analytical St, London")]
    pub recipient_address: String,

    #[schema(value_type = String, example = "25.00")]
    pub total_amount: Decimal,

    #[schema(example = "credit_card")]
    pub payment_method: String,
}

impl From<PlaceOrderRequestDto> for PlaceOrderInput {
    fn from(dto: PlaceOrderRequestDto) -> Self {
        PlaceOrderInput {
            recipient: RecipientInfo {
                name: dto.recipient_name,
                phone: dto.recipient_phone,
                email: dto.recipient_email,
                address: dto.recipient_address,
            },
            total_amount: dto.total_amount,
            payment_method: dto.payment_method,
        }
    }
}

/// Place order
///
/// Turns the caller's cart into an order in one transaction and empties the
/// cart lines it consumed.
#[utoipa::path(
    post,
    path = "/api/order",
    tag = "orders",
    request_body = PlaceOrderRequestDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Order placed", body = inline(SuccessResponse<OrderDetails>)),
        (
            status = 400,
            description = "Invalid input, empty cart or unavailable products",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "PRODUCT_UNAVAILABLE", "message": "Some products in the cart are no longer available" }
            })
        ),
        (status = 401, description = "Customer token required", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/order", wrap = "AccessGate::customer()")]
pub async fn place_order_handler(
    identity: Identity,
    req: web::Json<PlaceOrderRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .order
        .place
        .execute(identity.user_id, req.into_inner().into())
        .await
    {
        Ok(details) => ApiResponse::success(details),
        Err(PlaceOrderError::InvalidInput(msg)) => ApiResponse::validation_error(&msg),
        Err(PlaceOrderError::UserNotFound) => {
            warn!(user_id = %identity.user_id, "Checkout for unknown user");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(PlaceOrderError::EmptyCart) => ApiResponse::bad_request("EMPTY_CART", "Cart is empty"),
        Err(e @ PlaceOrderError::ProductUnavailable(_)) => {
            ApiResponse::bad_request("PRODUCT_UNAVAILABLE", &e.to_string())
        }
        Err(PlaceOrderError::RepositoryError(e)) => {
            error!(user_id = %identity.user_id, error = %e, "Checkout failed");
            ApiResponse::internal_error()
        }
    }
}
