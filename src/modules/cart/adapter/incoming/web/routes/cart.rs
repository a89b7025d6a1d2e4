use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::Identity;
use crate::auth::adapter::incoming::web::middleware::AccessGate;
use crate::cart::application::ports::incoming::use_cases::{AddCartItemInput, CartError};
use crate::cart::application::ports::outgoing::CartItemRecord;
use crate::shared::api::{ApiResponse, Deleted};
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddCartItemRequestDto {
    pub product_id: Uuid,

    #[schema(example = 2)]
    pub quantity: i32,

    #[schema(value_type = String, example = "10.00")]
    pub unit_price: Decimal,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCartItemRequestDto {
    #[schema(example = 3)]
    pub quantity: i32,
}

fn cart_error_response(identity: &Identity, e: CartError) -> HttpResponse {
    match e {
        CartError::InvalidInput(msg) => ApiResponse::validation_error(&msg),
        CartError::ProductNotFound => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", "Product not found")
        }
        CartError::NotFound => ApiResponse::not_found("CART_ITEM_NOT_FOUND", "Cart item not found"),
        CartError::RepositoryError(e) => {
            error!(user_id = %identity.user_id, error = %e, "Cart operation failed");
            ApiResponse::internal_error()
        }
    }
}

/// List cart
///
/// Lines of the caller's cart, oldest first.
#[utoipa::path(
    get,
    path = "/api/cart",
    tag = "cart",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Cart lines", body = inline(SuccessResponse<Vec<CartItemRecord>>)),
        (status = 401, description = "Customer token required", body = ErrorResponse),
    )
)]
#[get("/api/cart", wrap = "AccessGate::customer()")]
pub async fn list_cart_handler(identity: Identity, data: web::Data<AppState>) -> impl Responder {
    match data.cart.list.execute(identity.user_id).await {
        Ok(items) => ApiResponse::success(items),
        Err(e) => cart_error_response(&identity, e),
    }
}

/// Add cart item
///
/// Always appends a new line, even for a product already in the cart.
#[utoipa::path(
    post,
    path = "/api/cart/item",
    tag = "cart",
    request_body = AddCartItemRequestDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Line added", body = inline(SuccessResponse<CartItemRecord>)),
        (status = 400, description = "Invalid quantity or price", body = ErrorResponse),
        (status = 401, description = "Customer token required", body = ErrorResponse),
        (
            status = 404,
            description = "Unknown product",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "PRODUCT_NOT_FOUND", "message": "Product not found" }
            })
        ),
    )
)]
#[post("/api/cart/item", wrap = "AccessGate::customer()")]
pub async fn add_cart_item_handler(
    identity: Identity,
    req: web::Json<AddCartItemRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let input = AddCartItemInput {
        product_id: dto.product_id,
        quantity: dto.quantity,
        unit_price: dto.unit_price,
    };

    match data.cart.add.execute(identity.user_id, input).await {
        Ok(item) => ApiResponse::success(item),
        Err(e) => cart_error_response(&identity, e),
    }
}

/// Update cart item quantity
#[utoipa::path(
    put,
    path = "/api/cart/item/{id}",
    tag = "cart",
    params(("id" = Uuid, Path, description = "Cart item ID")),
    request_body = UpdateCartItemRequestDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Line updated", body = inline(SuccessResponse<CartItemRecord>)),
        (status = 400, description = "Invalid quantity", body = ErrorResponse),
        (status = 401, description = "Customer token required", body = ErrorResponse),
        (status = 404, description = "No such line in the caller's cart", body = ErrorResponse),
    )
)]
#[put("/api/cart/item/{id}", wrap = "AccessGate::customer()")]
pub async fn update_cart_item_handler(
    identity: Identity,
    path: web::Path<Uuid>,
    req: web::Json<UpdateCartItemRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .cart
        .update
        .execute(identity.user_id, path.into_inner(), req.quantity)
        .await
    {
        Ok(item) => ApiResponse::success(item),
        Err(e) => cart_error_response(&identity, e),
    }
}

/// Clear cart
///
/// Idempotent; a second call reports zero deleted lines.
#[utoipa::path(
    delete,
    path = "/api/cart/item/all",
    tag = "cart",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Cart emptied", body = inline(SuccessResponse<Deleted>)),
        (status = 401, description = "Customer token required", body = ErrorResponse),
    )
)]
#[delete("/api/cart/item/all", wrap = "AccessGate::customer()")]
pub async fn clear_cart_handler(identity: Identity, data: web::Data<AppState>) -> impl Responder {
    match data.cart.clear.execute(identity.user_id).await {
        Ok(removed) => ApiResponse::deleted(removed),
        Err(e) => cart_error_response(&identity, e),
    }
}

/// Remove cart item
#[utoipa::path(
    delete,
    path = "/api/cart/item/{id}",
    tag = "cart",
    params(("id" = Uuid, Path, description = "Cart item ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Line removed", body = inline(SuccessResponse<Deleted>)),
        (status = 401, description = "Customer token required", body = ErrorResponse),
        (status = 404, description = "No such line in the caller's cart", body = ErrorResponse),
    )
)]
#[delete("/api/cart/item/{id}", wrap = "AccessGate::customer()")]
pub async fn remove_cart_item_handler(
    identity: Identity,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .cart
        .remove
        .execute(identity.user_id, path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::deleted(1),
        Err(e) => cart_error_response(&identity, e),
    }
}
