use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::middleware::AccessGate;
use crate::catalog::application::ports::incoming::use_cases::ProductError;
use crate::catalog::application::ports::outgoing::{ProductData, ProductRecord};
use crate::shared::api::{ApiResponse, Deleted};
use crate::shared::pagination::ListQuery;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ProductRequestDto {
    pub category_id: Uuid,

    #[schema(example = "The Rust Programming Language")]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[schema(value_type = String, example = "39.90")]
    pub price: Decimal,

    #[schema(example = 12)]
    pub stock_quantity: i32,

    pub image_url: Option<String>,
}

impl From<ProductRequestDto> for ProductData {
    fn from(dto: ProductRequestDto) -> Self {
        ProductData {
            category_id: dto.category_id,
            name: dto.name,
            description: dto.description,
            price: dto.price,
            stock_quantity: dto.stock_quantity,
            image_url: dto.image_url,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductPage {
    pub items: Vec<ProductRecord>,
    pub total: u64,
}

fn product_error_response(e: ProductError) -> HttpResponse {
    match e {
        ProductError::InvalidInput(msg) => ApiResponse::validation_error(&msg),
        ProductError::CategoryNotFound => {
            ApiResponse::bad_request("CATEGORY_NOT_FOUND", "Category does not exist")
        }
        ProductError::NotFound => ApiResponse::not_found("PRODUCT_NOT_FOUND", "Product not found"),
        ProductError::InUse => {
            ApiResponse::bad_request("PRODUCT_IN_USE", "Product is referenced by existing orders")
        }
        ProductError::RepositoryError(e) => {
            error!(error = %e, "Product operation failed");
            ApiResponse::internal_error()
        }
    }
}

/// List products
///
/// Each item carries the name of its category.
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "catalog",
    params(ListQuery),
    responses(
        (status = 200, description = "One page of products", body = inline(SuccessResponse<ProductPage>)),
        (status = 400, description = "Invalid pagination", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/products")]
pub async fn list_products_handler(
    query: web::Query<ListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let page = match query.page_request() {
        Ok(page) => page,
        Err(e) => return ApiResponse::bad_request("INVALID_PAGINATION", &e.to_string()),
    };

    match data
        .catalog
        .list_products
        .execute(query.name_filter(), page)
        .await
    {
        Ok(result) => ApiResponse::success(ProductPage {
            items: result.items,
            total: result.total,
        }),
        Err(e) => product_error_response(e),
    }
}

/// Get product
#[utoipa::path(
    get,
    path = "/api/product/{id}",
    tag = "catalog",
    params(("id" = Uuid, Path, description = "Product ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Product with its category name", body = inline(SuccessResponse<ProductRecord>)),
        (status = 401, description = "Sign-in required", body = ErrorResponse),
        (
            status = 404,
            description = "Product not found",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "PRODUCT_NOT_FOUND", "message": "Product not found" }
            })
        ),
    )
)]
#[get("/api/product/{id}", wrap = "AccessGate::admin_or_customer()")]
pub async fn get_product_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.catalog.get_product.execute(path.into_inner()).await {
        Ok(product) => ApiResponse::success(product),
        Err(e) => product_error_response(e),
    }
}

/// Create product
#[utoipa::path(
    post,
    path = "/api/product",
    tag = "catalog",
    request_body = ProductRequestDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Product created", body = inline(SuccessResponse<ProductRecord>)),
        (status = 400, description = "Invalid input or unknown category", body = ErrorResponse),
        (status = 401, description = "Admin token required", body = ErrorResponse),
    )
)]
#[post("/api/product", wrap = "AccessGate::admin()")]
pub async fn create_product_handler(
    req: web::Json<ProductRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .catalog
        .create_product
        .execute(req.into_inner().into())
        .await
    {
        Ok(product) => {
            info!(product_id = %product.id, "Product created");
            ApiResponse::success(product)
        }
        Err(e) => product_error_response(e),
    }
}

/// Update product
#[utoipa::path(
    put,
    path = "/api/product/{id}",
    tag = "catalog",
    params(("id" = Uuid, Path, description = "Product ID")),
    request_body = ProductRequestDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Product updated", body = inline(SuccessResponse<ProductRecord>)),
        (status = 400, description = "Invalid input or unknown category", body = ErrorResponse),
        (status = 401, description = "Admin token required", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
    )
)]
#[put("/api/product/{id}", wrap = "AccessGate::admin()")]
pub async fn update_product_handler(
    path: web::Path<Uuid>,
    req: web::Json<ProductRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .catalog
        .update_product
        .execute(path.into_inner(), req.into_inner().into())
        .await
    {
        Ok(product) => ApiResponse::success(product),
        Err(e) => product_error_response(e),
    }
}

/// Delete product
#[utoipa::path(
    delete,
    path = "/api/product/{id}",
    tag = "catalog",
    params(("id" = Uuid, Path, description = "Product ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Product deleted", body = inline(SuccessResponse<Deleted>)),
        (status = 400, description = "Product is referenced by orders", body = ErrorResponse),
        (status = 401, description = "Admin token required", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
    )
)]
#[delete("/api/product/{id}", wrap = "AccessGate::admin()")]
pub async fn delete_product_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.catalog.delete_product.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::deleted(1),
        Err(e) => product_error_response(e),
    }
}
