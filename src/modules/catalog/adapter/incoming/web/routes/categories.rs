use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::middleware::AccessGate;
use crate::catalog::application::ports::incoming::use_cases::CategoryError;
use crate::catalog::application::ports::outgoing::{CategoryData, CategoryRecord};
use crate::shared::api::{ApiResponse, Deleted};
use crate::shared::pagination::ListQuery;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CategoryRequestDto {
    #[schema(example = "Books")]
    pub name: String,

    #[schema(example = "Paper and ink")]
    #[serde(default)]
    pub description: String,
}

impl From<CategoryRequestDto> for CategoryData {
    fn from(dto: CategoryRequestDto) -> Self {
        CategoryData {
            name: dto.name,
            description: dto.description,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryPage {
    pub items: Vec<CategoryRecord>,
    pub total: u64,
}

fn category_error_response(e: CategoryError) -> HttpResponse {
    match e {
        CategoryError::InvalidInput(msg) => ApiResponse::validation_error(&msg),
        CategoryError::NameAlreadyExists => {
            ApiResponse::bad_request("CATEGORY_ALREADY_EXISTS", "Category name already exists")
        }
        CategoryError::NotFound => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Category not found")
        }
        CategoryError::InUse => {
            warn!("Category delete blocked by existing products");
            ApiResponse::bad_request("CATEGORY_IN_USE", "Category still has products")
        }
        CategoryError::RepositoryError(e) => {
            error!(error = %e, "Category operation failed");
            ApiResponse::internal_error()
        }
    }
}

/// List categories
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "catalog",
    params(ListQuery),
    responses(
        (status = 200, description = "One page of categories", body = inline(SuccessResponse<CategoryPage>)),
        (status = 400, description = "Invalid pagination", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/categories")]
pub async fn list_categories_handler(
    query: web::Query<ListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let page = match query.page_request() {
        Ok(page) => page,
        Err(e) => return ApiResponse::bad_request("INVALID_PAGINATION", &e.to_string()),
    };

    match data
        .catalog
        .list_categories
        .execute(query.name_filter(), page)
        .await
    {
        Ok(result) => ApiResponse::success(CategoryPage {
            items: result.items,
            total: result.total,
        }),
        Err(e) => category_error_response(e),
    }
}

/// Create category
#[utoipa::path(
    post,
    path = "/api/category",
    tag = "catalog",
    request_body = CategoryRequestDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Category created", body = inline(SuccessResponse<CategoryRecord>)),
        (
            status = 400,
            description = "Invalid input or duplicate name",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "CATEGORY_ALREADY_EXISTS", "message": "Category name already exists" }
            })
        ),
        (status = 401, description = "Admin token required", body = ErrorResponse),
    )
)]
#[post("/api/category", wrap = "AccessGate::admin()")]
pub async fn create_category_handler(
    req: web::Json<CategoryRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .catalog
        .create_category
        .execute(req.into_inner().into())
        .await
    {
        Ok(category) => ApiResponse::success(category),
        Err(e) => category_error_response(e),
    }
}

/// Update category
#[utoipa::path(
    put,
    path = "/api/category/{id}",
    tag = "catalog",
    params(("id" = Uuid, Path, description = "Category ID")),
    request_body = CategoryRequestDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Category updated", body = inline(SuccessResponse<CategoryRecord>)),
        (status = 400, description = "Invalid input or duplicate name", body = ErrorResponse),
        (status = 401, description = "Admin token required", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse),
    )
)]
#[put("/api/category/{id}", wrap = "AccessGate::admin()")]
pub async fn update_category_handler(
    path: web::Path<Uuid>,
    req: web::Json<CategoryRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .catalog
        .update_category
        .execute(path.into_inner(), req.into_inner().into())
        .await
    {
        Ok(category) => ApiResponse::success(category),
        Err(e) => category_error_response(e),
    }
}

/// Delete category
///
/// Fails while any product still references the category.
#[utoipa::path(
    delete,
    path = "/api/category/{id}",
    tag = "catalog",
    params(("id" = Uuid, Path, description = "Category ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Category deleted", body = inline(SuccessResponse<Deleted>)),
        (status = 400, description = "Category still has products", body = ErrorResponse),
        (status = 401, description = "Admin token required", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse),
    )
)]
#[delete("/api/category/{id}", wrap = "AccessGate::admin()")]
pub async fn delete_category_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .catalog
        .delete_category
        .execute(path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::deleted(1),
        Err(e) => category_error_response(e),
    }
}
