use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::middleware::AccessGate;
use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::incoming::use_cases::{SignupUserError, SignupUserInput};
use crate::auth::application::ports::outgoing::UserRecord;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Customer signup payload
#[derive(Debug, Deserialize, ToSchema)]
pub struct SignupRequestDto {
    #[schema(example = "Ada Lovelace")]
    pub name: String,

    #[schema(example = "ada@example.com")]
    pub email: String,

    #[schema(example = "correct-horse-battery")]
    pub password: String,
}

/// Back-office signup payload. `role` defaults to `admin`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AdminSignupRequestDto {
    #[schema(example = "Grace Hopper")]
    pub name: String,

    #[schema(example = "grace@example.com")]
    pub email: String,

    #[schema(example = "correct-horse-battery")]
    pub password: String,

    #[schema(example = "staff")]
    pub role: Option<UserRole>,
}

fn map_signup_result(result: Result<UserRecord, SignupUserError>) -> HttpResponse {
    match result {
        Ok(user) => {
            info!(user_id = %user.id, role = %user.role, "User signed up");
            ApiResponse::success(user)
        }
        Err(SignupUserError::InvalidInput(msg)) => {
            warn!(reason = %msg, "Signup rejected");
            ApiResponse::validation_error(&msg)
        }
        Err(SignupUserError::EmailAlreadyExists) => {
            warn!("Signup rejected: email already exists");
            ApiResponse::bad_request("EMAIL_ALREADY_EXISTS", "Email is already registered")
        }
        Err(SignupUserError::RepositoryError(e)) => {
            error!(error = %e, "Signup failed");
            ApiResponse::internal_error()
        }
    }
}

/// Customer signup
///
/// Creates an account with role `customer`.
#[utoipa::path(
    post,
    path = "/api/user/signup",
    tag = "auth",
    request_body = SignupRequestDto,
    responses(
        (status = 200, description = "Account created", body = inline(SuccessResponse<UserRecord>)),
        (
            status = 400,
            description = "Invalid input or email taken",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "EMAIL_ALREADY_EXISTS", "message": "Email is already registered" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/user/signup")]
pub async fn user_signup_handler(
    req: web::Json<SignupRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let input = SignupUserInput {
        name: dto.name,
        email: dto.email,
        password: dto.password,
        role: UserRole::Customer,
    };

    map_signup_result(data.auth.signup.execute(input).await)
}

/// Back-office signup
///
/// Creates an `admin` or `staff` account. Requires an admin token.
#[utoipa::path(
    post,
    path = "/api/admin/signup",
    tag = "auth",
    request_body = AdminSignupRequestDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Account created", body = inline(SuccessResponse<UserRecord>)),
        (status = 400, description = "Invalid input, role or email taken", body = ErrorResponse),
        (status = 401, description = "Missing token or not an admin", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/admin/signup", wrap = "AccessGate::admin()")]
pub async fn admin_signup_handler(
    req: web::Json<AdminSignupRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let role = dto.role.unwrap_or(UserRole::Admin);
    if !matches!(role, UserRole::Admin | UserRole::Staff) {
        return ApiResponse::validation_error("role must be admin or staff");
    }

    let input = SignupUserInput {
        name: dto.name,
        email: dto.email,
        password: dto.password,
        role,
    };

    map_signup_result(data.auth.signup.execute(input).await)
}
