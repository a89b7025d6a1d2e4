use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::incoming::use_cases::{
    LoginUserError, LoginUserInput, LoginUserOutput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

const CUSTOMER_LOGIN_ROLES: &[UserRole] = &[UserRole::Customer];
const ADMIN_LOGIN_ROLES: &[UserRole] = &[UserRole::Admin, UserRole::Staff];

/// Login request from client
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "ada@example.com")]
    pub email: String,

    #[schema(example = "correct-horse-battery")]
    pub password: String,
}

async fn login(dto: LoginRequestDto, data: &AppState, accepted_roles: &[UserRole]) -> HttpResponse {
    let input = LoginUserInput {
        email: dto.email,
        password: dto.password,
    };

    match data.auth.login.execute(input, accepted_roles).await {
        Ok(output) => {
            info!(user_id = %output.user.id, role = %output.user.role, "User logged in");
            ApiResponse::success(output)
        }
        Err(LoginUserError::InvalidCredentials) => {
            warn!("Login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }
        Err(LoginUserError::RoleNotAllowed) => {
            warn!("Login failed: role not accepted on this route");
            ApiResponse::unauthorized("ROLE_NOT_ALLOWED", "This account cannot sign in here")
        }
        Err(LoginUserError::TokenError(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }
        Err(LoginUserError::RepositoryError(ref e)) => {
            error!(error = %e, "Login lookup failed");
            ApiResponse::internal_error()
        }
    }
}

/// Customer login
#[utoipa::path(
    post,
    path = "/api/user/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginUserOutput>)),
        (
            status = 401,
            description = "Invalid credentials or role not allowed",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_CREDENTIALS", "message": "Invalid email or password" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/user/login")]
pub async fn user_login_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    login(req.into_inner(), &data, CUSTOMER_LOGIN_ROLES).await
}

/// Back-office login
///
/// Accepts `admin` and `staff` accounts.
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginUserOutput>)),
        (status = 401, description = "Invalid credentials or role not allowed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/admin/login")]
pub async fn admin_login_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    login(req.into_inner(), &data, ADMIN_LOGIN_ROLES).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::incoming::use_cases::LoginUserUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::sample_user;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    // ========================================================================
    // Mock Use Cases
    // ========================================================================

    /// Logs in a user of the given role, honouring the route's allow-list.
    struct MockLoginAs(UserRole);

    #[async_trait]
    impl LoginUserUseCase for MockLoginAs {
        async fn execute(
            &self,
            _input: LoginUserInput,
            accepted_roles: &[UserRole],
        ) -> Result<LoginUserOutput, LoginUserError> {
            if !accepted_roles.contains(&self.0) {
                return Err(LoginUserError::RoleNotAllowed);
            }
            Ok(LoginUserOutput {
                token: "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.mock".to_string(),
                user: sample_user(self.0),
            })
        }
    }

    struct MockLoginFails(LoginUserError);

    #[async_trait]
    impl LoginUserUseCase for MockLoginFails {
        async fn execute(
            &self,
            _input: LoginUserInput,
            _accepted_roles: &[UserRole],
        ) -> Result<LoginUserOutput, LoginUserError> {
            Err(self.0.clone())
        }
    }

    fn credentials_json() -> serde_json::Value {
        serde_json::json!({
            "email": "test@example.com",
            "password": "SecurePass123!"
        })
    }

    async fn post_login(app_state: web::Data<AppState>, uri: &str) -> (u16, serde_json::Value) {
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(user_login_handler)
                .service(admin_login_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(uri)
            .set_json(&credentials_json())
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        let body: serde_json::Value = test::read_body_json(resp).await;
        (status, body)
    }

    // ========================================================================
    // Tests
    // ========================================================================

    #[actix_web::test]
    async fn test_customer_login_success() {
        let app_state = TestAppStateBuilder::default()
            .with_login(Arc::new(MockLoginAs(UserRole::Customer)))
            .build();

        let (status, body) = post_login(app_state, "/api/user/login").await;

        assert_eq!(status, 200);
        assert_eq!(body["success"], true);
        assert!(body["data"]["token"].is_string());
        assert_eq!(body["data"]["user"]["role"], "customer");
        assert!(body["data"]["user"].get("password_hash").is_none());
    }

    #[actix_web::test]
    async fn test_admin_on_customer_route_is_role_not_allowed() {
        let app_state = TestAppStateBuilder::default()
            .with_login(Arc::new(MockLoginAs(UserRole::Admin)))
            .build();

        let (status, body) = post_login(app_state, "/api/user/login").await;

        assert_eq!(status, 401);
        assert_eq!(body["error"]["code"], "ROLE_NOT_ALLOWED");
    }

    #[actix_web::test]
    async fn test_staff_can_use_admin_login() {
        let app_state = TestAppStateBuilder::default()
            .with_login(Arc::new(MockLoginAs(UserRole::Staff)))
            .build();

        let (status, body) = post_login(app_state, "/api/admin/login").await;

        assert_eq!(status, 200);
        assert_eq!(body["data"]["user"]["role"], "staff");
    }

    #[actix_web::test]
    async fn test_customer_on_admin_route_is_role_not_allowed() {
        let app_state = TestAppStateBuilder::default()
            .with_login(Arc::new(MockLoginAs(UserRole::Customer)))
            .build();

        let (status, body) = post_login(app_state, "/api/admin/login").await;

        assert_eq!(status, 401);
        assert_eq!(body["error"]["code"], "ROLE_NOT_ALLOWED");
    }

    #[actix_web::test]
    async fn test_login_invalid_credentials() {
        let app_state = TestAppStateBuilder::default()
            .with_login(Arc::new(MockLoginFails(LoginUserError::InvalidCredentials)))
            .build();

        let (status, body) = post_login(app_state, "/api/user/login").await;

        assert_eq!(status, 401);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
        assert_eq!(body["error"]["message"], "Invalid email or password");
        assert!(body.get("data").is_none());
    }

    #[actix_web::test]
    async fn test_login_internal_failures_are_500() {
        for err in [
            LoginUserError::TokenError("signing failed".to_string()),
            LoginUserError::RepositoryError("connection reset".to_string()),
        ] {
            let app_state = TestAppStateBuilder::default()
                .with_login(Arc::new(MockLoginFails(err)))
                .build();

            let (status, body) = post_login(app_state, "/api/user/login").await;

            assert_eq!(status, 500);
            assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
        }
    }

    #[actix_web::test]
    async fn test_login_malformed_json() {
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(crate::shared::api::custom_json_config())
                .service(user_login_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/user/login")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{ not json")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
