use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::Identity;
use crate::auth::adapter::incoming::web::middleware::AccessGate;
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::incoming::use_cases::ResetPasswordError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ResetPasswordRequestDto {
    #[schema(example = "a-new-long-password")]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PasswordResetResponse {
    pub user_id: UserId,
}

/// Admin password reset
#[utoipa::path(
    put,
    path = "/api/user/{id}/password",
    tag = "users",
    params(("id" = Uuid, Path, description = "User ID")),
    request_body = ResetPasswordRequestDto,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Password replaced", body = inline(SuccessResponse<PasswordResetResponse>)),
        (status = 400, description = "Password too short", body = ErrorResponse),
        (status = 401, description = "Admin token required", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/user/{id}/password", wrap = "AccessGate::admin()")]
pub async fn reset_password_handler(
    path: web::Path<Uuid>,
    req: web::Json<ResetPasswordRequestDto>,
    identity: Identity,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = UserId::from(path.into_inner());
    let dto = req.into_inner();

    match data
        .auth
        .reset_password
        .execute(user_id, dto.password)
        .await
    {
        Ok(()) => {
            info!(user_id = %user_id, admin_id = %identity.user_id, "Password reset by admin");
            ApiResponse::success(PasswordResetResponse { user_id })
        }
        Err(ResetPasswordError::InvalidInput(msg)) => ApiResponse::validation_error(&msg),
        Err(ResetPasswordError::NotFound) => {
            warn!(user_id = %user_id, "Password reset for unknown user");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(ResetPasswordError::RepositoryError(e)) => {
            error!(user_id = %user_id, error = %e, "Password reset failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserRole;
    use crate::auth::application::ports::incoming::use_cases::ResetPasswordUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer, token_provider_data};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct MockReset(Result<(), ResetPasswordError>);

    #[async_trait]
    impl ResetPasswordUseCase for MockReset {
        async fn execute(
            &self,
            _user_id: UserId,
            _new_password: String,
        ) -> Result<(), ResetPasswordError> {
            self.0.clone()
        }
    }

    async fn put_reset(
        outcome: Result<(), ResetPasswordError>,
        role: UserRole,
    ) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_reset_password(Arc::new(MockReset(outcome)))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(reset_password_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/user/{}/password", Uuid::new_v4()))
            .insert_header(("Authorization", bearer(role)))
            .set_json(serde_json::json!({ "password": "brand-new-password" }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_reset_password_success() {
        let (status, body) = put_reset(Ok(()), UserRole::Admin).await;
        assert_eq!(status, 200);
        assert!(body["data"]["user_id"].is_string());
    }

    #[actix_web::test]
    async fn test_reset_password_unknown_user() {
        let (status, body) = put_reset(Err(ResetPasswordError::NotFound), UserRole::Admin).await;
        assert_eq!(status, 404);
        assert_eq!(body["error"]["code"], "USER_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_reset_password_short_password() {
        let (status, body) = put_reset(
            Err(ResetPasswordError::InvalidInput("too short".to_string())),
            UserRole::Admin,
        )
        .await;
        assert_eq!(status, 400);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_reset_password_staff_not_allowed() {
        let (status, body) = put_reset(Ok(()), UserRole::Staff).await;
        assert_eq!(status, 401);
        assert_eq!(body["error"]["code"], "ROLE_NOT_ALLOWED");
    }
}
