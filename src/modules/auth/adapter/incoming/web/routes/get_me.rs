use actix_web::{get, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::Identity;
use crate::auth::adapter::incoming::web::middleware::AccessGate;
use crate::auth::application::ports::incoming::use_cases::GetProfileError;
use crate::auth::application::ports::outgoing::UserRecord;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Caller profile
#[utoipa::path(
    get,
    path = "/api/me",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile of the token owner", body = inline(SuccessResponse<UserRecord>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/me", wrap = "AccessGate::signed_in()")]
pub async fn get_me_handler(identity: Identity, data: web::Data<AppState>) -> impl Responder {
    match data.auth.get_profile.execute(identity.user_id).await {
        Ok(user) => ApiResponse::success(user),
        Err(GetProfileError::NotFound) => {
            warn!(user_id = %identity.user_id, "Token owner not found");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(GetProfileError::RepositoryError(e)) => {
            error!(user_id = %identity.user_id, error = %e, "Failed to load profile");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::{UserId, UserRole};
    use crate::auth::application::ports::incoming::use_cases::GetProfileUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{
        bearer, bearer_for, sample_user, token_provider_data,
    };
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct EchoProfile;

    #[async_trait]
    impl GetProfileUseCase for EchoProfile {
        async fn execute(&self, user_id: UserId) -> Result<UserRecord, GetProfileError> {
            let mut user = sample_user(UserRole::Staff);
            user.id = user_id;
            Ok(user)
        }
    }

    struct MissingProfile;

    #[async_trait]
    impl GetProfileUseCase for MissingProfile {
        async fn execute(&self, _user_id: UserId) -> Result<UserRecord, GetProfileError> {
            Err(GetProfileError::NotFound)
        }
    }

    #[actix_web::test]
    async fn test_get_me_uses_token_subject() {
        let app_state = TestAppStateBuilder::default()
            .with_get_profile(Arc::new(EchoProfile))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(get_me_handler),
        )
        .await;

        let user_id = UserId::from(uuid::Uuid::new_v4());
        let req = test::TestRequest::get()
            .uri("/api/me")
            .insert_header(("Authorization", bearer_for(user_id, UserRole::Staff)))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], user_id.to_string());
    }

    #[actix_web::test]
    async fn test_get_me_rejects_guest_and_anonymous() {
        let app_state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(get_me_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/me").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let req = test::TestRequest::get()
            .uri("/api/me")
            .insert_header(("Authorization", bearer(UserRole::Guest)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_get_me_deleted_account() {
        let app_state = TestAppStateBuilder::default()
            .with_get_profile(Arc::new(MissingProfile))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(token_provider_data())
                .service(get_me_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/me")
            .insert_header(("Authorization", bearer(UserRole::Customer)))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "USER_NOT_FOUND");
    }
}
