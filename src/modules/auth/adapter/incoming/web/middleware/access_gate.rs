//! Bearer-token gate placed in front of protected routes.
//!
//! The gate verifies the token with the registered [`TokenProvider`], checks
//! the role against the route's allow-list and stores an [`Identity`] in the
//! request extensions. Every rejection is a 401 in the standard envelope.

use std::rc::Rc;
use std::sync::Arc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, Error, HttpMessage, HttpResponse};
use futures::future::{ready, LocalBoxFuture, Ready};
use tracing::{debug, error};

use crate::auth::adapter::incoming::web::extractors::Identity;
use crate::auth::application::domain::entities::UserRole;
use crate::auth::application::ports::outgoing::token_provider::{TokenError, TokenProvider};
use crate::shared::api::ApiResponse;

const BEARER_PREFIX: &str = "Bearer ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateRejection {
    MissingToken,
    TokenExpired,
    InvalidToken,
    RoleNotAllowed,
}

impl GateRejection {
    pub fn code(&self) -> &'static str {
        match self {
            GateRejection::MissingToken => "UNAUTHORIZED",
            GateRejection::TokenExpired => "TOKEN_EXPIRED",
            GateRejection::InvalidToken => "INVALID_TOKEN",
            GateRejection::RoleNotAllowed => "ROLE_NOT_ALLOWED",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            GateRejection::MissingToken => "Missing or invalid authorization header",
            GateRejection::TokenExpired => "Token has expired",
            GateRejection::InvalidToken => "Invalid token",
            GateRejection::RoleNotAllowed => "Role is not allowed to access this resource",
        }
    }

    pub fn into_response(self) -> HttpResponse {
        ApiResponse::unauthorized(self.code(), self.message())
    }
}

/// Checks one `Authorization` header value against `allowed`.
pub fn authorize(
    header: Option<&str>,
    provider: &dyn TokenProvider,
    allowed: &[UserRole],
) -> Result<Identity, GateRejection> {
    let token = header
        .and_then(|h| h.strip_prefix(BEARER_PREFIX))
        .filter(|t| !t.is_empty())
        .ok_or(GateRejection::MissingToken)?;

    let claims = provider.verify_token(token).map_err(|e| match e {
        TokenError::TokenExpired => GateRejection::TokenExpired,
        _ => GateRejection::InvalidToken,
    })?;

    if !allowed.contains(&claims.user_role) {
        return Err(GateRejection::RoleNotAllowed);
    }

    Ok(Identity {
        user_id: claims.user_id(),
        role: claims.user_role,
        name: claims.user_name,
    })
}

/// Route-level middleware: `#[get("/api/me", wrap = "AccessGate::signed_in()")]`.
#[derive(Debug, Clone)]
pub struct AccessGate {
    allowed: Rc<[UserRole]>,
}

impl AccessGate {
    pub fn allow(roles: impl IntoIterator<Item = UserRole>) -> Self {
        Self {
            allowed: roles.into_iter().collect(),
        }
    }

    pub fn admin() -> Self {
        Self::allow([UserRole::Admin])
    }

    pub fn customer() -> Self {
        Self::allow([UserRole::Customer])
    }

    pub fn admin_or_customer() -> Self {
        Self::allow([UserRole::Admin, UserRole::Customer])
    }

    /// Any account that can log in; guests excluded.
    pub fn signed_in() -> Self {
        Self::allow([UserRole::Admin, UserRole::Staff, UserRole::Customer])
    }
}

impl<S, B> Transform<S, ServiceRequest> for AccessGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AccessGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AccessGateMiddleware {
            service,
            allowed: self.allowed.clone(),
        }))
    }
}

pub struct AccessGateMiddleware<S> {
    service: S,
    allowed: Rc<[UserRole]>,
}

impl<S, B> Service<ServiceRequest> for AccessGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let provider = match req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>() {
            Some(p) => p.clone(),
            None => {
                error!("token provider is not registered as app data");
                let resp = ApiResponse::internal_error();
                return Box::pin(ready(Ok(req.into_response(resp).map_into_right_body())));
            }
        };

        let header = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        match authorize(header, &***provider, &self.allowed) {
            Ok(identity) => {
                req.extensions_mut().insert(identity);
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            Err(rejection) => {
                debug!(
                    path = %req.path(),
                    code = rejection.code(),
                    "request rejected by access gate"
                );
                let resp = rejection.into_response();
                Box::pin(ready(Ok(req.into_response(resp).map_into_right_body())))
            }
        }
    }
}
