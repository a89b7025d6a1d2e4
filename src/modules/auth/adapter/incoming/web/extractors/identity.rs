use actix_web::{dev::Payload, Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};

use crate::auth::application::domain::entities::{UserId, UserRole};
use crate::shared::api::ApiResponse;

/// Caller identity placed in request extensions by [`AccessGate`].
///
/// Handlers take it as an argument; a route without the gate in front of it
/// answers 401 instead of running anonymously.
///
/// [`AccessGate`]: crate::auth::adapter::incoming::web::middleware::AccessGate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: UserId,
    pub role: UserRole,
    pub name: String,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

impl FromRequest for Identity {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<Identity>() {
            Some(identity) => ready(Ok(identity.clone())),
            None => {
                let resp = ApiResponse::unauthorized("UNAUTHORIZED", "Authentication required");
                ready(Err(
                    actix_web::error::InternalError::from_response("", resp).into()
                ))
            }
        }
    }
}
