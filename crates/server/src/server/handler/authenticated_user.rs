use std::str::FromStr as _;

use axum::{extract::FromRequestParts, http::request::Parts, http::StatusCode};
use write_model::{aggregate::User, value_object::UserId};

use crate::server::handler::{error_response, ErrorResponse};

/// Header carrying the id of the caller, set by the authenticating gateway.
pub(crate) const USER_ID_HEADER: &str = "x-user-id";

#[derive(Debug)]
pub(crate) struct AuthenticatedUser(pub(crate) User);

#[axum::async_trait]
impl<S: Send + Sync> FromRequestParts<S> for AuthenticatedUser {
    type Rejection = ErrorResponse;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|s| UserId::from_str(s).ok())
            .map(|user_id| Self(User::new(user_id)))
            .ok_or_else(|| error_response(StatusCode::UNAUTHORIZED, "Unauthenticated"))
    }
}
