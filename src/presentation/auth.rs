use std::convert::Infallible;

use axum::Json;
use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::request::Parts;
use uuid::Uuid;

use crate::domain::UserId;
use crate::presentation::handlers::ErrorResponse;

/// Identity is delegated: the fronting identity provider authenticates the
/// browser session and injects the user id into this header.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extractor for endpoints that require a signed-in user.
pub struct AuthenticatedUser(pub UserId);

/// Extractor for the analysis endpoint, where the pipeline itself owns the
/// authentication precondition and reports `Unauthenticated`.
pub struct MaybeUser(pub Option<UserId>);

fn user_from_parts(parts: &Parts) -> Option<UserId> {
    parts
        .headers
        .get(USER_ID_HEADER)?
        .to_str()
        .ok()
        .and_then(|value| Uuid::parse_str(value).ok())
        .map(UserId::from_uuid)
}

impl<S: Send + Sync> FromRequestParts<S> for MaybeUser {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(user_from_parts(parts)))
    }
}

impl<S: Send + Sync> FromRequestParts<S> for AuthenticatedUser {
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        user_from_parts(parts)
            .map(AuthenticatedUser)
            .ok_or_else(|| {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorResponse {
                        error: "Not signed in".to_string(),
                    }),
                )
            })
    }
}
