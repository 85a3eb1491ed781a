use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::domain::UserId;

use super::ApiError;

pub const USER_ID_HEADER: &str = "x-user-id";

/// Caller identity forwarded by the auth gateway in `x-user-id`.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub UserId);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ApiError::unauthorized("Unauthorized"))?;

        UserId::parse(raw)
            .map(CurrentUser)
            .ok_or_else(|| ApiError::bad_request("Invalid user id"))
    }
}
