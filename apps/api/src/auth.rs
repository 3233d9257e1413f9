//! Request identity. Session verification happens at the auth gateway in
//! front of this API; the gateway forwards the verified user id as a bearer
//! token. Every persistence query is additionally scoped by this id.

use axum::{async_trait, extract::FromRequestParts, http::header, http::request::Parts};
use uuid::Uuid;

use crate::errors::AppError;

/// The authenticated user for the current request.
///
/// Extracted from `Authorization: Bearer <user-uuid>`. Absent or malformed
/// credentials reject the request with 401 before the handler runs.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        let token = header_value
            .strip_prefix("Bearer ")
            .ok_or(AppError::Unauthorized)?;

        let user_id = Uuid::parse_str(token.trim()).map_err(|_| AppError::Unauthorized)?;

        Ok(CurrentUser(user_id))
    }
}
