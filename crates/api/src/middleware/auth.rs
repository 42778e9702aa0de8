//! Caller identity extractor for Axum handlers.
//!
//! Authentication happens upstream; by the time a request reaches this
//! service the gateway has verified the caller and forwarded its id in the
//! [`USER_ID_HEADER`] header. The value is trusted as-is.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use echoroom_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the verified caller id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The calling user, extracted from the [`USER_ID_HEADER`] header.
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(format!(
                    "Missing or empty {USER_ID_HEADER} header"
                )))
            })?;

        Ok(AuthUser {
            user_id: user_id.to_string(),
        })
    }
}
