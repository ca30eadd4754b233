use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::services::auth::{UserIdentity, require_active};
use crate::state::AppState;

use super::{ActiveUser, CurrentUser};

/// middleware (`middleware::auth::access`) が UserIdentity を request.extensions() に
/// insert 済みである前提。見つからない場合はルーティング設定ミスなので 500
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<UserIdentity>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| {
                tracing::error!("UserIdentity not found; auth middleware not configured");
                AppError::Internal
            })
    }
}

impl FromRequestParts<AppState> for ActiveUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;
        let user = require_active(user)?;
        Ok(ActiveUser(user))
    }
}
