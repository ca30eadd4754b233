//! Bearer access token → current user → UserIdentity を extensions に入れる
//!
//! - `Authorization: Bearer <token>` を取り出し、`CurrentUserResolver` で解決する
//! - 失敗理由に関係なく 401 (WWW-Authenticate: Bearer) を返す
//! - active チェックは extractor (`ActiveUser`) 側で行う

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::error::AppError;
use crate::middleware::bearer_auth::bearer_token;
use crate::state::AppState;

/// 認証が必要な Router に middleware を適用する。
///
/// 例：
/// ```ignore
/// let v1 = api::v1::routes();
/// let v1 = middleware::auth::access::apply(v1, state.clone());
/// app = app.nest("/api/v1", v1);
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let Some(token) = bearer_token(req.headers()) else {
        tracing::debug!("missing or malformed bearer credentials");
        return Err(AppError::Unauthorized);
    };

    let user = state.auth.resolve(token).await.map_err(|err| {
        tracing::warn!(error = %err, "current user resolution failed");
        AppError::from(err)
    })?;

    tracing::debug!(user_id = %user.id, "resolved current user");

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}
