/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - Bearer が必要な範囲 (/users/me) に access middleware を適用する
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::users::me;
use crate::middleware;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new().route("/users/me", get(me));

    middleware::auth::access::apply(protected, state)
}
