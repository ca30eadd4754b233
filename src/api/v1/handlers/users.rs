/*
 * Responsibility
 * - /users/me handler
 * - 認証・active チェックは middleware / extractor 済み。ここでは DTO に詰めるだけ
 */
use axum::Json;

use crate::api::v1::{dto::users::UserResponse, extractors::ActiveUser};

pub async fn me(ActiveUser(user): ActiveUser) -> Json<UserResponse> {
    Json(UserResponse::from(user))
}
