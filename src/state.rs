/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - ex: auth: CurrentUserResolver
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::services::auth::CurrentUserResolver;

#[derive(Clone, Debug)]
pub struct AppState {
    pub auth: Arc<CurrentUserResolver>,
}

impl AppState {
    pub fn new(auth: Arc<CurrentUserResolver>) -> Self {
        Self { auth }
    }
}
