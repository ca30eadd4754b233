use crate::services::auth::UserIdentity;

/// 認証済みユーザー (active かどうかは問わない)
#[derive(Debug, Clone)]
pub struct CurrentUser(pub UserIdentity);

/// 認証済み かつ active なユーザー
#[derive(Debug, Clone)]
pub struct ActiveUser(pub UserIdentity);
