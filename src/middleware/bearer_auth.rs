/*
 * Responsibility
 * - Authorization ヘッダからの Bearer トークン抽出
 * - 検証 (Verification) は services::auth 側の責務。ここは形式チェックのみ
 */
use axum::http::{HeaderMap, header};

/// `Authorization: Bearer <token>` から token を取り出す。
///
/// - scheme は大文字小文字を区別しない (`bearer` も可)
/// - ヘッダ欠落 / 他の scheme / 空 token は `None`
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
