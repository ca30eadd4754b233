/*
 * Responsibility
 * - ドメインに近い処理 (token 検証 → current user 解決)
 * - HTTP に依存しない (axum 型は api/middleware 側に閉じる)
 */
pub mod auth;
