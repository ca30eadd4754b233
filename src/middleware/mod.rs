/*
 * Responsibility
 * - middleware の公開インターフェース (re-export)
 * - pub fn apply(...) を各モジュールに置き、app.rs からはそれを呼ぶだけ
 */
pub mod auth;
pub mod bearer_auth;
pub mod cors;
pub mod http;
