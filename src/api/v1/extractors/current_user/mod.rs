/*!
 * Current user extractors
 *
 * Responsibility:
 * - middleware が解決した UserIdentity を handler に提供する
 * - ActiveUser は inactive なユーザーを 400 で拒否する
 *
 * Public API:
 * - CurrentUser
 * - ActiveUser
 */

mod core;
mod types;

pub use types::{ActiveUser, CurrentUser};
