/*
 * Responsibility
 * - Errors the auth service exposes to the HTTP layer (AuthError)
 * - Internal identity construction errors (IdentityError), never shown to clients
 */
use thiserror::Error;

/// Outcome of resolving/guarding the current user.
///
/// Every resolution failure collapses into `Unauthenticated` so callers cannot tell
/// which branch rejected the token.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("could not validate credentials")]
    Unauthenticated,

    #[error("inactive account")]
    InactiveAccount,
}

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("malformed profile claims: {0}")]
    MalformedClaims(#[from] serde_json::Error),

    #[error("invalid subject (expected UUID): {0}")]
    InvalidSubject(#[from] uuid::Error),
}
