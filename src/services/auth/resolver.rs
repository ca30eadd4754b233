use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::services::auth::error::AuthError;
use crate::services::auth::identity::UserIdentity;
use crate::services::auth::verifier::{TokenVerifier, Verification};

/// Resolves the current user from a bearer token.
///
/// Pure apart from the verifier call: nothing is cached and no user store is read.
#[derive(Clone)]
pub struct CurrentUserResolver {
    verifier: Arc<dyn TokenVerifier>,
}

impl std::fmt::Debug for CurrentUserResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrentUserResolver").finish_non_exhaustive()
    }
}

impl CurrentUserResolver {
    pub fn new(verifier: Arc<dyn TokenVerifier>) -> Self {
        Self { verifier }
    }

    pub async fn resolve(&self, token: &str) -> Result<UserIdentity, AuthError> {
        self.resolve_at(token, Utc::now()).await
    }

    /// Same as `resolve`, with `now` used for placeholder timestamps.
    pub async fn resolve_at(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<UserIdentity, AuthError> {
        let built = match self.verifier.verify(token).await {
            Verification::Absent => return Err(AuthError::Unauthenticated),
            Verification::FullClaims(claims) => UserIdentity::from_claims(claims),
            Verification::SubjectOnly(subject) => {
                // Tokens without a profile get a placeholder identity. This may also hide a
                // token that should have carried a profile, hence the log line.
                tracing::debug!(subject = %subject, "no profile claims; using placeholder identity");
                UserIdentity::placeholder(&subject, now)
            }
        };

        built.map_err(|err| {
            tracing::debug!(error = %err, "could not build identity from token");
            AuthError::Unauthenticated
        })
    }
}
