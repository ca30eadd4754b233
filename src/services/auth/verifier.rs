//! Token verification boundary.
//!
//! A `TokenVerifier` decodes/validates a bearer token and reports one of three outcomes.
//! The resolver only ever branches on `Verification`; it never inspects raw claims.

use async_trait::async_trait;
use serde_json::{Map, Value};

/// Named claims carried by a token.
pub type ClaimSet = Map<String, Value>;

/// Claims whose key starts with this prefix carry the full user profile.
pub const USERNAME_CLAIM_PREFIX: &str = "usern";

const SUBJECT_CLAIM: &str = "sub";

#[derive(Debug, Clone, PartialEq)]
pub enum Verification {
    /// Token invalid, expired, or without a recognizable subject.
    Absent,
    /// Claims with a username-bearing key: the complete profile travels in the token.
    FullClaims(ClaimSet),
    /// Only a subject identifier is known (bare `sub` claim or a bare identifier token).
    SubjectOnly(String),
}

impl Verification {
    /// Classify decoded claims.
    pub fn classify(claims: ClaimSet) -> Self {
        if claims
            .keys()
            .any(|k| k.starts_with(USERNAME_CLAIM_PREFIX))
        {
            return Self::FullClaims(claims);
        }

        match claims.get(SUBJECT_CLAIM) {
            Some(Value::String(sub)) => Self::SubjectOnly(sub.clone()),
            Some(other) => {
                tracing::debug!(sub = %other, "non-string 'sub' claim");
                Self::Absent
            }
            None => Self::Absent,
        }
    }
}

#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Verification;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn claims(value: Value) -> ClaimSet {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn username_key_wins_over_subject() {
        let c = claims(json!({"username": "alice", "sub": "abc"}));
        assert_eq!(Verification::classify(c.clone()), Verification::FullClaims(c));
    }

    #[test]
    fn short_username_key_is_full_profile() {
        let c = claims(json!({"usern": "alice"}));
        assert!(matches!(
            Verification::classify(c),
            Verification::FullClaims(_)
        ));
    }

    #[test]
    fn bare_subject_claim() {
        let c = claims(json!({"sub": "8d0c5bb6-3c8e-4a5b-9f7d-2f0b1c9d4e11", "exp": 1}));
        assert_eq!(
            Verification::classify(c),
            Verification::SubjectOnly("8d0c5bb6-3c8e-4a5b-9f7d-2f0b1c9d4e11".to_string())
        );
    }

    #[test]
    fn numeric_subject_is_absent() {
        let c = claims(json!({"sub": 42}));
        assert_eq!(Verification::classify(c), Verification::Absent);
    }

    #[test]
    fn no_subject_no_username_is_absent() {
        let c = claims(json!({"exp": 1, "iss": "me"}));
        assert_eq!(Verification::classify(c), Verification::Absent);
    }
}
