use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::services::auth::error::IdentityError;
use crate::services::auth::verifier::ClaimSet;

// Older tokens carry the profile name under this short key only.
const LEGACY_USERNAME_CLAIM: &str = "usern";
const USERNAME_CLAIM: &str = "username";

const PLACEHOLDER_USERNAME: &str = "unknown";
const PLACEHOLDER_EMAIL: &str = "unknown@example.com";
const PLACEHOLDER_FIRST_NAME: &str = "Unknown";
const PLACEHOLDER_LAST_NAME: &str = "User";

/// The authenticated user as seen by handlers.
///
/// Built fresh for every request from the token alone; never read from or written to a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserIdentity {
    /// Build the identity from full-profile claims.
    ///
    /// Claims unrelated to the profile (`exp`, `iat`, `iss`, `usern` next to `username`, ...)
    /// are ignored; any missing or ill-typed profile field is an error.
    pub fn from_claims(mut claims: ClaimSet) -> Result<Self, IdentityError> {
        if !claims.contains_key(USERNAME_CLAIM)
            && let Some(legacy) = claims.remove(LEGACY_USERNAME_CLAIM)
        {
            claims.insert(USERNAME_CLAIM.to_string(), legacy);
        }

        Ok(serde_json::from_value(serde_json::Value::Object(claims))?)
    }

    /// Build a placeholder identity for a token that only names its subject.
    ///
    /// Timestamps are the resolution time, not the account's real creation time.
    pub fn placeholder(subject: &str, now: DateTime<Utc>) -> Result<Self, IdentityError> {
        let id = Uuid::parse_str(subject)?;

        Ok(Self {
            id,
            username: PLACEHOLDER_USERNAME.to_string(),
            email: PLACEHOLDER_EMAIL.to_string(),
            first_name: PLACEHOLDER_FIRST_NAME.to_string(),
            last_name: PLACEHOLDER_LAST_NAME.to_string(),
            is_active: true,
            is_verified: false,
            created_at: now,
            updated_at: now,
        })
    }
}
