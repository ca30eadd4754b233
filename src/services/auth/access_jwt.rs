use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use uuid::Uuid;

use crate::services::auth::verifier::{ClaimSet, TokenVerifier, Verification};

/// Errors raised while building a verifier from key material.
#[derive(Debug, thiserror::Error)]
pub enum AccessJwtError {
    #[error("invalid ed25519 public key pem: {0}")]
    InvalidKey(#[source] jsonwebtoken::errors::Error),
}

/// JWT access-token verifier.
///
/// - `exp` is always required; `iss`/`aud` are checked only when configured.
/// - Key material is not printable via Debug.
#[derive(Clone)]
pub struct JwtTokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
    accept_uuid_tokens: bool,
}

impl std::fmt::Debug for JwtTokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtTokenVerifier")
            .field("validation", &self.validation)
            .field("accept_uuid_tokens", &self.accept_uuid_tokens)
            .finish()
    }
}

impl JwtTokenVerifier {
    /// HS256 (shared secret).
    pub fn with_hs256(secret: &[u8], leeway_seconds: u64) -> Self {
        Self::new(
            DecodingKey::from_secret(secret),
            Algorithm::HS256,
            leeway_seconds,
        )
    }

    /// EdDSA (Ed25519) public key in PEM format.
    pub fn with_ed_pem(public_key_pem: &str, leeway_seconds: u64) -> Result<Self, AccessJwtError> {
        let decoding_key = DecodingKey::from_ed_pem(public_key_pem.as_bytes())
            .map_err(AccessJwtError::InvalidKey)?;

        Ok(Self::new(decoding_key, Algorithm::EdDSA, leeway_seconds))
    }

    fn new(decoding_key: DecodingKey, algorithm: Algorithm, leeway_seconds: u64) -> Self {
        let mut validation = Validation::new(algorithm);
        validation.leeway = leeway_seconds;
        // Audience is opt-in (see `with_audience`).
        validation.validate_aud = false;

        Self {
            decoding_key,
            validation,
            accept_uuid_tokens: false,
        }
    }

    pub fn with_issuer(mut self, issuer: &str) -> Self {
        self.validation.set_issuer(&[issuer]);
        self
    }

    pub fn with_audience(mut self, audience: &str) -> Self {
        self.validation.set_audience(&[audience]);
        self.validation.validate_aud = true;
        self
    }

    /// Accept `Bearer <uuid>` as a bare subject identifier (development only).
    pub fn accept_uuid_tokens(mut self, accept: bool) -> Self {
        self.accept_uuid_tokens = accept;
        self
    }

    /// Verify signature + registered claims and return the raw claim set.
    pub fn decode(&self, token: &str) -> Result<ClaimSet, jsonwebtoken::errors::Error> {
        let data = jsonwebtoken::decode::<ClaimSet>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }
}

#[async_trait]
impl TokenVerifier for JwtTokenVerifier {
    async fn verify(&self, token: &str) -> Verification {
        if self.accept_uuid_tokens
            && let Ok(id) = Uuid::parse_str(token)
        {
            return Verification::SubjectOnly(id.to_string());
        }

        match self.decode(token) {
            Ok(claims) => Verification::classify(claims),
            Err(err) => {
                tracing::warn!(error = ?err.kind(), "access token verification failed");
                Verification::Absent
            }
        }
    }
}
