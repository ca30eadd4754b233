/// Factory: build the `CurrentUserResolver` from application `Config`.
use std::sync::Arc;

use crate::config::{Config, JwtKey};
use crate::services::auth::access_jwt::AccessJwtError;
use crate::services::auth::{CurrentUserResolver, JwtTokenVerifier};

pub fn build_verifier(config: &Config) -> Result<JwtTokenVerifier, AccessJwtError> {
    let mut verifier = match &config.jwt_key {
        JwtKey::Hs256Secret(secret) => {
            JwtTokenVerifier::with_hs256(secret.as_bytes(), config.access_token_leeway_seconds)
        }
        JwtKey::EdPublicPem(pem) => {
            JwtTokenVerifier::with_ed_pem(pem, config.access_token_leeway_seconds)?
        }
    };

    if let Some(issuer) = &config.auth_issuer {
        verifier = verifier.with_issuer(issuer);
    }
    if let Some(audience) = &config.auth_audience {
        verifier = verifier.with_audience(audience);
    }

    Ok(verifier.accept_uuid_tokens(config.accept_uuid_tokens))
}

pub fn build_resolver(config: &Config) -> Result<Arc<CurrentUserResolver>, AccessJwtError> {
    let verifier = build_verifier(config)?;
    Ok(Arc::new(CurrentUserResolver::new(Arc::new(verifier))))
}
