/*
 * Responsibility
 * - 環境変数や設定の読み込み (PORT, CORS 許可、Auth 設定など)
 * - 設定値のバリデーション (不足なら起動失敗)
 */
use std::net::SocketAddr;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.unwrap_or("development").to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing configuration: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Key material used to verify access tokens.
#[derive(Clone, PartialEq, Eq)]
pub enum JwtKey {
    Hs256Secret(String),
    EdPublicPem(String),
}

impl std::fmt::Debug for JwtKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        match self {
            Self::Hs256Secret(_) => f.write_str("Hs256Secret(..)"),
            Self::EdPublicPem(_) => f.write_str("EdPublicPem(..)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,

    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,

    // Auth-only API: requests carry headers, not payloads.
    pub http_body_limit_bytes: usize,
    pub http_request_timeout_seconds: u64,

    pub jwt_key: JwtKey,
    pub auth_issuer: Option<String>,
    pub auth_audience: Option<String>,
    pub access_token_leeway_seconds: u64,
    // dev only: `Authorization: Bearer <uuid>`
    pub accept_uuid_tokens: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        let port: u16 = match var("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 8000,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::parse(var("APP_ENV").as_deref());

        let cors_allowed_origins = var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let http_body_limit_bytes = match var("HTTP_BODY_LIMIT_BYTES") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::Invalid("HTTP_BODY_LIMIT_BYTES"))?,
            None => 64 * 1024,
        };

        let http_request_timeout_seconds = match var("HTTP_REQUEST_TIMEOUT_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::Invalid("HTTP_REQUEST_TIMEOUT_SECONDS"))?,
            None => 15,
        };

        let jwt_key = match (
            non_empty("AUTH_JWT_SECRET"),
            non_empty("ACCESS_JWT_PUBLIC_KEY_PEM"),
        ) {
            (Some(secret), _) => JwtKey::Hs256Secret(secret),
            (None, Some(pem)) => JwtKey::EdPublicPem(pem.replace("\\n", "\n")),
            (None, None) => return Err(ConfigError::Missing("AUTH_JWT_SECRET")),
        };

        let auth_issuer = non_empty("AUTH_ISSUER");
        let auth_audience = non_empty("AUTH_AUDIENCE");

        let access_token_leeway_seconds = match var("ACCESS_TOKEN_LEEWAY_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::Invalid("ACCESS_TOKEN_LEEWAY_SECONDS"))?,
            None => 60,
        };

        let accept_uuid_tokens = match var("AUTH_ACCEPT_UUID_TOKENS") {
            Some(raw) => {
                parse_bool(&raw).ok_or(ConfigError::Invalid("AUTH_ACCEPT_UUID_TOKENS"))?
            }
            None => false,
        };
        if accept_uuid_tokens && app_env.is_production() {
            return Err(ConfigError::Invalid("AUTH_ACCEPT_UUID_TOKENS"));
        }

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins,
            http_body_limit_bytes,
            http_request_timeout_seconds,
            jwt_key,
            auth_issuer,
            auth_audience,
            access_token_leeway_seconds,
            accept_uuid_tokens,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = load(&[("AUTH_JWT_SECRET", "s3cret")]).unwrap();

        assert_eq!(config.addr.port(), 8000);
        assert_eq!(config.app_env, AppEnv::Development);
        assert!(config.cors_allowed_origins.is_empty());
        assert_eq!(config.http_body_limit_bytes, 64 * 1024);
        assert_eq!(config.http_request_timeout_seconds, 15);
        assert_eq!(config.jwt_key, JwtKey::Hs256Secret("s3cret".to_string()));
        assert_eq!(config.auth_issuer, None);
        assert_eq!(config.auth_audience, None);
        assert_eq!(config.access_token_leeway_seconds, 60);
        assert!(!config.accept_uuid_tokens);
    }

    #[test]
    fn key_is_required() {
        assert_eq!(
            load(&[]).unwrap_err(),
            ConfigError::Missing("AUTH_JWT_SECRET")
        );
        assert_eq!(
            load(&[("AUTH_JWT_SECRET", "   ")]).unwrap_err(),
            ConfigError::Missing("AUTH_JWT_SECRET")
        );
    }

    #[test]
    fn public_key_pem_unescapes_newlines() {
        let config = load(&[("ACCESS_JWT_PUBLIC_KEY_PEM", "-----BEGIN-----\\nabc\\n")]).unwrap();
        assert_eq!(
            config.jwt_key,
            JwtKey::EdPublicPem("-----BEGIN-----\nabc\n".to_string())
        );
    }

    #[test]
    fn overrides() {
        let config = load(&[
            ("AUTH_JWT_SECRET", "s3cret"),
            ("PORT", "9100"),
            ("APP_ENV", "PROD"),
            ("CORS_ALLOWED_ORIGINS", "https://a.test, ,https://b.test"),
            ("AUTH_ISSUER", "https://issuer.test"),
            ("AUTH_AUDIENCE", "user-api"),
            ("ACCESS_TOKEN_LEEWAY_SECONDS", "5"),
            ("HTTP_BODY_LIMIT_BYTES", "1024"),
            ("HTTP_REQUEST_TIMEOUT_SECONDS", "3"),
        ])
        .unwrap();

        assert_eq!(config.http_body_limit_bytes, 1024);
        assert_eq!(config.http_request_timeout_seconds, 3);

        assert_eq!(config.addr.port(), 9100);
        assert!(config.app_env.is_production());
        assert_eq!(
            config.cors_allowed_origins,
            vec!["https://a.test".to_string(), "https://b.test".to_string()]
        );
        assert_eq!(config.auth_issuer.as_deref(), Some("https://issuer.test"));
        assert_eq!(config.auth_audience.as_deref(), Some("user-api"));
        assert_eq!(config.access_token_leeway_seconds, 5);
    }

    #[test]
    fn invalid_numbers_fail() {
        assert_eq!(
            load(&[("AUTH_JWT_SECRET", "s"), ("PORT", "eighty")]).unwrap_err(),
            ConfigError::Invalid("PORT")
        );
        assert_eq!(
            load(&[("AUTH_JWT_SECRET", "s"), ("ACCESS_TOKEN_LEEWAY_SECONDS", "-1")]).unwrap_err(),
            ConfigError::Invalid("ACCESS_TOKEN_LEEWAY_SECONDS")
        );
        assert_eq!(
            load(&[("AUTH_JWT_SECRET", "s"), ("HTTP_REQUEST_TIMEOUT_SECONDS", "0")]).unwrap_err(),
            ConfigError::Invalid("HTTP_REQUEST_TIMEOUT_SECONDS")
        );
        assert_eq!(
            load(&[("AUTH_JWT_SECRET", "s"), ("HTTP_BODY_LIMIT_BYTES", "lots")]).unwrap_err(),
            ConfigError::Invalid("HTTP_BODY_LIMIT_BYTES")
        );
    }

    #[test]
    fn uuid_tokens_are_dev_only() {
        let dev = load(&[("AUTH_JWT_SECRET", "s"), ("AUTH_ACCEPT_UUID_TOKENS", "yes")]).unwrap();
        assert!(dev.accept_uuid_tokens);

        let prod = load(&[
            ("AUTH_JWT_SECRET", "s"),
            ("APP_ENV", "production"),
            ("AUTH_ACCEPT_UUID_TOKENS", "true"),
        ]);
        assert_eq!(
            prod.unwrap_err(),
            ConfigError::Invalid("AUTH_ACCEPT_UUID_TOKENS")
        );
    }

    #[test]
    fn parse_bool_variants() {
        for raw in ["1", "true", " YES ", "On"] {
            assert_eq!(parse_bool(raw), Some(true), "{raw:?}");
        }
        for raw in ["0", "false", "No", "off"] {
            assert_eq!(parse_bool(raw), Some(false), "{raw:?}");
        }
        assert_eq!(parse_bool("maybe"), None);
    }
}
