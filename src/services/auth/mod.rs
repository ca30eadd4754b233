pub mod access_jwt;
pub mod error;
pub mod factory;
pub mod guard;
pub mod identity;
pub mod resolver;
pub mod verifier;

pub use access_jwt::JwtTokenVerifier;
pub use error::AuthError;
pub use factory::build_resolver;
pub use guard::require_active;
pub use identity::UserIdentity;
pub use resolver::CurrentUserResolver;
