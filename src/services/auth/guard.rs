use crate::services::auth::error::AuthError;
use crate::services::auth::identity::UserIdentity;

/// Reject administratively inactive users; pass everyone else through unchanged.
pub fn require_active(user: UserIdentity) -> Result<UserIdentity, AuthError> {
    if !user.is_active {
        tracing::info!(user_id = %user.id, "rejected inactive account");
        return Err(AuthError::InactiveAccount);
    }
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn active_user_passes_unchanged() {
        let user = UserIdentity::placeholder(&Uuid::new_v4().to_string(), Utc::now()).unwrap();
        assert_eq!(require_active(user.clone()), Ok(user));
    }

    #[test]
    fn inactive_user_is_rejected() {
        let mut user =
            UserIdentity::placeholder(&Uuid::new_v4().to_string(), Utc::now()).unwrap();
        user.is_active = false;

        assert_eq!(require_active(user), Err(AuthError::InactiveAccount));
    }
}
