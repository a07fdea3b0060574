use crate::domain::authentication::AuthError;
use crate::ports::{AuthOutcome, AuthenticatorPort};
use async_trait::async_trait;

/// Authenticator used when the host provides no local-authentication prompt.
///
/// Always fails closed, so an enabled gate stays locked.
#[derive(Clone, Copy, Debug)]
pub struct SystemAuthenticator;

impl SystemAuthenticator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemAuthenticator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl AuthenticatorPort for SystemAuthenticator {
    async fn authenticate(
        &self,
        _prompt_title: &str,
        _prompt_subtitle: &str,
    ) -> Result<AuthOutcome, AuthError> {
        Err(AuthError::Unavailable(
            "no local authentication provider on this platform".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_system_authenticator_fails_closed() {
        let authenticator = SystemAuthenticator::new();
        let result = block_on(authenticator.authenticate("title", "subtitle"));
        assert!(matches!(result, Err(AuthError::Unavailable(_))));
    }
}
