use crate::domain::authentication::AuthError;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthOutcome {
    pub success: bool,
}

/// Port for the platform's local-authentication prompt (biometrics, device PIN).
///
/// Implementations must always resolve. The gate calls it at most once per
/// authenticating episode.
#[async_trait(?Send)]
pub trait AuthenticatorPort: Send + Sync {
    async fn authenticate(
        &self,
        prompt_title: &str,
        prompt_subtitle: &str,
    ) -> Result<AuthOutcome, AuthError>;
}
