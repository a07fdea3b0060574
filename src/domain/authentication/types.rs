use super::error::AuthError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Locked,
    Authenticating,
    Unlocked,
}

/// Foreground status reported by the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppActivity {
    Active,
    Inactive,
    Background,
}

impl AppActivity {
    pub fn is_active(self) -> bool {
        matches!(self, AppActivity::Active)
    }
}

/// Proof that a challenge was issued for a given authenticating episode.
///
/// Consumed when the challenge result is applied.
#[derive(Debug, PartialEq, Eq)]
pub struct ChallengeTicket {
    pub(super) epoch: u64,
}

impl ChallengeTicket {
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChallengeResolution {
    Unlocked,
    Denied,
    Failed(AuthError),
    /// The gate moved on while the challenge was pending; result discarded.
    Stale,
}
