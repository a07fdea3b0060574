use super::error::AuthError;
use super::types::{AppActivity, ChallengeResolution, ChallengeTicket, GateState};
use crate::domain::vault::error::VaultError;
use crate::platform::Platform;
use crate::ports::AuthOutcome;
use parking_lot::Mutex;

#[derive(Debug)]
struct GateInner {
    enabled: bool,
    state: GateState,
    epoch: u64,
}

/// Lock/unlock state machine in front of every UI-facing vault operation.
///
/// Every transition away from `Authenticating` bumps the epoch, so a challenge
/// result that arrives after the gate relocked can never reopen it.
#[derive(Debug)]
pub struct AuthGate {
    inner: Mutex<GateInner>,
}

impl AuthGate {
    /// Cold start: locked when local authentication is enabled, bypassed otherwise.
    pub fn new(enabled: bool) -> Self {
        let state = if enabled {
            GateState::Locked
        } else {
            GateState::Unlocked
        };

        Self {
            inner: Mutex::new(GateInner {
                enabled,
                state,
                epoch: 0,
            }),
        }
    }

    pub fn state(&self) -> GateState {
        let inner = self.inner.lock();
        if inner.enabled {
            inner.state
        } else {
            GateState::Unlocked
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.lock().enabled
    }

    pub fn is_unlocked(&self) -> bool {
        self.state() == GateState::Unlocked
    }

    pub fn ensure_unlocked(&self) -> Result<(), VaultError> {
        if self.is_unlocked() {
            Ok(())
        } else {
            Err(VaultError::Locked)
        }
    }

    /// Applies a settings toggle. The current foreground session stays open;
    /// any pending challenge is invalidated.
    pub fn set_enabled(&self, enabled: bool) {
        let mut inner = self.inner.lock();
        inner.enabled = enabled;
        inner.state = GateState::Unlocked;
        inner.epoch += 1;
    }

    /// Feeds a foreground transition into the gate.
    ///
    /// Returns a ticket when a new challenge must be issued.
    pub fn on_activity_change(&self, activity: AppActivity) -> Option<ChallengeTicket> {
        let mut inner = self.inner.lock();
        if !inner.enabled {
            return None;
        }

        if activity.is_active() {
            match inner.state {
                GateState::Locked => {
                    inner.epoch += 1;
                    inner.state = GateState::Authenticating;
                    Some(ChallengeTicket { epoch: inner.epoch })
                }
                GateState::Authenticating | GateState::Unlocked => None,
            }
        } else {
            if inner.state != GateState::Locked {
                inner.epoch += 1;
            }
            inner.state = GateState::Locked;
            None
        }
    }

    /// Applies a challenge result, discarding it if the episode is over.
    pub fn resolve(
        &self,
        ticket: ChallengeTicket,
        result: Result<AuthOutcome, AuthError>,
    ) -> ChallengeResolution {
        let mut inner = self.inner.lock();
        if !inner.enabled || inner.state != GateState::Authenticating || inner.epoch != ticket.epoch
        {
            return ChallengeResolution::Stale;
        }

        match result {
            Ok(AuthOutcome { success: true }) => {
                inner.state = GateState::Unlocked;
                ChallengeResolution::Unlocked
            }
            Ok(AuthOutcome { success: false }) => {
                inner.state = GateState::Locked;
                ChallengeResolution::Denied
            }
            Err(error) => {
                inner.state = GateState::Locked;
                ChallengeResolution::Failed(error)
            }
        }
    }

    /// Runs the challenge for `ticket` through the platform authenticator.
    ///
    /// The gate lock is not held while the prompt is pending.
    pub async fn run_challenge(
        &self,
        platform: &Platform,
        ticket: ChallengeTicket,
    ) -> ChallengeResolution {
        let config = platform.config();
        let epoch = ticket.epoch();
        let result = platform
            .authenticator()
            .authenticate(&config.auth_prompt_title, &config.auth_prompt_subtitle)
            .await;

        let resolution = self.resolve(ticket, result);
        match &resolution {
            ChallengeResolution::Unlocked => platform.logger().log("Vault unlocked"),
            ChallengeResolution::Denied => {
                platform.logger().warn("Local authentication denied; vault stays locked")
            }
            ChallengeResolution::Failed(e) => platform
                .logger()
                .warn(&format!("Local authentication error: {e}; vault stays locked")),
            ChallengeResolution::Stale => platform.logger().warn(&format!(
                "Discarding stale authentication result for episode {epoch}"
            )),
        }

        resolution
    }
}
