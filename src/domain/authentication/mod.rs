pub mod error;
pub mod gate;
pub mod types;

pub use error::AuthError;
pub use gate::AuthGate;
pub use types::{AppActivity, ChallengeResolution, ChallengeTicket, GateState};
