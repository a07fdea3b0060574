use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    Failed,
    Cancelled,
    Unavailable(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed => write!(f, "Local authentication failed"),
            Self::Cancelled => write!(f, "Local authentication cancelled"),
            Self::Unavailable(msg) => write!(f, "Local authentication unavailable: {msg}"),
        }
    }
}

impl std::error::Error for AuthError {}
