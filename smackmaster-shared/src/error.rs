// SPDX-License-Identifier: GPL-3.0-only
//! Failures surfaced by a roast request

/// Roast request errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoastError {
    /// Non-success HTTP status or network-level failure
    #[error("{0}")]
    Transport(String),

    /// Success status with a body that is not a valid roast response
    #[error("{0}")]
    Parse(String),

    /// The request task failed without producing a result
    #[error("{0}")]
    Unexpected(String),
}

impl RoastError {
    /// The carried message, or `None` when it is blank
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        let message = match self {
            RoastError::Transport(m) | RoastError::Parse(m) | RoastError::Unexpected(m) => m,
        };
        let trimmed = message.trim();
        if trimmed.is_empty() { None } else { Some(message) }
    }

    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, RoastError::Transport(_))
    }
}

impl From<reqwest::Error> for RoastError {
    fn from(e: reqwest::Error) -> Self {
        RoastError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for RoastError {
    fn from(e: serde_json::Error) -> Self {
        RoastError::Parse(format!("Unreadable roast response: {e}"))
    }
}
