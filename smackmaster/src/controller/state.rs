// SPDX-License-Identifier: GPL-3.0-only

//! Observable application state.

use smackmaster_shared::Tone;

/// User-facing strings set by the controller
pub mod text {
    pub const BLANK_COMMENT: &str = "Paste something spicy to roast first.";
    pub const UNREACHABLE: &str = "Unable to reach the service.";
    pub const SOMETHING_WRONG: &str = "Something went wrong.";
    pub const NOTHING_TO_COPY: &str = "Nothing to copy";
    pub const COPIED: &str = "Copied!";
    pub const ROAST_READY: &str = "Roast ready";
}

/// Everything a UI needs to render the roast screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    /// Text the user wants roasted
    pub comment: String,
    /// Latest generated roast, trimmed
    pub roast: String,
    /// Tone sent with the next submission
    pub selected_tone: Tone,
    /// True while exactly one request is in flight
    pub is_processing: bool,
    /// Validation or request failure to show inline
    pub warning_message: Option<String>,
    /// Transient status chip
    pub toast_message: Option<String>,
    pub is_minimized: bool,
    pub is_mic_glowing: bool,
}

impl AppState {
    /// Copy is only offered once there is a settled roast
    #[must_use]
    pub fn can_copy(&self) -> bool {
        !self.roast.trim().is_empty() && !self.is_processing
    }

    #[must_use]
    pub fn can_clear(&self) -> bool {
        !self.is_processing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = AppState::default();
        assert_eq!(state.comment, "");
        assert_eq!(state.roast, "");
        assert_eq!(state.selected_tone, Tone::Nice);
        assert!(!state.is_processing);
        assert_eq!(state.warning_message, None);
        assert_eq!(state.toast_message, None);
        assert!(!state.is_minimized);
        assert!(!state.is_mic_glowing);
    }

    #[test]
    fn test_affordances_follow_processing() {
        let mut state = AppState {
            roast: "burn".to_string(),
            ..Default::default()
        };
        assert!(state.can_copy());
        assert!(state.can_clear());

        state.is_processing = true;
        assert!(!state.can_copy());
        assert!(!state.can_clear());

        state.is_processing = false;
        state.roast = "   ".to_string();
        assert!(!state.can_copy());
    }
}
