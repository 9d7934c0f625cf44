// SPDX-License-Identifier: GPL-3.0-only

//! Synchronous state transitions behind the controller.
//!
//! [`AppModel`] never performs I/O. The runtime asks it for a request to send
//! and hands the outcome back, so every rule about what may change and when
//! lives here.

use log::{debug, info, warn};
use smackmaster_shared::{RoastError, RoastRequest, RoastResponse, Tone};

use crate::controller::state::{AppState, text};

/// Owns the [`AppState`] and applies intents to it
#[derive(Debug, Default)]
pub struct AppModel {
    state: AppState,
    /// Bumped on every toast assignment so stale clear timers can be told apart
    toast_generation: u64,
}

impl AppModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Replace the comment. A non-blank value also clears the warning.
    pub fn update_comment(&mut self, value: String) {
        if !value.trim().is_empty() {
            self.state.warning_message = None;
        }
        self.state.comment = value;
    }

    /// Returns false when the change was ignored because a request is in flight
    pub fn set_tone(&mut self, tone: Tone) -> bool {
        if self.state.is_processing {
            debug!("Ignoring tone change to {tone} while processing");
            return false;
        }
        self.state.selected_tone = tone;
        true
    }

    pub fn toggle_mic_glow(&mut self) {
        self.state.is_mic_glowing = !self.state.is_mic_glowing;
    }

    /// Returns false when ignored because a request is in flight
    pub fn clear(&mut self) -> bool {
        if self.state.is_processing {
            debug!("Ignoring clear while processing");
            return false;
        }
        self.state.comment.clear();
        self.state.roast.clear();
        self.state.warning_message = None;
        self.state.toast_message = None;
        true
    }

    /// Text to hand to the clipboard, if there is anything to copy
    pub fn copy(&mut self) -> Option<String> {
        let current = self.state.roast.trim();
        if current.is_empty() {
            self.set_toast(text::NOTHING_TO_COPY);
            return None;
        }
        let current = current.to_string();
        self.set_toast(text::COPIED);
        Some(current)
    }

    pub fn dismiss_toast(&mut self) {
        self.state.toast_message = None;
    }

    pub fn minimize(&mut self) {
        self.state.is_minimized = true;
    }

    pub fn restore(&mut self) {
        self.state.is_minimized = false;
    }

    /// Validate the comment and enter the processing state.
    ///
    /// Returns the request to send, or `None` when the comment is blank or a
    /// request is already in flight.
    pub fn begin_submission(&mut self) -> Option<RoastRequest> {
        let trimmed = self.state.comment.trim();
        if trimmed.is_empty() {
            self.state.warning_message = Some(text::BLANK_COMMENT.to_string());
            return None;
        }
        if self.state.is_processing {
            debug!("Ignoring submission while another request is in flight");
            return None;
        }

        let request = RoastRequest::new(self.state.selected_tone, trimmed);
        self.state.is_processing = true;
        self.state.warning_message = None;
        self.state.toast_message = None;
        self.state.roast.clear();
        info!("Submitting roast request with tone {}", request.tone);
        Some(request)
    }

    /// Apply the outcome of the in-flight request and leave the processing state
    pub fn finish_submission(&mut self, outcome: Result<RoastResponse, RoastError>) {
        match outcome {
            Ok(response) => {
                self.state.roast = response.roast.trim().to_string();
                self.set_toast(text::ROAST_READY);
                info!("Roast ready ({} chars)", self.state.roast.len());
            }
            Err(e) => {
                warn!("Roast request failed: {e}");
                let fallback = if e.is_transport() {
                    text::UNREACHABLE
                } else {
                    text::SOMETHING_WRONG
                };
                self.state.warning_message = Some(e.message().unwrap_or(fallback).to_string());
            }
        }
        self.state.is_processing = false;
    }

    /// Generation of the toast currently shown, `None` when there is none
    #[must_use]
    pub fn toast_generation(&self) -> Option<u64> {
        self.state.toast_message.as_ref().map(|_| self.toast_generation)
    }

    /// Clear the toast if it is still the one a timer was scheduled for.
    ///
    /// Returns true when the toast was cleared.
    pub fn expire_toast(&mut self, generation: u64) -> bool {
        if self.toast_generation() != Some(generation) {
            debug!("Skipping stale toast clear (generation {generation})");
            return false;
        }
        self.state.toast_message = None;
        true
    }

    fn set_toast(&mut self, message: &str) {
        self.toast_generation = self.toast_generation.wrapping_add(1);
        self.state.toast_message = Some(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_with_comment(comment: &str) -> AppModel {
        let mut model = AppModel::new();
        model.update_comment(comment.to_string());
        model
    }

    fn ok(roast: &str) -> Result<RoastResponse, RoastError> {
        Ok(RoastResponse {
            roast: roast.to_string(),
        })
    }

    #[test]
    fn test_blank_comments_never_start_a_request() {
        for blank in ["", " ", "\n\t  ", "\u{3000}"] {
            let mut model = model_with_comment(blank);
            assert_eq!(model.begin_submission(), None, "comment {blank:?}");
            assert!(!model.state().is_processing);
            assert_eq!(
                model.state().warning_message.as_deref(),
                Some(text::BLANK_COMMENT)
            );
        }
    }

    #[test]
    fn test_non_blank_comment_clears_warning() {
        let mut model = AppModel::new();
        model.begin_submission();
        assert!(model.state().warning_message.is_some());

        model.update_comment("   ".to_string());
        assert!(model.state().warning_message.is_some());

        model.update_comment("you call that code?".to_string());
        assert_eq!(model.state().warning_message, None);
        assert_eq!(model.state().comment, "you call that code?");
    }

    #[test]
    fn test_begin_submission_trims_and_uses_tone() {
        let mut model = model_with_comment("  nice try \n");
        assert!(model.set_tone(Tone::Rude));

        let request = model.begin_submission().expect("request");
        assert_eq!(request, RoastRequest::new(Tone::Rude, "nice try"));
        assert!(model.state().is_processing);
        // The comment itself is left as typed
        assert_eq!(model.state().comment, "  nice try \n");
    }

    #[test]
    fn test_begin_submission_resets_transient_fields() {
        let mut model = model_with_comment("first");
        model.begin_submission();
        model.finish_submission(ok("old roast"));
        assert_eq!(model.state().roast, "old roast");
        assert!(model.state().toast_message.is_some());

        model.begin_submission().expect("request");
        assert_eq!(model.state().roast, "");
        assert_eq!(model.state().toast_message, None);

        model.finish_submission(Err(RoastError::Transport("stale".to_string())));
        assert!(model.state().warning_message.is_some());

        model.begin_submission().expect("request");
        assert_eq!(model.state().warning_message, None);
    }

    #[test]
    fn test_second_submission_is_ignored_while_processing() {
        let mut model = model_with_comment("roast me");
        assert!(model.begin_submission().is_some());
        assert!(model.begin_submission().is_none());
        assert!(model.state().is_processing);
        assert_eq!(model.state().warning_message, None);
    }

    #[test]
    fn test_success_sets_trimmed_roast_and_toast() {
        let mut model = model_with_comment("nice try");
        model.set_tone(Tone::Rude);
        model.begin_submission();
        model.finish_submission(ok("  weak.  "));

        assert_eq!(model.state().roast, "weak.");
        assert_eq!(model.state().toast_message.as_deref(), Some(text::ROAST_READY));
        assert!(!model.state().is_processing);
    }

    #[test]
    fn test_transport_failure_surfaces_message() {
        let mut model = model_with_comment("nice try");
        model.begin_submission();
        model.finish_submission(Err(RoastError::Transport("rate limited".to_string())));

        assert_eq!(model.state().warning_message.as_deref(), Some("rate limited"));
        assert_eq!(model.state().roast, "");
        assert!(!model.state().is_processing);
    }

    #[test]
    fn test_failures_without_message_use_fallbacks() {
        let mut model = model_with_comment("nice try");
        model.begin_submission();
        model.finish_submission(Err(RoastError::Transport(String::new())));
        assert_eq!(
            model.state().warning_message.as_deref(),
            Some(text::UNREACHABLE)
        );

        model.begin_submission();
        model.finish_submission(Err(RoastError::Unexpected(" ".to_string())));
        assert_eq!(
            model.state().warning_message.as_deref(),
            Some(text::SOMETHING_WRONG)
        );
        assert!(!model.state().is_processing);
    }

    #[test]
    fn test_parse_failure_surfaces_its_message() {
        let mut model = model_with_comment("nice try");
        model.begin_submission();
        model.finish_submission(Err(RoastError::Parse("Unreadable roast response".to_string())));
        assert_eq!(
            model.state().warning_message.as_deref(),
            Some("Unreadable roast response")
        );
        assert!(!model.state().is_processing);
    }

    #[test]
    fn test_tone_and_clear_blocked_while_processing() {
        let mut model = model_with_comment("roast me");
        model.begin_submission();

        assert!(!model.set_tone(Tone::Brutal));
        assert_eq!(model.state().selected_tone, Tone::Nice);
        assert!(!model.clear());
        assert_eq!(model.state().comment, "roast me");

        model.finish_submission(ok("done"));
        assert!(model.set_tone(Tone::Brutal));
        assert_eq!(model.state().selected_tone, Tone::Brutal);
        assert!(model.clear());
        assert_eq!(model.state().comment, "");
        assert_eq!(model.state().roast, "");
        assert_eq!(model.state().toast_message, None);
        assert_eq!(model.state().warning_message, None);
    }

    #[test]
    fn test_comment_edits_allowed_while_processing() {
        let mut model = model_with_comment("roast me");
        model.begin_submission();
        model.update_comment("changed my mind".to_string());
        model.toggle_mic_glow();
        model.minimize();

        assert_eq!(model.state().comment, "changed my mind");
        assert!(model.state().is_mic_glowing);
        assert!(model.state().is_minimized);
        assert!(model.state().is_processing);
    }

    #[test]
    fn test_copy_with_blank_roast() {
        let mut model = AppModel::new();
        assert_eq!(model.copy(), None);
        assert_eq!(
            model.state().toast_message.as_deref(),
            Some(text::NOTHING_TO_COPY)
        );
    }

    #[test]
    fn test_copy_yields_trimmed_roast() {
        let mut model = model_with_comment("x");
        model.begin_submission();
        model.finish_submission(ok("you got roasted"));

        assert_eq!(model.copy().as_deref(), Some("you got roasted"));
        assert_eq!(model.state().toast_message.as_deref(), Some(text::COPIED));
    }

    #[test]
    fn test_minimize_restore_and_mic_glow() {
        let mut model = AppModel::new();
        model.minimize();
        model.minimize();
        assert!(model.state().is_minimized);
        model.restore();
        assert!(!model.state().is_minimized);

        model.toggle_mic_glow();
        model.toggle_mic_glow();
        assert!(!model.state().is_mic_glowing);
    }

    #[test]
    fn test_toast_generation_guards_stale_clears() {
        let mut model = AppModel::new();
        assert_eq!(model.toast_generation(), None);

        model.copy();
        let first = model.toast_generation().expect("toast shown");
        model.copy();
        let second = model.toast_generation().expect("toast shown");
        assert_ne!(first, second);

        assert!(!model.expire_toast(first));
        assert!(model.state().toast_message.is_some());
        assert!(model.expire_toast(second));
        assert_eq!(model.state().toast_message, None);
        assert!(!model.expire_toast(second));
    }

    #[test]
    fn test_dismiss_toast() {
        let mut model = AppModel::new();
        model.copy();
        model.dismiss_toast();
        assert_eq!(model.state().toast_message, None);
        assert_eq!(model.toast_generation(), None);
    }
}
