// SPDX-License-Identifier: GPL-3.0-only

//! Intents a UI layer sends to the controller.

use std::time::Duration;

use smackmaster_shared::{RoastTarget, Tone};

/// How long a toast stays up when the UI does not say otherwise
pub const DEFAULT_TOAST_CLEAR_DELAY: Duration = Duration::from_millis(1200);

/// User intents, applied in the order they are received
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    UpdateComment(String),
    SetTone(Tone),
    ToggleMicGlow,
    Clear,
    /// Copy the roast to the clipboard sink
    Copy,
    DismissToast,
    Minimize,
    Restore,
    SubmitRoast(RoastTarget),
    /// Select a tone and submit in one gesture
    RoastWithTone(Tone, RoastTarget),
    /// Clear the current toast after the delay, unless it was replaced meanwhile
    ScheduleToastClear(Duration),
}
