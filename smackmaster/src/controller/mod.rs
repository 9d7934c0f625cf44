// SPDX-License-Identifier: GPL-3.0-only

//! Roast screen controller: state, intents and the task that applies them.

pub mod intent;
pub mod model;
pub mod runtime;
pub mod state;

pub use intent::{DEFAULT_TOAST_CLEAR_DELAY, Intent};
pub use model::AppModel;
pub use runtime::{ClipboardSink, ControllerError, ControllerHandle, RoastController};
pub use state::AppState;
