// SPDX-License-Identifier: GPL-3.0-only

//! Task that owns the [`AppModel`] and drives request and toast lifecycles.
//!
//! All mutation happens inside one spawned task. Intents, request completions
//! and toast timers are consumed by a single `select!` loop, so the model never
//! needs a lock. Every processed event publishes a fresh [`AppState`] snapshot
//! on a `watch` channel.
//!
//! Dropping or shutting down the [`ControllerHandle`] aborts the task. The
//! `JoinSet`s owning the in-flight request and the toast timers are dropped
//! with it, which cancels them before they can touch the state again.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use smackmaster_shared::{RoastError, RoastResponse, RoastService, RoastTarget, Tone};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::{JoinError, JoinHandle, JoinSet};

use crate::controller::intent::Intent;
use crate::controller::model::AppModel;
use crate::controller::state::AppState;

/// Destination for copied roasts
pub trait ClipboardSink: Send + 'static {
    fn write(&mut self, text: &str);
}

impl<F> ClipboardSink for F
where
    F: FnMut(&str) + Send + 'static,
{
    fn write(&mut self, text: &str) {
        self(text);
    }
}

/// Controller errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ControllerError {
    #[error("Controller has shut down")]
    Closed,
}

enum Envelope {
    Intent(Intent),
    /// Reply with the state once everything queued before it was applied
    Snapshot(oneshot::Sender<AppState>),
}

type RequestOutcome = Result<RoastResponse, RoastError>;

/// The roast screen controller
pub struct RoastController<S: RoastService> {
    model: AppModel,
    service: Arc<S>,
    clipboard: Box<dyn ClipboardSink>,
    state_tx: watch::Sender<AppState>,
    /// Holds at most one task; `is_processing` guards the spawn
    request: JoinSet<RequestOutcome>,
    toast_timers: JoinSet<u64>,
}

impl<S: RoastService> RoastController<S> {
    /// Start the controller on the current tokio runtime
    ///
    /// # Panics
    ///
    /// Panics if called outside of a tokio runtime.
    pub fn spawn(service: S, clipboard: impl ClipboardSink) -> ControllerHandle {
        let model = AppModel::new();
        let (state_tx, state_rx) = watch::channel(model.state().clone());
        let (intent_tx, intent_rx) = mpsc::unbounded_channel();

        let controller = Self {
            model,
            service: Arc::new(service),
            clipboard: Box::new(clipboard),
            state_tx,
            request: JoinSet::new(),
            toast_timers: JoinSet::new(),
        };
        let task = tokio::spawn(controller.run(intent_rx));

        ControllerHandle {
            intents: intent_tx,
            state: state_rx,
            task: Some(task),
        }
    }

    async fn run(mut self, mut inbox: mpsc::UnboundedReceiver<Envelope>) {
        debug!("Controller started");
        loop {
            tokio::select! {
                envelope = inbox.recv() => {
                    match envelope {
                        Some(Envelope::Intent(intent)) => self.handle_intent(intent),
                        Some(Envelope::Snapshot(reply)) => {
                            let _ = reply.send(self.model.state().clone());
                        }
                        None => break,
                    }
                }
                Some(joined) = self.request.join_next() => {
                    self.finish_request(joined);
                }
                Some(joined) = self.toast_timers.join_next() => {
                    if let Ok(generation) = joined {
                        self.model.expire_toast(generation);
                    }
                }
            }
            self.publish();
        }
        debug!("Controller stopped");
    }

    fn handle_intent(&mut self, intent: Intent) {
        match intent {
            Intent::UpdateComment(value) => self.model.update_comment(value),
            Intent::SetTone(tone) => {
                self.model.set_tone(tone);
            }
            Intent::ToggleMicGlow => self.model.toggle_mic_glow(),
            Intent::Clear => {
                self.model.clear();
            }
            Intent::Copy => {
                if let Some(text) = self.model.copy() {
                    self.clipboard.write(&text);
                }
            }
            Intent::DismissToast => self.model.dismiss_toast(),
            Intent::Minimize => self.model.minimize(),
            Intent::Restore => self.model.restore(),
            Intent::SubmitRoast(target) => self.submit(target),
            Intent::RoastWithTone(tone, target) => {
                self.model.set_tone(tone);
                self.submit(target);
            }
            Intent::ScheduleToastClear(delay) => self.schedule_toast_clear(delay),
        }
    }

    fn submit(&mut self, target: RoastTarget) {
        let Some(request) = self.model.begin_submission() else {
            return;
        };
        debug_assert!(self.request.is_empty());

        let service = Arc::clone(&self.service);
        self.request.spawn(async move {
            service
                .send(&target.base_url, &target.endpoint, &request)
                .await
        });
    }

    /// Single exit point of a submission, whatever happened to the task
    fn finish_request(&mut self, joined: Result<RequestOutcome, JoinError>) {
        let outcome = joined.unwrap_or_else(|e| Err(RoastError::Unexpected(join_message(e))));
        self.model.finish_submission(outcome);
    }

    fn schedule_toast_clear(&mut self, delay: Duration) {
        let Some(generation) = self.model.toast_generation() else {
            debug!("No toast to clear");
            return;
        };
        self.toast_timers.spawn(async move {
            tokio::time::sleep(delay).await;
            generation
        });
    }

    fn publish(&self) {
        let state = self.model.state();
        self.state_tx.send_if_modified(|current| {
            if current == state {
                false
            } else {
                current.clone_from(state);
                true
            }
        });
    }
}

fn join_message(e: JoinError) -> String {
    if e.is_cancelled() {
        warn!("Roast request task was cancelled");
        return String::new();
    }
    let payload = e.into_panic();
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        String::new()
    }
}

/// Sends intents to a running [`RoastController`] and observes its state
pub struct ControllerHandle {
    intents: mpsc::UnboundedSender<Envelope>,
    state: watch::Receiver<AppState>,
    task: Option<JoinHandle<()>>,
}

impl ControllerHandle {
    /// Queue an intent
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::Closed`] if the controller task is gone.
    pub fn dispatch(&self, intent: Intent) -> Result<(), ControllerError> {
        self.intents
            .send(Envelope::Intent(intent))
            .map_err(|_| ControllerError::Closed)
    }

    /// # Errors
    ///
    /// Returns [`ControllerError::Closed`] if the controller task is gone.
    pub fn update_comment(&self, value: impl Into<String>) -> Result<(), ControllerError> {
        self.dispatch(Intent::UpdateComment(value.into()))
    }

    /// # Errors
    ///
    /// Returns [`ControllerError::Closed`] if the controller task is gone.
    pub fn set_tone(&self, tone: Tone) -> Result<(), ControllerError> {
        self.dispatch(Intent::SetTone(tone))
    }

    /// # Errors
    ///
    /// Returns [`ControllerError::Closed`] if the controller task is gone.
    pub fn toggle_mic_glow(&self) -> Result<(), ControllerError> {
        self.dispatch(Intent::ToggleMicGlow)
    }

    /// # Errors
    ///
    /// Returns [`ControllerError::Closed`] if the controller task is gone.
    pub fn clear(&self) -> Result<(), ControllerError> {
        self.dispatch(Intent::Clear)
    }

    /// # Errors
    ///
    /// Returns [`ControllerError::Closed`] if the controller task is gone.
    pub fn copy(&self) -> Result<(), ControllerError> {
        self.dispatch(Intent::Copy)
    }

    /// # Errors
    ///
    /// Returns [`ControllerError::Closed`] if the controller task is gone.
    pub fn dismiss_toast(&self) -> Result<(), ControllerError> {
        self.dispatch(Intent::DismissToast)
    }

    /// # Errors
    ///
    /// Returns [`ControllerError::Closed`] if the controller task is gone.
    pub fn minimize(&self) -> Result<(), ControllerError> {
        self.dispatch(Intent::Minimize)
    }

    /// # Errors
    ///
    /// Returns [`ControllerError::Closed`] if the controller task is gone.
    pub fn restore(&self) -> Result<(), ControllerError> {
        self.dispatch(Intent::Restore)
    }

    /// # Errors
    ///
    /// Returns [`ControllerError::Closed`] if the controller task is gone.
    pub fn submit_roast_request(
        &self,
        base_url: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Result<(), ControllerError> {
        self.dispatch(Intent::SubmitRoast(RoastTarget::new(base_url, endpoint)))
    }

    /// # Errors
    ///
    /// Returns [`ControllerError::Closed`] if the controller task is gone.
    pub fn roast_with_tone(&self, tone: Tone, target: RoastTarget) -> Result<(), ControllerError> {
        self.dispatch(Intent::RoastWithTone(tone, target))
    }

    /// # Errors
    ///
    /// Returns [`ControllerError::Closed`] if the controller task is gone.
    pub fn schedule_toast_clear(&self, delay: Duration) -> Result<(), ControllerError> {
        self.dispatch(Intent::ScheduleToastClear(delay))
    }

    /// Latest published state, without waiting for queued intents
    #[must_use]
    pub fn snapshot(&self) -> AppState {
        self.state.borrow().clone()
    }

    /// Receiver that is notified after every state change
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.state.clone()
    }

    /// State after every intent dispatched so far has been applied
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::Closed`] if the controller task is gone.
    pub async fn current_state(&self) -> Result<AppState, ControllerError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.intents
            .send(Envelope::Snapshot(reply_tx))
            .map_err(|_| ControllerError::Closed)?;
        reply_rx.await.map_err(|_| ControllerError::Closed)
    }

    /// Wait until no request is in flight and return that state
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::Closed`] if the controller stops while waiting.
    pub async fn wait_until_idle(&self) -> Result<AppState, ControllerError> {
        let state = self.current_state().await?;
        if !state.is_processing {
            return Ok(state);
        }
        let mut rx = self.subscribe();
        let idle = rx
            .wait_for(|state| !state.is_processing)
            .await
            .map_err(|_| ControllerError::Closed)?;
        Ok(idle.clone())
    }

    /// Tear the controller down, cancelling any request and toast timer
    pub async fn shutdown(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            let _ = task.await;
        }
    }
}

impl Drop for ControllerHandle {
    fn drop(&mut self) {
        if let Some(task) = &self.task {
            task.abort();
        }
    }
}
