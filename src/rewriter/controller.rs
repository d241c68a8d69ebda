//! Effect runner for the Note Rewriter.
//!
//! The reducer decides *what* the form looks like; the controller notices
//! the transitions that need work done outside the UI thread and starts it:
//!
//! - a new in-flight token → spawn the provider call
//! - a new cooldown epoch → schedule `CooldownElapsed`
//! - a new copied epoch → schedule `CopiedElapsed`
//!
//! Completions come back as intents through the [`IntentSink`] and are fed
//! to [`RewriterController::dispatch`] by the event loop.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::clipboard::ClipboardWriter;
use crate::config::RewriterConfig;
use crate::provider::{RewriteError, RewriteProvider};
use crate::ui::mvi::{dispatch_mvi, Reducer};

use super::intent::RewriterIntent;
use super::reducer::RewriterReducer;
use super::state::RewriterState;
use super::timers::{OwnedTasks, TimerKind};

/// Where async completions are delivered. Called from tokio worker threads.
pub type IntentSink = Arc<dyn Fn(RewriterIntent) + Send + Sync>;

/// How long the timed flags stay up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewriterTimings {
    pub cooldown: Duration,
    pub copied_flash: Duration,
}

impl Default for RewriterTimings {
    fn default() -> Self {
        Self {
            cooldown: Duration::from_secs(5),
            copied_flash: Duration::from_secs(2),
        }
    }
}

impl From<&RewriterConfig> for RewriterTimings {
    fn from(config: &RewriterConfig) -> Self {
        Self {
            cooldown: config.cooldown(),
            copied_flash: config.copied_flash(),
        }
    }
}

/// Owns the form state and every task started on its behalf.
pub struct RewriterController {
    state: RewriterState,
    provider: Arc<dyn RewriteProvider>,
    timings: RewriterTimings,
    runtime: Handle,
    sink: IntentSink,
    tasks: OwnedTasks,
}

/// The parts of the state whose changes trigger effects.
#[derive(Clone, Copy)]
struct EffectMarkers {
    in_flight: Option<u64>,
    cooldown: Option<u64>,
    copied: Option<u64>,
}

impl EffectMarkers {
    fn of(state: &RewriterState) -> Self {
        Self {
            in_flight: state.in_flight_token(),
            cooldown: state.cooldown_epoch(),
            copied: state.copied_epoch(),
        }
    }
}

impl RewriterController {
    pub fn new(
        provider: Arc<dyn RewriteProvider>,
        timings: RewriterTimings,
        runtime: Handle,
        sink: IntentSink,
    ) -> Self {
        Self {
            state: RewriterState::default(),
            provider,
            timings,
            runtime,
            sink,
            tasks: OwnedTasks::default(),
        }
    }

    pub fn state(&self) -> &RewriterState {
        &self.state
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Run the reducer, then start whatever the transition calls for.
    pub fn dispatch(&mut self, intent: RewriterIntent) {
        let before = EffectMarkers::of(&self.state);
        dispatch_mvi!(self, state, RewriterReducer, intent);
        self.run_effects(before);
    }

    /// Copy the current output to `clipboard`. Does nothing without output.
    pub fn copy_output(&mut self, clipboard: &mut dyn ClipboardWriter) {
        if self.state.output().is_empty() {
            return;
        }

        match clipboard.write_text(self.state.output()) {
            Ok(()) => self.dispatch(RewriterIntent::CopySucceeded),
            Err(err) => {
                tracing::warn!(error = %err, "Clipboard write failed");
                self.dispatch(RewriterIntent::CopyFailed);
            }
        }
    }

    fn run_effects(&mut self, before: EffectMarkers) {
        let after = EffectMarkers::of(&self.state);

        if let Some(token) = after.in_flight {
            if before.in_flight != Some(token) {
                self.spawn_rewrite(token);
            }
        }

        if let Some(epoch) = after.cooldown {
            if before.cooldown != Some(epoch) {
                self.schedule(
                    TimerKind::Cooldown,
                    self.timings.cooldown,
                    RewriterIntent::CooldownElapsed { epoch },
                );
            }
        }

        match after.copied {
            Some(epoch) if before.copied != Some(epoch) => self.schedule(
                TimerKind::Copied,
                self.timings.copied_flash,
                RewriterIntent::CopiedElapsed { epoch },
            ),
            None if before.copied.is_some() => self.tasks.cancel_timer(TimerKind::Copied),
            _ => {}
        }
    }

    /// Run the provider call for `token` in its own task, supervised so a
    /// panic or abort still produces a `RewriteFinished`.
    fn spawn_rewrite(&mut self, token: u64) {
        let provider = Arc::clone(&self.provider);
        let notes = self.state.input().to_string();
        tracing::info!(token, notes_len = notes.len(), "Dispatching rewrite");

        let call = self
            .runtime
            .spawn(async move { provider.rewrite(&notes).await });
        let call_abort = call.abort_handle();

        let sink = Arc::clone(&self.sink);
        let supervisor = self.runtime.spawn(async move {
            let result = match call.await {
                Ok(result) => result,
                Err(join_error) => Err(RewriteError::Aborted(join_error.to_string())),
            };
            let result = result.map_err(|err| {
                tracing::warn!(token, error = %err, "Rewrite failed");
                err.user_message().to_string()
            });
            sink(RewriterIntent::RewriteFinished { token, result });
        });

        self.tasks.track_request(call_abort);
        self.tasks.track_request(supervisor.abort_handle());
    }

    fn schedule(&mut self, kind: TimerKind, delay: Duration, intent: RewriterIntent) {
        let sink = Arc::clone(&self.sink);
        let timer = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            sink(intent);
        });
        self.tasks.replace_timer(kind, timer.abort_handle());
    }
}
