//! Tasks owned by the controller: timers and in-flight requests.
//!
//! Everything here is aborted when the controller is dropped, so nothing
//! fires into a form that no longer exists.

use tokio::task::AbortHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TimerKind {
    Cooldown,
    Copied,
}

#[derive(Default)]
pub(super) struct OwnedTasks {
    cooldown: Option<AbortHandle>,
    copied: Option<AbortHandle>,
    requests: Vec<AbortHandle>,
}

impl OwnedTasks {
    /// Install the timer for `kind`, aborting the one it replaces.
    pub(super) fn replace_timer(&mut self, kind: TimerKind, handle: AbortHandle) {
        if let Some(previous) = self.slot(kind).replace(handle) {
            previous.abort();
        }
    }

    pub(super) fn cancel_timer(&mut self, kind: TimerKind) {
        if let Some(handle) = self.slot(kind).take() {
            handle.abort();
        }
    }

    /// Track a request task. Finished handles are pruned on the way in.
    pub(super) fn track_request(&mut self, handle: AbortHandle) {
        self.requests.retain(|h| !h.is_finished());
        self.requests.push(handle);
    }

    fn slot(&mut self, kind: TimerKind) -> &mut Option<AbortHandle> {
        match kind {
            TimerKind::Cooldown => &mut self.cooldown,
            TimerKind::Copied => &mut self.copied,
        }
    }

    fn abort_all(&mut self) {
        for handle in self
            .cooldown
            .take()
            .into_iter()
            .chain(self.copied.take())
            .chain(self.requests.drain(..))
        {
            handle.abort();
        }
    }
}

impl Drop for OwnedTasks {
    fn drop(&mut self) {
        self.abort_all();
    }
}
