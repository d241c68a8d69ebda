//! Shared test utilities: scripted provider, recording clipboard and a
//! controller harness that plays the event loop's part.

#![allow(dead_code, unused_imports)]

pub mod mock_provider;

use async_trait::async_trait;
use note_rewriter::clipboard::{ClipboardError, ClipboardWriter};
use note_rewriter::provider::{RewriteError, RewriteProvider};
use note_rewriter::rewriter::{
    IntentSink, RewriterController, RewriterIntent, RewriterState, RewriterTimings,
};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

/// What the scripted provider does for one call.
#[derive(Debug, Clone)]
pub enum Reply {
    Text(String),
    Status(u16),
    Panic,
}

/// Provider that replays scripted replies, each after an optional delay.
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<(Duration, Reply)>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn reply(self, reply: Reply) -> Self {
        self.reply_after(Duration::ZERO, reply)
    }

    pub fn reply_after(self, delay: Duration, reply: Reply) -> Self {
        self.replies.lock().push_back((delay, reply));
        self
    }

    /// Notes received so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl RewriteProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted/model"
    }

    async fn rewrite(&self, notes: &str) -> Result<String, RewriteError> {
        self.calls.lock().push(notes.to_string());
        let next = self.replies.lock().pop_front();
        let (delay, reply) =
            next.unwrap_or((Duration::ZERO, Reply::Text("NOTES:\n- ok".to_string())));
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        match reply {
            Reply::Text(text) => Ok(text),
            Reply::Status(status) => Err(RewriteError::Status {
                status,
                message: "scripted failure".to_string(),
            }),
            Reply::Panic => panic!("scripted provider panic"),
        }
    }
}

/// Clipboard that records writes, or refuses them.
#[derive(Clone, Default)]
pub struct RecordingClipboard {
    pub written: Arc<Mutex<Vec<String>>>,
    pub fail: bool,
}

impl RecordingClipboard {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn last(&self) -> Option<String> {
        self.written.lock().last().cloned()
    }
}

impl ClipboardWriter for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Unavailable("no display".to_string()));
        }
        self.written.lock().push(text.to_string());
        Ok(())
    }
}

/// Drives a controller the way the UI loop does, minus the terminal.
pub struct Harness {
    pub controller: RewriterController,
    pub provider: Arc<dyn RewriteProvider>,
    receiver: UnboundedReceiver<RewriterIntent>,
}

impl Harness {
    pub fn new(provider: Arc<dyn RewriteProvider>) -> Self {
        Self::with_timings(provider, RewriterTimings::default())
    }

    pub fn with_timings(provider: Arc<dyn RewriteProvider>, timings: RewriterTimings) -> Self {
        let (sender, receiver) = unbounded_channel();
        let sink: IntentSink = Arc::new(move |intent| {
            let _ = sender.send(intent);
        });
        let controller = RewriterController::new(
            Arc::clone(&provider),
            timings,
            tokio::runtime::Handle::current(),
            sink,
        );
        Self {
            controller,
            provider,
            receiver,
        }
    }

    pub fn state(&self) -> &RewriterState {
        self.controller.state()
    }

    pub fn dispatch(&mut self, intent: RewriterIntent) {
        self.controller.dispatch(intent);
    }

    pub fn type_notes(&mut self, notes: &str) {
        self.dispatch(RewriterIntent::InsertText(notes.to_string()));
    }

    pub fn submit(&mut self) {
        self.dispatch(RewriterIntent::Submit);
    }

    /// Feed every delivered completion back into the controller.
    pub fn pump(&mut self) -> usize {
        let mut delivered = 0;
        while let Ok(intent) = self.receiver.try_recv() {
            self.controller.dispatch(intent);
            delivered += 1;
        }
        delivered
    }

    /// Let (paused) time pass, then pump.
    pub async fn advance(&mut self, by: Duration) {
        tokio::time::sleep(by).await;
        self.pump();
    }

    /// Wait for the next completion and apply it.
    pub async fn next(&mut self) -> RewriterIntent {
        let intent = self
            .receiver
            .recv()
            .await
            .expect("controller sink dropped");
        self.controller.dispatch(intent.clone());
        intent
    }
}

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}
