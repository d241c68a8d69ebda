//! Event pump: terminal input and rewriter completions on one channel.

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::rewriter::RewriterIntent;

#[derive(Debug)]
pub enum AppEvent {
    Input(KeyEvent),
    Paste(String),
    Resize(u16, u16),
    /// A provider completion or timer expiry for the rewriter.
    Rewriter(RewriterIntent),
}

/// Owns the input thread and the receiving end of the event channel.
///
/// Other producers (the rewriter's tokio tasks) get a [`Sender`] via
/// [`EventHandler::sender`].
pub struct EventHandler {
    sender: Sender<AppEvent>,
    receiver: Receiver<AppEvent>,
    stop: Arc<AtomicBool>,
    input_thread: Option<thread::JoinHandle<()>>,
}

impl EventHandler {
    pub fn new(poll_interval: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));

        let input_sender = sender.clone();
        let input_stop = Arc::clone(&stop);
        let input_thread = thread::spawn(move || {
            while !input_stop.load(Ordering::Relaxed) {
                match event::poll(poll_interval) {
                    Ok(true) => {}
                    Ok(false) => continue,
                    Err(err) => {
                        tracing::error!(error = %err, "Terminal event poll failed");
                        break;
                    }
                }
                let event = match event::read() {
                    Ok(event) => event,
                    Err(err) => {
                        tracing::error!(error = %err, "Terminal event read failed");
                        break;
                    }
                };
                if let Some(app_event) = translate(event) {
                    if input_sender.send(app_event).is_err() {
                        break;
                    }
                }
            }
        });

        Self {
            sender,
            receiver,
            stop,
            input_thread: Some(input_thread),
        }
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.sender.clone()
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.input_thread.take() {
            let _ = handle.join();
        }
    }
}

/// Map a crossterm event to an app event. Key releases and repeats are dropped.
fn translate(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Input(key)),
        Event::Paste(text) => Some(AppEvent::Paste(text)),
        Event::Resize(cols, rows) => Some(AppEvent::Resize(cols, rows)),
        _ => None,
    }
}
