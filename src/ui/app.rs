use crate::clipboard::ClipboardWriter;
use crate::rewriter::{RewriterController, RewriterIntent, RewriterState};
use crate::ui::header::HeaderStatus;

pub struct App {
    should_quit: bool,
    rewriter: RewriterController,
    clipboard: Box<dyn ClipboardWriter>,
    /// Spinner frame while a request is in flight.
    animation_tick: u8,
}

impl App {
    pub fn new(rewriter: RewriterController, clipboard: Box<dyn ClipboardWriter>) -> Self {
        Self {
            should_quit: false,
            rewriter,
            clipboard,
            animation_tick: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn rewriter(&self) -> &RewriterState {
        self.rewriter.state()
    }

    pub fn model(&self) -> &str {
        self.rewriter.provider_name()
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn header_status(&self) -> HeaderStatus {
        let state = self.rewriter.state();
        if state.is_loading() {
            HeaderStatus::Processing
        } else if state.is_cooling_down() {
            HeaderStatus::CoolingDown
        } else {
            HeaderStatus::Ready
        }
    }

    pub fn dispatch(&mut self, intent: RewriterIntent) {
        self.rewriter.dispatch(intent);
    }

    pub fn submit(&mut self) {
        self.animation_tick = 0;
        self.dispatch(RewriterIntent::Submit);
    }

    pub fn copy_output(&mut self) {
        self.rewriter.copy_output(self.clipboard.as_mut());
    }

    pub fn reset(&mut self) {
        self.dispatch(RewriterIntent::Reset);
    }

    pub fn on_paste(&mut self, text: &str) {
        self.dispatch(RewriterIntent::InsertText(text.to_string()));
    }

    pub fn on_tick(&mut self) {
        if self.rewriter.state().is_loading() {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
    }
}
