use crate::clipboard::SystemClipboard;
use crate::provider::RewriteProvider;
use crate::rewriter::{IntentSink, RewriterController, RewriterTimings};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use parking_lot::Mutex;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;

pub fn run(
    provider: Arc<dyn RewriteProvider>,
    timings: RewriterTimings,
    runtime: Handle,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(120);
    let events = EventHandler::new(tick_rate);

    let sender = Mutex::new(events.sender());
    let sink: IntentSink = Arc::new(move |intent| {
        // The receiver is gone only once the loop has exited.
        let _ = sender.lock().send(AppEvent::Rewriter(intent));
    });

    let controller = RewriterController::new(provider, timings, runtime, sink);
    let mut app = App::new(controller, Box::new(SystemClipboard::new()));
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        match events.next(timeout) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Rewriter(intent)) => app.dispatch(intent),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }

    // Aborts outstanding requests and timers before the terminal is restored.
    drop(app);
    drop(events);
    drop(guard);
    Ok(())
}
