//! Rewriter behaviour end to end: reducer, effects, timers and completions.
//!
//! Timer-driven cases run on tokio's paused clock, so the 5 s cooldown and the
//! 2 s copied flash cost no wall time.

mod common;

use common::mock_provider::{MockProvider, MockResponse};
use common::{ms, Harness, RecordingClipboard, Reply, ScriptedProvider};
use note_rewriter::config::{ProviderConfig, SecureString};
use note_rewriter::provider::{
    ChatCompletionsClient, DEFAULT_SYSTEM_PROMPT, PROCESSING_FAILED, UNEXPECTED_FAILURE,
};
use note_rewriter::rewriter::{RewriterError, RewriterIntent, RewriterTimings};
use std::sync::Arc;

const SAMPLE_NOTES: &str = "check engine light on. scan shows p0456. replaced cap.";

const SAMPLE_OUTPUT: &str = "DIAGNOSTIC FINDINGS:\n\
- Check engine light on.\n\
- Scan shows P0456.\n\
\n\
REPAIRS PERFORMED:\n\
- Replaced cap.";

#[tokio::test(start_paused = true)]
async fn whitespace_notes_never_reach_provider() {
    let provider = Arc::new(ScriptedProvider::new());
    let mut h = Harness::new(provider.clone());

    h.type_notes("   \n\t ");
    h.submit();

    assert_eq!(h.state().error(), Some(&RewriterError::NotesRequired));
    assert!(!h.state().is_loading());
    h.advance(ms(100)).await;
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn successful_rewrite_sets_output_verbatim_and_cools_down() {
    let provider =
        Arc::new(ScriptedProvider::new().reply(Reply::Text(SAMPLE_OUTPUT.to_string())));
    let mut h = Harness::new(provider.clone());

    h.type_notes(SAMPLE_NOTES);
    h.submit();
    assert!(h.state().is_loading());

    h.next().await;

    assert_eq!(h.state().output(), SAMPLE_OUTPUT);
    assert!(h.state().error().is_none());
    assert!(!h.state().is_loading());
    assert!(h.state().is_cooling_down());
    assert_eq!(provider.calls(), vec![SAMPLE_NOTES.to_string()]);
}

#[tokio::test(start_paused = true)]
async fn loading_spans_exactly_the_provider_call() {
    let provider = Arc::new(
        ScriptedProvider::new().reply_after(ms(1_000), Reply::Text("NOTES:\n- done".into())),
    );
    let mut h = Harness::new(provider.clone());

    assert!(!h.state().is_loading());
    h.type_notes("replaced cap");
    h.submit();
    assert!(h.state().is_loading());

    h.advance(ms(500)).await;
    assert!(h.state().is_loading());
    assert!(h.state().output().is_empty());

    h.advance(ms(600)).await;
    assert!(!h.state().is_loading());
    assert_eq!(h.state().output(), "NOTES:\n- done");
}

#[tokio::test(start_paused = true)]
async fn submit_while_loading_is_ignored() {
    let provider = Arc::new(
        ScriptedProvider::new().reply_after(ms(1_000), Reply::Text("NOTES:\n- once".into())),
    );
    let mut h = Harness::new(provider.clone());

    h.type_notes("replaced cap");
    h.submit();
    let token = h.state().in_flight_token();
    h.submit();
    h.submit();

    assert_eq!(h.state().in_flight_token(), token);
    assert!(h.state().error().is_none());

    h.advance(ms(1_100)).await;
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn second_submit_within_cooldown_is_rejected() {
    let provider = Arc::new(
        ScriptedProvider::new()
            .reply(Reply::Text("first".into()))
            .reply(Reply::Text("second".into())),
    );
    let mut h = Harness::new(provider.clone());

    h.type_notes("replaced cap");
    h.submit();
    h.next().await;
    assert!(h.state().is_cooling_down());

    h.advance(ms(4_900)).await;
    assert!(h.state().is_cooling_down());
    h.dispatch(RewriterIntent::InsertText(" and tested".into()));
    h.submit();

    assert_eq!(h.state().error(), Some(&RewriterError::CoolingDown));
    assert!(!h.state().is_loading());
    assert_eq!(h.state().output(), "first");
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn submit_allowed_again_after_cooldown() {
    let provider = Arc::new(
        ScriptedProvider::new()
            .reply(Reply::Text("first".into()))
            .reply(Reply::Text("second".into())),
    );
    let mut h = Harness::new(provider.clone());

    h.type_notes("replaced cap");
    h.submit();
    h.next().await;

    h.advance(ms(5_100)).await;
    assert!(!h.state().is_cooling_down());

    h.submit();
    assert!(h.state().is_loading());
    h.next().await;
    assert_eq!(h.state().output(), "second");
    assert_eq!(provider.call_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn provider_error_leaves_output_and_skips_cooldown() {
    let provider = Arc::new(
        ScriptedProvider::new()
            .reply(Reply::Text("kept".into()))
            .reply(Reply::Status(500)),
    );
    let mut h = Harness::new(provider.clone());

    h.type_notes("replaced cap");
    h.submit();
    h.next().await;
    h.advance(ms(5_100)).await;

    h.submit();
    h.next().await;

    assert_eq!(h.state().output(), "kept");
    assert_eq!(
        h.state().error(),
        Some(&RewriterError::RequestFailed(PROCESSING_FAILED.to_string()))
    );
    assert!(!h.state().is_loading());
    assert!(!h.state().is_cooling_down());
}

#[tokio::test(start_paused = true)]
async fn panicking_provider_still_clears_loading() {
    let provider = Arc::new(ScriptedProvider::new().reply(Reply::Panic));
    let mut h = Harness::new(provider);

    h.type_notes("replaced cap");
    h.submit();
    h.next().await;

    assert!(!h.state().is_loading());
    assert_eq!(
        h.state().error(),
        Some(&RewriterError::RequestFailed(UNEXPECTED_FAILURE.to_string()))
    );
}

#[tokio::test(start_paused = true)]
async fn copy_flashes_then_clears_without_touching_output() {
    let provider = Arc::new(ScriptedProvider::new().reply(Reply::Text("ABC".into())));
    let mut h = Harness::new(provider);
    let mut clipboard = RecordingClipboard::default();

    h.type_notes("replaced cap");
    h.submit();
    h.next().await;

    h.controller.copy_output(&mut clipboard);
    assert!(h.state().is_copied());
    assert_eq!(clipboard.last().as_deref(), Some("ABC"));

    h.advance(ms(1_900)).await;
    assert!(h.state().is_copied());

    h.advance(ms(200)).await;
    assert!(!h.state().is_copied());
    assert_eq!(h.state().output(), "ABC");
}

#[tokio::test(start_paused = true)]
async fn recopy_restarts_the_flash() {
    let provider = Arc::new(ScriptedProvider::new().reply(Reply::Text("ABC".into())));
    let mut h = Harness::new(provider);
    let mut clipboard = RecordingClipboard::default();

    h.type_notes("replaced cap");
    h.submit();
    h.next().await;

    h.controller.copy_output(&mut clipboard);
    h.advance(ms(1_500)).await;
    h.controller.copy_output(&mut clipboard);

    // The first flash's timer would have fired here.
    h.advance(ms(1_000)).await;
    assert!(h.state().is_copied());

    h.advance(ms(1_100)).await;
    assert!(!h.state().is_copied());
}

#[tokio::test(start_paused = true)]
async fn copy_with_empty_output_is_noop() {
    let mut h = Harness::new(Arc::new(ScriptedProvider::new()));
    let mut clipboard = RecordingClipboard::default();

    h.controller.copy_output(&mut clipboard);

    assert!(!h.state().is_copied());
    assert!(clipboard.last().is_none());
    assert!(h.state().error().is_none());
}

#[tokio::test(start_paused = true)]
async fn clipboard_failure_reports_error_and_keeps_state() {
    let provider = Arc::new(ScriptedProvider::new().reply(Reply::Text("ABC".into())));
    let mut h = Harness::new(provider);
    let mut clipboard = RecordingClipboard::failing();

    h.type_notes("replaced cap");
    h.submit();
    h.next().await;
    h.controller.copy_output(&mut clipboard);

    assert_eq!(h.state().error(), Some(&RewriterError::Clipboard));
    assert_eq!(
        h.state().error().map(|e| e.to_string()).as_deref(),
        Some("Failed to copy to clipboard")
    );
    assert!(!h.state().is_copied());
    assert_eq!(h.state().output(), "ABC");
    assert!(h.state().is_cooling_down());
}

#[tokio::test(start_paused = true)]
async fn reset_clears_form_but_not_cooldown() {
    let provider = Arc::new(ScriptedProvider::new().reply(Reply::Text("ABC".into())));
    let mut h = Harness::new(provider);
    let mut clipboard = RecordingClipboard::default();

    h.type_notes("replaced cap");
    h.submit();
    h.next().await;
    h.controller.copy_output(&mut clipboard);

    h.dispatch(RewriterIntent::Reset);

    assert!(h.state().input().is_empty());
    assert!(h.state().output().is_empty());
    assert!(h.state().error().is_none());
    assert!(!h.state().is_copied());
    assert!(h.state().is_cooling_down());
}

#[tokio::test(start_paused = true)]
async fn stale_response_after_reset_is_discarded() {
    let provider = Arc::new(
        ScriptedProvider::new().reply_after(ms(1_000), Reply::Text("late".into())),
    );
    let mut h = Harness::new(provider);

    h.type_notes("replaced cap");
    h.submit();
    h.dispatch(RewriterIntent::Reset);
    assert!(h.state().is_loading());

    h.advance(ms(1_100)).await;

    assert!(!h.state().is_loading());
    assert!(h.state().output().is_empty());
    assert!(h.state().error().is_none());
    assert!(!h.state().is_cooling_down());
}

#[tokio::test(start_paused = true)]
async fn stale_failure_after_reset_is_discarded() {
    let provider =
        Arc::new(ScriptedProvider::new().reply_after(ms(1_000), Reply::Status(502)));
    let mut h = Harness::new(provider);

    h.type_notes("replaced cap");
    h.submit();
    h.dispatch(RewriterIntent::Reset);
    h.advance(ms(1_100)).await;

    assert!(!h.state().is_loading());
    assert!(h.state().error().is_none());
}

#[tokio::test(start_paused = true)]
async fn configured_timings_are_honoured() {
    let provider = Arc::new(ScriptedProvider::new().reply(Reply::Text("ABC".into())));
    let timings = RewriterTimings {
        cooldown: ms(300),
        copied_flash: ms(100),
    };
    let mut h = Harness::with_timings(provider, timings);

    h.type_notes("replaced cap");
    h.submit();
    h.next().await;

    h.advance(ms(350)).await;
    assert!(!h.state().is_cooling_down());
}

#[tokio::test]
async fn http_500_end_to_end_shows_generic_failure() {
    let mock = MockProvider::start().await;
    mock.enqueue_response(MockResponse::error(500, "upstream exploded"))
        .await;

    let config = ProviderConfig {
        base_url: mock.base_url(),
        ..ProviderConfig::default()
    };
    let client = ChatCompletionsClient::new(
        config,
        Some(SecureString::new("sk-test".to_string())),
        DEFAULT_SYSTEM_PROMPT.to_string(),
    )
    .unwrap();
    let mut h = Harness::new(Arc::new(client));

    h.type_notes(SAMPLE_NOTES);
    h.submit();
    h.next().await;

    assert!(h.state().output().is_empty());
    assert_eq!(
        h.state().error(),
        Some(&RewriterError::RequestFailed(PROCESSING_FAILED.to_string()))
    );
    assert!(!h.state().is_loading());
    assert!(!h.state().is_cooling_down());
    assert_eq!(mock.captured_requests().await.len(), 1);
}

#[tokio::test]
async fn http_success_end_to_end_sets_output() {
    let mock = MockProvider::start().await;
    mock.enqueue_response(MockResponse::completion(SAMPLE_OUTPUT))
        .await;

    let config = ProviderConfig {
        base_url: mock.base_url(),
        ..ProviderConfig::default()
    };
    let client = ChatCompletionsClient::new(
        config,
        Some(SecureString::new("sk-test".to_string())),
        DEFAULT_SYSTEM_PROMPT.to_string(),
    )
    .unwrap();
    let mut h = Harness::new(Arc::new(client));

    h.type_notes(SAMPLE_NOTES);
    h.submit();
    h.next().await;

    assert_eq!(h.state().output(), SAMPLE_OUTPUT);
    assert!(h.state().error().is_none());
    assert!(h.state().is_cooling_down());
}

#[tokio::test]
async fn unreachable_provider_shows_generic_failure() {
    // Bind then drop a listener so the port is known to refuse connections.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let config = ProviderConfig {
        base_url: format!("http://{}/api/v1", addr),
        connect_timeout_seconds: 2,
        timeout_seconds: 5,
        ..ProviderConfig::default()
    };
    let client = ChatCompletionsClient::new(
        config,
        Some(SecureString::new("sk-test".to_string())),
        DEFAULT_SYSTEM_PROMPT.to_string(),
    )
    .unwrap();
    let mut h = Harness::new(Arc::new(client));

    h.type_notes(SAMPLE_NOTES);
    h.submit();
    assert!(h.state().is_loading());
    h.next().await;

    assert_eq!(
        h.state().error(),
        Some(&RewriterError::RequestFailed(PROCESSING_FAILED.to_string()))
    );
    assert!(!h.state().is_loading());
    assert!(h.state().output().is_empty());
    assert!(!h.state().is_cooling_down());
}
