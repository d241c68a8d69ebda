//! The Note Rewriter component.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Form state: input, output, status flags, request token
//! - `intent.rs` - User actions and async completions
//! - `reducer.rs` - Pure state transitions (validation lives here)
//! - `controller.rs` - Runs the reducer and the effects it implies
//!   (provider call, cooldown and copied timers)
//! - `timers.rs` - Abort handles for the tasks the controller owns

mod controller;
mod error;
mod intent;
mod reducer;
mod state;
mod timers;

pub use controller::{IntentSink, RewriterController, RewriterTimings};
pub use error::RewriterError;
pub use intent::RewriterIntent;
pub use reducer::RewriterReducer;
pub use state::RewriterState;
