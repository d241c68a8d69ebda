//! Note Rewriter: a terminal form that turns free-text technician notes into
//! a structured work-order write-up through a chat-completion provider.
//!
//! # Architecture
//!
//! ```text
//! keys ──→ ui::input ──→ RewriterIntent ──→ RewriterReducer ──→ RewriterState ──→ ui::render
//!                              ↑                                      │
//!                              └──── RewriterController (effects) ←───┘
//!                                      provider call, timers
//! ```
//!
//! - [`rewriter`]: the Note Rewriter state machine and its effect runner
//! - [`provider`]: the provider seam and the chat-completions HTTP client
//! - [`config`]: TOML configuration and credential resolution
//! - [`ui`]: terminal setup, event pump and rendering

pub mod args;
pub mod clipboard;
pub mod config;
pub mod headless;
pub mod logging;
pub mod provider;
pub mod rewriter;
pub mod ui;
