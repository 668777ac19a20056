//! # Lapwatch - a terminal stopwatch with laps
//!
//! A stopwatch for the terminal, built with Rust and Ratatui. Start, stop,
//! record laps, delete individual laps and reset, from the keyboard or by
//! clicking the on-screen controls.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`core::state`): Application state
//! - **Message** (`core::msg`): Events that can change the state
//! - **Update** (`core::update`): Pure functions that transform state
//! - **Command** (`core::cmd`): Side effects, i.e. frame scheduling and terminal control
//! - **View** (`presentation::components`): UI rendering based on current state
//!
//! Elapsed time advances on frame callbacks: starting the stopwatch requests
//! a frame, every delivered frame adds the whole seconds that passed since
//! the previous one and requests the next.
//!
//! ## Example Usage
//!
//! ```rust
//! use std::time::{Duration, Instant};
//!
//! use lapwatch::{
//!     core::{cmd::Cmd, msg::stopwatch::StopwatchMsg, msg::Msg},
//!     update, AppState,
//! };
//!
//! let t0 = Instant::now();
//! let (state, cmds) = update(Msg::Stopwatch(StopwatchMsg::Start { now: t0 }), AppState::new(0));
//! let Some(Cmd::RequestFrame(handle)) = cmds.first().cloned() else {
//!     unreachable!()
//! };
//!
//! let tick = StopwatchMsg::FrameTick { handle, now: t0 + Duration::from_secs(2) };
//! let (state, _) = update(Msg::Stopwatch(tick), state);
//! assert_eq!(state.stopwatch.elapsed_seconds(), 2);
//! ```
//!
//! ## Modules
//!
//! - [`core`] - State, messages, update and translation
//! - [`domain`] - Time formatting
//! - [`presentation`] - Components, widgets, key bindings and styles
//! - [`infrastructure`] - Terminal, CLI and configuration
//! - [`integration`] - Runtime, frame scheduling and the main loop
//! - [`utils`] - Logging, panic handling and paths

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::cmd::Cmd;
pub use crate::core::msg::Msg;
pub use crate::core::raw_msg::RawMsg;
pub use crate::core::state::AppState;
pub use crate::core::translator::translate_raw_to_domain;
pub use crate::core::update::update;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
