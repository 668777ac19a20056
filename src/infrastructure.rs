//! Infrastructure layer
//!
//! This module handles external integrations:
//! - TUI foundation (real terminal and a test double)
//! - CLI argument processing
//! - Configuration loading

pub mod cli;
pub mod config;
pub mod tui;
