//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - Stateless components rendering `AppState`
//! - Reusable widgets
//! - The control map used to resolve mouse clicks
//! - Configuration (styles, keybindings)

pub mod components;
pub mod config;
pub mod control_map;
pub mod widgets;
