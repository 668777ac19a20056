//! Core Elm Architecture implementation
//!
//! - Messages and raw messages
//! - Application state management
//! - Update logic and the commands it emits
//! - Message translation layer

pub mod cmd;
pub mod msg;
pub mod raw_msg;
pub mod state;
pub mod translator;
pub mod update;
