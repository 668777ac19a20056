//! Integration layer
//!
//! Glue between the pure core and the terminal:
//! - Runtime owning the state and its message queues
//! - Frame scheduler delivering frame callbacks
//! - Renderer and the app runner main loop

pub mod app_runner;
pub mod frame_scheduler;
pub mod renderer;
pub mod runtime;
