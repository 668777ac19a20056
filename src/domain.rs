//! Domain layer
//!
//! Pure, framework-independent helpers shared by state and presentation.

pub mod time;
