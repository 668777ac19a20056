//! Reusable UI widgets
//!
//! Widgets that expose clickable controls render as `StatefulWidget`s over a
//! [`ControlMap`](crate::presentation::control_map::ControlMap).

pub mod control_bar;
pub mod lap_list;
pub mod lap_row;
pub mod status_bar;
pub mod timer_display;
