pub mod frame_loop;
pub mod stopwatch;
pub mod system;
pub mod ui;

use crate::infrastructure::config::Config;

use stopwatch::StopwatchState;
use system::SystemState;
use ui::UiState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub stopwatch: StopwatchState,
    pub ui: UiState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Initialize AppState with the given seed for the elapsed time
    pub fn new(initial_seconds: i64) -> Self {
        Self {
            stopwatch: StopwatchState::new(initial_seconds),
            ..Default::default()
        }
    }

    /// Initialize AppState from the loaded configuration
    pub fn new_with_config(config: Config) -> Self {
        Self {
            stopwatch: StopwatchState::new(config.initial_seconds),
            config: ConfigState { config },
            ..Default::default()
        }
    }
}
