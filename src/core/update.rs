use crate::{
    core::cmd::Cmd,
    core::msg::{stopwatch::StopwatchMsg, system::SystemMsg, Msg},
    core::state::AppState,
    domain::time::formatted_seconds,
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // Quitting tears down the frame loop as well
        Msg::System(SystemMsg::Quit) => {
            let mut commands = if state.stopwatch.is_running() {
                state.stopwatch.update(StopwatchMsg::Stop)
            } else {
                vec![]
            };
            commands.extend(state.system.update(SystemMsg::Quit));
            (state, commands)
        }

        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // Stopwatch messages (delegated to StopwatchState)
        Msg::Stopwatch(stopwatch_msg) => {
            let laps_before = state.stopwatch.laps().len();
            let commands = state.stopwatch.update(stopwatch_msg);
            let laps = state.stopwatch.laps();

            let status = match stopwatch_msg {
                StopwatchMsg::Lap if laps.len() > laps_before => laps
                    .last()
                    .map(|lap| format!("[Lap {}] {}", laps.len(), formatted_seconds(*lap))),
                StopwatchMsg::DeleteLap(index) if laps.len() < laps_before => {
                    Some(format!("[Deleted] lap {}", index + 1))
                }
                StopwatchMsg::Reset => Some("[Reset]".to_string()),
                _ => None,
            };
            if let Some(message) = status {
                state.system.update(SystemMsg::UpdateStatusMessage(message));
            }

            state.ui.clamp_selection(state.stopwatch.laps().len());
            (state, commands)
        }

        // UI messages (delegated to UiState)
        Msg::Ui(ui_msg) => {
            let lap_count = state.stopwatch.laps().len();
            let commands = state.ui.update(ui_msg, lap_count);
            (state, commands)
        }
    }
}
