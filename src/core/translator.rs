use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{stopwatch::StopwatchMsg, system::SystemMsg, ui::UiMsg, Msg},
        raw_msg::RawMsg,
        state::{stopwatch::Control, AppState},
    },
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// `now` timestamps messages that need one (starting the frame loop)
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState, now: Instant) -> Vec<Msg> {
    match raw {
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        RawMsg::Key(key) => translate_key_event(key, state, now),
        RawMsg::Control(control) => translate_control(control, state, now),

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input using the configured key bindings
fn translate_key_event(key: KeyEvent, state: &AppState, now: Instant) -> Vec<Msg> {
    // Global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    match state.config.config.keybindings.get(&vec![key]) {
        Some(action) => translate_action(*action, state, now),
        None => vec![],
    }
}

fn translate_action(action: Action, state: &AppState, now: Instant) -> Vec<Msg> {
    match action {
        Action::Start => translate_control(Control::Start, state, now),
        Action::Stop => translate_control(Control::Stop, state, now),
        Action::Lap => translate_control(Control::Lap, state, now),
        Action::Reset => translate_control(Control::Reset, state, now),
        Action::Toggle => {
            if state.stopwatch.controls().start {
                translate_control(Control::Start, state, now)
            } else {
                translate_control(Control::Stop, state, now)
            }
        }
        Action::DeleteSelected => match state.ui.selected_lap {
            Some(index) => translate_control(Control::DeleteLap(index), state, now),
            None => vec![],
        },
        Action::SelectNext => vec![Msg::Ui(UiMsg::SelectNext)],
        Action::SelectPrevious => vec![Msg::Ui(UiMsg::SelectPrevious)],
        // Escape also dismisses the status message so the key hint returns
        Action::Unselect => vec![
            Msg::Ui(UiMsg::Unselect),
            Msg::System(SystemMsg::ClearStatusMessage),
        ],
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
    }
}

/// Translates an activated control into a stopwatch message
/// Controls that are not currently offered produce nothing
pub fn translate_control(control: Control, state: &AppState, now: Instant) -> Vec<Msg> {
    if !state.stopwatch.controls().offers(control) {
        log::debug!("Ignoring {control:?}: not offered in {:?}", state.stopwatch.phase());
        return vec![];
    }

    let msg = match control {
        Control::Start => StopwatchMsg::Start { now },
        Control::Stop => StopwatchMsg::Stop,
        Control::Lap => StopwatchMsg::Lap,
        Control::Reset => StopwatchMsg::Reset,
        Control::DeleteLap(index) => StopwatchMsg::DeleteLap(index),
    };
    vec![Msg::Stopwatch(msg)]
}
