use std::{collections::VecDeque, mem, time::Instant};

use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};

/// Owns the application state and drives it through the
/// translate → update cycle, queueing the commands `update` emits.
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<(RawMsg, Instant)>,
    cmd_queue: VecDeque<Cmd>,
}

impl Runtime {
    /// Create a new Runtime
    pub fn new(initial_state: AppState) -> Self {
        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
        }
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send message directly, bypassing translation
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message stamped with the current instant
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.send_raw_msg_at(raw_msg, Instant::now());
    }

    /// Send raw message observed at `now`
    pub fn send_raw_msg_at(&mut self, raw_msg: RawMsg, now: Instant) {
        self.raw_msg_queue.push_back((raw_msg, now));
    }

    /// Drain commands emitted so far
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        if !msg.is_frequent() {
            log::debug!("{msg:?}");
        }

        let (new_state, commands) = update(msg, mem::take(&mut self.state));
        self.state = new_state;
        self.cmd_queue.extend(commands.iter().cloned());

        commands
    }

    /// Process all messages in queue
    ///
    /// Raw messages are translated against the state as it is when each one
    /// is reached, so earlier messages in the same batch are already applied.
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }

        while let Some((raw_msg, now)) = self.raw_msg_queue.pop_front() {
            for msg in translate_raw_to_domain(raw_msg, &self.state, now) {
                all_commands.extend(self.process_message(msg));
            }
        }

        all_commands
    }

    /// Process all queued messages and hand back the commands to execute
    pub fn run_update_cycle(&mut self) -> Vec<Cmd> {
        self.process_all_messages();
        self.pending_commands()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::{
        msg::{stopwatch::StopwatchMsg, system::SystemMsg},
        state::stopwatch::Control,
    };

    fn create_test_runtime() -> Runtime {
        Runtime::new(AppState::new(0))
    }

    #[test]
    fn test_runtime_creation() {
        let mut runtime = create_test_runtime();
        assert!(runtime.state().stopwatch.laps().is_empty());
        assert!(!runtime.state().stopwatch.is_running());
        assert!(runtime.pending_commands().is_empty());
    }

    #[test]
    fn test_process_message() {
        let mut runtime = create_test_runtime();

        let commands = runtime.process_message(Msg::System(SystemMsg::Quit));
        assert!(commands.is_empty());
        assert!(runtime.state().system.should_quit);
    }

    #[test]
    fn test_send_message_queues_until_processed() {
        let mut runtime = create_test_runtime();

        runtime.send_msg(Msg::Stopwatch(StopwatchMsg::Start {
            now: Instant::now(),
        }));
        assert!(!runtime.state().stopwatch.is_running());

        let commands = runtime.process_all_messages();
        assert_eq!(commands.len(), 1);
        assert!(matches!(commands[0], Cmd::RequestFrame(_)));
        assert!(runtime.state().stopwatch.is_running());
        assert_eq!(runtime.pending_commands(), commands);
        assert!(runtime.process_all_messages().is_empty());
    }

    #[test]
    fn test_raw_messages_translate_against_current_state() {
        let mut runtime = create_test_runtime();
        let t0 = Instant::now();

        // Lap is only offered once the start has been applied
        runtime.send_raw_msg_at(RawMsg::Control(Control::Start), t0);
        runtime.send_raw_msg_at(RawMsg::Control(Control::Lap), t0);
        runtime.process_all_messages();

        assert_eq!(runtime.state().stopwatch.laps(), &[0]);
    }

    #[test]
    fn test_run_update_cycle_drains_commands() {
        let mut runtime = create_test_runtime();
        let t0 = Instant::now();

        runtime.send_raw_msg_at(RawMsg::Control(Control::Start), t0);
        let commands = runtime.run_update_cycle();
        let Some(Cmd::RequestFrame(handle)) = commands.first().cloned() else {
            panic!("Expected RequestFrame, got {commands:?}");
        };
        assert!(runtime.pending_commands().is_empty());

        runtime.send_msg(Msg::Stopwatch(StopwatchMsg::FrameTick {
            handle,
            now: t0 + Duration::from_secs(3),
        }));
        let commands = runtime.run_update_cycle();
        assert_eq!(commands, vec![Cmd::RequestFrame(handle)]);
        assert_eq!(runtime.state().stopwatch.elapsed_seconds(), 3);
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut runtime = create_test_runtime();
        runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(
            KeyCode::Char('s'),
            KeyModifiers::NONE,
        )));
        assert!(runtime.run_update_cycle().is_empty());
        assert!(!runtime.state().stopwatch.is_running());
    }
}
