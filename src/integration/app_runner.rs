use std::{sync::Arc, time::Instant};

use color_eyre::eyre::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::prelude::Rect;
use tokio::sync::Mutex;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        msg::{stopwatch::StopwatchMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    infrastructure::{
        config::Config,
        tui::{self, event_source::EventSource},
    },
    integration::{frame_scheduler::FrameScheduler, renderer::Renderer, runtime::Runtime},
};

/// Drives the Elm runtime from terminal events: translates input, delivers
/// scheduled frames on `Render`, executes commands and draws.
pub struct AppRunner {
    runtime: Runtime,
    scheduler: FrameScheduler,
    renderer: Renderer,
    tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    events: EventSource,
}

impl AppRunner {
    pub fn new(config: Config, tui: Arc<Mutex<dyn tui::TuiLike + Send>>, events: EventSource) -> Self {
        Self {
            runtime: Runtime::new(AppState::new_with_config(config)),
            scheduler: FrameScheduler::new(),
            renderer: Renderer::new(),
            tui,
            events,
        }
    }

    /// Runner reading its events from the same terminal it draws to.
    pub fn new_with_real(config: Config, tui: Arc<Mutex<dyn tui::TuiLike + Send>>) -> Self {
        let events = EventSource::real(Arc::clone(&tui));
        Self::new(config, tui, events)
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    /// Run until quit is requested or the event source is exhausted.
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        self.render().await?;

        loop {
            match self.events.next().await {
                Some(event) => self.handle_event(event).await?,
                None => self.runtime.send_raw_msg(RawMsg::Quit),
            }

            self.update().await?;

            if self.runtime.state().system.should_suspend {
                self.suspend().await?;
            }
            if self.runtime.state().system.should_quit {
                break;
            }
        }

        self.tui.lock().await.exit()?;
        Ok(())
    }

    pub async fn handle_event(&mut self, event: tui::Event) -> Result<()> {
        self.handle_event_at(event, Instant::now()).await
    }

    /// Handle one terminal event observed at `now`.
    pub async fn handle_event_at(&mut self, event: tui::Event, now: Instant) -> Result<()> {
        match event {
            tui::Event::Render => {
                if let Some(handle) = self.scheduler.take() {
                    self.runtime
                        .send_msg(Msg::Stopwatch(StopwatchMsg::FrameTick { handle, now }));
                    self.update().await?;
                }
                self.render().await?;
            }
            tui::Event::Tick => self.runtime.send_raw_msg_at(RawMsg::Tick, now),
            tui::Event::Key(key) => self.runtime.send_raw_msg_at(RawMsg::Key(key), now),
            tui::Event::Mouse(mouse) => {
                if let Some(raw) = self.translate_mouse(mouse) {
                    self.runtime.send_raw_msg_at(raw, now);
                }
            }
            tui::Event::Resize(w, h) => self.runtime.send_raw_msg_at(RawMsg::Resize(w, h), now),
            tui::Event::Quit | tui::Event::Closed => self.runtime.send_raw_msg_at(RawMsg::Quit, now),
            tui::Event::Error => self.runtime.send_raw_msg_at(
                RawMsg::Error("terminal event stream failed".to_string()),
                now,
            ),
            tui::Event::Init | tui::Event::FocusGained | tui::Event::FocusLost => {}
        }
        Ok(())
    }

    // Left clicks resolve against the controls drawn by the last frame
    fn translate_mouse(&self, mouse: MouseEvent) -> Option<RawMsg> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self
                .renderer
                .control_at(mouse.column, mouse.row)
                .map(RawMsg::Control),
            _ => None,
        }
    }

    /// Process queued messages and execute the resulting commands.
    pub async fn update(&mut self) -> Result<()> {
        for cmd in self.runtime.run_update_cycle() {
            self.execute(cmd).await?;
        }
        Ok(())
    }

    async fn execute(&mut self, cmd: Cmd) -> Result<()> {
        match cmd {
            Cmd::RequestFrame(handle) => self.scheduler.request(handle),
            Cmd::CancelFrame(handle) => {
                if !self.scheduler.cancel(handle) {
                    log::debug!("Frame {} was not pending", handle.id());
                }
            }
            Cmd::Tui(TuiCommand::Resize { width, height }) => {
                self.tui
                    .lock()
                    .await
                    .resize(Rect::new(0, 0, width, height))?;
                self.render().await?;
            }
        }
        Ok(())
    }

    async fn render(&mut self) -> Result<()> {
        self.renderer.render(&self.tui, self.runtime.state()).await
    }

    async fn suspend(&mut self) -> Result<()> {
        self.tui.lock().await.suspend()?;
        self.runtime.send_raw_msg(RawMsg::Resume);
        self.tui.lock().await.resume()?;
        self.update().await?;
        self.render().await
    }
}
