use std::time::{Duration, Instant};

use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;

use crate::action::{Action, Direction};
use crate::config::Config;
use crate::error::DashboardError;
use crate::event::{Event, EventHandler};
use crate::state::DashboardState;
use crate::system::kill::{KillOutcome, terminate};
use crate::system::process::{ProcessRecord, ProcessSnapshot};
use crate::system::snapshot::SystemSnapshot;
use crate::system::sort::{SortKey, sort_processes};
use crate::system::{ProcessControl, SnapshotProvider};
use crate::ui;
use crate::ui::process_panel::MIN_WIDTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// Source of at most one input event per tick. Must never block.
pub trait InputSource {
    fn try_next(&mut self) -> Option<Event>;
}

impl InputSource for EventHandler {
    fn try_next(&mut self) -> Option<Event> {
        EventHandler::try_next(self)
    }
}

pub struct App<P> {
    pub loop_state: LoopState,
    pub provider: P,
    pub state: DashboardState,
    pub system: SystemSnapshot,
    /// Current tick's table, already in sort order.
    pub processes: ProcessSnapshot,
    warned_width: Option<u16>,
}

impl<P: SnapshotProvider + ProcessControl> App<P> {
    pub fn new(provider: P, config: &Config) -> Self {
        App {
            loop_state: LoopState::Running,
            provider,
            state: DashboardState::new(config.visible_rows).with_message_ttl(config.message_ttl),
            system: SystemSnapshot::default(),
            processes: Vec::new(),
            warned_width: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.loop_state == LoopState::Running
    }

    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    /// Samples the provider and prepares this tick's frame.
    ///
    /// Returns `false` when the provider failed; the caller skips the draw
    /// and the next tick tries again.
    pub fn tick_at(&mut self, now: Instant) -> bool {
        self.state.current_message_at(now);

        if let Err(err) = self.provider.refresh() {
            tracing::warn!(error = %DashboardError::from(err), "skipping redraw");
            return false;
        }

        self.system = self.provider.system_snapshot();
        let raw = self.provider.process_snapshot();
        self.processes = sort_processes(&raw, self.state.sort_key());
        self.state.clamp_selection(self.processes.len());
        true
    }

    pub fn draw(&self, frame: &mut Frame) {
        ui::draw(frame, &self.system, &self.processes, &self.state);
    }

    /// Logs once per width when the table cannot fit.
    pub fn check_surface(&mut self, width: u16) {
        if width >= MIN_WIDTH {
            self.warned_width = None;
            return;
        }
        if self.warned_width != Some(width) {
            let err = DashboardError::SurfaceTooSmall {
                width,
                required: MIN_WIDTH,
            };
            tracing::warn!(error = %err, "clipping process table");
            self.warned_width = Some(width);
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                let action = self.map_key(key);
                self.dispatch(action);
            }
            Event::Resize => {
                tracing::debug!("terminal resized");
            }
        }
    }

    pub fn map_key(&self, key: KeyEvent) -> Action {
        // Raw mode swallows SIGINT, so Ctrl+C has to quit explicitly.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match key.code {
            KeyCode::Up => Action::Navigate(Direction::Up),
            KeyCode::Down => Action::Navigate(Direction::Down),
            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                'q' => Action::Quit,
                'c' => Action::SortBy(SortKey::ByCpu),
                'm' => Action::SortBy(SortKey::ByRam),
                'p' => Action::SortBy(SortKey::ByPid),
                'k' => Action::KillSelected,
                _ => Action::None,
            },
            _ => Action::None,
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => {
                tracing::info!("quit requested");
                self.loop_state = LoopState::Terminated;
            }
            Action::SortBy(key) => {
                tracing::debug!(key = key.label(), "sort key changed");
                self.state.set_sort_key(key);
                self.processes = sort_processes(&self.processes, key);
                self.state.set_message(key.message());
            }
            Action::Navigate(Direction::Up) => {
                self.state.move_selection(-1, self.processes.len());
            }
            Action::Navigate(Direction::Down) => {
                self.state.move_selection(1, self.processes.len());
            }
            Action::KillSelected => self.kill_selected(),
            Action::None => {}
        }
    }

    pub fn selected_process(&self) -> Option<&ProcessRecord> {
        self.processes.get(self.state.selected_index())
    }

    fn kill_selected(&mut self) {
        let Some(pid) = self.selected_process().map(|p| p.pid) else {
            return;
        };
        match terminate(&self.provider, pid) {
            KillOutcome::Killed { pid, .. } => {
                self.state
                    .set_message(format!("Process {pid} killed successfully!"));
            }
            KillOutcome::Failed { pid, reason } => {
                let err = DashboardError::TerminationFailed { pid, reason };
                tracing::warn!(error = %err, "kill failed");
                self.state
                    .set_error(format!("Failed to kill process {pid}. Try with sudo."));
            }
        }
    }
}

/// Runs the render loop until the quit key.
///
/// Each tick samples, draws, takes at most one input event and then sleeps
/// for `tick_interval`. Input is polled after the draw and before the sleep.
pub async fn run<P, I, D>(
    app: &mut App<P>,
    input: &mut I,
    tick_interval: Duration,
    mut draw: D,
) -> Result<()>
where
    P: SnapshotProvider + ProcessControl,
    I: InputSource,
    D: FnMut(&mut App<P>) -> Result<()>,
{
    tracing::info!(
        rows = app.state.visible_rows(),
        interval_ms = tick_interval.as_millis() as u64,
        "render loop started"
    );

    while app.is_running() {
        if app.tick() {
            draw(app)?;
        }
        if let Some(event) = input.try_next() {
            app.handle_event(event);
        }
        if !app.is_running() {
            break;
        }
        tokio::time::sleep(tick_interval).await;
    }

    tracing::info!("render loop stopped");
    Ok(())
}
