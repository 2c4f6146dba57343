pub mod message_panel;
pub mod process_panel;
pub mod system_panel;
pub mod theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::state::DashboardState;
use crate::system::process::ProcessRecord;
use crate::system::snapshot::SystemSnapshot;
use crate::ui::theme::Theme;

/// Draws one frame: system panel, process table, message box.
///
/// `processes` must already be sorted by `state.sort_key()`.
pub fn draw(
    frame: &mut Frame,
    system: &SystemSnapshot,
    processes: &[ProcessRecord],
    state: &DashboardState,
) {
    let theme = Theme::default();
    let rows = state.visible_rows();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(system_panel::HEIGHT),
            Constraint::Length(process_panel::height(rows)),
            Constraint::Length(message_panel::HEIGHT),
            Constraint::Min(0),
        ])
        .split(frame.area());

    system_panel::render(frame, chunks[0], system, &theme);
    process_panel::render(
        frame,
        chunks[1],
        processes,
        state.sort_key(),
        state.selected_index(),
        rows,
        &theme,
    );
    message_panel::render(frame, chunks[2], state.message(), &theme);
}
