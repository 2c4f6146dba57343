use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::format::{elapsed_time, progress_bar};
use crate::system::snapshot::SystemSnapshot;
use crate::ui::theme::Theme;

/// Rows taken by the panel, borders included.
pub const HEIGHT: u16 = 9;

// Bars start at panel column 10: border, padding, then an 8 column label.
const BAR_LABEL_WIDTH: usize = 8;

pub fn render(frame: &mut Frame, area: Rect, system: &SystemSnapshot, theme: &Theme) {
    let block = Block::bordered()
        .border_style(Style::default().fg(theme.border))
        .padding(Padding::left(1));

    let bar_style = Style::default().fg(theme.bar);
    let lines = vec![
        Line::raw(format!("OS: {}", system.os_name)),
        Line::raw(format!("Kernel: {}", system.kernel)),
        bar_line("CPU:", system.cpu_utilization, bar_style),
        bar_line("Memory:", system.memory_utilization, bar_style),
        Line::raw(format!("Total Processes: {}", system.total_processes)),
        Line::raw(format!("Running Processes: {}", system.running_processes)),
        Line::raw(format!("Up Time: {}", elapsed_time(system.uptime))),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn bar_line(label: &str, fraction: f32, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("{label:<width$}", width = BAR_LABEL_WIDTH)),
        Span::styled(progress_bar(fraction), style),
    ])
}
