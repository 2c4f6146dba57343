use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Widget};

use crate::format::{cpu_percent, elapsed_time, fit_width, truncate_unicode};
use crate::system::process::ProcessRecord;
use crate::system::sort::SortKey;
use crate::ui::theme::Theme;

// Column offsets from the panel's left edge (the border is column 0).
pub const PID_COL: u16 = 2;
pub const USER_COL: u16 = 9;
pub const CPU_COL: u16 = 20;
pub const RAM_COL: u16 = 28;
pub const TIME_COL: u16 = 37;
pub const COMMAND_COL: u16 = 48;

/// Narrowest panel that still shows every fixed column; COMMAND is empty here.
pub const MIN_WIDTH: u16 = COMMAND_COL + 1;

/// Panel height for `rows` visible processes: borders plus the header row.
pub fn height(rows: usize) -> u16 {
    u16::try_from(rows.saturating_add(3)).unwrap_or(u16::MAX)
}

#[derive(Clone, Copy)]
struct Column {
    offset: u16,
    width: u16,
    title: &'static str,
}

const PID: Column = Column {
    offset: PID_COL,
    width: USER_COL - PID_COL,
    title: "PID",
};
const USER: Column = Column {
    offset: USER_COL,
    width: CPU_COL - USER_COL - 1,
    title: "USER",
};
const CPU: Column = Column {
    offset: CPU_COL,
    width: RAM_COL - CPU_COL - 1,
    title: "CPU[%]",
};
const RAM: Column = Column {
    offset: RAM_COL,
    width: TIME_COL - RAM_COL - 1,
    title: "RAM[MB]",
};
const TIME: Column = Column {
    offset: TIME_COL,
    width: COMMAND_COL - TIME_COL - 1,
    title: "TIME+",
};

pub struct ProcessTable<'a> {
    processes: &'a [ProcessRecord],
    sort_key: SortKey,
    selected: usize,
    rows: usize,
    theme: &'a Theme,
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    processes: &[ProcessRecord],
    sort_key: SortKey,
    selected: usize,
    rows: usize,
    theme: &Theme,
) {
    let widget = ProcessTable {
        processes,
        sort_key,
        selected,
        rows,
        theme,
    };
    frame.render_widget(widget, area);
}

impl Widget for ProcessTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::bordered()
            .border_style(Style::default().fg(self.theme.border))
            .render(area, buf);
        if area.width < 3 || area.height < 3 {
            return;
        }

        // Everything is written left of the right border.
        let right = area.width - 1;
        let header_style = Style::default().fg(self.theme.header);

        self.render_legend(area, buf, right, header_style);

        let header_y = area.y + 1;
        for column in [PID, USER, CPU, RAM, TIME] {
            let style = if self.is_sort_column(column) {
                header_style.add_modifier(Modifier::BOLD)
            } else {
                header_style
            };
            put_cell(buf, area, header_y, column.offset, column.width, right, column.title, style);
        }
        let command_width = right.saturating_sub(COMMAND_COL);
        put_cell(
            buf,
            area,
            header_y,
            COMMAND_COL,
            command_width,
            right,
            "COMMAND",
            header_style,
        );

        let last_row_y = area.bottom() - 1;
        for (i, process) in self.processes.iter().take(self.rows).enumerate() {
            let Some(y) = u16::try_from(i)
                .ok()
                .and_then(|i| header_y.checked_add(1 + i))
                .filter(|&y| y < last_row_y)
            else {
                break;
            };

            if i == self.selected {
                let row = Rect::new(area.x + 1, y, area.width - 2, 1);
                buf.set_style(row, Style::default().add_modifier(Modifier::REVERSED));
            }

            let plain = Style::default();
            let cells = [
                (PID, process.pid.to_string()),
                (USER, process.user.clone()),
                (CPU, cpu_percent(process.cpu_utilization)),
                (RAM, process.ram.clone()),
                (TIME, elapsed_time(process.elapsed)),
            ];
            for (column, text) in &cells {
                put_cell(buf, area, y, column.offset, column.width, right, text, plain);
            }
            let command = truncate_unicode(&process.command, usize::from(command_width));
            put_cell(buf, area, y, COMMAND_COL, command_width, right, &command, plain);
        }
    }
}

impl ProcessTable<'_> {
    fn is_sort_column(&self, column: Column) -> bool {
        match self.sort_key {
            SortKey::ByCpu => column.offset == CPU_COL,
            SortKey::ByRam => column.offset == RAM_COL,
            SortKey::ByPid => column.offset == PID_COL,
        }
    }

    /// Hotkey legend drawn over the top border.
    fn render_legend(&self, area: Rect, buf: &mut Buffer, right: u16, style: Style) {
        let mut x = PID_COL;
        let mut segments: Vec<(String, Style)> = vec![("Sort: ".to_string(), style)];
        for (key, hotkey, rest) in [
            (SortKey::ByCpu, "C", "PU"),
            (SortKey::ByRam, "M", "emory"),
            (SortKey::ByPid, "P", "ID"),
        ] {
            if key == self.sort_key {
                let label = format!(">>{}{}<<", hotkey, rest.to_uppercase());
                segments.push((label, style.add_modifier(Modifier::BOLD)));
            } else {
                segments.push((format!("[{hotkey}]{rest}"), style));
            }
            segments.push((" ".to_string(), style));
        }
        segments.push(("| [K]ill | [Q]uit | UP/DOWN arrows".to_string(), style));

        for (text, segment_style) in &segments {
            if x >= right {
                break;
            }
            let width = right - x;
            let (next_x, _) = buf.set_stringn(
                area.x + x,
                area.y,
                text,
                usize::from(width),
                *segment_style,
            );
            x = next_x - area.x;
        }
    }
}

/// Writes `text` at a column offset, clipped to the column and the panel.
#[allow(clippy::too_many_arguments)]
fn put_cell(
    buf: &mut Buffer,
    area: Rect,
    y: u16,
    offset: u16,
    width: u16,
    right: u16,
    text: &str,
    style: Style,
) {
    if offset >= right {
        return;
    }
    let width = width.min(right - offset);
    if width == 0 {
        return;
    }
    let clipped = fit_width(text, usize::from(width));
    buf.set_stringn(area.x + offset, y, clipped, usize::from(width), style);
}
