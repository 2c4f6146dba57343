use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Padding, Paragraph};

use crate::state::{Message, MessageLevel};
use crate::ui::theme::Theme;

pub const HEIGHT: u16 = 3;

/// Boxed status line, or a blank area once the message has expired.
pub fn render(frame: &mut Frame, area: Rect, message: Option<&Message>, theme: &Theme) {
    let Some(message) = message else {
        frame.render_widget(Clear, area);
        return;
    };

    let style = match message.level {
        MessageLevel::Info => Style::default(),
        MessageLevel::Error => Style::default().fg(theme.error),
    };
    let block = Block::bordered()
        .border_style(Style::default().fg(theme.border))
        .padding(Padding::left(1));
    let paragraph = Paragraph::new(Line::styled(message.text.as_str(), style)).block(block);
    frame.render_widget(paragraph, area);
}
