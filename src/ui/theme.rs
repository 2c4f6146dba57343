use ratatui::style::Color;

/// Fixed palette: blue bars, green headings, red for failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub bar: Color,
    pub header: Color,
    pub error: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            bar: Color::Blue,
            header: Color::Green,
            error: Color::Red,
            border: Color::Reset,
        }
    }
}
