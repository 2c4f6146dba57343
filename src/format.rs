use std::time::Duration;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Number of cells in a utilization bar.
pub const BAR_CELLS: usize = 50;

/// Renders a fraction as `0%` + 50 bar cells + a four character percentage.
///
/// One cell stands for 2%. Cell `i` is filled while `i <= fraction * 50`, so
/// the first cell is always drawn. Values below 10% and exactly 100% get a
/// leading space instead of a fourth digit, which keeps the decimal point in
/// the same column. The input is not clamped.
pub fn progress_bar(fraction: f32) -> String {
    let filled_upto = fraction * BAR_CELLS as f32;
    let mut bar = String::with_capacity(BAR_CELLS + 12);
    bar.push_str("0%");
    for i in 0..BAR_CELLS {
        bar.push(if i as f32 <= filled_upto { '|' } else { ' ' });
    }

    let percent = fraction * 100.0;
    let digits = format!("{percent:.6}");
    let display = if percent < 10.0 || fraction == 1.0 {
        format!(" {}", ascii_prefix(&digits, 3))
    } else {
        ascii_prefix(&digits, 4).to_string()
    };

    format!("{bar} {display}/100%")
}

/// Fixed-width `HH:MM:SS`; from one day on, `{days}d {HH}h` padded to 8 columns.
pub fn elapsed_time(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    if hours < 24 {
        let minutes = (total % 3600) / 60;
        let seconds = total % 60;
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    } else {
        let days = hours / 24;
        format!("{:>8}", format!("{days}d {:02}h", hours % 24))
    }
}

/// CPU% table cell: the percentage cut to four characters.
pub fn cpu_percent(fraction: f32) -> String {
    let digits = format!("{:.6}", fraction * 100.0);
    ascii_prefix(&digits, 4).to_string()
}

fn ascii_prefix(s: &str, len: usize) -> &str {
    s.get(..len).unwrap_or(s)
}

pub fn truncate_unicode(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width.saturating_sub(1) {
            if max_width > 0 {
                result.push('\u{2026}');
            }
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}

/// Clips to `max_width` display columns without an ellipsis.
pub fn fit_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}
