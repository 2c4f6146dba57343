use std::cmp::Ordering;

use super::process::ProcessRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    ByCpu,
    ByRam,
    ByPid,
}

impl SortKey {
    pub fn label(self) -> &'static str {
        match self {
            SortKey::ByCpu => "CPU",
            SortKey::ByRam => "Memory",
            SortKey::ByPid => "PID",
        }
    }

    /// Status line shown after switching to this key.
    pub fn message(self) -> &'static str {
        match self {
            SortKey::ByCpu => "Sorting by CPU Usage",
            SortKey::ByRam => "Sorting by Memory/RAM Usage",
            SortKey::ByPid => "Sorting by Process ID (PID)",
        }
    }
}

/// Returns a sorted copy of `processes`. The sort is stable, so records with
/// equal keys stay in provider order.
pub fn sort_processes(processes: &[ProcessRecord], key: SortKey) -> Vec<ProcessRecord> {
    let mut sorted = processes.to_vec();
    match key {
        SortKey::ByCpu => {
            sorted.sort_by(|a, b| b.cpu_utilization.total_cmp(&a.cpu_utilization));
        }
        SortKey::ByRam => {
            sorted.sort_by(|a, b| compare_memory(&b.ram, &a.ram));
        }
        SortKey::ByPid => {
            sorted.sort_by_key(|p| p.pid);
        }
    }
    sorted
}

/// Reads the leading decimal number of a memory string.
///
/// Leading whitespace is skipped and anything after the number (a unit, a
/// thousands separator) is ignored. Returns `None` when there are no digits.
pub fn parse_memory(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_digit = false;
    for (i, ch) in trimmed.char_indices() {
        match ch {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + ch.len_utf8();
    }
    if !seen_digit {
        return None;
    }
    trimmed[..end].trim_end_matches('.').parse().ok()
}

// Unparsable values rank below every number.
fn compare_memory(a: &str, b: &str) -> Ordering {
    match (parse_memory(a), parse_memory(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}
