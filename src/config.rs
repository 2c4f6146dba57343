use std::time::Duration;

use crate::state::MESSAGE_TTL;

pub const DEFAULT_VISIBLE_ROWS: usize = 10;
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(500);

/// Runtime settings. Only the row count comes from the command line; the
/// rest are fixed and nothing is read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub visible_rows: usize,
    pub tick_interval: Duration,
    pub message_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            visible_rows: DEFAULT_VISIBLE_ROWS,
            tick_interval: DEFAULT_TICK_INTERVAL,
            message_ttl: MESSAGE_TTL,
        }
    }
}

impl Config {
    pub fn from_rows(rows: Option<usize>) -> Self {
        let mut config = Config::default();
        if let Some(rows) = rows {
            config.visible_rows = rows.max(1);
        }
        config
    }
}
