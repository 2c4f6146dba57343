use std::fs::{self, File};
use std::path::Path;
use std::sync::Mutex;

use color_eyre::eyre::{Result, eyre};
use tracing_subscriber::EnvFilter;

/// Environment variable naming the JSON log file.
pub const LOG_ENV: &str = "SYSDASH_LOG";

/// Installs a JSON file subscriber when `SYSDASH_LOG` is set.
///
/// The dashboard owns the terminal, so there is no stderr fallback: without
/// the variable, events are discarded. Returns whether logging is active.
pub fn init_from_env() -> Result<bool> {
    match std::env::var_os(LOG_ENV) {
        Some(path) if !path.is_empty() => {
            init_json_file(Path::new(&path))?;
            Ok(true)
        }
        _ => Ok(false),
    }
}

pub fn init_json_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let file = File::options().create(true).append(true).open(path)?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .json()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| eyre!("failed to set tracing subscriber: {e}"))?;
    Ok(())
}
