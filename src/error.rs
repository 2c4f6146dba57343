use thiserror::Error;

/// Failure to obtain a snapshot for the current tick.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("system data unavailable: {0}")]
    Unavailable(String),
}

/// Why a single signal delivery did not happen.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignalError {
    #[error("process {0} not found")]
    NotFound(u32),
    #[error("{signal} to process {pid} was rejected")]
    Rejected { pid: u32, signal: &'static str },
    #[error("{signal} is not supported on this platform")]
    Unsupported { signal: &'static str },
}

/// Dashboard-level conditions. None of these escape the render loop except
/// `Terminal`, which only occurs while acquiring or drawing to the surface.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    ProviderUnavailable(#[from] ProviderError),
    #[error("failed to terminate process {pid}: {reason}")]
    TerminationFailed { pid: u32, reason: String },
    #[error("terminal is {width} columns wide, {required} needed for the process table")]
    SurfaceTooSmall { width: u16, required: u16 },
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
