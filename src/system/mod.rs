//! Host data and process control.
//!
//! The dashboard reads the machine through [`SnapshotProvider`] and signals
//! processes through [`ProcessControl`]. [`collector::Collector`] implements
//! both on top of `sysinfo`; tests substitute in-memory fakes.

pub mod collector;
pub mod kill;
pub mod process;
pub mod snapshot;
pub mod sort;

pub use sysinfo::Signal;

use crate::error::{ProviderError, SignalError};
use process::ProcessSnapshot;
use snapshot::SystemSnapshot;

pub trait SnapshotProvider {
    /// Samples the host. Called once per tick before the reads below.
    fn refresh(&mut self) -> Result<(), ProviderError>;

    /// Host-wide readings from the last successful refresh.
    fn system_snapshot(&self) -> SystemSnapshot;

    /// Process table from the last successful refresh, in provider order.
    fn process_snapshot(&self) -> ProcessSnapshot;
}

pub trait ProcessControl {
    fn send_signal(&self, pid: u32, signal: Signal) -> Result<(), SignalError>;
}
