use std::time::Duration;

/// One row of the process table as the provider reported it.
#[derive(Clone, Debug, PartialEq)]
pub struct ProcessRecord {
    pub pid: u32,
    pub user: String,
    /// Fraction of a single core; busy multi-threaded processes exceed 1.
    pub cpu_utilization: f32,
    /// Resident memory in megabytes, kept as the provider formatted it.
    pub ram: String,
    pub elapsed: Duration,
    pub command: String,
}

/// Process table in provider order.
pub type ProcessSnapshot = Vec<ProcessRecord>;

/// Formats a resident set size in bytes as whole megabytes.
pub fn ram_megabytes(bytes: u64) -> String {
    (bytes / 1_048_576).to_string()
}
