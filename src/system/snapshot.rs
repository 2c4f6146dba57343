use std::time::Duration;

/// Host-wide readings captured once per tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SystemSnapshot {
    pub os_name: String,
    pub kernel: String,
    /// Fraction in `[0, 1]`.
    pub cpu_utilization: f32,
    /// Fraction in `[0, 1]`.
    pub memory_utilization: f32,
    pub total_processes: usize,
    pub running_processes: usize,
    pub uptime: Duration,
}
