use std::time::Duration;

use sysinfo::{
    Pid, Process, ProcessRefreshKind, ProcessStatus, ProcessesToUpdate, Signal, System,
    UpdateKind, Users,
};

use super::kill::signal_name;
use super::process::{ProcessRecord, ProcessSnapshot, ram_megabytes};
use super::snapshot::SystemSnapshot;
use super::{ProcessControl, SnapshotProvider};
use crate::error::{ProviderError, SignalError};

/// Live provider backed by `sysinfo`.
pub struct Collector {
    sys: System,
    users: Users,
    os_name: String,
    kernel: String,
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        sys.refresh_cpu_all();
        sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::everything(),
        );
        Collector {
            sys,
            users: Users::new_with_refreshed_list(),
            os_name: System::long_os_version()
                .or_else(System::name)
                .unwrap_or_else(|| "unknown".to_string()),
            kernel: System::kernel_version().unwrap_or_else(|| "unknown".to_string()),
        }
    }

    fn user_name(&self, process: &Process) -> String {
        match process.user_id() {
            Some(uid) => self
                .users
                .get_user_by_id(uid)
                .map(|user| user.name().to_string())
                .unwrap_or_else(|| format!("{uid:?}")),
            None => "?".to_string(),
        }
    }

    fn command_line(process: &Process) -> String {
        let command = process
            .cmd()
            .iter()
            .map(|s| s.to_string_lossy().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        if command.is_empty() {
            process.name().to_string_lossy().to_string()
        } else {
            command
        }
    }
}

impl SnapshotProvider for Collector {
    fn refresh(&mut self) -> Result<(), ProviderError> {
        let _refresh_span = tracing::debug_span!("collector.refresh").entered();

        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(ProviderError::Unavailable(
                "sysinfo does not support this platform".to_string(),
            ));
        }

        self.sys.refresh_memory();
        self.sys.refresh_cpu_all();
        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing()
                .with_memory()
                .with_cpu()
                .with_user(UpdateKind::OnlyIfNotSet)
                .with_cmd(UpdateKind::OnlyIfNotSet),
        );

        if self.sys.processes().is_empty() {
            return Err(ProviderError::Unavailable(
                "process table is empty".to_string(),
            ));
        }
        Ok(())
    }

    fn system_snapshot(&self) -> SystemSnapshot {
        let total_memory = self.sys.total_memory();
        let memory_utilization = if total_memory > 0 {
            self.sys.used_memory() as f32 / total_memory as f32
        } else {
            0.0
        };
        let processes = self.sys.processes();

        SystemSnapshot {
            os_name: self.os_name.clone(),
            kernel: self.kernel.clone(),
            cpu_utilization: self.sys.global_cpu_usage() / 100.0,
            memory_utilization,
            total_processes: processes.len(),
            running_processes: processes
                .values()
                .filter(|p| p.status() == ProcessStatus::Run)
                .count(),
            uptime: Duration::from_secs(System::uptime()),
        }
    }

    fn process_snapshot(&self) -> ProcessSnapshot {
        self.sys
            .processes()
            .iter()
            .map(|(pid, process)| ProcessRecord {
                pid: pid.as_u32(),
                user: self.user_name(process),
                cpu_utilization: process.cpu_usage() / 100.0,
                ram: ram_megabytes(process.memory()),
                elapsed: Duration::from_secs(process.run_time()),
                command: Self::command_line(process),
            })
            .collect()
    }
}

impl ProcessControl for Collector {
    fn send_signal(&self, pid: u32, signal: Signal) -> Result<(), SignalError> {
        let process = self
            .sys
            .process(Pid::from_u32(pid))
            .ok_or(SignalError::NotFound(pid))?;
        let name = signal_name(signal);
        match process.kill_with(signal) {
            Some(true) => Ok(()),
            Some(false) => Err(SignalError::Rejected { pid, signal: name }),
            // The platform lacks this signal; only the forceful path has a
            // generic equivalent.
            None if signal == Signal::Kill => {
                if process.kill() {
                    Ok(())
                } else {
                    Err(SignalError::Rejected { pid, signal: name })
                }
            }
            None => Err(SignalError::Unsupported { signal: name }),
        }
    }
}
