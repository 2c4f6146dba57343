use sysinfo::Signal;

use super::ProcessControl;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KillOutcome {
    Killed { pid: u32, signal: &'static str },
    Failed { pid: u32, reason: String },
}

impl KillOutcome {
    pub fn pid(&self) -> u32 {
        match self {
            KillOutcome::Killed { pid, .. } | KillOutcome::Failed { pid, .. } => *pid,
        }
    }

    pub fn is_killed(&self) -> bool {
        matches!(self, KillOutcome::Killed { .. })
    }
}

pub fn signal_name(signal: Signal) -> &'static str {
    match signal {
        Signal::Term => "SIGTERM",
        Signal::Kill => "SIGKILL",
        _ => "signal",
    }
}

/// Asks the process to stop with SIGTERM and falls back to SIGKILL.
///
/// Every failure is folded into [`KillOutcome::Failed`]; calling this again
/// for a pid that is already gone simply reports failure.
pub fn terminate<C: ProcessControl + ?Sized>(control: &C, pid: u32) -> KillOutcome {
    let mut last_error = None;
    for signal in [Signal::Term, Signal::Kill] {
        match control.send_signal(pid, signal) {
            Ok(()) => {
                tracing::info!(pid, signal = signal_name(signal), "process signalled");
                return KillOutcome::Killed {
                    pid,
                    signal: signal_name(signal),
                };
            }
            Err(err) => {
                tracing::debug!(pid, signal = signal_name(signal), error = %err, "signal not delivered");
                last_error = Some(err);
            }
        }
    }

    let reason = last_error
        .map(|err| err.to_string())
        .unwrap_or_else(|| format!("no signal delivered to process {pid}"));
    KillOutcome::Failed { pid, reason }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SignalError;
    use std::cell::RefCell;

    /// Records every attempt and accepts only the listed signals.
    struct FakeControl {
        accepts: Vec<Signal>,
        sent: RefCell<Vec<(u32, Signal)>>,
    }

    impl FakeControl {
        fn accepting(accepts: &[Signal]) -> Self {
            Self {
                accepts: accepts.to_vec(),
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl ProcessControl for FakeControl {
        fn send_signal(&self, pid: u32, signal: Signal) -> Result<(), SignalError> {
            self.sent.borrow_mut().push((pid, signal));
            if self.accepts.contains(&signal) {
                Ok(())
            } else {
                Err(SignalError::Rejected {
                    pid,
                    signal: signal_name(signal),
                })
            }
        }
    }

    #[test]
    fn graceful_signal_is_enough() {
        let control = FakeControl::accepting(&[Signal::Term, Signal::Kill]);
        let outcome = terminate(&control, 42);
        assert_eq!(
            outcome,
            KillOutcome::Killed {
                pid: 42,
                signal: "SIGTERM"
            }
        );
        assert_eq!(*control.sent.borrow(), vec![(42, Signal::Term)]);
    }

    #[test]
    fn escalates_to_kill_when_term_fails() {
        let control = FakeControl::accepting(&[Signal::Kill]);
        let outcome = terminate(&control, 42);
        assert_eq!(
            outcome,
            KillOutcome::Killed {
                pid: 42,
                signal: "SIGKILL"
            }
        );
        assert_eq!(
            *control.sent.borrow(),
            vec![(42, Signal::Term), (42, Signal::Kill)]
        );
    }

    #[test]
    fn both_refused_reports_failure() {
        let control = FakeControl::accepting(&[]);
        let outcome = terminate(&control, 7);
        assert!(!outcome.is_killed());
        assert_eq!(outcome.pid(), 7);
        match outcome {
            KillOutcome::Failed { reason, .. } => assert!(reason.contains("SIGKILL")),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn repeated_calls_do_not_panic() {
        let control = FakeControl::accepting(&[]);
        for _ in 0..3 {
            assert!(!terminate(&control, 99).is_killed());
        }
    }
}
