use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use sysdash::system::collector::Collector;
use sysdash::system::kill::{KillOutcome, terminate};
use sysdash::system::SnapshotProvider;

fn spawn_long_lived_child() -> Child {
    #[cfg(windows)]
    let mut cmd = {
        let mut c = Command::new("powershell");
        c.args([
            "-NoProfile",
            "-NonInteractive",
            "-Command",
            "Start-Sleep -Seconds 30",
        ]);
        c
    };

    #[cfg(not(windows))]
    let mut cmd = {
        let mut c = Command::new("sh");
        c.args(["-c", "sleep 30"]);
        c
    };

    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to spawn child process")
}

fn wait_for_pid(collector: &mut Collector, pid: u32, timeout: Duration) -> bool {
    let deadline = Instant::now() + timeout;
    loop {
        if collector.refresh().is_ok()
            && collector.process_snapshot().iter().any(|p| p.pid == pid)
        {
            return true;
        }
        if Instant::now() >= deadline {
            return false;
        }
        thread::sleep(Duration::from_millis(50));
    }
}

fn wait_for_exit(child: &mut Child, timeout: Duration) {
    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait() {
            Ok(Some(_)) => return,
            Ok(None) if Instant::now() < deadline => {
                thread::sleep(Duration::from_millis(50));
            }
            Ok(None) => {
                let _ = child.kill();
                panic!("child process did not exit before timeout");
            }
            Err(err) => {
                let _ = child.kill();
                panic!("failed waiting for child exit: {err}");
            }
        }
    }
}

#[test]
fn terminate_unknown_pid_fails() {
    let mut collector = Collector::new();
    collector.refresh().unwrap();

    let outcome = terminate(&collector, u32::MAX);
    assert!(matches!(outcome, KillOutcome::Failed { pid: u32::MAX, .. }));
}

#[test]
fn terminate_spawned_child() {
    let mut child = spawn_long_lived_child();
    let pid = child.id();

    let mut collector = Collector::new();
    if !wait_for_pid(&mut collector, pid, Duration::from_secs(3)) {
        let _ = child.kill();
        panic!("child process PID {pid} was not sampled before kill attempt");
    }

    let outcome = terminate(&collector, pid);
    if !outcome.is_killed() {
        let _ = child.kill();
        panic!("terminate reported failure: {outcome:?}");
    }
    assert_eq!(outcome.pid(), pid);
    wait_for_exit(&mut child, Duration::from_secs(5));
}
