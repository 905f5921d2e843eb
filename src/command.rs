// SPDX-License-Identifier: MPL-2.0

//! Bounded subprocess execution.
//!
//! The probes shell out to `ip` and `iwgetid`, neither of which has a timeout
//! flag of its own. The runner polls the child against a deadline and kills it
//! on overrun; every failure mode (missing tool, non-zero exit, timeout, bad
//! UTF-8) collapses to "no output" so callers never see an error.

use std::io::Read;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Interval between `try_wait` polls while the child is running.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Runs `program` with `args`, returning trimmed stdout on success.
///
/// `None` covers every failure: spawn error, timeout, non-zero exit status,
/// or undecodable output. Stderr is discarded.
pub fn run_with_timeout(program: &str, args: &[&str], timeout: Duration) -> Option<String> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| log::debug!("{program}: spawn failed: {e}"))
        .ok()?;

    let deadline = Instant::now() + timeout;
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) => {
                if Instant::now() >= deadline {
                    log::debug!("{program}: timed out after {timeout:?}");
                    let _ = child.kill();
                    let _ = child.wait();
                    return None;
                }
                thread::sleep(POLL_INTERVAL);
            }
            Err(e) => {
                log::debug!("{program}: wait failed: {e}");
                let _ = child.kill();
                return None;
            }
        }
    };

    if !status.success() {
        log::debug!("{program}: exited with {status}");
        return None;
    }

    let mut stdout = String::new();
    child.stdout.take()?.read_to_string(&mut stdout).ok()?;
    Some(stdout.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_stdout_of_successful_command() {
        let output = run_with_timeout("echo", &["hello"], Duration::from_secs(2));
        assert_eq!(output.as_deref(), Some("hello"));
    }

    #[test]
    fn missing_program_yields_none() {
        let output = run_with_timeout(
            "definitely-not-a-real-binary",
            &[],
            Duration::from_secs(2),
        );
        assert!(output.is_none());
    }

    #[test]
    fn non_zero_exit_yields_none() {
        let output = run_with_timeout("false", &[], Duration::from_secs(2));
        assert!(output.is_none());
    }

    #[test]
    fn slow_command_is_killed_at_the_deadline() {
        let started = Instant::now();
        let output = run_with_timeout("sleep", &["5"], Duration::from_millis(100));
        assert!(output.is_none());
        assert!(started.elapsed() < Duration::from_secs(2));
    }
}
