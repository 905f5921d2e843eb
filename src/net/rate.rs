// SPDX-License-Identifier: MPL-2.0

//! Throughput from counter deltas across invocations.
//!
//! Each call reads the kernel's cumulative rx/tx counters, diffs them against
//! the snapshot persisted by the previous invocation, and writes the fresh
//! snapshot back. The first observation of an interface has no baseline and
//! reports zero.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::NetProbeConfig;
use crate::net::store::{self, InterfaceSnapshot};

/// Floor for the elapsed-time divisor, in seconds. Back-to-back invocations
/// must not divide by zero.
const MIN_DT_SECS: f64 = 0.001;

/// Instantaneous throughput estimate, KiB per second. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RateSample {
    pub down_kib: f64,
    pub up_kib: f64,
}

/// Computes the current rate for `iface` and persists the new snapshot.
pub fn compute_rate(config: &NetProbeConfig, iface: Option<&str>) -> RateSample {
    compute_rate_at(config, iface, wallclock_secs())
}

/// Clock-injected variant of [`compute_rate`].
pub fn compute_rate_at(config: &NetProbeConfig, iface: Option<&str>, now: f64) -> RateSample {
    let Some(iface) = iface else {
        return RateSample::default();
    };

    let (rx_now, tx_now) = read_counters(&config.sys_net_dir, iface);

    let mut state = store::load(&config.state_file);
    let sample = match state.get(iface) {
        Some(prev) => {
            let dt = (now - prev.t).max(MIN_DT_SECS);
            RateSample {
                down_kib: ((rx_now as f64 - prev.rx as f64) / 1024.0 / dt).max(0.0),
                up_kib: ((tx_now as f64 - prev.tx as f64) / 1024.0 / dt).max(0.0),
            }
        }
        None => RateSample::default(),
    };

    state.insert(
        iface.to_string(),
        InterfaceSnapshot {
            rx: rx_now,
            tx: tx_now,
            t: now,
        },
    );
    store::save(&config.state_file, &state);

    sample
}

/// Formats the speed line: one decimal place, fixed KiB/s units.
pub fn speed_line(sample: RateSample) -> String {
    format!(
        "Down: {:.1} KiB/s  Up: {:.1} KiB/s",
        sample.down_kib, sample.up_kib
    )
}

/// Cumulative rx/tx byte counters; either file missing reads as zero for both.
fn read_counters(sys_net_dir: &Path, iface: &str) -> (u64, u64) {
    let stats = sys_net_dir.join(iface).join("statistics");
    let rx = read_counter(&stats.join("rx_bytes"));
    let tx = read_counter(&stats.join("tx_bytes"));
    match (rx, tx) {
        (Some(rx), Some(tx)) => (rx, tx),
        _ => (0, 0),
    }
}

fn read_counter(path: &Path) -> Option<u64> {
    std::fs::read_to_string(path)
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
}

fn wallclock_secs() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}
