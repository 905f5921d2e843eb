// SPDX-License-Identifier: MPL-2.0

//! Counter snapshots persisted across probe invocations.
//!
//! The state file is process-wide shared scratch: safe to delete at any time,
//! and an unreadable or corrupt file is indistinguishable from an absent one.
//! Writes go through a sibling temp file and a rename so a concurrent
//! invocation can lose an update but never observe interleaved bytes.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Cumulative byte counters for one interface at one observation instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterfaceSnapshot {
    /// Total bytes received since the counter last reset.
    pub rx: u64,
    /// Total bytes transmitted since the counter last reset.
    pub tx: u64,
    /// Wall-clock seconds at the observation.
    pub t: f64,
}

/// Most recent snapshot per interface name.
pub type PersistedState = BTreeMap<String, InterfaceSnapshot>;

/// Loads the persisted state, treating every failure as an empty map.
pub fn load(path: &Path) -> PersistedState {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            log::debug!("{}: not read: {e}", path.display());
            return PersistedState::new();
        }
    };

    match serde_json::from_str(&contents) {
        Ok(state) => state,
        Err(e) => {
            log::warn!("{}: corrupt state discarded: {e}", path.display());
            PersistedState::new()
        }
    }
}

/// Writes the state back, best-effort. Throughput reporting is not worth
/// crashing the caller over a failed write.
pub fn save(path: &Path, state: &PersistedState) {
    if let Err(e) = try_save(path, state) {
        log::warn!("{}: state not saved: {e}", path.display());
    }
}

fn try_save(path: &Path, state: &PersistedState) -> std::io::Result<()> {
    let payload = serde_json::to_string(state)?;
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, payload)?;
    fs::rename(&tmp_path, path)
}
