// SPDX-License-Identifier: MPL-2.0

//! Probe configuration shared between the network binary and its tests.
//!
//! The original tool hardwired its state file and sysfs root; both are kept as
//! plain fields here with the same defaults so tests can point them at a
//! scratch directory.

use std::path::PathBuf;
use std::time::Duration;

/// Name of the snapshot file inside the shared temp directory.
const STATE_FILE_NAME: &str = "conky_network_state.json";

/// Paths and limits used by the network probe.
#[derive(Debug, Clone)]
pub struct NetProbeConfig {
    /// Persisted counter-snapshot file, shared by every invocation on the host.
    pub state_file: PathBuf,
    /// Root of the kernel's per-interface attribute tree.
    pub sys_net_dir: PathBuf,
    /// Upper bound on any subprocess call (`ip`, `iwgetid`).
    pub command_timeout: Duration,
}

impl Default for NetProbeConfig {
    fn default() -> Self {
        Self {
            state_file: std::env::temp_dir().join(STATE_FILE_NAME),
            sys_net_dir: PathBuf::from("/sys/class/net"),
            command_timeout: Duration::from_secs(2),
        }
    }
}

impl NetProbeConfig {
    /// Config with defaults, honoring optional overrides from the command line.
    pub fn with_overrides(state_file: Option<PathBuf>, sys_net_dir: Option<PathBuf>) -> Self {
        let mut config = Self::default();
        if let Some(path) = state_file {
            config.state_file = path;
        }
        if let Some(path) = sys_net_dir {
            config.sys_net_dir = path;
        }
        config
    }
}
