// SPDX-License-Identifier: MPL-2.0

//! Primary-interface selection.
//!
//! Preference order: the device carrying the default route, then the first
//! non-loopback interface whose operstate reads `up`. The default-route device
//! wins regardless of link state since it is where outbound traffic goes.

use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::command::run_with_timeout;
use crate::config::NetProbeConfig;

/// Returns the active interface name, or `None` when nothing qualifies.
///
/// Callers must treat `None` as "no connectivity" and skip every dependent
/// read.
pub fn select_primary_interface(config: &NetProbeConfig) -> Option<String> {
    let route = query_default_route(config.command_timeout);
    if let Some(device) = route.as_deref().and_then(default_route_device) {
        return Some(device.to_string());
    }

    first_interface_up(&config.sys_net_dir)
}

/// Output of `ip -o route show to default`, empty on any failure.
fn query_default_route(timeout: Duration) -> Option<String> {
    run_with_timeout("ip", &["-o", "route", "show", "to", "default"], timeout)
        .filter(|output| !output.is_empty())
}

/// Extracts the token following the `dev` marker from a route entry.
pub fn default_route_device(route: &str) -> Option<&str> {
    let mut tokens = route.split_whitespace();
    while let Some(token) = tokens.next() {
        if token == "dev" {
            return tokens.next();
        }
    }
    None
}

/// First non-loopback interface under `sys_net_dir` with `operstate == up`,
/// in lexicographic order. A missing operstate file counts as down.
fn first_interface_up(sys_net_dir: &Path) -> Option<String> {
    let entries = fs::read_dir(sys_net_dir)
        .map_err(|e| log::debug!("{}: unreadable: {e}", sys_net_dir.display()))
        .ok()?;

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name != "lo")
        .collect();
    names.sort();

    names.into_iter().find(|name| {
        fs::read_to_string(sys_net_dir.join(name).join("operstate"))
            .map(|state| state.trim() == "up")
            .unwrap_or(false)
    })
}
