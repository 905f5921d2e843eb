// SPDX-License-Identifier: MPL-2.0

//! Per-interface attribute reads and the human-readable output lines.
//!
//! Every read is independently best-effort: a missing sysfs file or a failed
//! subprocess produces the documented fallback value for that field only.

use std::path::Path;

use crate::command::run_with_timeout;
use crate::config::NetProbeConfig;

/// Connection medium of an interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceType {
    Wired,
    WiFi,
    Disconnected,
}

impl InterfaceType {
    fn label(self) -> &'static str {
        match self {
            InterfaceType::Wired => "Wired",
            InterfaceType::WiFi => "Wi-Fi",
            InterfaceType::Disconnected => "Disconnected",
        }
    }
}

/// Physical-link state, distinct from administrative up/down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarrierState {
    Connected,
    Disconnected,
    Unknown,
}

impl CarrierState {
    fn label(self) -> &'static str {
        match self {
            CarrierState::Connected => "Connected",
            CarrierState::Disconnected => "Disconnected",
            CarrierState::Unknown => "Unknown",
        }
    }
}

/// Wi-Fi when the wireless marker exists; Disconnected only for an empty name.
pub fn interface_type(sys_net_dir: &Path, iface: &str) -> InterfaceType {
    if iface.is_empty() {
        return InterfaceType::Disconnected;
    }
    if sys_net_dir.join(iface).join("wireless").exists() {
        return InterfaceType::WiFi;
    }
    InterfaceType::Wired
}

/// Carrier flag: `1` means link detected, other content means no link, a
/// missing file means the kernel does not expose the flag here.
pub fn carrier_state(sys_net_dir: &Path, iface: &str) -> CarrierState {
    match std::fs::read_to_string(sys_net_dir.join(iface).join("carrier")) {
        Ok(contents) if contents.trim() == "1" => CarrierState::Connected,
        Ok(_) => CarrierState::Disconnected,
        Err(_) => CarrierState::Unknown,
    }
}

/// Global-scope IPv4 address of `iface`, or the literal `No IP`.
pub fn ipv4_address(config: &NetProbeConfig, iface: &str) -> String {
    let output = run_with_timeout(
        "ip",
        &["-o", "-4", "addr", "show", "dev", iface, "scope", "global"],
        config.command_timeout,
    );
    match output.as_deref().and_then(extract_ipv4) {
        Some(addr) => addr.to_string(),
        None => "No IP".to_string(),
    }
}

/// First digit-leading `a.b.c.d/len` token in `ip -o -4 addr` output, with
/// the prefix length stripped.
pub fn extract_ipv4(output: &str) -> Option<&str> {
    output
        .split_whitespace()
        .find(|token| token.contains('/') && token.starts_with(|c: char| c.is_ascii_digit()))
        .and_then(|token| token.split('/').next())
}

/// Raw SSID from `iwgetid`, empty when unassociated or the tool fails.
pub fn wifi_ssid(config: &NetProbeConfig, iface: &str) -> String {
    run_with_timeout("iwgetid", &[iface, "-r"], config.command_timeout).unwrap_or_default()
}

/// One-line connectivity summary.
pub fn summary_line(config: &NetProbeConfig, iface: Option<&str>) -> String {
    match iface {
        None => "Network: Disconnected".to_string(),
        Some(iface) => {
            let kind = interface_type(&config.sys_net_dir, iface);
            format!("Network: {} ({iface})", kind.label())
        }
    }
}

/// One-line detail: SSID for Wi-Fi, carrier for wired, plus the IPv4 address.
pub fn details_line(config: &NetProbeConfig, iface: Option<&str>) -> String {
    let Some(iface) = iface else {
        return "IP: No network".to_string();
    };

    let ip_addr = ipv4_address(config, iface);
    match interface_type(&config.sys_net_dir, iface) {
        InterfaceType::WiFi => {
            let ssid = wifi_ssid(config, iface);
            let ssid_text = if ssid.is_empty() { "Unknown" } else { ssid.as_str() };
            format!("SSID: {ssid_text}  IP: {ip_addr}")
        }
        _ => {
            let carrier = carrier_state(&config.sys_net_dir, iface);
            format!("Link: {}  IP: {ip_addr}", carrier.label())
        }
    }
}
