// SPDX-License-Identifier: MPL-2.0

//! Network probe: interface selection, attributes, persisted throughput

pub mod attributes;
pub mod rate;
pub mod selector;
pub mod store;

use crate::config::NetProbeConfig;

pub use rate::RateSample;
pub use store::{InterfaceSnapshot, PersistedState};

/// Produces the single output line for the requested mode.
///
/// `summary` is the default; anything unrecognized gets a literal fallback
/// line so the widget never renders an empty slot.
pub fn report(config: &NetProbeConfig, mode: &str) -> String {
    let iface = selector::select_primary_interface(config);
    let iface = iface.as_deref();

    match mode {
        "summary" => attributes::summary_line(config, iface),
        "details" => attributes::details_line(config, iface),
        "speed" => rate::speed_line(rate::compute_rate(config, iface)),
        _ => "Network: Unknown mode".to_string(),
    }
}
