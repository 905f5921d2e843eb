// SPDX-License-Identifier: MPL-2.0

//! Probe library shared by the conky widget binaries

pub mod calendar;
pub mod command;
pub mod config;
pub mod net;
pub mod weather;

pub use config::NetProbeConfig;
