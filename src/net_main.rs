// SPDX-License-Identifier: MPL-2.0

//! One-shot network probe feeding the conky widget's network slot

use std::path::PathBuf;

use clap::Parser;
use conky_probes::NetProbeConfig;

/// Reports the active network interface: connectivity summary, address
/// details, or throughput since the previous invocation.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output mode: summary (default), details, or speed
    #[arg(default_value = "summary")]
    mode: String,

    /// Override the counter-snapshot file
    #[arg(long, value_name = "FILE")]
    state_file: Option<PathBuf>,

    /// Override the sysfs network-class root
    #[arg(long, value_name = "DIR")]
    sys_dir: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = NetProbeConfig::with_overrides(args.state_file, args.sys_dir);
    println!("{}", conky_probes::net::report(&config, &args.mode));
}
