// SPDX-License-Identifier: MPL-2.0

//! One-shot current-conditions probe feeding the conky weather slot

use clap::Parser;
use conky_probes::weather::{self, UNAVAILABLE, current};

/// Prints the current conditions: temperature summary, icon key, or
/// humidity/wind details.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output mode: summary (default), icon, or details
    #[arg(default_value = "summary")]
    mode: String,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let line = match weather::fetch_forecast() {
        Ok(payload) => current::report_line(&payload, &args.mode),
        Err(e) => {
            log::debug!("forecast fetch failed: {e}");
            None
        }
    };
    println!("{}", line.as_deref().unwrap_or(UNAVAILABLE));
}
