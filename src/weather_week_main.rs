// SPDX-License-Identifier: MPL-2.0

//! One-shot seven-day forecast probe feeding the conky weather slot

use conky_probes::weather::{self, UNAVAILABLE, week};

fn main() {
    env_logger::init();

    let block = match weather::fetch_forecast() {
        Ok(payload) => week::digest(&payload),
        Err(e) => {
            log::debug!("forecast fetch failed: {e}");
            None
        }
    };
    println!("{}", block.as_deref().unwrap_or(UNAVAILABLE));
}
