// SPDX-License-Identifier: MPL-2.0

//! One-shot calendar probe feeding the conky calendar slot

use chrono::Local;

fn main() {
    env_logger::init();

    // No trailing newline: conky renders the block verbatim.
    print!("{}", conky_probes::calendar::render(Local::now().date_naive()));
}
