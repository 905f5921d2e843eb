// SPDX-License-Identifier: MPL-2.0

//! Month-grid text block for the conky calendar slot.
//!
//! Pure function of the date: title, Su-first weekday header, one row per
//! week with today wrapped in the widget's highlight markup. Every line is
//! prefixed with `${alignc}` and the block carries no trailing newline.

use chrono::{Datelike, NaiveDate};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAY_HEADER: &str = "Su Mo Tu We Th Fr Sa";

/// Conky colour markup around today's cell.
const HIGHLIGHT_OPEN: &str = "${color F7C873}";
const HIGHLIGHT_CLOSE: &str = "${color}";

/// Renders the calendar block for `today`.
pub fn render(today: NaiveDate) -> String {
    let year = today.year();
    let month = today.month();

    let mut lines = vec![
        format!("{} {year}", MONTH_NAMES[(month - 1) as usize]),
        WEEKDAY_HEADER.to_string(),
    ];

    for week in month_weeks(year, month) {
        let cells: Vec<String> = week
            .iter()
            .map(|&day| match day {
                0 => "  ".to_string(),
                d if d == today.day() => format!("{HIGHLIGHT_OPEN}{d:>2}{HIGHLIGHT_CLOSE}"),
                d => format!("{d:>2}"),
            })
            .collect();
        lines.push(cells.join(" ").trim_end().to_string());
    }

    let centered: Vec<String> = lines
        .into_iter()
        .map(|line| format!("${{alignc}}{line}"))
        .collect();
    centered.join("\n")
}

/// Sunday-first week rows for the month, zero-padded outside the month.
fn month_weeks(year: i32, month: u32) -> Vec<[u32; 7]> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .expect("month index is always 1-12");
    let leading = first.weekday().num_days_from_sunday() as usize;
    let days = days_in_month(year, month);

    let mut weeks = Vec::new();
    let mut week = [0u32; 7];
    let mut slot = leading;
    for day in 1..=days {
        week[slot] = day;
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [0u32; 7];
            slot = 0;
        }
    }
    if slot > 0 {
        weeks.push(week);
    }
    weeks
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .expect("valid first-of-month");
    next_month_first.pred_opt().expect("not the minimum date").day()
}
