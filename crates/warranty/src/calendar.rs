//! Chargeable-day date arithmetic for warranty expiry.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Advance `start` by `day_count` chargeable days.
///
/// The walk visits one calendar day at a time, starting with `start`
/// itself. Every visited day that is not a Monday counts as chargeable;
/// Mondays are walked over without counting. The walk stops on the day that
/// completes the count. If that day is a Sunday, the result moves two more
/// calendar days forward, past the following Monday, landing on Tuesday.
///
/// Only Mondays and Sundays get special treatment: this rule is a stand-in
/// until a country/year-specific holiday calendar exists.
pub fn advance(start: NaiveDate, day_count: u32) -> NaiveDate {
    if day_count == 0 {
        return start;
    }

    let mut date = start;
    let mut counted = 0;
    loop {
        if date.weekday() != Weekday::Mon {
            counted += 1;
            if counted == day_count {
                break;
            }
        }
        date = date + Days::new(1);
    }

    if date.weekday() == Weekday::Sun {
        date + Days::new(2)
    } else {
        date
    }
}
