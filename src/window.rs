//! Calendar-month windows for summary queries and navigation.

use time::{Date, Month};

/// An inclusive start/end date range, typically one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// The first day in the range.
    pub start: Date,
    /// The last day in the range (inclusive).
    pub end: Date,
}

impl DateRange {
    /// Whether `date` falls within the range, inclusive on both ends.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

/// The calendar month containing `reference`, as an inclusive date range.
pub fn month_window(reference: Date) -> DateRange {
    month_bounds(reference.year(), reference.month())
}

/// Add `delta` whole months (positive or negative) to `reference`.
///
/// The day-of-month is preserved where possible and clamped to the last day
/// of the target month otherwise. Intended for window anchoring and display
/// navigation, not general calendar arithmetic.
pub fn shift_month(reference: Date, delta: i32) -> Date {
    let months_from_zero =
        reference.year() * 12 + i32::from(month_number(reference.month())) - 1 + delta;
    let year = months_from_zero.div_euclid(12);
    let month = month_from_number((months_from_zero.rem_euclid(12) + 1) as u8);
    let day = reference.day().min(last_day_of_month(year, month));

    Date::from_calendar_date(year, month, day).expect("clamped day is always valid")
}

/// The display label for the month containing `date`, e.g. `"February 2024"`.
pub fn month_label(date: Date) -> String {
    format!("{} {}", date.month(), date.year())
}

fn month_bounds(year: i32, month: Month) -> DateRange {
    let start = Date::from_calendar_date(year, month, 1).expect("invalid month start date");
    let end = Date::from_calendar_date(year, month, last_day_of_month(year, month))
        .expect("invalid month end date");

    DateRange { start, end }
}

fn last_day_of_month(year: i32, month: Month) -> u8 {
    match month {
        Month::January
        | Month::March
        | Month::May
        | Month::July
        | Month::August
        | Month::October
        | Month::December => 31,
        Month::April | Month::June | Month::September | Month::November => 30,
        Month::February => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

fn month_number(month: Month) -> u8 {
    match month {
        Month::January => 1,
        Month::February => 2,
        Month::March => 3,
        Month::April => 4,
        Month::May => 5,
        Month::June => 6,
        Month::July => 7,
        Month::August => 8,
        Month::September => 9,
        Month::October => 10,
        Month::November => 11,
        Month::December => 12,
    }
}

fn month_from_number(month: u8) -> Month {
    match month {
        1 => Month::January,
        2 => Month::February,
        3 => Month::March,
        4 => Month::April,
        5 => Month::May,
        6 => Month::June,
        7 => Month::July,
        8 => Month::August,
        9 => Month::September,
        10 => Month::October,
        11 => Month::November,
        12 => Month::December,
        _ => panic!("invalid month number {month}"),
    }
}
