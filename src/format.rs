//! Display formatting for amounts and dates.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};
use time::{Date, Month};

use crate::transaction::TransactionDate;

/// Format an amount as a euro currency string, e.g. `€12.30` or `-€5.00`.
pub fn currency(number: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("€")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-€")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    let mut formatted_string = if number < 0.0 {
        negative_fmt.fmt_string(number.abs())
    } else if number > 0.0 {
        positive_fmt.fmt_string(number)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        "€0.00".to_owned()
    };

    // numfmt omits the last trailing zero, so we must add it ourselves
    // For example, "12.30" is rendered as "12.3" so we append "0".
    if formatted_string.as_bytes()[formatted_string.len() - 3] != b'.' {
        formatted_string = format!("{formatted_string}0");
    }

    formatted_string
}

/// Format a transaction date for list display.
///
/// Known dates render as e.g. `"5 Mar 2024"`; missing or unparseable dates
/// render as `"Unknown date"`.
pub fn date_label(date: &TransactionDate) -> String {
    match date {
        TransactionDate::Known(date) => format_date_label(*date),
        TransactionDate::Unknown => "Unknown date".to_owned(),
    }
}

fn format_date_label(date: Date) -> String {
    format!(
        "{} {} {}",
        date.day(),
        month_abbrev(date.month()),
        date.year()
    )
}

fn month_abbrev(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}
