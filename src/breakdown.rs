//! The month-at-a-time category breakdown behind the pie chart.

use time::Date;

use crate::{
    aggregation::{AggregationResult, aggregate, percent_of},
    category::{CHART_FALLBACK_COLOR, ResolvedCategory},
    transaction::{RawTransaction, TransactionDate},
    window::{DateRange, month_label, month_window, shift_month},
};

/// One slice of the monthly breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownSlice {
    /// The category, styled with the chart fallback color.
    pub category: ResolvedCategory,
    /// Total spend for the category within the window.
    pub sum: f64,
    /// Number of transactions for the category within the window.
    pub count: usize,
    /// Share of the window's grand total, rounded to a whole percent.
    pub percent: i64,
}

/// A month of spending grouped by category, ready for chart display.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyBreakdown {
    /// The month window the breakdown covers.
    pub window: DateRange,
    /// Display label for the window, e.g. `"February 2024"`.
    pub label: String,
    /// One slice per category, in first-seen order.
    pub slices: Vec<BreakdownSlice>,
    /// Sum of all slice sums.
    pub grand_total: f64,
    /// Anchor date for navigating to the previous month.
    pub prev_anchor: Date,
    /// Anchor date for navigating to the next month.
    pub next_anchor: Date,
}

/// Build the breakdown for the calendar month containing `anchor`.
///
/// Transactions outside the window are ignored, and a transaction without a
/// parseable date is outside every window. Zero and malformed amounts
/// within the window are counted per [aggregate]'s policy.
pub fn monthly_breakdown(transactions: &[RawTransaction], anchor: Date) -> MonthlyBreakdown {
    let window = month_window(anchor);
    let in_window: Vec<RawTransaction> = transactions
        .iter()
        .filter(
            |transaction| match TransactionDate::parse(transaction.transaction_date.as_deref()) {
                TransactionDate::Known(date) => window.contains(date),
                TransactionDate::Unknown => false,
            },
        )
        .cloned()
        .collect();

    let AggregationResult {
        totals,
        grand_total,
    } = aggregate(&in_window, CHART_FALLBACK_COLOR);

    let slices = totals
        .into_iter()
        .map(|total| BreakdownSlice {
            percent: percent_of(total.sum, grand_total),
            category: total.category,
            sum: total.sum,
            count: total.count,
        })
        .collect();

    MonthlyBreakdown {
        window,
        label: month_label(anchor),
        slices,
        grand_total,
        prev_anchor: shift_month(anchor, -1),
        next_anchor: shift_month(anchor, 1),
    }
}
