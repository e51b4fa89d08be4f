//! Totals for the analytics summary screen.

use std::collections::HashMap;

use crate::{
    aggregation::CategoryTotal,
    amount::normalize_amount,
    category::{CHART_FALLBACK_COLOR, CategoryKey, resolve_category},
    transaction::RawTransaction,
};

/// Per-category spending for the summary screen.
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingTotals {
    /// One row per category, in first-seen order.
    pub rows: Vec<CategoryTotal>,
    /// Sum of every counted amount.
    pub total_spent: f64,
}

/// Sum spending per category for the summary screen.
///
/// Records whose amount normalizes to exactly zero are skipped entirely:
/// they contribute neither a sum nor a count, and a category seen only
/// through such records does not appear at all. The chart and list views
/// use [crate::aggregation::aggregate], which counts them instead.
pub fn spending_totals(transactions: &[RawTransaction]) -> SpendingTotals {
    let mut index: HashMap<CategoryKey, usize> = HashMap::new();
    let mut rows: Vec<CategoryTotal> = Vec::new();
    let mut total_spent = 0.0;

    for transaction in transactions {
        let amount = normalize_amount(transaction.amount.as_ref());
        if amount == 0.0 {
            continue;
        }

        total_spent += amount;

        let category = resolve_category(transaction.category.as_deref(), CHART_FALLBACK_COLOR);
        match index.get(&category.key) {
            Some(&position) => {
                let row = &mut rows[position];
                row.sum += amount;
                row.count += 1;
            }
            None => {
                index.insert(category.key.clone(), rows.len());
                rows.push(CategoryTotal {
                    category,
                    sum: amount,
                    count: 1,
                });
            }
        }
    }

    SpendingTotals { rows, total_spent }
}
