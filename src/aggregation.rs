//! Category aggregation for the summary and chart views.

use std::collections::HashMap;

use crate::{
    amount::normalize_amount,
    category::{CategoryKey, ResolvedCategory, resolve_category},
    transaction::RawTransaction,
};

/// The total spend recorded against one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// The category with its display metadata.
    pub category: ResolvedCategory,
    /// Arithmetic sum of the normalized amounts mapped to this category.
    pub sum: f64,
    /// How many transactions mapped to this category.
    pub count: usize,
}

/// Per-category totals in first-seen order, plus the grand total.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregationResult {
    /// One entry per distinct category key, in the order the keys were
    /// first seen during the fold.
    pub totals: Vec<CategoryTotal>,
    /// Sum over all normalized amounts; equals the sum of the entry sums
    /// regardless of how the transactions were grouped.
    pub grand_total: f64,
}

/// Fold a snapshot into per-category totals.
///
/// Category keys are case-insensitive and zero or malformed amounts are
/// *included*: they count toward [CategoryTotal::count] and add `0.0` to
/// the sum, so the sum of counts always equals the input length. The
/// summary screen applies a different policy, see
/// [crate::analytics::spending_totals].
///
/// `fallback_color` styles categories outside the fixed table.
pub fn aggregate(
    transactions: &[RawTransaction],
    fallback_color: &'static str,
) -> AggregationResult {
    let mut index: HashMap<CategoryKey, usize> = HashMap::new();
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut grand_total = 0.0;

    for transaction in transactions {
        let amount = normalize_amount(transaction.amount.as_ref());
        grand_total += amount;

        let category = resolve_category(transaction.category.as_deref(), fallback_color);
        match index.get(&category.key) {
            Some(&position) => {
                let entry = &mut totals[position];
                entry.sum += amount;
                entry.count += 1;
            }
            None => {
                index.insert(category.key.clone(), totals.len());
                totals.push(CategoryTotal {
                    category,
                    sum: amount,
                    count: 1,
                });
            }
        }
    }

    AggregationResult { totals, grand_total }
}

/// The percentage `value` makes up of `total`, rounded to the nearest whole
/// number. Returns `0` unless `total` is positive: a zero or negative total
/// has no meaningful shares.
pub fn percent_of(value: f64, total: f64) -> i64 {
    if total > 0.0 {
        ((value / total) * 100.0).round() as i64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        amount::RawAmount,
        category::{CHART_FALLBACK_COLOR, CategoryKey, LIST_FALLBACK_COLOR},
        transaction::{RawTransaction, RecordId},
    };

    use super::{aggregate, percent_of};

    fn raw(
        id: i64,
        amount: Option<RawAmount>,
        category: &str,
        date: Option<&str>,
    ) -> RawTransaction {
        RawTransaction {
            id: RecordId::Number(id),
            amount,
            category: Some(category.to_owned()),
            transaction_date: date.map(str::to_owned),
            note: None,
        }
    }

    #[test]
    fn aggregate_groups_case_insensitively_and_keeps_first_seen_order() {
        let transactions = vec![
            raw(1, Some(RawAmount::Number(50.0)), "food", Some("2024-03-01")),
            raw(2, Some(RawAmount::Text("bad".to_owned())), "", None),
            raw(3, Some(RawAmount::Number(20.0)), "FOOD", Some("2024-03-02")),
        ];

        let result = aggregate(&transactions, LIST_FALLBACK_COLOR);

        assert_eq!(result.totals.len(), 2);
        assert_eq!(result.totals[0].category.key, CategoryKey::new("food"));
        assert_eq!(result.totals[0].sum, 70.0);
        assert_eq!(result.totals[0].count, 2);
        assert_eq!(
            result.totals[1].category.key,
            CategoryKey::new("uncategorized")
        );
        assert_eq!(result.totals[1].sum, 0.0);
        assert_eq!(result.totals[1].count, 1);
        assert_eq!(result.grand_total, 70.0);
    }

    #[test]
    fn aggregate_grand_total_is_grouping_invariant() {
        let transactions = vec![
            raw(1, Some(RawAmount::Number(10.0)), "food", None),
            raw(2, Some(RawAmount::Number(25.5)), "bills", None),
            raw(3, Some(RawAmount::Number(4.5)), "food", None),
            raw(4, Some(RawAmount::Text("2".to_owned())), "coffee", None),
        ];

        let result = aggregate(&transactions, CHART_FALLBACK_COLOR);

        let sum_of_sums: f64 = result.totals.iter().map(|total| total.sum).sum();
        assert_eq!(result.grand_total, 42.0);
        assert_eq!(sum_of_sums, result.grand_total);
    }

    #[test]
    fn aggregate_conserves_counts() {
        let transactions = vec![
            raw(1, Some(RawAmount::Number(10.0)), "food", None),
            raw(2, None, "food", None),
            raw(3, Some(RawAmount::Number(0.0)), "bills", None),
            raw(4, Some(RawAmount::Text("x".to_owned())), "", None),
        ];

        let result = aggregate(&transactions, LIST_FALLBACK_COLOR);

        let total_count: usize = result.totals.iter().map(|total| total.count).sum();
        assert_eq!(total_count, transactions.len());
    }

    #[test]
    fn aggregate_handles_empty_input() {
        let result = aggregate(&[], LIST_FALLBACK_COLOR);

        assert!(result.totals.is_empty());
        assert_eq!(result.grand_total, 0.0);
    }

    #[test]
    fn percent_of_rounds_and_never_divides_by_zero() {
        assert_eq!(percent_of(50.0, 200.0), 25);
        assert_eq!(percent_of(1.0, 3.0), 33);
        assert_eq!(percent_of(2.0, 3.0), 67);
        assert_eq!(percent_of(10.0, 0.0), 0);
    }

    #[test]
    fn percent_of_returns_zero_for_non_positive_totals() {
        // Negative amounts survive normalization, so a refund-heavy month
        // can produce a negative grand total.
        assert_eq!(percent_of(-50.0, -100.0), 0);
        assert_eq!(percent_of(10.0, -5.0), 0);
        assert_eq!(percent_of(0.0, -1.0), 0);
    }
}
