//! Filtering and sorting for the transactions list view.

use std::collections::HashSet;

use serde::Deserialize;

use crate::{
    category::{CategoryKey, UNCATEGORIZED_KEY},
    transaction::Transaction,
};

/// The order to present transactions in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Newest first; transactions without a date sink to the bottom.
    #[default]
    DateDesc,
    /// Largest amount first.
    AmountDesc,
    /// Smallest amount first.
    AmountAsc,
}

/// How the list view should filter and order a snapshot.
#[derive(Debug, Clone, Default)]
pub struct FilterSortCriteria {
    /// Only show these categories. An empty set means no filter at all.
    pub selected_categories: HashSet<CategoryKey>,
    /// The chosen sort order.
    pub sort: SortOption,
}

/// Apply the category filter and sort order to a snapshot.
///
/// The input is never mutated. Sorting is stable: transactions with equal
/// sort keys keep the order the store returned them in, since the store
/// already applies a secondary order.
pub fn filter_and_sort(
    transactions: &[Transaction],
    criteria: &FilterSortCriteria,
) -> Vec<Transaction> {
    let mut rows: Vec<Transaction> = transactions
        .iter()
        .filter(|transaction| {
            criteria.selected_categories.is_empty()
                || criteria
                    .selected_categories
                    .contains(&transaction.category.key)
        })
        .cloned()
        .collect();

    match criteria.sort {
        SortOption::DateDesc => rows.sort_by(|a, b| b.date.cmp(&a.date)),
        SortOption::AmountDesc => rows.sort_by(|a, b| b.amount.total_cmp(&a.amount)),
        SortOption::AmountAsc => rows.sort_by(|a, b| a.amount.total_cmp(&b.amount)),
    }

    rows
}

/// The category keys present in a snapshot, deduplicated and sorted for the
/// filter chips.
///
/// Keys are lowercase, so the sort is effectively case-insensitive. The
/// `uncategorized` sentinel is omitted: only explicitly set categories are
/// offered as filters.
pub fn distinct_categories(transactions: &[Transaction]) -> Vec<CategoryKey> {
    let mut seen = HashSet::new();
    let mut keys: Vec<CategoryKey> = transactions
        .iter()
        .map(|transaction| &transaction.category.key)
        .filter(|key| key.as_ref() != UNCATEGORIZED_KEY)
        .filter(|key| seen.insert((*key).clone()))
        .cloned()
        .collect();

    keys.sort();
    keys
}
