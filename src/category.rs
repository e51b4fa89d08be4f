//! Category resolution: canonical keys plus icon and color metadata.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Label shown for transactions without a category.
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// Key under which transactions without a category are grouped.
pub const UNCATEGORIZED_KEY: &str = "uncategorized";

/// Icon for categories outside the fixed table.
pub const FALLBACK_ICON: &str = "❓";

/// Fallback chip color used by the transactions list view.
pub const LIST_FALLBACK_COLOR: &str = "#4a90e2";

/// Fallback slice color used by the chart and summary views.
///
/// Deliberately distinct from [LIST_FALLBACK_COLOR]: the two views have
/// always styled unknown categories differently, and both behaviors are
/// preserved.
pub const CHART_FALLBACK_COLOR: &str = "#999";

/// A canonical lowercase category identifier used for grouping and
/// filtering.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CategoryKey(String);

impl CategoryKey {
    /// Create a key from a raw label.
    ///
    /// The label is trimmed and lowercased. Empty labels map to the
    /// [UNCATEGORIZED_KEY] sentinel, so a key is never empty.
    pub fn new(label: &str) -> Self {
        let trimmed = label.trim();

        if trimmed.is_empty() {
            Self(UNCATEGORIZED_KEY.to_owned())
        } else {
            Self(trimmed.to_lowercase())
        }
    }
}

impl AsRef<str> for CategoryKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for CategoryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fixed set of categories with dedicated display metadata.
///
/// Categories outside this set still group and filter by their own key;
/// they only share the [CategoryKind::Unknown] styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    /// Restaurants and eating out.
    Food,
    /// Public transport and travel.
    Transport,
    /// Supermarket shopping.
    Grocery,
    /// Rent, utilities, and other recurring bills.
    Bills,
    /// Movies, streaming, and leisure.
    Entertainment,
    /// Any category without an entry in the fixed table.
    Unknown,
}

impl CategoryKind {
    /// Look up the kind for a canonical category key.
    pub fn from_key(key: &CategoryKey) -> Self {
        match key.as_ref() {
            "food" => Self::Food,
            "transport" => Self::Transport,
            "grocery" => Self::Grocery,
            "bills" => Self::Bills,
            "entertainment" => Self::Entertainment,
            _ => Self::Unknown,
        }
    }

    /// The emoji shown next to the category label.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Food => "🍴",
            Self::Transport => "🚌",
            Self::Grocery => "🛒",
            Self::Bills => "🏠",
            Self::Entertainment => "🍿",
            Self::Unknown => FALLBACK_ICON,
        }
    }

    fn color(self) -> Option<&'static str> {
        match self {
            Self::Food => Some("#4CAF50"),
            Self::Transport => Some("#2196F3"),
            Self::Grocery => Some("#FF9800"),
            Self::Bills => Some("#E91E63"),
            Self::Entertainment => Some("#9C27B0"),
            Self::Unknown => None,
        }
    }
}

/// A category after canonicalization, with display metadata attached.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCategory {
    /// The canonical grouping key.
    pub key: CategoryKey,
    /// The display label; original casing, or [UNCATEGORIZED_LABEL].
    pub label: String,
    /// The emoji shown next to the label.
    pub icon: &'static str,
    /// The chip or slice color.
    pub color: &'static str,
}

/// Resolve a raw category label to its key and display metadata.
///
/// `fallback_color` styles categories outside the fixed table; pass
/// [LIST_FALLBACK_COLOR] or [CHART_FALLBACK_COLOR] depending on the view.
/// Unknown categories never cause a failure.
pub fn resolve_category(raw: Option<&str>, fallback_color: &'static str) -> ResolvedCategory {
    let trimmed = raw.map(str::trim).unwrap_or("");
    let (key, label) = if trimmed.is_empty() {
        (CategoryKey::new(""), UNCATEGORIZED_LABEL.to_owned())
    } else {
        (CategoryKey::new(trimmed), trimmed.to_owned())
    };

    let kind = CategoryKind::from_key(&key);

    ResolvedCategory {
        icon: kind.icon(),
        color: kind.color().unwrap_or(fallback_color),
        key,
        label,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        CHART_FALLBACK_COLOR, CategoryKey, FALLBACK_ICON, LIST_FALLBACK_COLOR, UNCATEGORIZED_KEY,
        UNCATEGORIZED_LABEL, resolve_category,
    };

    #[test]
    fn resolve_category_lowercases_key_and_keeps_label_casing() {
        let category = resolve_category(Some("  FOOD "), LIST_FALLBACK_COLOR);

        assert_eq!(category.key, CategoryKey::new("food"));
        assert_eq!(category.label, "FOOD");
        assert_eq!(category.icon, "🍴");
        assert_eq!(category.color, "#4CAF50");
    }

    #[test]
    fn resolve_category_maps_empty_labels_to_uncategorized() {
        for raw in [None, Some(""), Some("   ")] {
            let category = resolve_category(raw, LIST_FALLBACK_COLOR);

            assert_eq!(category.key.as_ref(), UNCATEGORIZED_KEY);
            assert_eq!(category.label, UNCATEGORIZED_LABEL);
            assert_eq!(category.icon, FALLBACK_ICON);
            assert_eq!(category.color, LIST_FALLBACK_COLOR);
        }
    }

    #[test]
    fn resolve_category_uses_the_callers_fallback_color() {
        let list = resolve_category(Some("coffee"), LIST_FALLBACK_COLOR);
        let chart = resolve_category(Some("coffee"), CHART_FALLBACK_COLOR);

        assert_eq!(list.color, LIST_FALLBACK_COLOR);
        assert_eq!(chart.color, CHART_FALLBACK_COLOR);
        assert_eq!(list.key, chart.key);
        assert_eq!(list.icon, FALLBACK_ICON);
    }

    #[test]
    fn known_categories_have_fixed_styling() {
        let cases = [
            ("transport", "🚌", "#2196F3"),
            ("grocery", "🛒", "#FF9800"),
            ("bills", "🏠", "#E91E63"),
            ("entertainment", "🍿", "#9C27B0"),
        ];

        for (label, icon, color) in cases {
            let category = resolve_category(Some(label), LIST_FALLBACK_COLOR);
            assert_eq!(category.icon, icon);
            assert_eq!(category.color, color);
        }
    }
}
