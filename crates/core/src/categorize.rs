//! Keyword-based transaction categorizer.

use crate::categories::UNCATEGORIZED;

/// Ordered category/keyword table.
///
/// Declaration order is the tie-break contract: when keywords from more
/// than one category match a description, the first-declared category wins.
pub const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Food",
        &["restaurant", "cafe", "groceries", "starbucks", "mcdonalds"],
    ),
    ("Transport", &["uber", "lyft", "gas", "metro"]),
    ("Shopping", &["amazon", "target", "walmart", "store"]),
    ("Utilities", &["electric", "comcast", "verizon", "water"]),
    ("Entertainment", &["movies", "concert", "netflix", "spotify"]),
    ("Housing", &["rent", "mortgage"]),
];

/// Map a free-text transaction description to a category name.
///
/// Matching is case-insensitive substring search over the keyword table.
/// Descriptions that match no keyword fall back to [`UNCATEGORIZED`].
/// Total over all inputs, including the empty string.
pub fn categorize(description: &str) -> &'static str {
    let haystack = description.to_lowercase();
    for &(category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|keyword| haystack.contains(keyword)) {
            return category;
        }
    }
    UNCATEGORIZED
}
