use serde::{Deserialize, Serialize};

/// Longest category label stored on a transaction, in bytes.
pub const MAX_CATEGORY_LEN: usize = 49;

/// A single spend: an amount and the category it was booked under.
///
/// Transactions belong to exactly one [`DayRecord`](super::DayRecord) and
/// carry no identifier of their own; edits and deletions locate them by
/// category instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub amount: f64,
    pub category: String,
}

impl Transaction {
    /// Builds a transaction, flooring the amount at zero and truncating the
    /// category label to [`MAX_CATEGORY_LEN`] bytes.
    pub fn new(amount: f64, category: impl Into<String>) -> Self {
        Self {
            amount: amount.max(0.0),
            category: truncate_label(category.into()),
        }
    }

    /// True when `other` names this transaction's category, ignoring ASCII case.
    pub fn matches_category(&self, other: &str) -> bool {
        self.category.eq_ignore_ascii_case(other)
    }
}

fn truncate_label(mut label: String) -> String {
    if label.len() <= MAX_CATEGORY_LEN {
        return label;
    }
    let mut cut = MAX_CATEGORY_LEN;
    while !label.is_char_boundary(cut) {
        cut -= 1;
    }
    label.truncate(cut);
    label
}
