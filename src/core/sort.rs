//! Sort order for product listings

use serde::Serialize;
use std::cmp::Ordering;

/// Field every explicit listing order is applied to
pub const SORT_FIELD: &str = "price";

/// Ordering rule requested by the `sort` parameter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Store's natural order (insertion order for the in-memory store)
    #[default]
    None,
    PriceAscending,
    PriceDescending,
}

impl SortKey {
    /// Map a raw `sort` token to a key
    ///
    /// `"asc"` and `"desc"` are the only recognised tokens; any other value,
    /// including an absent one, keeps the natural order.
    pub fn resolve(token: Option<&str>) -> Self {
        match token {
            Some("asc") => SortKey::PriceAscending,
            Some("desc") => SortKey::PriceDescending,
            _ => SortKey::None,
        }
    }

    /// Compare two optional prices under this key
    ///
    /// Records without a price always come after priced records, in both
    /// directions. `SortKey::None` considers everything equal so a stable
    /// sort keeps the incoming order.
    pub fn compare_prices(self, a: Option<f64>, b: Option<f64>) -> Ordering {
        match self {
            SortKey::None => Ordering::Equal,
            SortKey::PriceAscending | SortKey::PriceDescending => match (a, b) {
                (Some(x), Some(y)) => {
                    let ord = x.total_cmp(&y);
                    if self == SortKey::PriceDescending {
                        ord.reverse()
                    } else {
                        ord
                    }
                }
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }

    pub fn is_explicit(self) -> bool {
        self != SortKey::None
    }
}
