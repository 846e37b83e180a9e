//! Sort direction.

use serde::{Deserialize, Serialize};

/// Direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortOrder {
    /// Maps the wire-level `ascending` flag to a direction.
    #[must_use]
    pub const fn from_ascending(ascending: bool) -> Self {
        if ascending {
            Self::Ascending
        } else {
            Self::Descending
        }
    }

    /// Returns true for [`SortOrder::Ascending`].
    #[must_use]
    pub const fn is_ascending(self) -> bool {
        matches!(self, Self::Ascending)
    }

    /// Returns true if `left` must move behind `right` in this direction.
    ///
    /// Equal elements are never out of order, so runs of duplicates are left
    /// alone by a pass.
    #[inline]
    pub fn out_of_order<T: Ord>(self, left: &T, right: &T) -> bool {
        match self {
            Self::Ascending => left > right,
            Self::Descending => left < right,
        }
    }

    /// Returns true if `values` is ordered in this direction.
    pub fn is_sorted<T: Ord>(self, values: &[T]) -> bool {
        values
            .windows(2)
            .all(|pair| !self.out_of_order(&pair[0], &pair[1]))
    }
}

impl From<bool> for SortOrder {
    fn from(ascending: bool) -> Self {
        Self::from_ascending(ascending)
    }
}
