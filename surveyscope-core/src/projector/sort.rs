//! Sort state machine for choice-summary tables.
//!
//! Sorting is a pure function of `(rows, key, order)`: re-applying the
//! same state to the same rows always yields the same order. The state
//! itself only moves on explicit user toggles.

use crate::types::OptionSummary;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Which column the table is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Label,
    Count,
}

impl SortKey {
    /// Direction a freshly selected key starts in: counts read best
    /// largest-first, labels alphabetically.
    pub fn default_order(&self) -> SortOrder {
        match self {
            Self::Label => SortOrder::Asc,
            Self::Count => SortOrder::Desc,
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn reversed(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Per-question sort state. `key: None` means server order
/// (by option index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: Option<SortKey>,
    pub order: SortOrder,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: None,
            order: SortOrder::Desc,
        }
    }
}

impl SortState {
    /// Apply a column toggle: the same key twice reverses the order,
    /// switching keys resets to that key's default direction.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == Some(key) {
            self.order = self.order.reversed();
        } else {
            self.key = Some(key);
            self.order = key.default_order();
        }
    }

    /// Order two option summaries under this state. Ties (and the
    /// `key: None` state) fall back to option index so the result is
    /// deterministic; the direction reverses the whole ordering, ties
    /// included, so flipping asc/desc yields exactly reversed rows.
    pub fn compare(&self, a: &OptionSummary, b: &OptionSummary) -> Ordering {
        let by_index = a.option_index.cmp(&b.option_index);
        let Some(key) = self.key else {
            return by_index;
        };
        let ordering = match key {
            SortKey::Label => a.label.cmp(&b.label),
            SortKey::Count => a.count.cmp(&b.count),
        }
        .then(by_index);
        match self.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}
