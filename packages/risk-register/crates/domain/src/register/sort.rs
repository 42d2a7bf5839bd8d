//! Display ordering for the register table.
//!
//! Numeric columns compare numerically. Text columns compare by their
//! Unicode lowercase form, then by the raw text, so "alpha" and "Alpha"
//! sit together and the result does not depend on letter case. Sorting is
//! stable: entries that tie completely keep their register order.

use crate::entities::risk::RiskEntry;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Title,
    #[serde(alias = "inherent_risk_score")]
    Inherent,
    #[serde(alias = "residual_risk_score")]
    Residual,
    Category,
    Status,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Title,
        SortKey::Inherent,
        SortKey::Residual,
        SortKey::Category,
        SortKey::Status,
    ];

    /// Column heading used by front ends.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Title => "Risk",
            SortKey::Inherent => "Inherent",
            SortKey::Residual => "Residual",
            SortKey::Category => "Category",
            SortKey::Status => "Status",
        }
    }

    /// Compares two entries on this key, ascending.
    pub fn compare(&self, a: &RiskEntry, b: &RiskEntry) -> Ordering {
        match self {
            SortKey::Title => collate(a.title(), b.title()),
            SortKey::Inherent => a.inherent_risk_score().cmp(&b.inherent_risk_score()),
            SortKey::Residual => a.residual_risk_score().total_cmp(&b.residual_risk_score()),
            SortKey::Category => collate(
                a.details().category.as_str(),
                b.details().category.as_str(),
            ),
            SortKey::Status => collate(a.details().status.as_str(), b.details().status.as_str()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort key '{0}' (expected title, inherent, residual, category or status)")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "title" | "risk" => Ok(SortKey::Title),
            "inherent" | "inherent_risk_score" => Ok(SortKey::Inherent),
            "residual" | "residual_risk_score" => Ok(SortKey::Residual),
            "category" => Ok(SortKey::Category),
            "status" => Ok(SortKey::Status),
            _ => Err(UnknownSortKey(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Active sort column and direction of the register table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: SortKey::Inherent,
            direction: SortDirection::Descending,
        }
    }
}

impl SortState {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Column-header click: the active key flips direction, a new key
    /// starts descending.
    pub fn select(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = self.direction.toggled();
        } else {
            self.key = key;
            self.direction = SortDirection::Descending;
        }
    }

    /// Sorted view over `entries`. The slice itself is left untouched.
    pub fn apply<'a>(&self, entries: &'a [RiskEntry]) -> Vec<&'a RiskEntry> {
        let mut sorted: Vec<&RiskEntry> = entries.iter().collect();
        sorted.sort_by(|a, b| {
            let ordering = self.key.compare(a, b);
            match self.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
        sorted
    }
}

fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
