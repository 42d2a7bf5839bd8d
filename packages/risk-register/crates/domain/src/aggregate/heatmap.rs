use crate::entities::rating::Rating;
use crate::entities::risk::RiskEntry;
use crate::scoring::{inherent_risk, severity, Severity};
use serde::Serialize;

/// One (likelihood, impact) cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeatCell {
    pub likelihood: Rating,
    pub impact: Rating,
    pub count: usize,
    /// Colour class of the cell, from `likelihood * impact`.
    pub severity: Severity,
}

/// 5×5 likelihood/impact grid of entry counts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeatMap {
    // counts[likelihood - 1][impact - 1]
    counts: [[usize; 5]; 5],
}

impl HeatMap {
    pub fn from_entries(entries: &[RiskEntry]) -> Self {
        let mut map = Self::default();
        for entry in entries {
            let details = entry.details();
            map.counts[details.likelihood.index()][details.impact.index()] += 1;
        }
        map
    }

    pub fn count(&self, likelihood: Rating, impact: Rating) -> usize {
        self.counts[likelihood.index()][impact.index()]
    }

    pub fn cell(&self, likelihood: Rating, impact: Rating) -> HeatCell {
        let score = inherent_risk(likelihood.value(), impact.value());
        HeatCell {
            likelihood,
            impact,
            count: self.count(likelihood, impact),
            severity: severity(f64::from(score)),
        }
    }

    /// Grid rows in display order: likelihood 5 at the top down to 1,
    /// impact 1 to 5 left to right.
    pub fn rows(&self) -> Vec<Vec<HeatCell>> {
        Rating::ALL
            .iter()
            .rev()
            .map(|&likelihood| {
                Rating::ALL
                    .iter()
                    .map(|&impact| self.cell(likelihood, impact))
                    .collect()
            })
            .collect()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }
}

impl Serialize for HeatMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rows().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::risk::{RiskDetails, RiskId};

    fn rating(value: u8) -> Rating {
        Rating::new(value).unwrap()
    }

    fn entry(id: &str, l: u8, i: u8) -> RiskEntry {
        RiskEntry::finalize(
            RiskId::new(id),
            RiskDetails {
                likelihood: rating(l),
                impact: rating(i),
                ..RiskDetails::default()
            },
        )
    }

    #[test]
    fn test_counts_exact_pairs() {
        let entries = vec![entry("a", 4, 2), entry("b", 4, 2), entry("c", 2, 4)];
        let map = HeatMap::from_entries(&entries);

        assert_eq!(map.count(rating(4), rating(2)), 2);
        assert_eq!(map.count(rating(2), rating(4)), 1);
        assert_eq!(map.count(rating(3), rating(3)), 0);
        assert_eq!(map.total(), 3);
    }

    #[test]
    fn test_cell_colour_ignores_entries() {
        let map = HeatMap::default();
        assert_eq!(map.cell(rating(5), rating(4)).severity, Severity::Critical);
        assert_eq!(map.cell(rating(3), rating(4)).severity, Severity::High);
        assert_eq!(map.cell(rating(2), rating(3)).severity, Severity::Medium);
        assert_eq!(map.cell(rating(1), rating(5)).severity, Severity::Low);
    }

    #[test]
    fn test_rows_display_order() {
        let map = HeatMap::from_entries(&[entry("a", 5, 1)]);
        let rows = map.rows();

        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|row| row.len() == 5));
        assert_eq!(rows[0][0].likelihood.value(), 5);
        assert_eq!(rows[0][0].impact.value(), 1);
        assert_eq!(rows[0][0].count, 1);
        assert_eq!(rows[4][4].likelihood.value(), 1);
        assert_eq!(rows[4][4].impact.value(), 5);
    }
}
