use domain::aggregate::{comparison_series, severity_distribution, ComparisonPoint, SeverityBar};
use domain::{HeatMap, PostureSummary, RiskEntry};
use serde::Serialize;

/// Every aggregate view, computed from one register snapshot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    /// `None` when the register is empty.
    pub posture: Option<PostureSummary>,
    pub heat_map: HeatMap,
    pub severity: Vec<SeverityBar>,
    pub comparison: Vec<ComparisonPoint>,
}

impl Dashboard {
    pub fn from_entries(entries: &[RiskEntry]) -> Self {
        Self {
            posture: PostureSummary::from_entries(entries),
            heat_map: HeatMap::from_entries(entries),
            severity: severity_distribution(entries),
            comparison: comparison_series(entries),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.posture.is_none()
    }
}
