use crate::entities::risk::RiskEntry;
use crate::scoring::Severity;
use serde::Serialize;

/// Longest title kept verbatim on the comparison chart.
pub const LABEL_LIMIT: usize = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeverityBar {
    pub severity: Severity,
    pub count: usize,
}

/// Entry counts per inherent severity tier, in [`Severity::ALL`] order.
/// Tiers with no entries are still present with a zero count.
pub fn severity_distribution(entries: &[RiskEntry]) -> Vec<SeverityBar> {
    Severity::ALL
        .iter()
        .map(|&severity| SeverityBar {
            severity,
            count: entries.iter().filter(|e| e.severity() == severity).count(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonPoint {
    pub label: String,
    pub inherent: u32,
    pub residual: f64,
}

/// One inherent/residual pair per entry, in register order.
pub fn comparison_series(entries: &[RiskEntry]) -> Vec<ComparisonPoint> {
    entries
        .iter()
        .map(|entry| ComparisonPoint {
            label: chart_label(entry.title()),
            inherent: entry.inherent_risk_score(),
            residual: entry.residual_risk_score(),
        })
        .collect()
}

/// Shortens a title to [`LABEL_LIMIT`] characters plus an ellipsis.
pub fn chart_label(title: &str) -> String {
    if title.chars().count() > LABEL_LIMIT {
        let mut label: String = title.chars().take(LABEL_LIMIT).collect();
        label.push('…');
        label
    } else {
        title.to_string()
    }
}
