use crate::entities::risk::{RiskEntry, RiskStatus};
use crate::scoring::Severity;
use serde::Serialize;
use std::fmt;

/// Overall qualitative label for a register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PostureLabel {
    Critical,
    #[serde(rename = "High Risk")]
    HighRisk,
    Moderate,
    #[serde(rename = "Low Risk")]
    LowRisk,
}

impl PostureLabel {
    /// First match wins, in this order:
    /// avg ≥ 15 or ≥ 2 critical, avg ≥ 10 or ≥ 1 critical, avg ≥ 5.
    pub fn classify(average_residual: f64, critical_count: usize) -> Self {
        if average_residual >= 15.0 || critical_count >= 2 {
            PostureLabel::Critical
        } else if average_residual >= 10.0 || critical_count >= 1 {
            PostureLabel::HighRisk
        } else if average_residual >= 5.0 {
            PostureLabel::Moderate
        } else {
            PostureLabel::LowRisk
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PostureLabel::Critical => "Critical",
            PostureLabel::HighRisk => "High Risk",
            PostureLabel::Moderate => "Moderate",
            PostureLabel::LowRisk => "Low Risk",
        }
    }
}

impl fmt::Display for PostureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Headline numbers for the whole register.
///
/// Critical/High counts classify the inherent score; the average is taken
/// over residual scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostureSummary {
    pub total: usize,
    pub average_residual: f64,
    pub critical_count: usize,
    pub high_count: usize,
    pub open_count: usize,
    pub mitigated_count: usize,
    pub label: PostureLabel,
}

impl PostureSummary {
    /// `None` for an empty register: there is no posture to report.
    pub fn from_entries(entries: &[RiskEntry]) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }

        let total = entries.len();
        let residual_sum: f64 = entries.iter().map(RiskEntry::residual_risk_score).sum();
        let average_residual = residual_sum / total as f64;

        let count_severity =
            |tier: Severity| entries.iter().filter(|e| e.severity() == tier).count();
        let count_status = |status: RiskStatus| {
            entries
                .iter()
                .filter(|e| e.details().status == status)
                .count()
        };

        let critical_count = count_severity(Severity::Critical);

        Some(Self {
            total,
            average_residual,
            critical_count,
            high_count: count_severity(Severity::High),
            open_count: count_status(RiskStatus::Open),
            mitigated_count: count_status(RiskStatus::Mitigated),
            label: PostureLabel::classify(average_residual, critical_count),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::rating::Rating;
    use crate::entities::risk::{ControlEffectiveness, RiskDetails, RiskId};

    fn entry(id: &str, l: u8, i: u8, eff: ControlEffectiveness, status: RiskStatus) -> RiskEntry {
        RiskEntry::finalize(
            RiskId::new(id),
            RiskDetails {
                title: id.to_string(),
                likelihood: Rating::new(l).unwrap(),
                impact: Rating::new(i).unwrap(),
                control_effectiveness: eff,
                status,
                ..RiskDetails::default()
            },
        )
    }

    #[test]
    fn test_empty_register_has_no_posture() {
        assert!(PostureSummary::from_entries(&[]).is_none());
    }

    #[test]
    fn test_label_priority_order() {
        assert_eq!(PostureLabel::classify(15.0, 0), PostureLabel::Critical);
        assert_eq!(PostureLabel::classify(0.5, 2), PostureLabel::Critical);
        assert_eq!(PostureLabel::classify(10.0, 0), PostureLabel::HighRisk);
        assert_eq!(PostureLabel::classify(2.0, 1), PostureLabel::HighRisk);
        assert_eq!(PostureLabel::classify(9.99, 0), PostureLabel::Moderate);
        assert_eq!(PostureLabel::classify(5.0, 0), PostureLabel::Moderate);
        assert_eq!(PostureLabel::classify(4.9, 0), PostureLabel::LowRisk);
    }

    #[test]
    fn test_critical_count_overrides_moderate_average() {
        let entries = vec![
            entry("a", 5, 5, ControlEffectiveness::Ineffective, RiskStatus::Open),
            entry("b", 1, 1, ControlEffectiveness::Effective, RiskStatus::Mitigated),
            entry("c", 3, 3, ControlEffectiveness::PartiallyEffective, RiskStatus::Open),
        ];

        let summary = PostureSummary::from_entries(&entries).unwrap();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.critical_count, 1);
        assert_eq!(summary.high_count, 0);
        assert_eq!(summary.open_count, 2);
        assert_eq!(summary.mitigated_count, 1);
        assert!((summary.average_residual - 28.2 / 3.0).abs() < 1e-9);
        assert_eq!(summary.label, PostureLabel::HighRisk);
        assert_eq!(summary.label.to_string(), "High Risk");
    }

    #[test]
    fn test_low_risk_register() {
        let entries = vec![
            entry("a", 2, 2, ControlEffectiveness::Effective, RiskStatus::Accepted),
            entry("b", 1, 3, ControlEffectiveness::PartiallyEffective, RiskStatus::Open),
        ];

        let summary = PostureSummary::from_entries(&entries).unwrap();
        assert_eq!(summary.label, PostureLabel::LowRisk);
        assert_eq!(summary.critical_count, 0);
    }
}
