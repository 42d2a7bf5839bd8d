//! Risk scoring model.
//!
//! Inherent risk is the raw exposure before controls (likelihood × impact).
//! Residual risk discounts the inherent score by how well the existing
//! controls work. Severity bands a score into four tiers.
//!
//! These functions are total: they do not check that ratings fall inside
//! 1–5. Callers that accept user input go through [`crate::Rating`].

use crate::entities::risk::ControlEffectiveness;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Score at or above which a risk is Critical.
pub const CRITICAL_THRESHOLD: f64 = 20.0;
/// Score at or above which a risk is High.
pub const HIGH_THRESHOLD: f64 = 12.0;
/// Score at or above which a risk is Medium.
pub const MEDIUM_THRESHOLD: f64 = 6.0;

/// Severity tier of a score, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// Fixed display order used by charts and summaries.
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw exposure before controls.
pub fn inherent_risk(likelihood: u8, impact: u8) -> u32 {
    u32::from(likelihood) * u32::from(impact)
}

/// Exposure left after applying the control-effectiveness discount,
/// rounded half up to one decimal place.
pub fn residual_risk(inherent_score: u32, effectiveness: ControlEffectiveness) -> f64 {
    let raw = f64::from(inherent_score) * effectiveness.residual_factor();
    round_tenths(raw)
}

/// Bands a score into a severity tier.
pub fn severity(score: f64) -> Severity {
    if score >= CRITICAL_THRESHOLD {
        Severity::Critical
    } else if score >= HIGH_THRESHOLD {
        Severity::High
    } else if score >= MEDIUM_THRESHOLD {
        Severity::Medium
    } else {
        Severity::Low
    }
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inherent_is_product_and_symmetric() {
        for l in 1..=5u8 {
            for i in 1..=5u8 {
                let score = inherent_risk(l, i);
                assert_eq!(score, u32::from(l) * u32::from(i));
                assert_eq!(score, inherent_risk(i, l));
                assert!((1..=25).contains(&score));
            }
        }
        assert_eq!(inherent_risk(4, 5), 20);
    }

    #[test]
    fn test_residual_factors() {
        assert_eq!(residual_risk(20, ControlEffectiveness::PartiallyEffective), 12.0);
        assert_eq!(residual_risk(25, ControlEffectiveness::Ineffective), 22.5);
        assert_eq!(residual_risk(1, ControlEffectiveness::Effective), 0.3);
        assert_eq!(residual_risk(9, ControlEffectiveness::PartiallyEffective), 5.4);
    }

    #[test]
    fn test_residual_never_exceeds_inherent_and_is_monotone() {
        for effectiveness in ControlEffectiveness::ALL {
            let mut previous = 0.0;
            for score in 1..=25u32 {
                let residual = residual_risk(score, effectiveness);
                assert!(residual <= f64::from(score));
                assert!(residual > previous, "{effectiveness} at {score}");
                previous = residual;
            }
        }
    }

    #[test]
    fn test_residual_rounds_half_up() {
        // 15 × 0.3 = 4.5 exactly; 11 × 0.9 = 9.9; 7 × 0.6 = 4.2
        assert_eq!(residual_risk(15, ControlEffectiveness::Effective), 4.5);
        assert_eq!(residual_risk(11, ControlEffectiveness::Ineffective), 9.9);
        assert_eq!(residual_risk(7, ControlEffectiveness::PartiallyEffective), 4.2);
        assert_eq!(round_tenths(0.25), 0.3);
        assert_eq!(round_tenths(1.05 + 1e-9), 1.1);
    }

    #[test]
    fn test_severity_boundaries() {
        assert_eq!(severity(25.0), Severity::Critical);
        assert_eq!(severity(20.0), Severity::Critical);
        assert_eq!(severity(19.0), Severity::High);
        assert_eq!(severity(12.0), Severity::High);
        assert_eq!(severity(11.0), Severity::Medium);
        assert_eq!(severity(6.0), Severity::Medium);
        assert_eq!(severity(5.0), Severity::Low);
        assert_eq!(severity(0.3), Severity::Low);
    }

    #[test]
    fn test_severity_is_monotone() {
        let rank = |s: Severity| Severity::ALL.iter().position(|t| *t == s).unwrap();
        let mut previous = rank(severity(0.0));
        for tenth in 0..=250 {
            let current = rank(severity(f64::from(tenth) / 10.0));
            assert!(current <= previous);
            previous = current;
        }
    }
}
