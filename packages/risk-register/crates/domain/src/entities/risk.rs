use crate::entities::rating::Rating;
use crate::scoring::{inherent_risk, residual_risk, severity, Severity};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Opaque identifier of a risk entry. Assigned once at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskId(String);

impl RiskId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RiskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct UnknownChoice {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

/// Matches user input against the display names of a closed set, ignoring
/// case, spaces, hyphens and underscores.
fn parse_choice<T: Copy>(
    kind: &'static str,
    input: &str,
    all: &[T],
    name: fn(&T) -> &'static str,
) -> Result<T, UnknownChoice> {
    let normalize = |s: &str| {
        s.chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect::<String>()
    };
    let wanted = normalize(input);
    all.iter()
        .copied()
        .find(|candidate| normalize(name(candidate)) == wanted)
        .ok_or_else(|| UnknownChoice {
            kind,
            value: input.to_string(),
            expected: all.iter().map(name).collect::<Vec<_>>().join(", "),
        })
}

/// How well the existing controls reduce exposure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ControlEffectiveness {
    Effective,
    #[default]
    #[serde(rename = "Partially Effective")]
    PartiallyEffective,
    Ineffective,
}

impl ControlEffectiveness {
    pub const ALL: [ControlEffectiveness; 3] = [
        ControlEffectiveness::Effective,
        ControlEffectiveness::PartiallyEffective,
        ControlEffectiveness::Ineffective,
    ];

    /// Share of the inherent score that survives the controls.
    pub fn residual_factor(&self) -> f64 {
        match self {
            ControlEffectiveness::Effective => 0.3,
            ControlEffectiveness::PartiallyEffective => 0.6,
            ControlEffectiveness::Ineffective => 0.9,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ControlEffectiveness::Effective => "Effective",
            ControlEffectiveness::PartiallyEffective => "Partially Effective",
            ControlEffectiveness::Ineffective => "Ineffective",
        }
    }
}

impl fmt::Display for ControlEffectiveness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ControlEffectiveness {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice("control effectiveness", s, &Self::ALL, Self::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RiskCategory {
    #[default]
    Security,
    Compliance,
    Operational,
    Privacy,
    Financial,
}

impl RiskCategory {
    pub const ALL: [RiskCategory; 5] = [
        RiskCategory::Security,
        RiskCategory::Compliance,
        RiskCategory::Operational,
        RiskCategory::Privacy,
        RiskCategory::Financial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Security => "Security",
            RiskCategory::Compliance => "Compliance",
            RiskCategory::Operational => "Operational",
            RiskCategory::Privacy => "Privacy",
            RiskCategory::Financial => "Financial",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RiskCategory {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice("category", s, &Self::ALL, Self::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RiskStatus {
    #[default]
    Open,
    Accepted,
    Mitigated,
    Transferred,
}

impl RiskStatus {
    pub const ALL: [RiskStatus; 4] = [
        RiskStatus::Open,
        RiskStatus::Accepted,
        RiskStatus::Mitigated,
        RiskStatus::Transferred,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskStatus::Open => "Open",
            RiskStatus::Accepted => "Accepted",
            RiskStatus::Mitigated => "Mitigated",
            RiskStatus::Transferred => "Transferred",
        }
    }
}

impl fmt::Display for RiskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RiskStatus {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice("status", s, &Self::ALL, Self::as_str)
    }
}

/// Planned response to a risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ResponseType {
    #[default]
    Mitigate,
    Accept,
    Transfer,
    Avoid,
}

impl ResponseType {
    pub const ALL: [ResponseType; 4] = [
        ResponseType::Mitigate,
        ResponseType::Accept,
        ResponseType::Transfer,
        ResponseType::Avoid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseType::Mitigate => "Mitigate",
            ResponseType::Accept => "Accept",
            ResponseType::Transfer => "Transfer",
            ResponseType::Avoid => "Avoid",
        }
    }
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResponseType {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice("response type", s, &Self::ALL, Self::as_str)
    }
}

/// Treatment plan attached to a risk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Treatment {
    pub response_type: ResponseType,
    pub proposed_actions: String,
    /// Calendar date (`YYYY-MM-DD`), empty when not planned yet.
    pub target_date: String,
    pub notes: String,
}

/// Every user-editable field of a risk. This is the editor's draft and the
/// payload of a stored [`RiskEntry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RiskDetails {
    pub title: String,
    pub description: String,
    pub asset_or_process: String,
    pub threat_source: String,
    pub threat_event: String,
    pub existing_controls: String,
    pub control_effectiveness: ControlEffectiveness,
    pub likelihood: Rating,
    pub impact: Rating,
    pub category: RiskCategory,
    pub risk_owner: String,
    pub status: RiskStatus,
    pub treatment: Treatment,
}

impl RiskDetails {
    /// Scores derived from the current ratings.
    pub fn scores(&self) -> RiskScores {
        let inherent = inherent_risk(self.likelihood.value(), self.impact.value());
        RiskScores {
            inherent,
            residual: residual_risk(inherent, self.control_effectiveness),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskScores {
    pub inherent: u32,
    pub residual: f64,
}

impl RiskScores {
    /// Severity of the inherent score.
    pub fn severity(&self) -> Severity {
        severity(f64::from(self.inherent))
    }
}

/// A finalized register entry.
///
/// Scores can only be set by [`RiskEntry::finalize`], so a stored entry never
/// disagrees with its own ratings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskEntry {
    id: RiskId,
    #[serde(flatten)]
    details: RiskDetails,
    inherent_risk_score: u32,
    residual_risk_score: f64,
}

impl RiskEntry {
    pub fn finalize(id: RiskId, details: RiskDetails) -> Self {
        let scores = details.scores();
        Self {
            id,
            details,
            inherent_risk_score: scores.inherent,
            residual_risk_score: scores.residual,
        }
    }

    pub fn id(&self) -> &RiskId {
        &self.id
    }

    pub fn details(&self) -> &RiskDetails {
        &self.details
    }

    pub fn title(&self) -> &str {
        &self.details.title
    }

    pub fn inherent_risk_score(&self) -> u32 {
        self.inherent_risk_score
    }

    pub fn residual_risk_score(&self) -> f64 {
        self.residual_risk_score
    }

    /// Severity classification, always taken from the inherent score.
    pub fn severity(&self) -> Severity {
        severity(f64::from(self.inherent_risk_score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_finalize_derives_scores() {
        let details = RiskDetails {
            title: "Unauthorized Data Access".to_string(),
            likelihood: Rating::new(4).unwrap(),
            impact: Rating::new(5).unwrap(),
            ..RiskDetails::default()
        };
        let entry = RiskEntry::finalize(RiskId::new("r-1"), details);

        assert_eq!(entry.inherent_risk_score(), 20);
        assert_eq!(entry.residual_risk_score(), 12.0);
        assert_eq!(entry.severity(), Severity::Critical);
    }

    #[test]
    fn test_default_details() {
        let details = RiskDetails::default();
        assert_eq!(
            details.control_effectiveness,
            ControlEffectiveness::PartiallyEffective
        );
        assert_eq!(details.likelihood.value(), 3);
        assert_eq!(details.impact.value(), 3);
        assert_eq!(details.category, RiskCategory::Security);
        assert_eq!(details.status, RiskStatus::Open);
        assert_eq!(details.treatment.response_type, ResponseType::Mitigate);
        assert_eq!(details.treatment.target_date, "");
        assert_eq!(details.title, "");
    }

    #[test]
    fn test_parse_choices_leniently() {
        assert_eq!(
            "partially-effective".parse::<ControlEffectiveness>().unwrap(),
            ControlEffectiveness::PartiallyEffective
        );
        assert_eq!(
            "Partially Effective".parse::<ControlEffectiveness>().unwrap(),
            ControlEffectiveness::PartiallyEffective
        );
        assert_eq!("privacy".parse::<RiskCategory>().unwrap(), RiskCategory::Privacy);
        assert_eq!("MITIGATED".parse::<RiskStatus>().unwrap(), RiskStatus::Mitigated);

        let err = "sometimes".parse::<ControlEffectiveness>().unwrap_err();
        assert_eq!(err.kind, "control effectiveness");
        assert!(err.to_string().contains("Effective, Partially Effective, Ineffective"));
    }

    #[test]
    fn test_entry_serializes_flat_camel_case() {
        let entry = RiskEntry::finalize(RiskId::new("r-9"), RiskDetails::default());
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["id"], "r-9");
        assert_eq!(json["controlEffectiveness"], "Partially Effective");
        assert_eq!(json["inherentRiskScore"], 9);
        assert_eq!(json["residualRiskScore"], 5.4);
        assert_eq!(json["treatment"]["responseType"], "Mitigate");
    }
}
