use anyhow::Context;
use crate::error::CliError;
use crate::ui::Theme;
use clap::Parser;
use risk_register::domain::{inherent_risk, residual_risk, ControlEffectiveness, RiskScores, Severity};
use serde::Serialize;

#[derive(Parser, Debug, Clone)]
pub struct ScoreCommand {
    /// Likelihood rating, 1 (Rare) to 5 (Almost Certain)
    #[arg(long, short, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub likelihood: u8,

    /// Impact rating, 1 (Negligible) to 5 (Severe)
    #[arg(long, short, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub impact: u8,

    /// Control effectiveness: effective, partially-effective or ineffective
    #[arg(long, short, default_value = "partially-effective")]
    pub effectiveness: String,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub likelihood: u8,
    pub impact: u8,
    pub control_effectiveness: ControlEffectiveness,
    pub inherent_risk: u32,
    pub residual_risk: f64,
    pub severity: Severity,
}

impl ScoreCommand {
    pub fn report(&self) -> Result<ScoreReport, CliError> {
        let effectiveness = self
            .effectiveness
            .parse::<ControlEffectiveness>()
            .map_err(|e| CliError::Input(e.to_string()))?;
        let inherent = inherent_risk(self.likelihood, self.impact);
        let residual = residual_risk(inherent, effectiveness);
        let scores = RiskScores { inherent, residual };
        tracing::debug!(inherent, residual, "scored");

        Ok(ScoreReport {
            likelihood: self.likelihood,
            impact: self.impact,
            control_effectiveness: effectiveness,
            inherent_risk: inherent,
            residual_risk: residual,
            // Badge follows the inherent score, like the register table.
            severity: scores.severity(),
        })
    }

    pub fn execute(self) -> anyhow::Result<()> {
        let report = self.report()?;
        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&report).context("Failed to encode score as JSON")?
            );
            return Ok(());
        }

        println!(
            "{} {} × {} = {}",
            Theme::muted("Inherent"),
            report.likelihood,
            report.impact,
            Theme::primary(report.inherent_risk)
        );
        println!(
            "{} {} × {} = {}",
            Theme::muted("Residual"),
            report.inherent_risk,
            report.control_effectiveness.residual_factor(),
            Theme::accent(format!("{:.1}", report.residual_risk))
        );
        println!(
            "{} {}",
            Theme::muted("Severity"),
            Theme::severity(report.severity, report.severity)
        );
        Ok(())
    }
}
