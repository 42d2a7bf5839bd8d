use anyhow::Context;
use crate::error::CliError;
use crate::services::config::Settings;
use crate::ui::{
    self,
    components::{dashboard, register_table},
};
use clap::Parser;
use risk_register::domain::{
    AssessmentContext, ControlEffectiveness, Rating, ResponseType, RiskCategory, RiskDetails,
    RiskStatus, SequentialIdSource, Treatment,
};
use risk_register::RegisterShell;
use serde_json::json;

#[derive(Parser, Debug, Clone, Default)]
pub struct DemoCommand {
    /// Print context, risks and dashboard as JSON
    #[arg(long)]
    pub json: bool,
}

struct Sample {
    title: &'static str,
    category: RiskCategory,
    likelihood: u8,
    impact: u8,
    effectiveness: ControlEffectiveness,
    status: RiskStatus,
    response: ResponseType,
    owner: &'static str,
    controls: &'static str,
    actions: &'static str,
}

const SAMPLES: [Sample; 5] = [
    Sample {
        title: "Ransomware encrypts shared file servers",
        category: RiskCategory::Security,
        likelihood: 4,
        impact: 5,
        effectiveness: ControlEffectiveness::PartiallyEffective,
        status: RiskStatus::Open,
        response: ResponseType::Mitigate,
        owner: "IT Security",
        controls: "EDR on endpoints, nightly backups",
        actions: "Immutable offsite backups and quarterly restore drills",
    },
    Sample {
        title: "Customer records kept past retention period",
        category: RiskCategory::Privacy,
        likelihood: 3,
        impact: 4,
        effectiveness: ControlEffectiveness::Ineffective,
        status: RiskStatus::Open,
        response: ResponseType::Mitigate,
        owner: "Data Protection Officer",
        controls: "Manual annual review",
        actions: "Automated purge job with audit log",
    },
    Sample {
        title: "Single approver for vendor payments",
        category: RiskCategory::Financial,
        likelihood: 3,
        impact: 3,
        effectiveness: ControlEffectiveness::PartiallyEffective,
        status: RiskStatus::Mitigated,
        response: ResponseType::Mitigate,
        owner: "Finance Controller",
        controls: "Monthly reconciliation",
        actions: "Dual approval above threshold",
    },
    Sample {
        title: "Missed SOC 2 evidence collection",
        category: RiskCategory::Compliance,
        likelihood: 2,
        impact: 4,
        effectiveness: ControlEffectiveness::Effective,
        status: RiskStatus::Accepted,
        response: ResponseType::Accept,
        owner: "GRC Lead",
        controls: "Evidence calendar with reminders",
        actions: "",
    },
    Sample {
        title: "Primary cloud region outage",
        category: RiskCategory::Operational,
        likelihood: 2,
        impact: 5,
        effectiveness: ControlEffectiveness::Effective,
        status: RiskStatus::Transferred,
        response: ResponseType::Transfer,
        owner: "Platform Engineering",
        controls: "Multi-AZ deployment, provider SLA",
        actions: "Business interruption insurance",
    },
];

fn rating(value: u8) -> Result<Rating, CliError> {
    Rating::new(value).map_err(|e| CliError::Input(e.to_string()))
}

/// A session pre-filled with the sample register.
pub fn sample_shell() -> Result<RegisterShell<SequentialIdSource>, CliError> {
    let mut shell = RegisterShell::with_id_source(SequentialIdSource::new("risk"));
    let date = shell.context().date.clone();
    shell.update_context(AssessmentContext {
        name: "Annual Enterprise Risk Review".to_string(),
        description: "Sample register covering security, privacy and operations".to_string(),
        business_unit: "Corporate IT".to_string(),
        owner: "Chief Risk Officer".to_string(),
        date,
    });

    for sample in &SAMPLES {
        let details = RiskDetails {
            title: sample.title.to_string(),
            existing_controls: sample.controls.to_string(),
            control_effectiveness: sample.effectiveness,
            likelihood: rating(sample.likelihood)?,
            impact: rating(sample.impact)?,
            category: sample.category,
            risk_owner: sample.owner.to_string(),
            status: sample.status,
            treatment: Treatment {
                response_type: sample.response,
                proposed_actions: sample.actions.to_string(),
                ..Treatment::default()
            },
            ..RiskDetails::default()
        };
        *shell.open_create().draft_mut() = details;
        shell
            .submit()
            .map_err(|e| CliError::Input(e.to_string()))?;
    }
    Ok(shell)
}

impl DemoCommand {
    pub fn execute(self, settings: &Settings) -> anyhow::Result<()> {
        let shell = sample_shell()
            .context("Failed to build the sample register")?
            .with_sort(settings.initial_sort());
        let summary = shell.dashboard();

        if self.json {
            let payload = json!({
                "context": shell.context(),
                "risks": shell.risks(),
                "dashboard": summary,
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&payload).context("Failed to encode register as JSON")?
            );
            return Ok(());
        }

        ui::block(register_table::render_context(shell.context()));
        ui::block(register_table::render(&shell.register_view(), &shell.sort()));
        ui::block(dashboard::render_posture(summary.posture.as_ref()));
        ui::block(dashboard::render(&summary));
        Ok(())
    }
}
