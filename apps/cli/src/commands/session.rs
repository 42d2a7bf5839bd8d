use anyhow::Context;
use crate::error::CliError;
use crate::services::config::Settings;
use crate::ui::{
    self,
    beauty,
    components::{dashboard, prompt, register_table},
    Icon, Theme,
};
use clap::Parser;
use risk_register::domain::{
    ControlEffectiveness, EditorMode, Rating, ResponseType, RiskCategory, RiskEditor, RiskId,
    RiskStatus, SortKey,
};
use risk_register::{RegisterShell, ShellError};

#[derive(Parser, Debug, Clone, Default)]
pub struct SessionCommand {
    /// Skip the start-up banner
    #[arg(long)]
    pub no_banner: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Context,
    Add,
    Edit,
    Delete,
    Register,
    Sort,
    Dashboard,
    Quit,
}

impl SessionCommand {
    pub fn execute(self, settings: &Settings) -> anyhow::Result<()> {
        if settings.display.banner && !self.no_banner {
            beauty::print_header(Theme::color_enabled()).context("Failed to draw banner")?;
        }
        cliclack::intro("Risk Register")?;
        cliclack::log::info("Risks live only for this session; nothing is written to disk.")?;

        let mut shell = RegisterShell::new().with_sort(settings.initial_sort());

        loop {
            let action = match main_menu(&shell) {
                Ok(action) => action,
                Err(CliError::Cancelled) => MenuAction::Quit,
                Err(other) => return Err(other.into()),
            };
            if action == MenuAction::Quit {
                break;
            }

            match dispatch(&mut shell, action) {
                Ok(()) => {}
                // Esc inside a flow drops back to the menu.
                Err(CliError::Cancelled) => {
                    shell.cancel();
                    ui::warn("Cancelled");
                }
                Err(other) => return Err(other).context("Session aborted"),
            }
        }

        let total = shell.risks().len();
        cliclack::outro(format!(
            "Session closed with {} risk{} assessed.",
            total,
            if total == 1 { "" } else { "s" }
        ))?;
        Ok(())
    }
}

fn main_menu(shell: &RegisterShell) -> Result<MenuAction, CliError> {
    let total = shell.risks().len();
    let register_hint = format!("{total} entered");
    let sort = shell.sort();
    let sort_hint = format!("{} {}", sort.key.label(), sort.direction.arrow());

    let mut menu = cliclack::select("What next?").item(
        MenuAction::Context,
        format!("{} Assessment context", Icon::Shield),
        shell.context().name.as_str(),
    );
    menu = menu.item(MenuAction::Add, format!("{} Add a risk", Icon::Plus), "");
    if total > 0 {
        menu = menu
            .item(MenuAction::Edit, format!("{} Edit a risk", Icon::Pencil), "")
            .item(MenuAction::Delete, format!("{} Delete a risk", Icon::Trash), "");
    }
    menu = menu
        .item(
            MenuAction::Register,
            format!("{} Show register", Icon::List),
            register_hint.as_str(),
        )
        .item(
            MenuAction::Sort,
            format!("{} Sort register", Icon::List),
            sort_hint.as_str(),
        )
        .item(MenuAction::Dashboard, format!("{} Dashboard", Icon::Chart), "")
        .item(MenuAction::Quit, "Quit", "");

    menu.interact().map_err(CliError::from_prompt)
}

fn dispatch(shell: &mut RegisterShell, action: MenuAction) -> Result<(), CliError> {
    match action {
        MenuAction::Context => edit_context(shell),
        MenuAction::Add => {
            shell.open_create();
            run_form(shell)
        }
        MenuAction::Edit => {
            let Some(id) = pick_risk(shell, "Which risk do you want to edit?")? else {
                return Ok(());
            };
            shell
                .open_edit(&id)
                .map_err(|e| CliError::Input(e.to_string()))?;
            run_form(shell)
        }
        MenuAction::Delete => delete_risk(shell),
        MenuAction::Register => {
            show_register(shell);
            Ok(())
        }
        MenuAction::Sort => {
            let sort = shell.sort();
            let key = prompt::choice("Sort the register by", &SortKey::ALL, sort.key)?;
            shell.select_sort(key);
            show_register(shell);
            Ok(())
        }
        MenuAction::Dashboard => {
            let summary = shell.dashboard();
            ui::block(dashboard::render_posture(summary.posture.as_ref()));
            ui::block(dashboard::render(&summary));
            Ok(())
        }
        MenuAction::Quit => Ok(()),
    }
}

fn show_register(shell: &RegisterShell) {
    ui::block(register_table::render(&shell.register_view(), &shell.sort()));
}

fn edit_context(shell: &mut RegisterShell) -> Result<(), CliError> {
    let mut context = shell.context().clone();
    context.name = prompt::text("Assessment Name", &context.name, "Q3 Cloud Platform Review")?;
    context.description = prompt::text(
        "Description",
        &context.description,
        "Scope and objectives of this assessment",
    )?;
    context.business_unit = prompt::text(
        "Business Unit / System",
        &context.business_unit,
        "Payments Platform",
    )?;
    context.owner = prompt::text("Assessment Owner", &context.owner, "Jane Doe, CISO")?;
    context.date = prompt::date("Assessment Date", &context.date, true)?;

    shell.update_context(context);
    ui::block(register_table::render_context(shell.context()));
    Ok(())
}

/// Risk picker over the register in its current sort order.
fn pick_risk(shell: &RegisterShell, prompt_msg: &str) -> Result<Option<RiskId>, CliError> {
    let rows = shell.register_view();
    if rows.is_empty() {
        ui::info("No risks added yet. Add your first risk to get started.");
        return Ok(None);
    }

    let mut select = cliclack::select(prompt_msg.to_string());
    for row in &rows {
        let hint = format!(
            "{} · inherent {} · residual {:.1}",
            row.severity,
            row.entry.inherent_risk_score(),
            row.entry.residual_risk_score()
        );
        select = select.item(row.entry.id().clone(), row.entry.title(), hint);
    }
    select.interact().map(Some).map_err(CliError::from_prompt)
}

fn delete_risk(shell: &mut RegisterShell) -> Result<(), CliError> {
    let Some(id) = pick_risk(shell, "Which risk do you want to delete?")? else {
        return Ok(());
    };
    let title = shell
        .risk(&id)
        .map(|entry| entry.title().to_string())
        .unwrap_or_default();

    if !prompt::confirm(&format!("Delete '{title}'? This cannot be undone."), false)? {
        return Ok(());
    }
    if shell.delete(&id).is_some() {
        ui::success(format!("Deleted '{title}'"));
    }
    Ok(())
}

/// Walks the open draft through every section, then submits. A blocked
/// submit reports the flagged fields and goes round again with the draft
/// kept.
fn run_form(shell: &mut RegisterShell) -> Result<(), CliError> {
    loop {
        let editor = shell
            .editor_mut()
            .ok_or_else(|| CliError::Input(ShellError::NoActiveEditor.to_string()))?;

        let heading = match editor.mode() {
            EditorMode::Create => "New risk".to_string(),
            EditorMode::Edit(_) => format!("Editing '{}'", editor.draft().title),
        };
        cliclack::note(heading, "Fields marked * are required. Esc returns to the menu.")?;
        fill_draft(editor)?;

        if !prompt::confirm("Save this risk?", true)? {
            shell.cancel();
            ui::info("Draft discarded");
            return Ok(());
        }

        match shell.submit() {
            Ok(entry) => {
                ui::success(format!(
                    "Saved '{}' (inherent {}, residual {:.1}, {})",
                    entry.title(),
                    entry.inherent_risk_score(),
                    entry.residual_risk_score(),
                    entry.severity()
                ));
                return Ok(());
            }
            Err(ShellError::SubmitBlocked(report)) => {
                ui::error(format!("Cannot save yet\n{report}"));
            }
            Err(other) => return Err(CliError::Input(other.to_string())),
        }
    }
}

fn fill_draft(editor: &mut RiskEditor) -> Result<(), CliError> {
    cliclack::log::step("Risk Identification")?;
    let draft = editor.draft_mut();
    draft.title = prompt::text("Risk Title *", &draft.title, "Unauthorized access to customer data")?;
    draft.description = prompt::text("Description", &draft.description, "What could happen")?;
    draft.asset_or_process = prompt::text(
        "Asset / Process",
        &draft.asset_or_process,
        "Customer database",
    )?;
    draft.threat_source = prompt::text("Threat Source", &draft.threat_source, "External attacker")?;
    draft.threat_event = prompt::text("Threat Event", &draft.threat_event, "Credential stuffing")?;

    cliclack::log::step("Existing Controls")?;
    draft.existing_controls = prompt::text(
        "Existing Controls",
        &draft.existing_controls,
        "MFA, rate limiting",
    )?;
    draft.control_effectiveness = prompt::choice(
        "Control Effectiveness",
        &ControlEffectiveness::ALL,
        draft.control_effectiveness,
    )?;

    cliclack::log::step("Risk Assessment")?;
    draft.likelihood = prompt::rating("Likelihood", draft.likelihood, Rating::likelihood_label)?;
    draft.impact = prompt::rating("Impact", draft.impact, Rating::impact_label)?;

    let scores = editor.live_scores();
    cliclack::log::info(format!(
        "Inherent {} · Residual {} · {}",
        Theme::primary(scores.inherent),
        Theme::accent(format!("{:.1}", scores.residual)),
        Theme::severity(scores.severity(), scores.severity())
    ))?;

    cliclack::log::step("Classification")?;
    let draft = editor.draft_mut();
    draft.category = prompt::choice("Category", &RiskCategory::ALL, draft.category)?;
    draft.risk_owner = prompt::text("Risk Owner", &draft.risk_owner, "Head of Engineering")?;
    draft.status = prompt::choice("Status", &RiskStatus::ALL, draft.status)?;

    cliclack::log::step("Treatment Plan")?;
    let treatment = &mut draft.treatment;
    treatment.response_type = prompt::choice(
        "Response Type",
        &ResponseType::ALL,
        treatment.response_type,
    )?;
    treatment.proposed_actions = prompt::text(
        "Proposed Actions",
        &treatment.proposed_actions,
        "Enforce hardware keys for admins",
    )?;
    treatment.target_date = prompt::date("Target Date", &treatment.target_date, true)?;
    treatment.notes = prompt::text("Notes", &treatment.notes, "")?;
    Ok(())
}
