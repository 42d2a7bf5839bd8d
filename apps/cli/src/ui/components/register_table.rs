use crate::ui::{Icon, Theme};
use comfy_table::presets::UTF8_FULL;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use risk_register::domain::{
    AssessmentContext, RegisterRow, RiskStatus, Severity, SortKey, SortState,
};

const TITLE_WIDTH: usize = 32;

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Critical => Color::Red,
        Severity::High => Color::Rgb {
            r: 245,
            g: 121,
            b: 25,
        },
        Severity::Medium => Color::Yellow,
        Severity::Low => Color::Green,
    }
}

/// Base table styling shared by every view.
pub fn styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    if !Theme::color_enabled() {
        table.force_no_tty();
    }
    table
}

fn header(label: &str, key: Option<SortKey>, sort: &SortState) -> Cell {
    match key {
        Some(key) if key == sort.key => {
            Cell::new(format!("{} {}", label, sort.direction.arrow())).add_attribute(Attribute::Bold)
        }
        Some(_) => Cell::new(format!("{label} ⇅")),
        None => Cell::new(label),
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let mut cut: String = text.chars().take(width - 1).collect();
        cut.push('…');
        cut
    } else {
        text.to_string()
    }
}

/// The register table, or its empty state.
pub fn render(rows: &[RegisterRow<'_>], sort: &SortState) -> String {
    if rows.is_empty() {
        return format!(
            "{} {}",
            Icon::List,
            Theme::muted("No risks added yet. Add your first risk to get started.")
        );
    }

    let mut table = styled_table();
    table.set_header(vec![
        header("#", None, sort),
        header("Risk", Some(SortKey::Title), sort),
        header("Category", Some(SortKey::Category), sort),
        header("Likelihood", None, sort),
        header("Impact", None, sort),
        header("Inherent", Some(SortKey::Inherent), sort),
        header("Residual", Some(SortKey::Residual), sort),
        header("Severity", None, sort),
        header("Status", Some(SortKey::Status), sort),
    ]);

    for (index, row) in rows.iter().enumerate() {
        let details = row.entry.details();
        let status = Cell::new(details.status);
        let status = if details.status == RiskStatus::Open {
            status.fg(Color::Red)
        } else {
            status
        };

        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(truncate(row.entry.title(), TITLE_WIDTH)).add_attribute(Attribute::Bold),
            Cell::new(details.category),
            Cell::new(details.likelihood).set_alignment(CellAlignment::Center),
            Cell::new(details.impact).set_alignment(CellAlignment::Center),
            Cell::new(row.entry.inherent_risk_score())
                .set_alignment(CellAlignment::Center)
                .add_attribute(Attribute::Bold),
            Cell::new(format!("{:.1}", row.entry.residual_risk_score()))
                .set_alignment(CellAlignment::Center)
                .add_attribute(Attribute::Bold),
            Cell::new(row.severity)
                .fg(severity_color(row.severity))
                .add_attribute(Attribute::Bold),
            status,
        ]);
    }

    format!(
        "{} {}\n{}",
        Icon::List,
        Theme::bold(format!("Risk Register ({})", rows.len())),
        table
    )
}

/// The assessment context card.
pub fn render_context(context: &AssessmentContext) -> String {
    let mut table = styled_table();
    let placeholder = |value: &str| {
        if value.is_empty() {
            Theme::muted("—")
        } else {
            value.to_string()
        }
    };
    table.add_row(vec![Cell::new("Assessment Name"), Cell::new(placeholder(&context.name))]);
    table.add_row(vec![Cell::new("Description"), Cell::new(placeholder(&context.description))]);
    table.add_row(vec![
        Cell::new("Business Unit / System"),
        Cell::new(placeholder(&context.business_unit)),
    ]);
    table.add_row(vec![Cell::new("Assessment Owner"), Cell::new(placeholder(&context.owner))]);
    table.add_row(vec![Cell::new("Assessment Date"), Cell::new(placeholder(&context.date))]);

    format!("{} {}\n{}", Icon::Shield, Theme::bold("Assessment Context"), table)
}
