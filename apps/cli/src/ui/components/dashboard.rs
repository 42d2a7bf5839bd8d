use super::register_table::{severity_color, styled_table};
use crate::ui::{Icon, Theme};
use comfy_table::{Attribute, Cell, CellAlignment};
use risk_register::application::Dashboard;
use risk_register::domain::aggregate::{ComparisonPoint, SeverityBar};
use risk_register::domain::{HeatMap, PostureSummary, Rating};

const BAR_GLYPH: &str = "█";
const CHART_NO_DATA: &str = "No data yet";

/// Overall posture card, or the prompt shown before any risk exists.
pub fn render_posture(posture: Option<&PostureSummary>) -> String {
    let Some(posture) = posture else {
        return Theme::muted("Add risks to see the overall posture");
    };

    let stats = [
        ("Total Risks", posture.total.to_string()),
        ("Critical", posture.critical_count.to_string()),
        ("High", posture.high_count.to_string()),
        ("Open", posture.open_count.to_string()),
        ("Mitigated", posture.mitigated_count.to_string()),
        ("Avg Residual", format!("{:.1}", posture.average_residual)),
    ];
    let stats_line = stats
        .iter()
        .map(|(label, value)| format!("{} {}", Theme::bold(value), Theme::muted(label)))
        .collect::<Vec<_>>()
        .join("   ");

    format!(
        "{} {} {}\n{}",
        Icon::for_posture(posture.label),
        Theme::muted("OVERALL POSTURE"),
        Theme::posture(posture.label),
        stats_line
    )
}

/// 5×5 grid, likelihood rows from 5 down to 1, impact columns 1 to 5.
pub fn render_heat_map(map: &HeatMap) -> String {
    let mut table = styled_table();

    let mut header = vec![Cell::new("Likelihood ↓ / Impact →")];
    header.extend(
        Rating::ALL
            .iter()
            .map(|impact| Cell::new(format!("{}\n{}", impact, impact.impact_label())))
            .map(|cell| cell.set_alignment(CellAlignment::Center)),
    );
    table.set_header(header);

    for row in map.rows() {
        let Some(first) = row.first() else { continue };
        let likelihood = first.likelihood;
        let mut cells = vec![Cell::new(format!(
            "{} - {}",
            likelihood,
            likelihood.likelihood_label()
        ))];
        for cell in &row {
            let text = match cell.count {
                0 => String::new(),
                1 => "1 risk".to_string(),
                n => format!("{n} risks"),
            };
            cells.push(
                Cell::new(text)
                    .bg(severity_color(cell.severity))
                    .add_attribute(Attribute::Bold)
                    .set_alignment(CellAlignment::Center),
            );
        }
        table.add_row(cells);
    }

    format!("{} {}\n{}", Icon::Grid, Theme::bold("Risk Heat Map"), table)
}

fn bar(width: usize) -> String {
    BAR_GLYPH.repeat(width)
}

/// Horizontal bar per severity tier.
pub fn render_severity_chart(bars: &[SeverityBar], has_data: bool) -> String {
    let title = format!("{} {}", Icon::Chart, Theme::bold("Risks by Severity"));
    if !has_data {
        return format!("{title}\n  {}", Theme::muted(CHART_NO_DATA));
    }

    let lines = bars
        .iter()
        .map(|entry| {
            format!(
                "  {:<8} │{} {}",
                entry.severity,
                Theme::severity(entry.severity, bar(entry.count * 2)),
                entry.count
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("{title}\n{lines}")
}

/// Paired inherent/residual bars per risk, one cell per score point.
pub fn render_comparison_chart(points: &[ComparisonPoint]) -> String {
    let title = format!("{} {}", Icon::Chart, Theme::bold("Inherent vs Residual Risk"));
    if points.is_empty() {
        return format!("{title}\n  {}", Theme::muted(CHART_NO_DATA));
    }

    let label_width = points
        .iter()
        .map(|p| p.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(points.len() * 2);
    for point in points {
        let residual_width = point.residual.round() as usize;
        lines.push(format!(
            "  {:<width$} │{} {}",
            point.label,
            Theme::primary(bar(point.inherent as usize)),
            point.inherent,
            width = label_width
        ));
        lines.push(format!(
            "  {:<width$} │{} {:.1}",
            "",
            Theme::accent(bar(residual_width)),
            point.residual,
            width = label_width
        ));
    }
    format!(
        "{title}  {} {}\n{}",
        Theme::primary("■ Inherent"),
        Theme::accent("■ Residual"),
        lines.join("\n")
    )
}

/// Heat map followed by both summary charts.
pub fn render(dashboard: &Dashboard) -> String {
    [
        render_heat_map(&dashboard.heat_map),
        render_severity_chart(&dashboard.severity, !dashboard.is_empty()),
        render_comparison_chart(&dashboard.comparison),
    ]
    .join("\n\n")
}
