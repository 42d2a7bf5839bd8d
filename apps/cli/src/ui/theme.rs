use owo_colors::OwoColorize;
use risk_register::domain::{PostureLabel, Severity};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

static COLOR_ENABLED: AtomicBool = AtomicBool::new(true);

/// The central theme definition for the risk register CLI.
/// Defines the official color palette and iconography.
pub struct Theme;

impl Theme {
    /// Turns styling on or off for the whole process (`--no-color`).
    pub fn set_color(enabled: bool) {
        COLOR_ENABLED.store(enabled, Ordering::Relaxed);
        console::set_colors_enabled(enabled);
        console::set_colors_enabled_stderr(enabled);
    }

    pub fn color_enabled() -> bool {
        COLOR_ENABLED.load(Ordering::Relaxed)
    }

    fn paint(text: impl fmt::Display, styled: impl FnOnce(String) -> String) -> String {
        let plain = text.to_string();
        if Self::color_enabled() {
            styled(plain)
        } else {
            plain
        }
    }

    /// Primary color (Navy/Blue) - headings, structure.
    pub fn primary(text: impl fmt::Display) -> String {
        Self::paint(text, |t| t.blue().bold().to_string())
    }

    pub fn bold(text: impl fmt::Display) -> String {
        Self::paint(text, |t| t.bold().to_string())
    }

    /// Accent color (Teal) - residual figures, secondary highlights.
    pub fn accent(text: impl fmt::Display) -> String {
        Self::paint(text, |t| t.cyan().bold().to_string())
    }

    pub fn success(text: impl fmt::Display) -> String {
        Self::paint(text, |t| t.green().bold().to_string())
    }

    pub fn warning(text: impl fmt::Display) -> String {
        Self::paint(text, |t| t.yellow().bold().to_string())
    }

    pub fn error(text: impl fmt::Display) -> String {
        Self::paint(text, |t| t.red().bold().to_string())
    }

    /// Muted/Dimmed - hints, empty states.
    pub fn muted(text: impl fmt::Display) -> String {
        Self::paint(text, |t| t.dimmed().to_string())
    }

    /// Severity badge colors: red, orange, amber, green.
    pub fn severity(severity: Severity, text: impl fmt::Display) -> String {
        Self::paint(text, |t| match severity {
            Severity::Critical => t.red().bold().to_string(),
            Severity::High => t.truecolor(245, 121, 25).bold().to_string(),
            Severity::Medium => t.yellow().bold().to_string(),
            Severity::Low => t.green().bold().to_string(),
        })
    }

    pub fn posture(label: PostureLabel) -> String {
        let tier = match label {
            PostureLabel::Critical => Severity::Critical,
            PostureLabel::HighRisk => Severity::High,
            PostureLabel::Moderate => Severity::Medium,
            PostureLabel::LowRisk => Severity::Low,
        };
        Self::severity(tier, label)
    }
}

/// Standardized icons.
/// Usage: `println!("{} Risk Register", Icon::List)`
pub enum Icon {
    Shield,
    ShieldAlert,
    Alert,
    Check,
    List,
    Grid,
    Chart,
    Plus,
    Pencil,
    Trash,
    Info,
}

impl Icon {
    /// Posture card icon, as on the dashboard header.
    pub fn for_posture(label: PostureLabel) -> Icon {
        match label {
            PostureLabel::Critical => Icon::ShieldAlert,
            PostureLabel::HighRisk => Icon::Alert,
            PostureLabel::Moderate => Icon::Shield,
            PostureLabel::LowRisk => Icon::Check,
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = match self {
            Icon::Shield => "🛡️ ",
            Icon::ShieldAlert => "🚨",
            Icon::Alert => "⚠️ ",
            Icon::Check => "✅",
            Icon::List => "📋",
            Icon::Grid => "🔳",
            Icon::Chart => "📊",
            Icon::Plus => "➕",
            Icon::Pencil => "✏️ ",
            Icon::Trash => "🗑️ ",
            Icon::Info => "ℹ️ ",
        };
        write!(f, "{}", icon)
    }
}
