use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    Input(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Operation cancelled by user")]
    Cancelled,
}

impl CliError {
    /// Prompts report Esc / Ctrl-C as `Interrupted`; everything else is a
    /// real terminal failure.
    pub fn from_prompt(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::Interrupted {
            CliError::Cancelled
        } else {
            CliError::Io(err)
        }
    }

    /// Returns a themed, actionable suggestion for the error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CliError::Config(_) => Some(
                "Check ~/.risk-register/config.toml for syntax errors, or pass --config <path>."
                    .to_string(),
            ),
            CliError::Input(_) => {
                Some("Run `risk-register score --help` for accepted values.".to_string())
            }
            _ => None,
        }
    }

    pub fn render(&self) {
        eprintln!("\n{} {}", console::style("Error:").red().bold(), self);
        if let Some(s) = self.suggestion() {
            eprintln!("{} {}", console::style("  help:").dim(), s);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupted_prompt_is_cancel() {
        let err = std::io::Error::new(std::io::ErrorKind::Interrupted, "ctrl-c");
        assert!(matches!(CliError::from_prompt(err), CliError::Cancelled));

        let err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        assert!(matches!(CliError::from_prompt(err), CliError::Io(_)));
    }

    #[test]
    fn test_suggestions() {
        assert!(CliError::Config("bad".into()).suggestion().is_some());
        assert!(CliError::Cancelled.suggestion().is_none());
    }
}
