use miette::{Diagnostic, NamedSource, SourceOffset, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid settings file: {message}")]
#[diagnostic(
    code(risk_register::config::syntax),
    help("Fix the highlighted value, or delete the file to fall back to defaults.")
)]
pub struct ConfigSyntaxError {
    pub message: String,

    #[source_code]
    pub src: NamedSource<String>,

    #[label("{message}")]
    pub span: SourceSpan,
}

impl ConfigSyntaxError {
    pub fn from_toml(file_path: &str, file_content: &str, err: &toml::de::Error) -> Self {
        let span = match err.span() {
            Some(range) => SourceSpan::new(range.start.into(), range.len()),
            None => SourceSpan::new(SourceOffset::from(0), 0_usize),
        };

        Self {
            message: err.message().to_string(),
            src: NamedSource::new(file_path, file_content.to_string()),
            span,
        }
    }
}

pub fn report_config_error(err: ConfigSyntaxError) {
    eprintln!("{:?}", miette::Report::new(err));
}
