use domain::{RiskId, ValidationReport};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShellError {
    #[error("No risk is being edited")]
    NoActiveEditor,

    #[error("Risk not found: {0}")]
    UnknownRisk(RiskId),

    #[error("Cannot save risk: {0}")]
    SubmitBlocked(ValidationReport),
}
