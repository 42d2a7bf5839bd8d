//! Facade over the risk register layers.
//!
//! Front ends depend on this crate alone and reach the scoring model and the
//! application shell through the re-exported modules.

pub use application;
pub use domain;

pub use application::{RegisterShell, ShellError};
pub use domain::{AssessmentContext, RiskEntry, RiskId, Severity};
