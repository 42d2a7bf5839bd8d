pub mod session;
pub mod validation;

pub use session::{EditorMode, RiskEditor};
pub use validation::{FieldIssue, ValidationReport};
