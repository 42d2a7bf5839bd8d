pub mod assessment;
pub mod rating;
pub mod risk;

pub use assessment::AssessmentContext;
pub use rating::Rating;
pub use risk::{RiskDetails, RiskEntry, RiskId};
