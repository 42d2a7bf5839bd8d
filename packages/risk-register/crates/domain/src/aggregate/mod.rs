//! Read-only projections over the register.

pub mod charts;
pub mod heatmap;
pub mod posture;

pub use charts::{comparison_series, severity_distribution, ComparisonPoint, SeverityBar};
pub use heatmap::{HeatCell, HeatMap};
pub use posture::{PostureLabel, PostureSummary};
