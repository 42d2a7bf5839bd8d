pub mod aggregate;
pub mod editor;
pub mod entities;
pub mod ports;
pub mod register;
pub mod scoring;

pub use aggregate::{HeatMap, PostureLabel, PostureSummary};
pub use editor::{EditorMode, RiskEditor, ValidationReport};
pub use entities::assessment::AssessmentContext;
pub use entities::rating::Rating;
pub use entities::risk::{
    ControlEffectiveness, ResponseType, RiskCategory, RiskDetails, RiskEntry, RiskId, RiskScores,
    RiskStatus, Treatment,
};
pub use ports::id_source::{IdSource, SequentialIdSource, UuidIdSource};
pub use register::{RegisterRow, RegisterStore, SortDirection, SortKey, SortState};
pub use scoring::{inherent_risk, residual_risk, severity, Severity};
