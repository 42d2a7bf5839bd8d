use serde::{Deserialize, Serialize};

/// Free-form description of the assessment the register belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentContext {
    pub name: String,
    pub description: String,
    pub business_unit: String,
    pub owner: String,
    /// Assessment date (`YYYY-MM-DD`).
    pub date: String,
}

impl AssessmentContext {
    /// A blank context dated today (local time).
    pub fn dated_today() -> Self {
        Self {
            date: chrono::Local::now().date_naive().format("%Y-%m-%d").to_string(),
            ..Self::default()
        }
    }

    /// True when nothing but the date has been filled in.
    pub fn is_blank(&self) -> bool {
        self.name.is_empty()
            && self.description.is_empty()
            && self.business_unit.is_empty()
            && self.owner.is_empty()
    }
}
