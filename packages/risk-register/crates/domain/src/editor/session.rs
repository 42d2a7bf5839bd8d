use crate::editor::validation::ValidationReport;
use crate::entities::risk::{RiskDetails, RiskEntry, RiskId, RiskScores};
use crate::ports::id_source::IdSource;
use serde::Serialize;
use tracing::debug;

/// Field name reported when the title is missing.
pub const TITLE_FIELD: &str = "title";

/// Whether the editor is creating a new risk or revising a stored one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum EditorMode {
    Create,
    Edit(RiskId),
}

/// A single add/edit form session.
///
/// The draft carries every editable field. Ids and scores are never part
/// of it: scores are recomputed whenever they are read, and the id is
/// settled on submit.
#[derive(Debug, Clone)]
pub struct RiskEditor {
    mode: EditorMode,
    draft: RiskDetails,
}

impl RiskEditor {
    /// Blank form with the default ratings and choices.
    pub fn create() -> Self {
        debug!("opening editor in create mode");
        Self {
            mode: EditorMode::Create,
            draft: RiskDetails::default(),
        }
    }

    /// Form pre-filled from a stored entry. The entry's id is kept.
    pub fn edit(entry: &RiskEntry) -> Self {
        debug!(id = %entry.id(), "opening editor in edit mode");
        Self {
            mode: EditorMode::Edit(entry.id().clone()),
            draft: entry.details().clone(),
        }
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn draft(&self) -> &RiskDetails {
        &self.draft
    }

    /// Field-level access for form widgets.
    pub fn draft_mut(&mut self) -> &mut RiskDetails {
        &mut self.draft
    }

    /// Scores for the draft as it stands right now.
    pub fn live_scores(&self) -> RiskScores {
        self.draft.scores()
    }

    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        if self.draft.title.trim().is_empty() {
            report.add_error(TITLE_FIELD, "Risk title is required");
        }
        report
    }

    /// Finalizes the draft into an entry.
    ///
    /// Edit sessions keep their id; create sessions draw a fresh one from
    /// `ids`. Nothing is drawn when validation fails.
    pub fn submit<S: IdSource + ?Sized>(&self, ids: &mut S) -> Result<RiskEntry, ValidationReport> {
        let report = self.validate();
        if !report.is_valid() {
            return Err(report);
        }

        let id = match &self.mode {
            EditorMode::Create => ids.next_id(),
            EditorMode::Edit(id) => id.clone(),
        };
        debug!(%id, "finalizing risk draft");
        Ok(RiskEntry::finalize(id, self.draft.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::rating::Rating;
    use crate::entities::risk::ControlEffectiveness;
    use crate::ports::id_source::SequentialIdSource;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_live_scores_follow_draft() {
        let mut editor = RiskEditor::create();
        assert_eq!(editor.live_scores().inherent, 9);
        assert_eq!(editor.live_scores().residual, 5.4);

        editor.draft_mut().likelihood = Rating::new(5).unwrap();
        editor.draft_mut().impact = Rating::new(4).unwrap();
        assert_eq!(editor.live_scores().inherent, 20);
        assert_eq!(editor.live_scores().residual, 12.0);

        editor.draft_mut().control_effectiveness = ControlEffectiveness::Ineffective;
        assert_eq!(editor.live_scores().residual, 18.0);
    }

    #[test]
    fn test_submit_requires_title() {
        let mut ids = SequentialIdSource::new("risk");
        let mut editor = RiskEditor::create();

        let report = editor.submit(&mut ids).unwrap_err();
        assert!(report.flags(TITLE_FIELD));

        editor.draft_mut().title = "   ".to_string();
        assert!(editor.submit(&mut ids).is_err());

        editor.draft_mut().title = "Phishing".to_string();
        let entry = editor.submit(&mut ids).unwrap();
        // Blocked submits did not consume ids.
        assert_eq!(entry.id().as_str(), "risk-1");
    }

    #[test]
    fn test_edit_keeps_id_and_recomputes_scores() {
        let mut ids = SequentialIdSource::new("risk");
        let mut creator = RiskEditor::create();
        creator.draft_mut().title = "Vendor outage".to_string();
        let original = creator.submit(&mut ids).unwrap();

        let mut editor = RiskEditor::edit(&original);
        assert_eq!(editor.mode(), &EditorMode::Edit(original.id().clone()));
        assert_eq!(editor.draft(), original.details());

        editor.draft_mut().impact = Rating::new(5).unwrap();
        let revised = editor.submit(&mut ids).unwrap();

        assert_eq!(revised.id(), original.id());
        assert_eq!(revised.inherent_risk_score(), 15);
        assert_eq!(revised.residual_risk_score(), 9.0);
    }
}
