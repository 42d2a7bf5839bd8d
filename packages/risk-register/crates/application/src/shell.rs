use crate::dashboard::Dashboard;
use crate::error::ShellError;
use domain::register::register_view;
use domain::{
    AssessmentContext, IdSource, RegisterRow, RegisterStore, RiskEditor, RiskEntry, RiskId,
    SortKey, SortState, UuidIdSource,
};
use tracing::{debug, info, warn};

/// Owned state of one register session.
///
/// Holds the assessment context, the register, the open editor (if any) and
/// the table sort. Every user action is one method call that finishes before
/// the next begins.
#[derive(Debug)]
pub struct RegisterShell<I: IdSource = UuidIdSource> {
    context: AssessmentContext,
    store: RegisterStore,
    editor: Option<RiskEditor>,
    sort: SortState,
    ids: I,
}

impl RegisterShell<UuidIdSource> {
    pub fn new() -> Self {
        Self::with_id_source(UuidIdSource)
    }
}

impl Default for RegisterShell<UuidIdSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IdSource> RegisterShell<I> {
    pub fn with_id_source(ids: I) -> Self {
        info!("starting register session");
        Self {
            context: AssessmentContext::dated_today(),
            store: RegisterStore::new(),
            editor: None,
            sort: SortState::default(),
            ids,
        }
    }

    /// Replaces the initial sort, e.g. from user settings.
    pub fn with_sort(mut self, sort: SortState) -> Self {
        self.sort = sort;
        self
    }

    // Assessment context

    pub fn context(&self) -> &AssessmentContext {
        &self.context
    }

    pub fn update_context(&mut self, context: AssessmentContext) {
        debug!(name = %context.name, "assessment context updated");
        self.context = context;
    }

    // Register

    pub fn risks(&self) -> &[RiskEntry] {
        self.store.list()
    }

    pub fn risk(&self, id: &RiskId) -> Option<&RiskEntry> {
        self.store.get(id)
    }

    /// Deletes a risk; unknown ids are ignored.
    pub fn delete(&mut self, id: &RiskId) -> Option<RiskEntry> {
        let removed = self.store.remove(id);
        if removed.is_none() {
            debug!(%id, "delete ignored, no such risk");
        }
        removed
    }

    // Editor

    pub fn editor(&self) -> Option<&RiskEditor> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut RiskEditor> {
        self.editor.as_mut()
    }

    /// Opens a blank form, discarding any open draft.
    pub fn open_create(&mut self) -> &mut RiskEditor {
        self.editor.insert(RiskEditor::create())
    }

    /// Opens the form on a stored risk, discarding any open draft.
    pub fn open_edit(&mut self, id: &RiskId) -> Result<&mut RiskEditor, ShellError> {
        let entry = self
            .store
            .get(id)
            .ok_or_else(|| ShellError::UnknownRisk(id.clone()))?;
        let editor = RiskEditor::edit(entry);
        Ok(self.editor.insert(editor))
    }

    /// Finalizes the open draft and writes it into the register by id.
    ///
    /// A blocked submit leaves the editor open with its draft intact.
    pub fn submit(&mut self) -> Result<&RiskEntry, ShellError> {
        let editor = self.editor.as_ref().ok_or(ShellError::NoActiveEditor)?;
        let entry = editor.submit(&mut self.ids).map_err(|report| {
            warn!(%report, "risk submit blocked");
            ShellError::SubmitBlocked(report)
        })?;

        self.editor = None;
        let id = entry.id().clone();
        self.store.upsert(entry);
        info!(%id, total = self.store.len(), "risk saved");
        self.store.get(&id).ok_or(ShellError::UnknownRisk(id))
    }

    /// Closes the editor without touching the register. Returns whether a
    /// draft was open.
    pub fn cancel(&mut self) -> bool {
        let was_open = self.editor.take().is_some();
        if was_open {
            debug!("editor cancelled, draft discarded");
        }
        was_open
    }

    // Views

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn select_sort(&mut self, key: SortKey) {
        self.sort.select(key);
        debug!(key = ?self.sort.key, direction = ?self.sort.direction, "sort changed");
    }

    pub fn register_view(&self) -> Vec<RegisterRow<'_>> {
        register_view(self.store.list(), &self.sort)
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard::from_entries(self.store.list())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{
        ControlEffectiveness, PostureLabel, Rating, RiskStatus, SequentialIdSource,
        SortDirection,
    };
    use pretty_assertions::assert_eq;

    fn shell() -> RegisterShell<SequentialIdSource> {
        RegisterShell::with_id_source(SequentialIdSource::new("risk"))
    }

    fn add(shell: &mut RegisterShell<SequentialIdSource>, title: &str, l: u8, i: u8) -> RiskId {
        let draft = shell.open_create().draft_mut();
        draft.title = title.to_string();
        draft.likelihood = Rating::new(l).unwrap();
        draft.impact = Rating::new(i).unwrap();
        shell.submit().unwrap().id().clone()
    }

    #[test]
    fn test_create_then_edit_updates_in_place() {
        let mut shell = shell();
        let first = add(&mut shell, "Phishing", 3, 4);
        add(&mut shell, "Laptop theft", 2, 2);

        shell.open_edit(&first).unwrap().draft_mut().status = RiskStatus::Mitigated;
        let saved = shell.submit().unwrap().clone();

        assert_eq!(saved.id(), &first);
        assert_eq!(shell.risks().len(), 2);
        assert_eq!(shell.risks()[0].details().status, RiskStatus::Mitigated);
        assert!(shell.editor().is_none());
    }

    #[test]
    fn test_blocked_submit_keeps_draft() {
        let mut shell = shell();
        shell.open_create().draft_mut().impact = Rating::new(5).unwrap();

        let err = shell.submit().unwrap_err();
        assert!(matches!(err, ShellError::SubmitBlocked(ref report) if report.flags("title")));
        assert!(shell.risks().is_empty());
        assert_eq!(shell.editor().unwrap().draft().impact.value(), 5);
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut shell = shell();
        shell.open_create().draft_mut().title = "Half written".to_string();

        assert!(shell.cancel());
        assert!(!shell.cancel());
        assert!(shell.risks().is_empty());
        assert_eq!(shell.submit().unwrap_err(), ShellError::NoActiveEditor);
    }

    #[test]
    fn test_open_edit_unknown_id() {
        let mut shell = shell();
        let missing = RiskId::new("nope");
        assert_eq!(
            shell.open_edit(&missing).unwrap_err(),
            ShellError::UnknownRisk(missing)
        );
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let mut shell = shell();
        add(&mut shell, "Phishing", 3, 4);

        assert!(shell.delete(&RiskId::new("nope")).is_none());
        assert_eq!(shell.risks().len(), 1);
    }

    #[test]
    fn test_register_view_uses_sort_state() {
        let mut shell = shell();
        add(&mut shell, "bravo", 1, 1);
        add(&mut shell, "Alpha", 5, 5);

        let titles = |shell: &RegisterShell<SequentialIdSource>| -> Vec<String> {
            shell
                .register_view()
                .iter()
                .map(|row| row.entry.title().to_string())
                .collect()
        };

        assert_eq!(titles(&shell), vec!["Alpha", "bravo"]);
        shell.select_sort(SortKey::Title);
        assert_eq!(shell.sort().direction, SortDirection::Descending);
        assert_eq!(titles(&shell), vec!["bravo", "Alpha"]);
        shell.select_sort(SortKey::Title);
        assert_eq!(titles(&shell), vec!["Alpha", "bravo"]);
        // Register order is unchanged by the view.
        assert_eq!(shell.risks()[0].title(), "bravo");
    }

    #[test]
    fn test_dashboard_reflects_current_register() {
        let mut shell = shell();
        assert!(shell.dashboard().is_empty());

        let id = add(&mut shell, "Ransomware", 5, 5);
        shell.open_edit(&id).unwrap().draft_mut().control_effectiveness =
            ControlEffectiveness::Ineffective;
        shell.submit().unwrap();

        let dashboard = shell.dashboard();
        let posture = dashboard.posture.unwrap();
        assert_eq!(posture.critical_count, 1);
        assert_eq!(posture.average_residual, 22.5);
        assert_eq!(posture.label, PostureLabel::Critical);

        shell.delete(&id);
        assert!(shell.dashboard().is_empty());
    }

    #[test]
    fn test_update_context_overwrites() {
        let mut shell = shell();
        let mut context = shell.context().clone();
        context.name = "Q1 2026 Security Risk Assessment".to_string();
        context.owner = "Jane Smith".to_string();
        shell.update_context(context.clone());

        assert_eq!(shell.context(), &context);
    }
}
