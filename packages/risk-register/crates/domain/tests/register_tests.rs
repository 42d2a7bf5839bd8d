use domain::aggregate::{comparison_series, severity_distribution};
use domain::{
    ControlEffectiveness, HeatMap, PostureLabel, PostureSummary, Rating, RegisterStore,
    RiskEditor, SequentialIdSource, Severity, SortDirection, SortKey, SortState,
};
use pretty_assertions::assert_eq;

fn add_risk(
    store: &mut RegisterStore,
    ids: &mut SequentialIdSource,
    title: &str,
    likelihood: u8,
    impact: u8,
    effectiveness: ControlEffectiveness,
) {
    let mut editor = RiskEditor::create();
    let draft = editor.draft_mut();
    draft.title = title.to_string();
    draft.likelihood = Rating::new(likelihood).unwrap();
    draft.impact = Rating::new(impact).unwrap();
    draft.control_effectiveness = effectiveness;

    let entry = editor.submit(ids).expect("title is set");
    store.upsert(entry);
}

fn scenario() -> RegisterStore {
    let mut store = RegisterStore::new();
    let mut ids = SequentialIdSource::new("risk");
    add_risk(
        &mut store,
        &mut ids,
        "Ransomware on file servers",
        5,
        5,
        ControlEffectiveness::Ineffective,
    );
    add_risk(
        &mut store,
        &mut ids,
        "Badge cloning",
        1,
        1,
        ControlEffectiveness::Effective,
    );
    add_risk(
        &mut store,
        &mut ids,
        "Vendor data leak",
        3,
        3,
        ControlEffectiveness::PartiallyEffective,
    );
    store
}

#[test]
fn test_three_entry_scenario() {
    let store = scenario();

    let inherent: Vec<u32> = store.list().iter().map(|e| e.inherent_risk_score()).collect();
    let residual: Vec<f64> = store.list().iter().map(|e| e.residual_risk_score()).collect();
    assert_eq!(inherent, vec![25, 1, 9]);
    assert_eq!(residual, vec![22.5, 0.3, 5.4]);

    let posture = PostureSummary::from_entries(store.list()).unwrap();
    assert_eq!(posture.critical_count, 1);
    assert_eq!(format!("{:.1}", posture.average_residual), "9.4");
    assert_eq!(posture.label, PostureLabel::HighRisk);

    println!(
        "✅ Posture: {} (avg residual {:.1})",
        posture.label, posture.average_residual
    );
}

#[test]
fn test_edit_round_trip_keeps_position() {
    let mut store = scenario();
    let mut ids = SequentialIdSource::new("unused");
    let target = store.list()[1].clone();

    let mut editor = RiskEditor::edit(&target);
    editor.draft_mut().likelihood = Rating::new(4).unwrap();
    editor.draft_mut().impact = Rating::new(5).unwrap();
    let revised = editor.submit(&mut ids).unwrap();
    store.upsert(revised.clone());

    assert_eq!(store.len(), 3);
    assert_eq!(store.list()[1], revised);
    assert_eq!(store.list()[1].id(), target.id());
    assert_eq!(store.list()[1].inherent_risk_score(), 20);
    assert_eq!(store.list()[1].residual_risk_score(), 6.0);
    assert_eq!(
        store.list().iter().filter(|e| e.id() == target.id()).count(),
        1
    );
}

#[test]
fn test_sorting_leaves_store_order() {
    let store = scenario();
    let before: Vec<_> = store.list().iter().map(|e| e.id().clone()).collect();

    let sorted = SortState::new(SortKey::Title, SortDirection::Ascending).apply(store.list());
    let titles: Vec<_> = sorted.iter().map(|e| e.title()).collect();
    assert_eq!(
        titles,
        vec![
            "Badge cloning",
            "Ransomware on file servers",
            "Vendor data leak"
        ]
    );

    let after: Vec<_> = store.list().iter().map(|e| e.id().clone()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_dashboard_projections() {
    let store = scenario();

    let heat_map = HeatMap::from_entries(store.list());
    assert_eq!(heat_map.count(Rating::new(5).unwrap(), Rating::new(5).unwrap()), 1);
    assert_eq!(heat_map.total(), 3);

    let bars = severity_distribution(store.list());
    assert_eq!(bars[0].severity, Severity::Critical);
    assert_eq!(bars[0].count, 1);
    assert_eq!(bars[2].severity, Severity::Medium);
    assert_eq!(bars[2].count, 1);
    assert_eq!(bars[3].count, 1);

    let series = comparison_series(store.list());
    assert_eq!(series[0].label, "Ransomware on file…");
    assert_eq!(series[0].inherent, 25);
    assert_eq!(series[0].residual, 22.5);
}
