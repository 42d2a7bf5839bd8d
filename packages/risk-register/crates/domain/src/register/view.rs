use crate::entities::risk::RiskEntry;
use crate::register::sort::SortState;
use crate::scoring::Severity;
use serde::Serialize;

/// One line of the register table.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RegisterRow<'a> {
    #[serde(flatten)]
    pub entry: &'a RiskEntry,
    pub severity: Severity,
}

/// The register as displayed: sorted by `sort`, each row tagged with the
/// severity of its inherent score.
pub fn register_view<'a>(entries: &'a [RiskEntry], sort: &SortState) -> Vec<RegisterRow<'a>> {
    sort.apply(entries)
        .into_iter()
        .map(|entry| RegisterRow {
            entry,
            severity: entry.severity(),
        })
        .collect()
}
