use confdash_grid::GridCell;
use confdash_model::SessionRecord;
use confdash_roster::{confirmed_count, staffing_status, StaffingStatus, TaRecord};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Look a session up by code: exact match first, then one
/// uppercase-normalized retry. Codes are case-normalized only here,
/// at the lookup boundary, never at ingestion.
#[must_use]
pub fn find_by_code<'a>(sessions: &'a [SessionRecord], code: &str) -> Option<&'a SessionRecord> {
    if code.is_empty() {
        return None;
    }
    sessions.iter().find(|s| s.code() == code).or_else(|| {
        let upper = code.to_uppercase();
        sessions.iter().find(|s| s.code() == upper)
    })
}

/// Join a grid cell back to its full session record, if it has a code
#[must_use]
pub fn cell_details<'a>(
    cell: &GridCell,
    sessions: &'a [SessionRecord],
) -> Option<&'a SessionRecord> {
    cell.session_code
        .as_deref()
        .and_then(|code| find_by_code(sessions, code))
}

/// Staffing card for one lab: session detail joined with its TA
/// assignments and the confirmed-count adequacy classification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LabCard {
    pub lab_code: String,

    /// Full session record, when the code exists in the session export
    pub session: Option<SessionRecord>,

    /// Assigned TAs in roster order, unconfirmed included for display
    pub tas: Vec<TaRecord>,

    pub confirmed_count: usize,
    pub staffing: StaffingStatus,
}

/// Build the staffing card for one lab code
#[must_use]
pub fn lab_card(
    lab_code: &str,
    sessions: &[SessionRecord],
    lab_index: &BTreeMap<String, Vec<TaRecord>>,
) -> LabCard {
    let tas = lab_index.get(lab_code).cloned().unwrap_or_default();
    let confirmed = confirmed_count(&tas);
    LabCard {
        lab_code: lab_code.to_string(),
        session: find_by_code(sessions, lab_code).cloned(),
        confirmed_count: confirmed,
        staffing: staffing_status(confirmed),
        tas,
    }
}

/// Normalize a person name for cross-set comparison: lowercase,
/// commas become spaces, whitespace collapsed.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .replace(',', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalized full names of every TA on the roster
#[must_use]
pub fn ta_name_set(tas: &[TaRecord]) -> BTreeSet<String> {
    tas.iter().map(|ta| normalize_name(&ta.full_name)).collect()
}

/// Whether a speaker also appears on the TA roster.
///
/// Pure membership check over normalized names; no persisted state.
#[must_use]
pub fn speaker_is_ta(speaker_name: &str, ta_names: &BTreeSet<String>) -> bool {
    let normalized = normalize_name(speaker_name);
    !normalized.is_empty() && ta_names.contains(&normalized)
}
