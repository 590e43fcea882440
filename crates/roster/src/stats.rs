use crate::types::TaRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A lab paired with how many assistants it has assigned
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LabAssignmentCount {
    pub lab_code: String,
    pub ta_count: usize,
}

/// Roster-wide assignment statistics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RosterStats {
    /// Number of TA records
    pub total_tas: usize,

    /// Number of distinct labs with at least one assignment
    pub total_labs: usize,

    /// Sum of lab assignments across all TAs
    pub total_assignments: usize,

    /// Assignments per lab, one decimal place
    pub avg_tas_per_lab: f64,

    /// TAs covering 3+ labs, most-loaded first
    pub multi_lab_tas: Vec<TaRecord>,

    /// Labs with fewer than 3 assigned TAs (confirmed or not)
    pub understaffed_labs: Vec<LabAssignmentCount>,

    /// Labs with 5 or more assigned TAs
    pub well_staffed_labs: Vec<LabAssignmentCount>,
}

/// Summarize the roster and its inverted lab index
#[must_use]
pub fn roster_stats(
    tas: &[TaRecord],
    lab_index: &BTreeMap<String, Vec<TaRecord>>,
) -> RosterStats {
    let total_assignments: usize = tas.iter().map(|ta| ta.labs.len()).sum();
    let total_labs = lab_index.len();

    let mut multi_lab_tas: Vec<TaRecord> = tas
        .iter()
        .filter(|ta| ta.labs.len() >= 3)
        .cloned()
        .collect();
    multi_lab_tas.sort_by(|a, b| b.labs.len().cmp(&a.labs.len()));

    let understaffed_labs = lab_index
        .iter()
        .filter(|(_, assigned)| assigned.len() < 3)
        .map(|(lab_code, assigned)| LabAssignmentCount {
            lab_code: lab_code.clone(),
            ta_count: assigned.len(),
        })
        .collect();

    let well_staffed_labs = lab_index
        .iter()
        .filter(|(_, assigned)| assigned.len() >= 5)
        .map(|(lab_code, assigned)| LabAssignmentCount {
            lab_code: lab_code.clone(),
            ta_count: assigned.len(),
        })
        .collect();

    let avg_tas_per_lab = if total_labs > 0 {
        (total_assignments as f64 / total_labs as f64 * 10.0).round() / 10.0
    } else {
        0.0
    };

    RosterStats {
        total_tas: tas.len(),
        total_labs,
        total_assignments,
        avg_tas_per_lab,
        multi_lab_tas,
        understaffed_labs,
        well_staffed_labs,
    }
}
