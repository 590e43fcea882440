use crate::types::TaRecord;
use serde::{Deserialize, Serialize};

/// Staffing adequacy of one lab, from its confirmed-TA count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StaffingStatus {
    #[serde(rename = "critical")]
    Critical,
    #[serde(rename = "toofew")]
    TooFew,
    #[serde(rename = "good")]
    Good,
    #[serde(rename = "toomany")]
    TooMany,
}

impl StaffingStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::TooFew => "toofew",
            Self::Good => "good",
            Self::TooMany => "toomany",
        }
    }
}

/// Classify a lab's staffing from its confirmed-TA count.
///
/// Fewer than 3 confirmed is critical, exactly 3 is too few, 4 to 5
/// is the target band, above 5 is over-staffed.
#[must_use]
pub const fn staffing_status(confirmed_count: usize) -> StaffingStatus {
    match confirmed_count {
        0..=2 => StaffingStatus::Critical,
        3 => StaffingStatus::TooFew,
        4..=5 => StaffingStatus::Good,
        _ => StaffingStatus::TooMany,
    }
}

/// Count the confirmed assistants in a per-lab list.
///
/// Unconfirmed assignments stay in the list for display but never
/// count toward the staffing status.
#[must_use]
pub fn confirmed_count(tas: &[TaRecord]) -> usize {
    tas.iter().filter(|ta| ta.confirmed).count()
}
