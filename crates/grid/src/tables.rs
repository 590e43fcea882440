//! Closed-world lookup tables for the grid parser.
//!
//! The venue and metadata lists mirror the exact strings observed in
//! real schedule exports. They are heuristics, not general rules:
//! rows that match no fragment are silently dropped, so any change in
//! venue naming requires updating [`VENUE_NAME_FRAGMENTS`] here.

use crate::types::{Day, SlotCategory};

/// First-column labels marking non-venue metadata rows
pub const METADATA_ROW_LABELS: &[&str] = &["Speakers", "Special Notes", "Add Mics", "AV", "LABS"];

/// Substrings identifying a first-column cell as a venue row
pub const VENUE_NAME_FRAGMENTS: &[&str] = &[
    "CAP", "Level", "Palazzo", "Delfino", "Lido", "Murano", "Marcello", "Lando", "Zeno",
];

/// Map a slot's (category, sequence number) to a conference day.
///
/// Fixed ranges from the event's running order:
/// Sessions — #1 Monday, #2–4 Tuesday, #5–7 Wednesday, #8–10 Thursday;
/// Labs — #1 Monday, #2–3 Tuesday, #4–5 Wednesday, #6–7 Thursday;
/// Strategy Keynotes — #1–2 Tuesday, everything else Wednesday.
#[must_use]
pub fn infer_day(category: SlotCategory, number: u32) -> Day {
    match category {
        SlotCategory::Session => match number {
            1 => Day::Monday,
            2..=4 => Day::Tuesday,
            5..=7 => Day::Wednesday,
            8..=10 => Day::Thursday,
            _ => Day::Unknown,
        },
        SlotCategory::Lab => match number {
            1 => Day::Monday,
            2..=3 => Day::Tuesday,
            4..=5 => Day::Wednesday,
            6..=7 => Day::Thursday,
            _ => Day::Unknown,
        },
        SlotCategory::StrategyKeynote => {
            if (1..=2).contains(&number) {
                Day::Tuesday
            } else {
                Day::Wednesday
            }
        }
    }
}
