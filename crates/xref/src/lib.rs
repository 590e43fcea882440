//! # Confdash Cross-Reference
//!
//! Joins across the three independently-parsed collections.
//!
//! The session export, the schedule grid, and the TA roster are
//! uploaded independently and in any order, including never; the only
//! thing tying them together is the session code. This crate keeps
//! them as separate entities and performs explicit lookups at the
//! seam: grid cell → session detail, lab code → staffing card, and
//! speaker name → TA-roster membership.

mod resolver;

pub use resolver::{
    cell_details, find_by_code, lab_card, normalize_name, speaker_is_ta, ta_name_set, LabCard,
};
