//! # Confdash TA Roster
//!
//! Decoder for the teaching-assistant roster export and the derived
//! lab staffing views.
//!
//! The roster is header-keyed but messy: per-track header rows sit
//! between data rows, lab codes arrive as free-text comma lists, and
//! two column headers embed usage examples (one across a newline).
//! Parsing normalizes each surviving row into a [`TaRecord`] whose
//! lab codes are validated against `L<digits>` and upper-cased; rows
//! with no valid code carry no actionable assignment and are dropped.
//!
//! The lab → assistants index is an inverted view rebuilt on every
//! parse, and staffing adequacy is classified from confirmed
//! assistants only.

mod error;
mod parser;
mod staffing;
mod stats;
mod types;

pub use error::{Result, RosterError};
pub use parser::{build_lab_index, parse_roster};
pub use staffing::{confirmed_count, staffing_status, StaffingStatus};
pub use stats::{roster_stats, LabAssignmentCount, RosterStats};
pub use types::{columns, TaRecord};
