//! # Confdash Schedule Grid
//!
//! Parser for the venue × time-slot scheduling matrix.
//!
//! The grid export is a headerless positional CSV with a fixed shape:
//!
//! ```text
//! row 0: ,,,,Sessions #1,Labs #1,Strategy Keynote #1,...
//! row 1: ,,,,9:00-10:00,9:00-11:00,10:30-11:30,...
//! row 2: (spacer)
//! row 3+: venue rows — first column names the room, time-slot
//!         columns hold free-text cells like "S324: Title" or "HOLD"
//! ```
//!
//! Venue rows are recognized by a closed-world fragment list (see
//! [`tables`]); everything else is dropped silently, since real
//! exports interleave AV and speaker metadata rows with the data.
//! Each populated cell yields a [`GridCell`] whose category is
//! recomputed from its own session-code prefix, letting a Lab code
//! appear correctly typed inside a Session-labeled column.

mod error;
mod lookup;
mod parser;
pub mod tables;
mod types;

pub use error::{GridError, Result};
pub use parser::{parse_grid, parse_grid_csv};
pub use types::{
    CellFlag, Conflict, Day, GridCell, Schedule, ScheduleView, SlotAssignment, SlotCategory,
    TimeSlot, Venue,
};
