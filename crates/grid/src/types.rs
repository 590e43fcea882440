use serde::{Deserialize, Serialize};

/// Nominal category of a grid column or cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotCategory {
    Session,
    Lab,
    #[serde(rename = "Strategy Keynote")]
    StrategyKeynote,
}

impl SlotCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Session => "Session",
            Self::Lab => "Lab",
            Self::StrategyKeynote => "Strategy Keynote",
        }
    }
}

/// Conference day inferred from a slot's sequence number.
///
/// Slots whose number falls outside the known ranges resolve to
/// `Unknown` and are excluded from [`Schedule::days`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Unknown,
}

impl Day {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One column of the grid: a named time slot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeSlot {
    /// Column index in the raw matrix
    pub index: usize,

    /// Header text, e.g. "Sessions #3"
    pub name: String,

    /// Display time text from the second header row
    pub time: String,

    /// Category inferred from the header name
    pub category: SlotCategory,

    /// Day inferred from (category, number)
    pub day: Day,

    /// Sequence number used only for day inference
    pub number: u32,
}

/// State flag precedence for display when several are set at once:
/// do-not-schedule first, then hold, repeat, tbd, open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellFlag {
    DoNotSchedule,
    Hold,
    Repeat,
    Tbd,
    Open,
}

/// One populated (venue, time slot) cell
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GridCell {
    /// Name of the hosting time slot
    pub time_slot: String,

    /// Column index of the hosting time slot
    pub slot_index: usize,

    /// Day inherited from the hosting time slot
    pub day: Day,

    /// Category from the session-code prefix when a code is present,
    /// otherwise the column's nominal category
    pub category: SlotCategory,

    /// First `[A-Z]+\d+` token in the cell text, if any
    pub session_code: Option<String>,

    /// Text after the first colon; the whole cell only when no code
    pub title: String,

    /// Raw cell text as decoded
    pub raw: String,

    pub is_open: bool,
    pub is_tbd: bool,
    pub is_do_not_schedule: bool,
    pub is_hold: bool,
    pub is_repeat: bool,
}

impl GridCell {
    /// Highest-precedence state flag set on this cell, if any
    #[must_use]
    pub const fn primary_flag(&self) -> Option<CellFlag> {
        if self.is_do_not_schedule {
            Some(CellFlag::DoNotSchedule)
        } else if self.is_hold {
            Some(CellFlag::Hold)
        } else if self.is_repeat {
            Some(CellFlag::Repeat)
        } else if self.is_tbd {
            Some(CellFlag::Tbd)
        } else if self.is_open {
            Some(CellFlag::Open)
        } else {
            None
        }
    }
}

/// A room hosting grid cells
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Venue {
    /// Raw first-column text, e.g. "Murano 3201 (CAP: 250)"
    pub name: String,

    /// Capacity parsed from the embedded CAP marker
    pub capacity: Option<u32>,

    /// Populated cells in time-slot order
    pub cells: Vec<GridCell>,
}

/// Parsed scheduling grid: ordered slots, venues, and the days present
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Schedule {
    pub time_slots: Vec<TimeSlot>,
    pub venues: Vec<Venue>,

    /// Deduplicated days in slot order, `Unknown` excluded
    pub days: Vec<Day>,
}

/// A filtered projection of a schedule (one day or one category)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleView {
    pub time_slots: Vec<TimeSlot>,
    pub venues: Vec<Venue>,
}

/// A cell joined with its hosting venue, for slot-wide queries
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlotAssignment {
    pub venue: String,
    pub capacity: Option<u32>,
    pub cell: GridCell,
}

/// The same session code scheduled in several venues at one slot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Conflict {
    pub time_slot: String,
    pub duplicate_codes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell_with_flags(dns: bool, hold: bool, repeat: bool, tbd: bool, open: bool) -> GridCell {
        GridCell {
            time_slot: "Sessions #1".to_string(),
            slot_index: 4,
            day: Day::Monday,
            category: SlotCategory::Session,
            session_code: None,
            title: String::new(),
            raw: String::new(),
            is_open: open,
            is_tbd: tbd,
            is_do_not_schedule: dns,
            is_hold: hold,
            is_repeat: repeat,
        }
    }

    #[test]
    fn primary_flag_precedence() {
        assert_eq!(
            cell_with_flags(true, true, true, true, true).primary_flag(),
            Some(CellFlag::DoNotSchedule)
        );
        assert_eq!(
            cell_with_flags(false, true, true, false, false).primary_flag(),
            Some(CellFlag::Hold)
        );
        assert_eq!(
            cell_with_flags(false, false, false, true, true).primary_flag(),
            Some(CellFlag::Tbd)
        );
        assert_eq!(cell_with_flags(false, false, false, false, false).primary_flag(), None);
    }
}
