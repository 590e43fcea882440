use crate::error::{GridError, Result};
use crate::tables::{infer_day, METADATA_ROW_LABELS, VENUE_NAME_FRAGMENTS};
use crate::types::{Day, GridCell, Schedule, SlotCategory, TimeSlot, Venue};
use once_cell::sync::Lazy;
use regex::Regex;

/// Slot header shape, e.g. "Sessions #3", "Labs 2", "Lab #5"
static SLOT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(Sessions?|Labs?)\s*#?(\d+)").unwrap());

/// Bare slot number, used for Strategy Keynote headers
static SLOT_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"#(\d+)").unwrap());

/// Capacity marker embedded in venue text, e.g. "CAP: 250"
static CAPACITY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)CAP[:\s]*(\d+)").unwrap());

/// Session code shape shared across all three data sources
static SESSION_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]+\d+").unwrap());

/// Columns 0..4 of the grid are venue metadata, not time slots
const FIRST_SLOT_COLUMN: usize = 4;

/// First data row; rows 0 and 1 are slot headers, row 2 is a spacer
const FIRST_DATA_ROW: usize = 3;

/// Decode a headerless grid CSV and parse it into a [`Schedule`].
///
/// Whitespace-only lines are dropped before the positional contract
/// is applied, matching how the source exports are produced.
pub fn parse_grid_csv(csv_text: &str) -> Result<Schedule> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let mut matrix = Vec::new();
    for row in reader.records() {
        let row = row?;
        if row.iter().all(|v| v.trim().is_empty()) {
            continue;
        }
        matrix.push(row.iter().map(str::to_string).collect::<Vec<_>>());
    }

    parse_grid(&matrix)
}

/// Parse a decoded matrix of raw cells into a structured schedule.
///
/// Structural contract (fixed to the source layout): row 0 holds slot
/// names, row 1 slot time text, data rows start at row 3, and time
/// slots begin at column 4. Fails when fewer than 2 rows are present;
/// rows matching no known venue fragment are dropped silently.
pub fn parse_grid(matrix: &[Vec<String>]) -> Result<Schedule> {
    if matrix.len() < 2 {
        return Err(GridError::MalformedGrid { rows: matrix.len() });
    }

    let slot_row = &matrix[0];
    let detail_row = &matrix[1];

    let mut time_slots = Vec::new();
    for (index, raw_name) in slot_row.iter().enumerate().skip(FIRST_SLOT_COLUMN) {
        let name = raw_name.trim();
        if name.is_empty() {
            continue;
        }
        let time = detail_row.get(index).map_or("", |t| t.trim());
        time_slots.push(parse_time_slot(index, name, time));
    }

    let mut venues = Vec::new();
    for row in matrix.iter().skip(FIRST_DATA_ROW) {
        let first = row.first().map_or("", |c| c.trim());

        if METADATA_ROW_LABELS.contains(&first) {
            continue;
        }
        if first.is_empty() || !VENUE_NAME_FRAGMENTS.iter().any(|f| first.contains(f)) {
            continue;
        }

        let mut cells = Vec::new();
        for slot in &time_slots {
            let content = row.get(slot.index).map_or("", |c| c.trim());
            if !content.is_empty() {
                cells.push(parse_cell(content, slot));
            }
        }

        venues.push(Venue {
            name: first.to_string(),
            capacity: extract_capacity(first),
            cells,
        });
    }

    let days = collect_days(&time_slots);
    log::info!(
        "Parsed schedule: {} slots, {} venues, {} days",
        time_slots.len(),
        venues.len(),
        days.len()
    );

    Ok(Schedule {
        time_slots,
        venues,
        days,
    })
}

fn parse_time_slot(index: usize, name: &str, time: &str) -> TimeSlot {
    let mut category = SlotCategory::Session;
    let mut number = 0u32;

    if let Some(caps) = SLOT_PATTERN.captures(name) {
        if caps[1].to_lowercase().contains("lab") {
            category = SlotCategory::Lab;
        }
        number = caps[2].parse().unwrap_or(0);
    }

    // Strategy Keynote headers carry their own numbering
    if name.contains("Strategy Keynote") {
        category = SlotCategory::StrategyKeynote;
        if let Some(caps) = SLOT_NUMBER.captures(name) {
            number = caps[1].parse().unwrap_or(0);
        }
    }

    TimeSlot {
        index,
        name: name.to_string(),
        time: time.to_string(),
        category,
        day: infer_day(category, number),
        number,
    }
}

fn extract_capacity(venue_name: &str) -> Option<u32> {
    CAPACITY
        .captures(venue_name)
        .and_then(|caps| caps[1].parse().ok())
}

/// The cell's category comes from its own code prefix when a code is
/// present; a Lab code stays a Lab even in a Session-labeled column.
fn category_for_code(code: &str, fallback: SlotCategory) -> SlotCategory {
    if code.starts_with("SK") {
        SlotCategory::StrategyKeynote
    } else if code.starts_with('L') {
        SlotCategory::Lab
    } else if code.starts_with('S') {
        SlotCategory::Session
    } else {
        fallback
    }
}

fn parse_cell(content: &str, slot: &TimeSlot) -> GridCell {
    let session_code = SESSION_CODE
        .find(content)
        .map(|m| m.as_str().to_string());

    let title = match content.find(':') {
        Some(colon) => content[colon + 1..].trim().to_string(),
        None if session_code.is_none() => content.to_string(),
        None => String::new(),
    };

    let lower = content.to_lowercase();
    let category = session_code
        .as_deref()
        .map_or(slot.category, |code| category_for_code(code, slot.category));

    GridCell {
        time_slot: slot.name.clone(),
        slot_index: slot.index,
        day: slot.day,
        category,
        session_code,
        title,
        raw: content.to_string(),
        is_open: lower.contains("open"),
        is_tbd: lower.contains("tbd"),
        is_do_not_schedule: lower.contains("do not schedule"),
        is_hold: lower.contains("hold"),
        is_repeat: lower.contains("repeat"),
    }
}

fn collect_days(time_slots: &[TimeSlot]) -> Vec<Day> {
    let mut days = Vec::new();
    for slot in time_slots {
        if slot.day != Day::Unknown && !days.contains(&slot.day) {
            days.push(slot.day);
        }
    }
    days
}
