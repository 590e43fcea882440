use crate::types::{Conflict, Day, Schedule, ScheduleView, SlotAssignment, SlotCategory, Venue};

impl Schedule {
    /// Slots and venue cells for one day; venues left with no cells
    /// are dropped from the view.
    #[must_use]
    pub fn for_day(&self, day: Day) -> ScheduleView {
        ScheduleView {
            time_slots: self
                .time_slots
                .iter()
                .filter(|s| s.day == day)
                .cloned()
                .collect(),
            venues: self
                .venues
                .iter()
                .map(|v| Venue {
                    name: v.name.clone(),
                    capacity: v.capacity,
                    cells: v.cells.iter().filter(|c| c.day == day).cloned().collect(),
                })
                .filter(|v| !v.cells.is_empty())
                .collect(),
        }
    }

    /// Slots and venue cells for one category
    #[must_use]
    pub fn for_category(&self, category: SlotCategory) -> ScheduleView {
        ScheduleView {
            time_slots: self
                .time_slots
                .iter()
                .filter(|s| s.category == category)
                .cloned()
                .collect(),
            venues: self
                .venues
                .iter()
                .map(|v| Venue {
                    name: v.name.clone(),
                    capacity: v.capacity,
                    cells: v
                        .cells
                        .iter()
                        .filter(|c| c.category == category)
                        .cloned()
                        .collect(),
                })
                .filter(|v| !v.cells.is_empty())
                .collect(),
        }
    }

    /// Every populated cell at a named time slot, joined with its venue
    #[must_use]
    pub fn cells_at_slot(&self, time_slot_name: &str) -> Vec<SlotAssignment> {
        let mut assignments = Vec::new();
        for venue in &self.venues {
            for cell in &venue.cells {
                if cell.time_slot == time_slot_name {
                    assignments.push(SlotAssignment {
                        venue: venue.name.clone(),
                        capacity: venue.capacity,
                        cell: cell.clone(),
                    });
                }
            }
        }
        assignments
    }

    /// Session codes scheduled in more than one venue at the same slot.
    ///
    /// Comparison happens within a single time-slot name only; the
    /// same code in two different slots is a repeat, not a conflict.
    #[must_use]
    pub fn find_conflicts(&self) -> Vec<Conflict> {
        let mut conflicts = Vec::new();
        for slot in &self.time_slots {
            let codes: Vec<String> = self
                .cells_at_slot(&slot.name)
                .into_iter()
                .filter_map(|a| a.cell.session_code)
                .collect();

            let mut duplicates: Vec<String> = Vec::new();
            for (i, code) in codes.iter().enumerate() {
                if codes[..i].contains(code) && !duplicates.contains(code) {
                    duplicates.push(code.clone());
                }
            }

            if !duplicates.is_empty() {
                conflicts.push(Conflict {
                    time_slot: slot.name.clone(),
                    duplicate_codes: duplicates,
                });
            }
        }
        conflicts
    }
}
