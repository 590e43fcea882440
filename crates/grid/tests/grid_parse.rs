use confdash_grid::{parse_grid_csv, Day, SlotCategory};

const GRID_CSV: &str = "\
,,,,Sessions #1,Sessions #2,Labs #4,Strategy Keynote #1
,,,,Mon 9:00-10:00,Tue 9:00-10:00,Wed 9:00-11:00,Tue 10:30-11:30
,planning notes,,,,,,
Murano 3201 (CAP: 250),,,,S101: Edge Personalization,S100: Journeys,L045: Commerce,SK1: Retail
Speakers,,,,Alice,Bob,Carol,Dana
AV,,,,mic,mic,mic,mic
Lido 3001 CAP 80,,,,OPEN,S100: Journeys (repeat),HOLD,
Palazzo Ballroom Level 5,,,,,TBD,,SK1: Retail
";

#[test]
fn parses_slots_venues_and_days() {
    let schedule = parse_grid_csv(GRID_CSV).unwrap();

    assert_eq!(schedule.time_slots.len(), 4);
    assert_eq!(schedule.time_slots[0].category, SlotCategory::Session);
    assert_eq!(schedule.time_slots[0].day, Day::Monday);
    assert_eq!(schedule.time_slots[2].category, SlotCategory::Lab);
    assert_eq!(schedule.time_slots[2].day, Day::Wednesday);
    assert_eq!(schedule.time_slots[3].category, SlotCategory::StrategyKeynote);
    assert_eq!(schedule.time_slots[3].day, Day::Tuesday);

    // Metadata rows dropped, three venue rows recognized
    let names: Vec<&str> = schedule.venues.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Murano 3201 (CAP: 250)",
            "Lido 3001 CAP 80",
            "Palazzo Ballroom Level 5"
        ]
    );
    assert_eq!(schedule.venues[0].capacity, Some(250));
    assert_eq!(schedule.venues[1].capacity, Some(80));
    assert_eq!(schedule.venues[2].capacity, None);

    // Days deduplicated in slot order, Unknown excluded
    assert_eq!(schedule.days, vec![Day::Monday, Day::Tuesday, Day::Wednesday]);
}

#[test]
fn cell_types_follow_code_prefix() {
    let schedule = parse_grid_csv(GRID_CSV).unwrap();
    let murano = &schedule.venues[0];

    let lab = murano
        .cells
        .iter()
        .find(|c| c.session_code.as_deref() == Some("L045"))
        .unwrap();
    assert_eq!(lab.category, SlotCategory::Lab);

    let keynote = murano
        .cells
        .iter()
        .find(|c| c.session_code.as_deref() == Some("SK1"))
        .unwrap();
    assert_eq!(keynote.category, SlotCategory::StrategyKeynote);
}

#[test]
fn slot_query_joins_venue_details() {
    let schedule = parse_grid_csv(GRID_CSV).unwrap();
    let at_sessions2 = schedule.cells_at_slot("Sessions #2");

    assert_eq!(at_sessions2.len(), 3);
    assert_eq!(at_sessions2[0].venue, "Murano 3201 (CAP: 250)");
    assert_eq!(at_sessions2[0].capacity, Some(250));
}

#[test]
fn duplicate_code_in_one_slot_is_a_conflict() {
    let schedule = parse_grid_csv(GRID_CSV).unwrap();
    let conflicts = schedule.find_conflicts();

    // S100 twice at Sessions #2, SK1 twice at Strategy Keynote #1;
    // S101/L045 appear once and are not conflicts.
    assert_eq!(conflicts.len(), 2);
    assert_eq!(conflicts[0].time_slot, "Sessions #2");
    assert_eq!(conflicts[0].duplicate_codes, vec!["S100".to_string()]);
    assert_eq!(conflicts[1].time_slot, "Strategy Keynote #1");
    assert_eq!(conflicts[1].duplicate_codes, vec!["SK1".to_string()]);
}

#[test]
fn day_view_filters_slots_and_venues() {
    let schedule = parse_grid_csv(GRID_CSV).unwrap();
    let tuesday = schedule.for_day(Day::Tuesday);

    assert_eq!(tuesday.time_slots.len(), 2);
    assert!(tuesday
        .venues
        .iter()
        .all(|v| v.cells.iter().all(|c| c.day == Day::Tuesday)));
    // Venue with no Tuesday cells is dropped from the view
    assert!(tuesday.venues.iter().all(|v| !v.cells.is_empty()));
}
