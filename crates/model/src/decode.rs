use crate::error::{ModelError, Result};
use crate::types::SessionRecord;
use std::collections::BTreeMap;

/// Decode the primary session export into classified records.
///
/// Header-keyed: the first row names the columns, every later row
/// becomes one [`SessionRecord`]. Fully blank rows are skipped. Any
/// structural CSV failure rejects the whole parse; callers keep their
/// previous derived state on error.
pub fn parse_sessions(csv_text: &str) -> Result<Vec<SessionRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(ModelError::MissingHeaders);
    }

    let mut sessions = Vec::new();
    for row in reader.records() {
        let row = row?;
        if row.iter().all(|v| v.trim().is_empty()) {
            continue;
        }

        let mut fields = BTreeMap::new();
        for (name, value) in headers.iter().zip(row.iter()) {
            fields.insert(name.to_string(), value.to_string());
        }
        sessions.push(SessionRecord::from_fields(fields));
    }

    log::info!("Decoded {} session records", sessions.len());
    Ok(sessions)
}

/// Sorted distinct non-blank values of one field across all records.
///
/// Feeds filter dropdowns; values are returned verbatim, only fully
/// blank entries are excluded.
#[must_use]
pub fn unique_values(sessions: &[SessionRecord], field: &str) -> Vec<String> {
    let mut values: Vec<String> = sessions
        .iter()
        .filter_map(|s| s.field(field))
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
        .collect();
    values.sort();
    values.dedup();
    values
}
