use crate::error::Result;
use crate::types::{columns, TaRecord};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

/// Valid lab code: `L` followed by digits, nothing else
static LAB_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^L\d+$").unwrap());

/// Decode the TA roster into normalized assignment records.
///
/// Rows lacking both a name and a labs field are dropped (the source
/// interleaves per-track header rows with the data), as are rows
/// whose labs field yields zero valid codes after validation.
pub fn parse_roster(csv_text: &str) -> Result<Vec<TaRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    // Header text carries stray padding in real exports
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut tas = Vec::new();
    let mut dropped = 0usize;
    for row in reader.records() {
        let row = row?;
        let mut fields: BTreeMap<&str, &str> = BTreeMap::new();
        for (name, value) in headers.iter().zip(row.iter()) {
            fields.insert(name.as_str(), value.trim());
        }
        let get = |name: &str| fields.get(name).copied().unwrap_or("");

        let first_name = get(columns::FIRST_NAME);
        let last_name = get(columns::LAST_NAME);
        let labs_field = get(columns::LABS);
        if first_name.is_empty() && last_name.is_empty() && labs_field.is_empty() {
            continue;
        }

        let labs: Vec<String> = labs_field
            .split(',')
            .map(str::trim)
            .filter(|lab| LAB_CODE.is_match(lab))
            .map(str::to_uppercase)
            .collect();
        if labs.is_empty() {
            dropped += 1;
            continue;
        }

        let confirmed = matches!(
            get(columns::CONFIRMED).to_lowercase().as_str(),
            "yes" | "y" | "true"
        );

        let full_name = match (first_name.is_empty(), last_name.is_empty()) {
            (false, false) => format!("{first_name} {last_name}"),
            (false, true) => first_name.to_string(),
            (true, false) => last_name.to_string(),
            (true, true) => "Unknown".to_string(),
        };

        tas.push(TaRecord {
            track: get(columns::TRACK).to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            full_name,
            eteam: get(columns::ETEAM).to_string(),
            svp: get(columns::SVP).to_string(),
            labs,
            nominated_by: get(columns::NOMINATED_BY).to_string(),
            notes: get(columns::NOTES).to_string(),
            confirmed,
        });
    }

    log::info!(
        "Decoded {} TA records ({} rows without valid lab codes dropped)",
        tas.len(),
        dropped
    );
    Ok(tas)
}

/// Invert the TA list into a lab-code → assistants index.
///
/// Per-lab lists preserve the order records were encountered in the
/// roster; the index is recomputed on each parse, never persisted.
#[must_use]
pub fn build_lab_index(tas: &[TaRecord]) -> BTreeMap<String, Vec<TaRecord>> {
    let mut index: BTreeMap<String, Vec<TaRecord>> = BTreeMap::new();
    for ta in tas {
        for lab in &ta.labs {
            index.entry(lab.clone()).or_default().push(ta.clone());
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ROSTER: &str = "\
Track,First Name,Last Name,Eteam (Anil or other),SVP (below Anil),Labs #s (EX: L129),\"Nominated by: \n(EX: Instructor, TM)\",Notes,Confirmed
Commerce,Dana,Reyes,,,\"L045, L129\",Instructor,,Yes
Analytics,Sam,Ortiz,,,l200,TM,needs travel,y
Analytics (4),,,,,,,,
Commerce,Pat,Lin,,,\"what, ever\",TM,,true
,,Moss,,,L045,Instructor,,no
";

    #[test]
    fn parses_and_validates_lab_codes() {
        let tas = parse_roster(ROSTER).unwrap();
        // Pat Lin has zero valid codes and is dropped; the per-track
        // header row has neither name nor labs.
        assert_eq!(tas.len(), 3);
        assert_eq!(tas[0].labs, vec!["L045".to_string(), "L129".to_string()]);
        // Lowercase codes are upper-cased
        assert_eq!(tas[1].labs, vec!["L200".to_string()]);
    }

    #[test]
    fn confirmed_accepts_yes_y_true_only() {
        let tas = parse_roster(ROSTER).unwrap();
        assert!(tas[0].confirmed);
        assert!(tas[1].confirmed);
        assert!(!tas[2].confirmed);
    }

    #[test]
    fn full_name_joins_non_empty_parts() {
        let tas = parse_roster(ROSTER).unwrap();
        assert_eq!(tas[0].full_name, "Dana Reyes");
        assert_eq!(tas[2].full_name, "Moss");

        let no_name = "Track,First Name,Last Name,Labs #s (EX: L129),Confirmed\nX,,,L001,yes\n";
        let tas = parse_roster(no_name).unwrap();
        assert_eq!(tas[0].full_name, "Unknown");
    }

    #[test]
    fn lab_index_inverts_assignments_in_order() {
        let tas = parse_roster(ROSTER).unwrap();
        let index = build_lab_index(&tas);

        // Every code in any record appears as a key, and nothing else
        assert_eq!(index.len(), 3);
        let l045 = &index["L045"];
        assert_eq!(l045.len(), 2);
        assert_eq!(l045[0].full_name, "Dana Reyes");
        assert_eq!(l045[1].full_name, "Moss");
        assert_eq!(index["L129"].len(), 1);
        assert_eq!(index["L200"].len(), 1);
    }
}
