use serde::{Deserialize, Serialize};

/// Column names of the roster export, post-trim.
///
/// Two headers embed examples in their text, one across a literal
/// newline; they must match exactly or the fields decode as absent.
pub mod columns {
    pub const TRACK: &str = "Track";
    pub const FIRST_NAME: &str = "First Name";
    pub const LAST_NAME: &str = "Last Name";
    pub const ETEAM: &str = "Eteam (Anil or other)";
    pub const SVP: &str = "SVP (below Anil)";
    pub const LABS: &str = "Labs #s (EX: L129)";
    pub const NOMINATED_BY: &str = "Nominated by: \n(EX: Instructor, TM)";
    pub const NOTES: &str = "Notes";
    pub const CONFIRMED: &str = "Confirmed";
}

/// One teaching-assistant assignment row, normalized.
///
/// Records that survive parsing always carry at least one validated
/// lab code; rows with none are dropped as carrying no actionable
/// assignment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaRecord {
    pub track: String,
    pub first_name: String,
    pub last_name: String,

    /// First and last name joined by a single space; `Unknown` when
    /// both are empty
    pub full_name: String,

    pub eteam: String,
    pub svp: String,

    /// Upper-cased lab codes matching `L<digits>`
    pub labs: Vec<String>,

    pub nominated_by: String,
    pub notes: String,
    pub confirmed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_round_trips_through_json() {
        let ta = TaRecord {
            track: "Commerce".to_string(),
            first_name: "Dana".to_string(),
            last_name: "Reyes".to_string(),
            full_name: "Dana Reyes".to_string(),
            eteam: String::new(),
            svp: String::new(),
            labs: vec!["L045".to_string(), "L129".to_string()],
            nominated_by: "Instructor".to_string(),
            notes: String::new(),
            confirmed: true,
        };
        let json = serde_json::to_string(&ta).unwrap();
        let back: TaRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(ta, back);
    }
}
