use crate::session_type::{classify, SessionType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Column names of the primary session export, exact and case-significant.
///
/// The export is header-keyed; these constants are the only place the
/// raw header text appears.
pub mod columns {
    pub const SESSION_CODE: &str = "SESSION CODE";
    pub const SESSION_TITLE: &str = "SESSION TITLE";
    pub const SESSION_ABSTRACT: &str = "SESSION ABSTRACT";
    pub const CFP_SESSION_TYPE: &str = "CFP: SESSION TYPE";
    pub const INTERNAL_TRACK: &str = "CFP: INTERNAL TRACK (SUMMIT)";
    pub const PUBLISHED: &str = "PUBLISHED";
    pub const SESSION_STATUS: &str = "SESSION STATUS";
    pub const PRODUCTS: &str = "CFP: PRODUCTS";
    pub const SPEAKER1_NAME: &str = "SPEAKER (ASSIGNED TO SESSION TASKS) NAME";
    pub const SPEAKER1_COMPANY: &str = "SPEAKER (ASSIGNED TO SESSION TASKS) COMPANY";
    pub const SPEAKER2_NAME: &str = "SPEAKER NAME";
    pub const SPEAKER2_COMPANY: &str = "SPEAKER COMPANY";
    pub const TRACK_MANAGER: &str = "TRACK MANAGER NAME";
    pub const SESSION_DATE: &str = "SESSION DATE";
    pub const SESSION_START_TIME: &str = "SESSION START TIME";
    pub const SESSION_END_TIME: &str = "SESSION END TIME";
    pub const SESSION_ROOM: &str = "SESSION ROOM";
    pub const SESSION_CAPACITY: &str = "SESSION CAPACITY";
    pub const CATALOG_URL: &str = "SESSION CATALOG URL";

    /// Marker field set on records whose fields were replaced by a
    /// manual override. Never present in raw export data.
    pub const HAS_OVERRIDE_MARKER: &str = "_HAS_WIP_OVERRIDE";
}

/// One row of the primary session export plus its derived type.
///
/// Raw fields are kept verbatim and never mutated after parse; manual
/// edits live in a separate override layer and are merged into copies
/// on read. The derived type is computed exactly once, at parse time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionRecord {
    /// Raw field values keyed by export column name
    pub fields: BTreeMap<String, String>,

    /// Session category derived from the code prefix
    pub derived_type: SessionType,
}

impl SessionRecord {
    /// Build a record from decoded fields, classifying it in the process
    #[must_use]
    pub fn from_fields(fields: BTreeMap<String, String>) -> Self {
        let code = fields.get(columns::SESSION_CODE).map_or("", String::as_str);
        let cfp_type = fields
            .get(columns::CFP_SESSION_TYPE)
            .map_or("", String::as_str);
        let derived_type = classify(code, cfp_type);
        Self {
            fields,
            derived_type,
        }
    }

    /// Get a raw field value, if present and non-empty
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Get a raw field value, defaulting to the empty string
    #[must_use]
    pub fn field_or_empty(&self, name: &str) -> &str {
        self.fields.get(name).map_or("", String::as_str)
    }

    /// Replace a field value on this copy. Only the override merge
    /// path uses this; raw parsed collections are never written to.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        self.fields.insert(name.to_string(), value.into());
    }

    #[must_use]
    pub fn code(&self) -> &str {
        self.field_or_empty(columns::SESSION_CODE)
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.field_or_empty(columns::SESSION_TITLE)
    }

    #[must_use]
    pub fn abstract_text(&self) -> &str {
        self.field_or_empty(columns::SESSION_ABSTRACT)
    }

    #[must_use]
    pub fn internal_track(&self) -> Option<&str> {
        self.field(columns::INTERNAL_TRACK)
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.field(columns::SESSION_STATUS)
    }

    #[must_use]
    pub fn track_manager(&self) -> Option<&str> {
        self.field(columns::TRACK_MANAGER)
    }

    /// Case-insensitive `PUBLISHED == "yes"` test
    #[must_use]
    pub fn is_published(&self) -> bool {
        self.field_or_empty(columns::PUBLISHED)
            .eq_ignore_ascii_case("yes")
    }

    /// Comma-split product list, trimmed, empties dropped
    #[must_use]
    pub fn products(&self) -> Vec<&str> {
        self.field_or_empty(columns::PRODUCTS)
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }

    /// Speaker names in slot order (assigned speaker first)
    #[must_use]
    pub fn speaker_names(&self) -> Vec<&str> {
        [columns::SPEAKER1_NAME, columns::SPEAKER2_NAME]
            .into_iter()
            .filter_map(|c| self.field(c))
            .collect()
    }

    /// Check whether this copy carries merged override fields
    #[must_use]
    pub fn has_override(&self) -> bool {
        self.fields.contains_key(columns::HAS_OVERRIDE_MARKER)
    }
}
