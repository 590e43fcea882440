use crate::backend::OverrideBackend;
use confdash_model::{columns, SessionRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Manually edited fields for one session.
///
/// Absent fields fall back to the original record on merge; empty
/// strings are treated the same as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OverrideFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaker1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaker1_company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaker2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaker2_company: Option<String>,
}

/// One persisted override entry: the edited fields plus bookkeeping
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionOverride {
    #[serde(flatten)]
    pub fields: OverrideFields,

    /// RFC 3339 timestamp of the last save
    pub updated_at: String,

    /// Visibility toggle; absent means enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl SessionOverride {
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}

/// Persisted manual-edit layer keyed by session code.
///
/// Overrides never touch the raw parsed records; they are merged into
/// copies on read. Keys are session codes, so an override survives
/// re-uploads of a newer export as long as codes stay stable.
/// Persistence failures degrade to in-memory operation: loads fall
/// back to an empty map, saves report `false`, and the CSV-derived
/// views keep rendering either way.
pub struct OverrideStore<B: OverrideBackend> {
    backend: B,
    overrides: BTreeMap<String, SessionOverride>,
}

impl<B: OverrideBackend> OverrideStore<B> {
    /// Open the store, reading whatever the backend has persisted
    pub fn open(backend: B) -> Self {
        let overrides = match backend.load() {
            Ok(Some(payload)) => match serde_json::from_str(&payload) {
                Ok(map) => map,
                Err(e) => {
                    log::error!("Discarding unreadable override payload: {e}");
                    BTreeMap::new()
                }
            },
            Ok(None) => BTreeMap::new(),
            Err(e) => {
                log::error!("Failed to load overrides, starting empty: {e}");
                BTreeMap::new()
            }
        };
        Self { backend, overrides }
    }

    /// Upsert the edited fields for a session code.
    ///
    /// Stamps the entry with the current time and keeps any existing
    /// enabled flag. Returns false when persistence fails; the
    /// in-memory entry is kept either way.
    pub fn save(&mut self, code: &str, fields: OverrideFields) -> bool {
        let enabled = self.overrides.get(code).and_then(|o| o.enabled);
        self.overrides.insert(
            code.to_string(),
            SessionOverride {
                fields,
                updated_at: chrono::Utc::now().to_rfc3339(),
                enabled,
            },
        );
        self.persist("save", code)
    }

    #[must_use]
    pub fn get(&self, code: &str) -> Option<&SessionOverride> {
        self.overrides.get(code)
    }

    #[must_use]
    pub fn has(&self, code: &str) -> bool {
        self.overrides.contains_key(code)
    }

    /// Remove an override. Returns true only when an entry existed
    /// and the removal was persisted.
    pub fn delete(&mut self, code: &str) -> bool {
        if self.overrides.remove(code).is_none() {
            return false;
        }
        self.persist("delete", code)
    }

    /// Toggle an override's visibility without deleting the edit.
    /// No-op returning false when no override exists for the code.
    pub fn set_enabled(&mut self, code: &str, enabled: bool) -> bool {
        match self.overrides.get_mut(code) {
            Some(entry) => {
                entry.enabled = Some(enabled);
                self.persist("toggle", code)
            }
            None => false,
        }
    }

    /// Whether the override for a code is visible; true by default
    #[must_use]
    pub fn is_enabled(&self, code: &str) -> bool {
        self.overrides
            .get(code)
            .map_or(true, SessionOverride::is_enabled)
    }

    /// Number of stored overrides, enabled or not
    #[must_use]
    pub fn count(&self) -> usize {
        self.overrides.len()
    }

    /// Iterate stored entries in code order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SessionOverride)> {
        self.overrides.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Merge stored overrides into a derived view of the sessions.
    ///
    /// With `show_overrides` false the input is returned unchanged.
    /// Otherwise each session whose code has an enabled override gets
    /// the override's present fields, the rest falling back to the
    /// original values, and is tagged with the override marker.
    /// Raw records are never written to; idempotent under repeated
    /// application.
    #[must_use]
    pub fn apply_all(&self, sessions: &[SessionRecord], show_overrides: bool) -> Vec<SessionRecord> {
        if !show_overrides {
            return sessions.to_vec();
        }

        sessions
            .iter()
            .map(|session| {
                let Some(entry) = self.overrides.get(session.code()) else {
                    return session.clone();
                };
                if !entry.is_enabled() {
                    return session.clone();
                }

                let mut merged = session.clone();
                merge_field(&mut merged, columns::SESSION_TITLE, &entry.fields.title);
                merge_field(&mut merged, columns::SESSION_ABSTRACT, &entry.fields.description);
                merge_field(&mut merged, columns::SPEAKER1_NAME, &entry.fields.speaker1);
                merge_field(
                    &mut merged,
                    columns::SPEAKER1_COMPANY,
                    &entry.fields.speaker1_company,
                );
                merge_field(&mut merged, columns::SPEAKER2_NAME, &entry.fields.speaker2);
                merge_field(
                    &mut merged,
                    columns::SPEAKER2_COMPANY,
                    &entry.fields.speaker2_company,
                );
                merged.set_field(columns::HAS_OVERRIDE_MARKER, "true");
                merged
            })
            .collect()
    }

    fn persist(&self, op: &str, code: &str) -> bool {
        let payload = match serde_json::to_string_pretty(&self.overrides) {
            Ok(payload) => payload,
            Err(e) => {
                log::error!("Failed to serialize overrides on {op} of {code}: {e}");
                return false;
            }
        };
        match self.backend.persist(&payload) {
            Ok(()) => true,
            Err(e) => {
                log::error!("Failed to persist overrides on {op} of {code}: {e}");
                false
            }
        }
    }
}

fn merge_field(record: &mut SessionRecord, column: &str, value: &Option<String>) {
    if let Some(v) = value {
        if !v.is_empty() {
            record.set_field(column, v.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{FailingBackend, FileBackend, MemoryBackend};
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap as Map;

    fn session(code: &str, title: &str) -> SessionRecord {
        let mut fields = Map::new();
        fields.insert(columns::SESSION_CODE.to_string(), code.to_string());
        fields.insert(columns::SESSION_TITLE.to_string(), title.to_string());
        fields.insert(
            columns::SESSION_ABSTRACT.to_string(),
            "Original abstract".to_string(),
        );
        SessionRecord::from_fields(fields)
    }

    fn title_override(title: &str) -> OverrideFields {
        OverrideFields {
            title: Some(title.to_string()),
            ..OverrideFields::default()
        }
    }

    #[test]
    fn save_get_delete_round_trip() {
        let mut store = OverrideStore::open(MemoryBackend::new());
        assert!(store.save("S101", title_override("Edited")));

        let entry = store.get("S101").unwrap();
        assert_eq!(entry.fields.title.as_deref(), Some("Edited"));
        assert!(!entry.updated_at.is_empty());

        assert!(store.has("S101"));
        assert_eq!(store.count(), 1);
        assert!(store.delete("S101"));
        assert!(!store.has("S101"));
        assert!(!store.delete("S101"));
    }

    #[test]
    fn persisted_format_round_trips_exactly() {
        let mut store = OverrideStore::open(MemoryBackend::new());
        store.save(
            "L045",
            OverrideFields {
                title: Some("New title".to_string()),
                speaker1: Some("Dana Reyes".to_string()),
                speaker1_company: Some("Acme".to_string()),
                ..OverrideFields::default()
            },
        );
        store.set_enabled("L045", false);

        let payload = serde_json::to_string(&store.overrides).unwrap();
        let reparsed: Map<String, SessionOverride> = serde_json::from_str(&payload).unwrap();
        assert_eq!(reparsed, store.overrides);

        // Disk keys are the original camelCase names
        let raw: serde_json::Value = serde_json::from_str(&payload).unwrap();
        let entry = &raw["L045"];
        assert!(entry.get("speaker1Company").is_some());
        assert!(entry.get("updatedAt").is_some());
        assert_eq!(entry["enabled"], serde_json::Value::Bool(false));
        assert!(entry.get("description").is_none());
    }

    #[test]
    fn reopen_reads_persisted_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overrides.json");

        let mut store = OverrideStore::open(FileBackend::new(&path));
        assert!(store.save("S101", title_override("Edited")));
        drop(store);

        let store = OverrideStore::open(FileBackend::new(&path));
        assert_eq!(store.count(), 1);
        assert_eq!(
            store.get("S101").unwrap().fields.title.as_deref(),
            Some("Edited")
        );
    }

    #[test]
    fn broken_backend_degrades_to_memory_only() {
        let mut store = OverrideStore::open(FailingBackend);
        assert_eq!(store.count(), 0);

        // Save reports failure but the in-memory entry still works
        assert!(!store.save("S101", title_override("Edited")));
        assert!(store.has("S101"));
    }

    #[test]
    fn apply_all_merges_present_fields_only() {
        let mut store = OverrideStore::open(MemoryBackend::new());
        store.save("S101", title_override("Edited title"));

        let sessions = vec![session("S101", "Original title"), session("S200", "Untouched")];
        let merged = store.apply_all(&sessions, true);

        assert_eq!(merged[0].title(), "Edited title");
        // Absent override fields fall back to the original
        assert_eq!(merged[0].abstract_text(), "Original abstract");
        assert!(merged[0].has_override());

        assert_eq!(merged[1].title(), "Untouched");
        assert!(!merged[1].has_override());

        // Raw input is never mutated
        assert_eq!(sessions[0].title(), "Original title");
    }

    #[test]
    fn apply_all_disabled_flag_and_no_show_are_no_ops() {
        let mut store = OverrideStore::open(MemoryBackend::new());
        store.save("S101", title_override("Edited title"));

        let sessions = vec![session("S101", "Original title")];

        let hidden = store.apply_all(&sessions, false);
        assert_eq!(hidden, sessions);

        assert!(store.set_enabled("S101", false));
        assert!(!store.is_enabled("S101"));
        let disabled = store.apply_all(&sessions, true);
        assert_eq!(disabled[0].title(), "Original title");
        assert!(!disabled[0].has_override());

        // Toggling a code with no override is a no-op
        assert!(!store.set_enabled("S999", true));
        assert!(store.is_enabled("S999"));
    }

    #[test]
    fn apply_all_is_idempotent() {
        let mut store = OverrideStore::open(MemoryBackend::new());
        store.save("S101", title_override("Edited title"));

        let sessions = vec![session("S101", "Original title")];
        let once = store.apply_all(&sessions, true);
        let twice = store.apply_all(&once, true);
        assert_eq!(once, twice);
    }
}
