use confdash_model::SessionRecord;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Label for sessions with no internal track assigned
pub const NO_TRACK: &str = "No Track";

/// Missing space after a comma in manager names, e.g. "Lee,Sam"
static COMMA_NO_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r",(\S)").unwrap());

/// Published/total counts for one (track, type) cell
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TypeCell {
    pub total: usize,
    pub published: usize,
    pub unpublished: usize,
}

/// Cross-tab row for one internal track
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackSummary {
    pub name: String,

    /// Modal non-empty track-manager value, first-seen on ties,
    /// cosmetically normalized to put a space after commas
    pub manager: Option<String>,

    pub total: usize,
    pub published: usize,
    pub unpublished: usize,

    /// Percentage of published sessions, rounded; 0 on empty tracks
    pub completion_percent: u32,

    /// Per derived-type counts, keyed by display label
    pub by_type: BTreeMap<String, TypeCell>,
}

/// Group sessions by (internal track, derived type) and roll up
/// published/unpublished counts per cell. Tracks come back sorted by
/// name; sessions without a track land under [`NO_TRACK`].
#[must_use]
pub fn track_summaries(sessions: &[SessionRecord]) -> Vec<TrackSummary> {
    struct Acc {
        total: usize,
        published: usize,
        by_type: BTreeMap<String, TypeCell>,
        managers: Vec<(String, usize)>,
    }

    let mut tracks: BTreeMap<String, Acc> = BTreeMap::new();
    for session in sessions {
        let track = session.internal_track().unwrap_or(NO_TRACK);
        let published = session.is_published();

        let acc = tracks.entry(track.to_string()).or_insert_with(|| Acc {
            total: 0,
            published: 0,
            by_type: BTreeMap::new(),
            managers: Vec::new(),
        });

        acc.total += 1;
        if published {
            acc.published += 1;
        }

        let cell = acc
            .by_type
            .entry(session.derived_type.as_str().to_string())
            .or_default();
        cell.total += 1;
        if published {
            cell.published += 1;
        } else {
            cell.unpublished += 1;
        }

        if let Some(manager) = session.track_manager() {
            match acc.managers.iter_mut().find(|(name, _)| name == manager) {
                Some((_, count)) => *count += 1,
                None => acc.managers.push((manager.to_string(), 1)),
            }
        }
    }

    tracks
        .into_iter()
        .map(|(name, acc)| {
            let completion_percent = if acc.total > 0 {
                ((acc.published as f64 / acc.total as f64) * 100.0).round() as u32
            } else {
                0
            };

            // Strictly-greater comparison keeps the first-seen name on ties
            let mut best: Option<&(String, usize)> = None;
            for candidate in &acc.managers {
                if best.map_or(true, |b| candidate.1 > b.1) {
                    best = Some(candidate);
                }
            }
            let manager =
                best.map(|(name, _)| COMMA_NO_SPACE.replace_all(name, ", $1").into_owned());

            TrackSummary {
                name,
                manager,
                total: acc.total,
                published: acc.published,
                unpublished: acc.total - acc.published,
                completion_percent,
                by_type: acc.by_type,
            }
        })
        .collect()
}
