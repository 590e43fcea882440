use confdash_model::SessionRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Headline numbers for one uploaded export
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionStats {
    pub total_sessions: usize,
    pub published_count: usize,

    /// Always `total - published`, so the three stay consistent even
    /// with missing or garbled PUBLISHED values
    pub unpublished_count: usize,

    pub status_counts: BTreeMap<String, usize>,
}

/// Compute the summary statistics over a session collection
#[must_use]
pub fn summarize(sessions: &[SessionRecord]) -> SessionStats {
    let total_sessions = sessions.len();
    let published_count = sessions.iter().filter(|s| s.is_published()).count();

    let mut status_counts: BTreeMap<String, usize> = BTreeMap::new();
    for session in sessions {
        let status = session.status().unwrap_or("Unknown");
        *status_counts.entry(status.to_string()).or_insert(0) += 1;
    }

    SessionStats {
        total_sessions,
        published_count,
        unpublished_count: total_sessions - published_count,
        status_counts,
    }
}
