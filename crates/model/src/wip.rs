use crate::types::{columns, SessionRecord};
use once_cell::sync::Lazy;
use regex::Regex;

/// Titles like "Commerce Lab 3" or "Developer Session 12" are slot
/// placeholders, not real content.
static GENERIC_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[A-Za-z\s]+(Lab|Session|Theater)\s+\d+$").unwrap());

/// Inline markup allowed in abstracts, stripped before length checks
static MARKUP_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Substrings that flag an abstract as placeholder text
const WIP_INDICATORS: &[&str] = &[
    "placeholder",
    "tbd",
    "to be determined",
    "speakers tbd",
    "speaker tbd",
    "need speaker",
    "needs speaker",
    "need content",
    "needs content",
    "coming soon",
    "draft",
    "in progress",
    "wip",
];

/// Heuristic check for work-in-progress placeholder sessions.
///
/// A session is WIP when its title matches the generic placeholder
/// pattern, its abstract contains a known WIP indicator, or its
/// markup-stripped abstract is suspiciously short (under 50 chars but
/// not empty). WIP sessions are the ones eligible for manual override.
#[must_use]
pub fn is_wip(session: &SessionRecord) -> bool {
    let title = session.field_or_empty(columns::SESSION_TITLE);
    let description = session.field_or_empty(columns::SESSION_ABSTRACT);
    let desc_lower = description.to_lowercase();

    if GENERIC_TITLE.is_match(title.trim()) {
        return true;
    }

    if WIP_INDICATORS.iter().any(|w| desc_lower.contains(w)) {
        return true;
    }

    let plain = MARKUP_TAG.replace_all(description, "");
    let plain = plain.trim();
    !plain.is_empty() && plain.len() < 50
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn session(title: &str, description: &str) -> SessionRecord {
        let mut fields = BTreeMap::new();
        fields.insert(columns::SESSION_CODE.to_string(), "S1".to_string());
        fields.insert(columns::SESSION_TITLE.to_string(), title.to_string());
        fields.insert(
            columns::SESSION_ABSTRACT.to_string(),
            description.to_string(),
        );
        SessionRecord::from_fields(fields)
    }

    #[test]
    fn generic_titles_are_wip() {
        assert!(is_wip(&session("Commerce Lab 3", "A fully written abstract that goes on for quite a while about the content.")));
        assert!(is_wip(&session("Developer Session 12", "Another fully written abstract that describes the session in real detail.")));
        assert!(!is_wip(&session(
            "Scaling Personalization at the Edge",
            "A fully written abstract that goes on for quite a while about the content."
        )));
    }

    #[test]
    fn indicator_substrings_are_wip() {
        assert!(is_wip(&session(
            "Real Title",
            "Speakers TBD, full abstract coming soon with lots of extra words here."
        )));
        assert!(is_wip(&session(
            "Real Title",
            "This abstract is still a draft and will be replaced before publication."
        )));
    }

    #[test]
    fn short_stripped_abstract_is_wip() {
        assert!(is_wip(&session("Real Title", "<p>Short blurb.</p>")));
        // Empty abstracts are unknowns, not placeholders
        assert!(!is_wip(&session("Real Title", "")));
        assert!(!is_wip(&session("Real Title", "<p></p>")));
    }
}
