use serde::{Deserialize, Serialize};

/// Canonical session category derived from the session code.
///
/// Distinct from the CFP-submitted type: the code prefix is the
/// authoritative signal, with a single override for Skill Exchange
/// submissions (which reuse `S`/`OS` codes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionType {
    #[serde(rename = "Online Session")]
    OnlineSession,
    #[serde(rename = "Session")]
    Session,
    #[serde(rename = "Hands-on Lab")]
    HandsOnLab,
    #[serde(rename = "Certification Exam")]
    CertificationExam,
    #[serde(rename = "Community Theater")]
    CommunityTheater,
    #[serde(rename = "Keynote")]
    Keynote,
    #[serde(rename = "Sneaks")]
    Sneaks,
    #[serde(rename = "Strategy Keynote")]
    StrategyKeynote,
    #[serde(rename = "Pre-conference Training")]
    PreConferenceTraining,
    #[serde(rename = "Skill Exchange")]
    SkillExchange,
    #[serde(rename = "Other")]
    Other,
}

impl SessionType {
    /// Get the display label used throughout the derived views
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OnlineSession => "Online Session",
            Self::Session => "Session",
            Self::HandsOnLab => "Hands-on Lab",
            Self::CertificationExam => "Certification Exam",
            Self::CommunityTheater => "Community Theater",
            Self::Keynote => "Keynote",
            Self::Sneaks => "Sneaks",
            Self::StrategyKeynote => "Strategy Keynote",
            Self::PreConferenceTraining => "Pre-conference Training",
            Self::SkillExchange => "Skill Exchange",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for SessionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derive the session type from the code prefix and the raw CFP type.
///
/// Prefix checks run most-specific first; in particular `SK` must be
/// tested before `S` or Strategy Keynotes would be tagged as plain
/// Sessions. Total function: unmatched codes fall back to `Other`.
#[must_use]
pub fn classify(session_code: &str, cfp_session_type: &str) -> SessionType {
    let derived = if session_code.starts_with("OS") {
        SessionType::OnlineSession
    } else if session_code == "GS1" || session_code == "GS2" {
        SessionType::Keynote
    } else if session_code == "GS3" {
        SessionType::Sneaks
    } else if session_code.starts_with("CERT") {
        SessionType::CertificationExam
    } else if session_code.starts_with("CP") {
        SessionType::CommunityTheater
    } else if session_code.starts_with("SK") {
        SessionType::StrategyKeynote
    } else if session_code.starts_with("TRN") {
        SessionType::PreConferenceTraining
    } else if session_code.starts_with("L") {
        SessionType::HandsOnLab
    } else if session_code.starts_with("S") {
        SessionType::Session
    } else {
        SessionType::Other
    };

    // Skill Exchanges reuse S/OS codes; the CFP type is the only tell.
    if cfp_session_type.contains("Skill Exchange") {
        return SessionType::SkillExchange;
    }

    derived
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_by_prefix() {
        assert_eq!(classify("OS201", ""), SessionType::OnlineSession);
        assert_eq!(classify("S324", ""), SessionType::Session);
        assert_eq!(classify("L045", ""), SessionType::HandsOnLab);
        assert_eq!(classify("CERT12", ""), SessionType::CertificationExam);
        assert_eq!(classify("CP7", ""), SessionType::CommunityTheater);
        assert_eq!(classify("TRN3", ""), SessionType::PreConferenceTraining);
        assert_eq!(classify("X999", ""), SessionType::Other);
        assert_eq!(classify("", ""), SessionType::Other);
    }

    #[test]
    fn keynote_codes_are_exact_matches() {
        assert_eq!(classify("GS1", ""), SessionType::Keynote);
        assert_eq!(classify("GS2", ""), SessionType::Keynote);
        assert_eq!(classify("GS3", ""), SessionType::Sneaks);
        // GS4 is not a keynote code and has no known prefix
        assert_eq!(classify("GS4", ""), SessionType::Other);
    }

    #[test]
    fn sk_prefix_never_classifies_as_session() {
        assert_eq!(classify("SK100", ""), SessionType::StrategyKeynote);
        assert_eq!(classify("SK2", ""), SessionType::StrategyKeynote);
    }

    #[test]
    fn skill_exchange_overrides_code_prefix() {
        assert_eq!(
            classify("S120", "Skill Exchange - Intermediate"),
            SessionType::SkillExchange
        );
        assert_eq!(
            classify("OS88", "Skill Exchange"),
            SessionType::SkillExchange
        );
        assert_eq!(classify("L045", "Hands-on Lab"), SessionType::HandsOnLab);
    }
}
