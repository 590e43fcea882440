//! # Confdash Session Model
//!
//! Session records, type classification, and primary-export decoding
//! for the conference-operations pipeline.
//!
//! The primary CSV export is header-keyed; each data row becomes a
//! [`SessionRecord`] carrying the raw field map verbatim plus one
//! derived field: the [`SessionType`] computed from the session-code
//! prefix. The session code is the join key shared with the schedule
//! grid and the TA roster; it is never normalized at ingestion.
//!
//! ```text
//! CSV text
//!     │
//!     ├──> csv decode (header-keyed, blank rows skipped)
//!     │
//!     ├──> classify() per row (prefix rules + Skill Exchange override)
//!     │
//!     └──> Vec<SessionRecord> — raw fields never mutated afterwards
//! ```

mod decode;
mod error;
mod session_type;
mod types;
mod wip;

pub use decode::{parse_sessions, unique_values};
pub use error::{ModelError, Result};
pub use session_type::{classify, SessionType};
pub use types::{columns, SessionRecord};
pub use wip::is_wip;
