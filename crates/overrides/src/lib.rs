//! # Confdash Override Store
//!
//! Persisted manual-edit layer for work-in-progress sessions.
//!
//! Some exported sessions are placeholders; the team fills in real
//! titles, abstracts, and speakers by hand ahead of the export
//! catching up. Those edits live here, keyed by session code, in a
//! single JSON document that must round-trip exactly — it is the
//! sole source of manual edits and outlives any particular upload.
//!
//! The store never rewrites parsed records: [`OverrideStore::apply_all`]
//! merges edits into copies on read, and disabling an override hides
//! it without losing the edit. This is a local cache, not a system of
//! record; storage failures log, degrade, and never propagate.

mod backend;
mod error;
mod store;

pub use backend::{FileBackend, MemoryBackend, OverrideBackend};
pub use error::{OverrideError, Result};
pub use store::{OverrideFields, OverrideStore, SessionOverride};
