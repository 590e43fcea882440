//! # Confdash Aggregation
//!
//! Derived summary views over a classified session collection:
//! headline publish counts, the track × type cross-tab, and the lab
//! coverage rollup per product. All pure functions over an in-memory
//! slice; callers decide whether the slice is raw or override-merged.

mod products;
mod summary;
mod tracks;

pub use products::{product_rollup, ProductRollup, ProductSummary, MASTER_PRODUCT_CATALOG};
pub use summary::{summarize, SessionStats};
pub use tracks::{track_summaries, TrackSummary, TypeCell, NO_TRACK};
