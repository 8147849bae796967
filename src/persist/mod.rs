//! Histogram snapshot persistence.
//!
//! The surrounding application caches computed histograms inside its
//! persisted project format so re-opening a project does not re-run the
//! engine. This module owns that contract: the four scalar fields plus the
//! bin array round-trip through serialization without loss, and re-loading
//! a snapshot reconstructs a [`Histogram`](crate::Histogram) bit-for-bit
//! equal to the one that was saved.
//!
//! Schema types are separate from the runtime type so the stored format can
//! evolve independently and be validated on load.

mod convert;
mod schema;

pub use convert::SnapshotError;
pub use schema::HistogramSnapshot;
