//! `petmap-feed` — everything the PetMap activity feed and notification
//! panels need between raw coordinates and displayed text.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`report`]   | `Report`, `ReportId`, `Species`, `ReportStatus`          |
//! | [`label`]    | `proximity_label`, `distance_label`, `time_ago`          |
//! | [`index`]    | `ReportIndex` (R-tree), `ReportIndexBuilder`             |
//! | [`provider`] | `ReportProvider` trait, `StaticProvider`, demo sampler   |
//! | [`store`]    | `KeyValueStore` trait, `MemoryStore`                     |
//! | [`error`]    | `StoreError`, `StoreResult<T>`                           |
//!
//! # Feature flags
//!
//! | Flag     | Effect                                                      |
//! |----------|-------------------------------------------------------------|
//! | `sample` | Enables `SampleProvider`, a seeded demo-data generator.     |
//! | `serde`  | Derives `Serialize`/`Deserialize` on public types.          |
//!
//! # NaN policy
//!
//! `petmap-geo` propagates NaN through its arithmetic; this crate is where
//! the buck stops.  Every label helper returns `Option<String>` (or omits
//! the fragment) for non-finite distances so the UI never shows `"NaN km"`.

pub mod error;
pub mod index;
pub mod label;
pub mod provider;
pub mod report;
pub mod store;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{StoreError, StoreResult};
pub use index::{ReportIndex, ReportIndexBuilder};
pub use label::{distance_label, proximity_label, time_ago};
pub use provider::{ReportProvider, StaticProvider};
pub use report::{Report, ReportId, ReportStatus, Species};
pub use store::{KeyValueStore, MemoryStore};

#[cfg(feature = "sample")]
pub use provider::SampleProvider;
