//! `petmap-geo` — pure geographic arithmetic for the PetMap rescue map.
//!
//! This crate is a dependency of every other `petmap-*` crate.  It
//! intentionally has no petmap dependencies and no required external ones
//! (only optional `serde`).  Every function is total over well-formed
//! numeric input: there are no error types, no panics, and no I/O.
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`point`]   | `GeoPoint`, haversine distance, initial bearing       |
//! | [`center`]  | `center_of` — antimeridian-safe spherical centroid    |
//! | [`compass`] | `CompassPoint`, bearing → 8-point cardinal lookup     |
//! | [`format`]  | `format_distance` — metres/kilometres display string  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!
//! # Degenerate-input policy
//!
//! Coordinates are not range-checked: callers are trusted application code,
//! and an out-of-range latitude produces a mathematically defined (if
//! geographically meaningless) result rather than an error.  NaN inputs
//! propagate NaN; display layers must detect non-finite distances and omit
//! the text instead of rendering `"NaN km"`.

pub mod center;
pub mod compass;
pub mod format;
pub mod point;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use center::center_of;
pub use compass::CompassPoint;
pub use format::format_distance;
pub use point::GeoPoint;
