//! Animal report value types.

use std::fmt;

use petmap_geo::GeoPoint;

use crate::label::{proximity_label, time_ago};

// ── ReportId ──────────────────────────────────────────────────────────────────

/// Index of a report in [`ReportIndex`][crate::ReportIndex] storage.
///
/// `Copy + Ord + Hash` so it can be used as a map key without ceremony.
/// The inner integer is `pub` for direct indexing; prefer `.index()` for
/// clarity.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReportId(pub u32);

impl ReportId {
    /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
    pub const INVALID: ReportId = ReportId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for ReportId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReportId({})", self.0)
    }
}

// ── Species & status ──────────────────────────────────────────────────────────

/// Kind of animal a report concerns.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Species {
    Dog,
    Cat,
    Bird,
    Other,
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
            Species::Bird => "bird",
            Species::Other => "animal",
        };
        f.write_str(s)
    }
}

/// Where a report stands in the help workflow.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReportStatus {
    NeedsHelp,
    BeingHelped,
    Resolved,
}

impl ReportStatus {
    /// `true` while the report still wants volunteer attention.
    #[inline]
    pub fn is_open(self) -> bool {
        !matches!(self, ReportStatus::Resolved)
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReportStatus::NeedsHelp => "needs help",
            ReportStatus::BeingHelped => "being helped",
            ReportStatus::Resolved => "resolved",
        };
        f.write_str(s)
    }
}

// ── Report ────────────────────────────────────────────────────────────────────

/// One crowd-sourced animal report.
///
/// A transient value object; identity lives in `id`, everything else is
/// plain data supplied by the reporting user.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    pub id: ReportId,
    pub species: Species,
    pub status: ReportStatus,
    pub pos: GeoPoint,
    /// Unix timestamp (seconds) of when the report was filed.
    pub reported_unix: i64,
}

impl Report {
    /// One-line feed caption, e.g. `"dog needs help · 250 m away · 5 min ago"`.
    ///
    /// The proximity fragment is omitted when either coordinate is
    /// non-finite, so an unknown viewer location degrades to
    /// `"dog needs help · 5 min ago"` rather than showing `"NaN km"`.
    pub fn caption(&self, viewer: GeoPoint, now_unix: i64) -> String {
        let when = time_ago(self.reported_unix, now_unix);
        match proximity_label(viewer, self.pos) {
            Some(prox) => format!("{} {} · {prox} · {when}", self.species, self.status),
            None => format!("{} {} · {when}", self.species, self.status),
        }
    }
}
