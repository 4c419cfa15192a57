//! Spatial index over reports.
//!
//! # Data layout
//!
//! Reports live in a `Vec<Report>` indexed by `ReportId`; an R-tree (via
//! `rstar`) maps `[lat, lon]` back to IDs for nearest-report and
//! radius queries.  The index is immutable after [`build`]
//! [ReportIndexBuilder::build] — the map screen rebuilds it when the
//! report set changes, which at crowd-sourced volumes is cheap
//! (O(N log N) bulk load).
//!
//! # Metric caveat
//!
//! Nearest-neighbor ordering uses squared Euclidean distance in lat/lon
//! degree space — error < 0.1 % below 60° latitude, fine for picking the
//! closest marker in a city.  [`within_km`][ReportIndex::within_km] does
//! an exact haversine confirm after the box prefilter, so radius results
//! are correct regardless.  Neither query spans the antimeridian; a city
//! viewport straddling ±180° longitude is out of scope.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use petmap_geo::GeoPoint;

use crate::report::{Report, ReportId, ReportStatus, Species};

/// Kilometres per degree of latitude on the 6371 km sphere (and per degree
/// of longitude at the equator).
const KM_PER_DEG: f64 = 111.195;

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a 2-D `[lat, lon]` point with the
/// associated `ReportId`.
#[derive(Clone)]
struct ReportEntry {
    point: [f64; 2], // [lat, lon]
    id: ReportId,
}

impl RTreeObject for ReportEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for ReportEntry {
    /// Squared Euclidean distance in lat/lon space (see module docs).
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── ReportIndex ───────────────────────────────────────────────────────────────

/// Immutable snapshot of all reports plus a spatial index.
///
/// Do not construct directly; use [`ReportIndexBuilder`].
pub struct ReportIndex {
    reports: Vec<Report>,
    spatial_idx: RTree<ReportEntry>,
}

impl ReportIndex {
    /// An index with no reports.  Any query returns empty/`None`.
    pub fn empty() -> Self {
        ReportIndexBuilder::new().build()
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Look up a report by ID.  `None` for out-of-range or `INVALID` IDs.
    pub fn report(&self, id: ReportId) -> Option<&Report> {
        self.reports.get(id.index())
    }

    /// Iterate all reports in ID order.
    pub fn iter(&self) -> impl Iterator<Item = &Report> {
        self.reports.iter()
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The report closest to `pos`, or `None` when the index is empty.
    pub fn nearest(&self, pos: GeoPoint) -> Option<ReportId> {
        self.spatial_idx
            .nearest_neighbor(&[pos.lat, pos.lon])
            .map(|e| e.id)
    }

    /// Up to `k` reports closest to `pos`, ascending by distance.
    pub fn k_nearest(&self, pos: GeoPoint, k: usize) -> Vec<ReportId> {
        self.spatial_idx
            .nearest_neighbor_iter(&[pos.lat, pos.lon])
            .take(k)
            .map(|e| e.id)
            .collect()
    }

    /// All reports within `radius_km` of `pos`, ascending by exact
    /// haversine distance.
    ///
    /// A degree-space bounding box (widened by 1/cos(lat) in longitude)
    /// prefilters candidates; the exact distance check then discards the
    /// box corners.
    pub fn within_km(&self, pos: GeoPoint, radius_km: f64) -> Vec<ReportId> {
        let half_lat = radius_km / KM_PER_DEG;
        let cos_lat = pos.lat.to_radians().cos().abs();
        let half_lon = if cos_lat < 1e-6 {
            180.0 // polar query: longitude no longer constrains the box
        } else {
            (radius_km / (KM_PER_DEG * cos_lat)).min(180.0)
        };

        let envelope = AABB::from_corners(
            [pos.lat - half_lat, pos.lon - half_lon],
            [pos.lat + half_lat, pos.lon + half_lon],
        );

        let mut hits: Vec<(f64, ReportId)> = self
            .spatial_idx
            .locate_in_envelope(&envelope)
            .map(|e| {
                let d = pos.distance_km(GeoPoint::new(e.point[0], e.point[1]));
                (d, e.id)
            })
            .filter(|(d, _)| *d <= radius_km)
            .collect();

        hits.sort_by(|a, b| a.0.total_cmp(&b.0));
        hits.into_iter().map(|(_, id)| id).collect()
    }
}

// ── ReportIndexBuilder ────────────────────────────────────────────────────────

/// Accumulate reports, then call [`build`](Self::build).
///
/// IDs are assigned sequentially from 0 in insertion order, so callers can
/// hold on to the returned `ReportId`s across the build.
///
/// # Example
///
/// ```
/// use petmap_geo::GeoPoint;
/// use petmap_feed::{ReportIndexBuilder, ReportStatus, Species};
///
/// let mut b = ReportIndexBuilder::new();
/// let id = b.add(
///     Species::Dog,
///     ReportStatus::NeedsHelp,
///     GeoPoint::new(51.5007, -0.1246),
///     1_700_000_000,
/// );
/// let idx = b.build();
/// assert_eq!(idx.nearest(GeoPoint::new(51.5, -0.12)), Some(id));
/// ```
pub struct ReportIndexBuilder {
    reports: Vec<Report>,
}

impl ReportIndexBuilder {
    pub fn new() -> Self {
        Self { reports: Vec::new() }
    }

    /// Pre-allocate for the expected report count.
    pub fn with_capacity(reports: usize) -> Self {
        Self { reports: Vec::with_capacity(reports) }
    }

    /// Add a report and return its `ReportId` (sequential from 0).
    pub fn add(
        &mut self,
        species: Species,
        status: ReportStatus,
        pos: GeoPoint,
        reported_unix: i64,
    ) -> ReportId {
        let id = ReportId(self.reports.len() as u32);
        self.reports.push(Report { id, species, status, pos, reported_unix });
        id
    }

    /// Add an already-assembled report, overwriting its `id` field with the
    /// next sequential ID (used when loading from a
    /// [`ReportProvider`][crate::ReportProvider]).
    pub fn push(&mut self, report: Report) -> ReportId {
        let id = ReportId(self.reports.len() as u32);
        self.reports.push(Report { id, ..report });
        id
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Consume the builder and produce a [`ReportIndex`].
    ///
    /// Bulk-loads the R-tree for O(N log N) construction (faster than N
    /// inserts).
    pub fn build(self) -> ReportIndex {
        let entries: Vec<ReportEntry> = self
            .reports
            .iter()
            .map(|r| ReportEntry {
                point: [r.pos.lat, r.pos.lon],
                id: r.id,
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        ReportIndex { reports: self.reports, spatial_idx }
    }
}

impl Default for ReportIndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}
