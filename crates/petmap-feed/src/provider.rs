//! Injectable report sources.
//!
//! The UI never hard-codes where reports come from: anything that can hand
//! over a `Vec<Report>` is a [`ReportProvider`].  Production wires in a
//! provider backed by whatever sync layer the app uses; tests and demo
//! screens use [`StaticProvider`] or the seeded [`SampleProvider`]
//! (feature `sample`).

use crate::index::{ReportIndex, ReportIndexBuilder};
use crate::report::Report;

/// A source of reports for the feed and map layers.
pub trait ReportProvider {
    /// Produce the current report set.  Implementations own freshness and
    /// ordering; IDs are reassigned on indexing, so providers need not
    /// keep them unique.
    fn reports(&self) -> Vec<Report>;

    /// Build a [`ReportIndex`] from this provider's current reports.
    fn index(&self) -> ReportIndex {
        let reports = self.reports();
        let mut b = ReportIndexBuilder::with_capacity(reports.len());
        for r in reports {
            b.push(r);
        }
        b.build()
    }
}

/// A provider that returns a fixed, caller-assembled report set.
pub struct StaticProvider {
    pub reports: Vec<Report>,
}

impl StaticProvider {
    pub fn new(reports: Vec<Report>) -> Self {
        Self { reports }
    }
}

impl ReportProvider for StaticProvider {
    fn reports(&self) -> Vec<Report> {
        self.reports.clone()
    }
}

// ── SampleProvider (feature = "sample") ───────────────────────────────────────

#[cfg(feature = "sample")]
mod sample {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use petmap_geo::GeoPoint;

    use crate::report::{Report, ReportId, ReportStatus, Species};

    use super::ReportProvider;

    /// Deterministic demo-data generator: `count` reports scattered within
    /// roughly ±5 km of `center`, filed within the day before `now_unix`.
    ///
    /// The same seed always produces the same reports, so demo screens and
    /// screenshots are reproducible.
    pub struct SampleProvider {
        pub center: GeoPoint,
        pub count: usize,
        pub seed: u64,
        /// Unix timestamp the generated `reported_unix` values count back from.
        pub now_unix: i64,
    }

    impl SampleProvider {
        pub fn new(center: GeoPoint, count: usize, seed: u64, now_unix: i64) -> Self {
            Self { center, count, seed, now_unix }
        }
    }

    impl ReportProvider for SampleProvider {
        fn reports(&self) -> Vec<Report> {
            let mut rng = SmallRng::seed_from_u64(self.seed);
            (0..self.count)
                .map(|i| {
                    // ~±0.05° ≈ ±5.5 km of latitude
                    let lat = self.center.lat + rng.gen_range(-0.05..0.05);
                    let lon = self.center.lon + rng.gen_range(-0.05..0.05);
                    let species = match rng.gen_range(0..4u8) {
                        0 => Species::Dog,
                        1 => Species::Cat,
                        2 => Species::Bird,
                        _ => Species::Other,
                    };
                    let status = match rng.gen_range(0..3u8) {
                        0 => ReportStatus::NeedsHelp,
                        1 => ReportStatus::BeingHelped,
                        _ => ReportStatus::Resolved,
                    };
                    Report {
                        id: ReportId(i as u32),
                        species,
                        status,
                        pos: GeoPoint::new(lat, lon),
                        reported_unix: self.now_unix - rng.gen_range(0..86_400i64),
                    }
                })
                .collect()
        }
    }
}

#[cfg(feature = "sample")]
pub use sample::SampleProvider;
