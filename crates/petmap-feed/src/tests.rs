//! Unit tests for petmap-feed.
//!
//! All tests use hand-placed central-London coordinates so distances are
//! easy to reason about (Big Ben ↔ London Eye ≈ 0.77 km).

#[cfg(test)]
mod helpers {
    use petmap_geo::GeoPoint;

    use crate::{ReportId, ReportIndex, ReportIndexBuilder, ReportStatus, Species};

    pub const BIG_BEN: GeoPoint = GeoPoint { lat: 51.5007, lon: -0.1246 };
    pub const LONDON_EYE: GeoPoint = GeoPoint { lat: 51.5074, lon: -0.1278 };
    pub const PETERBOROUGH: GeoPoint = GeoPoint { lat: 52.5695, lon: -0.2405 };

    /// Three reports: one at Big Ben, one ~0.77 km away, one ~119 km away.
    pub fn london_index() -> (ReportIndex, [ReportId; 3]) {
        let mut b = ReportIndexBuilder::new();
        let at = b.add(Species::Dog, ReportStatus::NeedsHelp, BIG_BEN, 1_700_000_000);
        let near = b.add(Species::Cat, ReportStatus::BeingHelped, LONDON_EYE, 1_700_000_100);
        let far = b.add(Species::Bird, ReportStatus::Resolved, PETERBOROUGH, 1_700_000_200);
        (b.build(), [at, near, far])
    }
}

// ── Report value types ────────────────────────────────────────────────────────

#[cfg(test)]
mod report {
    use petmap_geo::GeoPoint;

    use crate::{Report, ReportId, ReportStatus, Species};

    use super::helpers::BIG_BEN;

    #[test]
    fn id_sentinel_and_index() {
        assert_eq!(ReportId::INVALID.0, u32::MAX);
        assert_eq!(ReportId::default(), ReportId::INVALID);
        assert_eq!(ReportId(42).index(), 42);
        assert_eq!(ReportId(7).to_string(), "ReportId(7)");
    }

    #[test]
    fn display_labels() {
        assert_eq!(Species::Dog.to_string(), "dog");
        assert_eq!(Species::Other.to_string(), "animal");
        assert_eq!(ReportStatus::NeedsHelp.to_string(), "needs help");
        assert_eq!(ReportStatus::Resolved.to_string(), "resolved");
    }

    #[test]
    fn status_is_open() {
        assert!(ReportStatus::NeedsHelp.is_open());
        assert!(ReportStatus::BeingHelped.is_open());
        assert!(!ReportStatus::Resolved.is_open());
    }

    #[test]
    fn caption_with_known_distance() {
        let r = Report {
            id: ReportId(0),
            species: Species::Dog,
            status: ReportStatus::NeedsHelp,
            pos: BIG_BEN,
            reported_unix: 1_700_000_000,
        };
        // Viewer standing on the report: zero distance, five minutes later.
        let caption = r.caption(BIG_BEN, 1_700_000_300);
        assert_eq!(caption, "dog needs help · 0 m away · 5 min ago");
    }

    #[test]
    fn caption_omits_unknown_distance() {
        let r = Report {
            id: ReportId(0),
            species: Species::Cat,
            status: ReportStatus::BeingHelped,
            pos: BIG_BEN,
            reported_unix: 1_700_000_000,
        };
        let nowhere = GeoPoint::new(f64::NAN, f64::NAN);
        let caption = r.caption(nowhere, 1_700_000_000);
        assert_eq!(caption, "cat being helped · just now");
        assert!(!caption.contains("NaN"));
    }
}

// ── Labels ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod label {
    use petmap_geo::GeoPoint;

    use crate::{distance_label, proximity_label, time_ago};

    use super::helpers::{BIG_BEN, LONDON_EYE, PETERBOROUGH};

    #[test]
    fn metre_and_km_labels() {
        // Sub-kilometre pair renders metres, the long hop renders km.
        let near = distance_label(BIG_BEN, LONDON_EYE).unwrap();
        assert!(near.ends_with(" m"), "got {near}");
        let far = distance_label(BIG_BEN, PETERBOROUGH).unwrap();
        assert!(far.ends_with(" km"), "got {far}");
    }

    #[test]
    fn nan_yields_none() {
        let nowhere = GeoPoint::new(f64::NAN, 0.0);
        assert_eq!(distance_label(nowhere, BIG_BEN), None);
        assert_eq!(proximity_label(BIG_BEN, nowhere), None);
    }

    #[test]
    fn proximity_suffix() {
        let label = proximity_label(BIG_BEN, BIG_BEN).unwrap();
        assert_eq!(label, "0 m away");
    }

    #[test]
    fn time_ago_buckets() {
        let now = 1_700_000_000;
        assert_eq!(time_ago(now, now), "just now");
        assert_eq!(time_ago(now - 59, now), "just now");
        assert_eq!(time_ago(now - 60, now), "1 min ago");
        assert_eq!(time_ago(now - 3_599, now), "59 min ago");
        assert_eq!(time_ago(now - 3_600, now), "1 h ago");
        assert_eq!(time_ago(now - 86_399, now), "23 h ago");
        assert_eq!(time_ago(now - 86_400, now), "1 d ago");
        assert_eq!(time_ago(now - 200_000, now), "2 d ago");
    }

    #[test]
    fn future_timestamp_clamps() {
        let now = 1_700_000_000;
        assert_eq!(time_ago(now + 120, now), "just now");
    }
}

// ── Spatial index ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod index {
    use petmap_geo::GeoPoint;

    use crate::ReportIndex;

    use super::helpers::{BIG_BEN, LONDON_EYE, london_index};

    #[test]
    fn empty_index() {
        let idx = ReportIndex::empty();
        assert!(idx.is_empty());
        assert_eq!(idx.nearest(BIG_BEN), None);
        assert!(idx.within_km(BIG_BEN, 100.0).is_empty());
    }

    #[test]
    fn lookup_by_id() {
        let (idx, [at, ..]) = london_index();
        assert_eq!(idx.len(), 3);
        let r = idx.report(at).unwrap();
        assert_eq!(r.pos, BIG_BEN);
        assert_eq!(idx.report(crate::ReportId::INVALID), None);
    }

    #[test]
    fn nearest_picks_closest() {
        let (idx, [at, near, _]) = london_index();
        assert_eq!(idx.nearest(BIG_BEN), Some(at));
        assert_eq!(idx.nearest(LONDON_EYE), Some(near));
    }

    #[test]
    fn k_nearest_is_ordered() {
        let (idx, [at, near, far]) = london_index();
        assert_eq!(idx.k_nearest(BIG_BEN, 3), vec![at, near, far]);
        assert_eq!(idx.k_nearest(BIG_BEN, 2), vec![at, near]);
        assert_eq!(idx.k_nearest(BIG_BEN, 10).len(), 3);
    }

    #[test]
    fn within_km_filters_and_sorts() {
        let (idx, [at, near, _]) = london_index();

        // 1 km catches Big Ben and the Eye but not Peterborough.
        assert_eq!(idx.within_km(BIG_BEN, 1.0), vec![at, near]);

        // 0.5 km catches only the on-the-spot report.
        assert_eq!(idx.within_km(BIG_BEN, 0.5), vec![at]);

        // 200 km catches everything.
        assert_eq!(idx.within_km(BIG_BEN, 200.0).len(), 3);
    }

    #[test]
    fn within_km_viewer_between_reports() {
        let (idx, [at, near, _]) = london_index();
        // Halfway between the two central reports, both within 1 km.
        let mid = GeoPoint::new(51.504, -0.126);
        let hits = idx.within_km(mid, 1.0);
        assert_eq!(hits.len(), 2);
        assert!(hits.contains(&at) && hits.contains(&near));
    }
}

// ── Providers ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod provider {
    use crate::{Report, ReportId, ReportProvider, ReportStatus, Species, StaticProvider};

    use super::helpers::BIG_BEN;

    #[test]
    fn static_provider_roundtrip() {
        let reports = vec![Report {
            id: ReportId(99), // deliberately wrong; indexing reassigns
            species: Species::Dog,
            status: ReportStatus::NeedsHelp,
            pos: BIG_BEN,
            reported_unix: 1_700_000_000,
        }];
        let provider = StaticProvider::new(reports);
        assert_eq!(provider.reports().len(), 1);

        let idx = provider.index();
        assert_eq!(idx.len(), 1);
        // IDs are reassigned sequentially on indexing.
        assert_eq!(idx.report(ReportId(0)).unwrap().species, Species::Dog);
    }

    #[cfg(feature = "sample")]
    mod sample {
        use crate::{ReportProvider, SampleProvider};

        use super::super::helpers::BIG_BEN;

        #[test]
        fn deterministic_for_equal_seeds() {
            let a = SampleProvider::new(BIG_BEN, 20, 42, 1_700_000_000).reports();
            let b = SampleProvider::new(BIG_BEN, 20, 42, 1_700_000_000).reports();
            assert_eq!(a, b);
        }

        #[test]
        fn seeds_diverge() {
            let a = SampleProvider::new(BIG_BEN, 20, 1, 1_700_000_000).reports();
            let b = SampleProvider::new(BIG_BEN, 20, 2, 1_700_000_000).reports();
            assert_ne!(a, b);
        }

        #[test]
        fn reports_scatter_near_center() {
            let reports = SampleProvider::new(BIG_BEN, 50, 7, 1_700_000_000).reports();
            assert_eq!(reports.len(), 50);
            for r in &reports {
                assert!(r.pos.within_box(BIG_BEN, 0.05));
                assert!(r.reported_unix <= 1_700_000_000);
                assert!(r.reported_unix > 1_700_000_000 - 86_400);
            }
        }
    }
}

// ── Key-value store ───────────────────────────────────────────────────────────

#[cfg(test)]
mod store {
    use crate::{KeyValueStore, MemoryStore};

    #[test]
    fn set_get_remove() {
        let mut s = MemoryStore::new();
        assert_eq!(s.get("tour_done").unwrap(), None);

        s.set("tour_done", "true").unwrap();
        assert_eq!(s.get("tour_done").unwrap().as_deref(), Some("true"));
        assert!(s.contains("tour_done").unwrap());
        assert_eq!(s.len(), 1);

        s.remove("tour_done").unwrap();
        assert_eq!(s.get("tour_done").unwrap(), None);
        assert!(s.is_empty());
    }

    #[test]
    fn overwrite_and_absent_remove() {
        let mut s = MemoryStore::new();
        s.set("dismissed/announcement-3", "1").unwrap();
        s.set("dismissed/announcement-3", "2").unwrap();
        assert_eq!(s.get("dismissed/announcement-3").unwrap().as_deref(), Some("2"));

        // Removing a key that was never set is fine.
        s.remove("never-set").unwrap();
    }
}
