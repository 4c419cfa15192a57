//! Spherical centroid of a coordinate set.
//!
//! # Why not an arithmetic mean
//!
//! Naively averaging raw longitudes breaks at the antimeridian: points at
//! +179° and −179° would average to 0° — the far side of the planet.
//! Averaging the points as 3-D unit vectors and converting back through
//! `atan2` keeps the result on the short arc regardless of wraparound.

use crate::GeoPoint;

/// Spherical centroid of `points`.
///
/// Order of the input does not affect the result (up to float rounding).
///
/// Degenerate inputs are policy, not errors:
/// - empty slice → `(0, 0)` — a documented sentinel callers must recognize
///   contextually, since it is indistinguishable from the real coordinate;
/// - single point → that point returned bit-exactly, with no trigonometric
///   round-trip error introduced.
pub fn center_of(points: &[GeoPoint]) -> GeoPoint {
    match points {
        [] => GeoPoint::new(0.0, 0.0),
        [only] => *only,
        _ => {
            let mut x = 0.0f64;
            let mut y = 0.0f64;
            let mut z = 0.0f64;

            for p in points {
                let lat = p.lat.to_radians();
                let lon = p.lon.to_radians();
                x += lat.cos() * lon.cos();
                y += lat.cos() * lon.sin();
                z += lat.sin();
            }

            let n = points.len() as f64;
            x /= n;
            y /= n;
            z /= n;

            // Antipodal sets collapse to the zero vector; atan2(0, 0) = 0
            // keeps the function total, yielding the (0, 0) sentinel.
            let lon = y.atan2(x);
            let lat = z.atan2(x.hypot(y));

            GeoPoint::new(lat.to_degrees(), lon.to_degrees())
        }
    }
}
