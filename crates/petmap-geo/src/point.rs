//! Geographic coordinate type and great-circle arithmetic.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  The display layers round
//! distances to whole metres, but the centroid and symmetry guarantees the
//! rest of the app relies on need the full double-precision mantissa, so
//! there is no `f32` economy here.

/// Mean Earth radius in kilometres.  A fixed spherical approximation; true
/// ellipsoidal distance is out of scope (sub-0.5 % error at city scale).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS-84 geographic coordinate.
///
/// Latitude is degrees north in [-90, 90], longitude degrees east in
/// [-180, 180].  Bounds are a caller convention, not a checked invariant.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in kilometres.
    ///
    /// Guarantees: a point's distance to itself is exactly `0.0`, and the
    /// result is symmetric in its arguments.  NaN coordinates yield NaN.
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        // Rounding can push `a` past 1 for antipodal pairs, which would
        // turn sqrt(1 - a) into NaN.  Plain comparison (not f64::min) so
        // NaN input still propagates.
        let a = if a > 1.0 { 1.0 } else { a };

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }

    /// Initial great-circle bearing from `self` toward `other`, in degrees
    /// clockwise from true north, normalized to [0, 360).
    ///
    /// Coincident points yield `0.0` (due north by convention).
    pub fn bearing_deg(self, other: GeoPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let y = d_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

        (y.atan2(x).to_degrees() + 360.0) % 360.0
    }

    /// Approximate bounding-box check — much cheaper than `distance_km` for
    /// quick rejection before an exact radius test.
    #[inline]
    pub fn within_box(self, center: GeoPoint, half_deg: f64) -> bool {
        (self.lat - center.lat).abs() <= half_deg
            && (self.lon - center.lon).abs() <= half_deg
    }

    /// `true` when both coordinates are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
