//! Bearing → 8-point cardinal direction lookup.

use std::fmt;

/// One of the eight principal compass directions.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompassPoint {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

impl CompassPoint {
    /// All eight directions in clockwise order starting at north.
    pub const ALL: [CompassPoint; 8] = [
        CompassPoint::N,
        CompassPoint::Ne,
        CompassPoint::E,
        CompassPoint::Se,
        CompassPoint::S,
        CompassPoint::Sw,
        CompassPoint::W,
        CompassPoint::Nw,
    ];

    /// Map a bearing to its 45°-wide sector, each centered on a direction.
    ///
    /// Expects `deg` in [0, 360]; 360 wraps to the same bucket as 0.
    /// Callers must normalize out-of-range bearings first (e.g. via
    /// [`GeoPoint::bearing_deg`][crate::GeoPoint::bearing_deg], which
    /// already returns [0, 360)).  Sector boundaries (22.5°, 67.5°, …)
    /// round away from zero, so 22.5° selects NE.
    pub fn from_bearing_deg(deg: f64) -> CompassPoint {
        let sector = (deg / 45.0).round() as usize % 8;
        CompassPoint::ALL[sector]
    }

    /// The short display label ("N", "NE", …).
    pub fn label(self) -> &'static str {
        match self {
            CompassPoint::N => "N",
            CompassPoint::Ne => "NE",
            CompassPoint::E => "E",
            CompassPoint::Se => "SE",
            CompassPoint::S => "S",
            CompassPoint::Sw => "SW",
            CompassPoint::W => "W",
            CompassPoint::Nw => "NW",
        }
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
