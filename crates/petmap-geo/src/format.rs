//! Distance display formatting.

/// Render a kilometre distance for display.
///
/// Below 1 km the value shows as whole metres (`"250 m"`, native
/// round-half-away-from-zero); at or above 1 km it shows one decimal
/// (`"1.0 km"`, `"12.3 km"`).  The boundary is `< 1`, so exactly 1 km
/// renders as `"1.0 km"`, never `"1000 m"`.
///
/// Negative input is unspecified by policy and not guarded.  Non-finite
/// input formats as Rust renders the float (`"NaN km"`); display layers
/// gate on finiteness before calling (see `petmap-feed`).
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{} m", (km * 1000.0).round() as i64)
    } else {
        format!("{km:.1} km")
    }
}
