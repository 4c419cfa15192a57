//! Display-label composition: distance and elapsed-time text.
//!
//! Timestamps are plain Unix seconds and the buckets are integer
//! arithmetic, so no datetime dependency is needed for "5 min ago" text.

use petmap_geo::{GeoPoint, format_distance};

/// Formatted great-circle distance between two points, or `None` when
/// either coordinate is non-finite (the "unknown distance" case that must
/// never reach the screen as a number).
pub fn distance_label(from: GeoPoint, to: GeoPoint) -> Option<String> {
    let km = from.distance_km(to);
    km.is_finite().then(|| format_distance(km))
}

/// `"<distance> away"` caption for feed rows and notification text.
pub fn proximity_label(from: GeoPoint, to: GeoPoint) -> Option<String> {
    distance_label(from, to).map(|d| format!("{d} away"))
}

/// Coarse elapsed-time text: `"just now"`, `"5 min ago"`, `"3 h ago"`,
/// `"2 d ago"`.
///
/// Future timestamps (clock skew between reporter and viewer) clamp to
/// `"just now"` instead of going negative.
pub fn time_ago(event_unix: i64, now_unix: i64) -> String {
    let secs = (now_unix - event_unix).max(0);
    match secs {
        0..=59 => "just now".to_string(),
        60..=3_599 => format!("{} min ago", secs / 60),
        3_600..=86_399 => format!("{} h ago", secs / 3_600),
        _ => format!("{} d ago", secs / 86_400),
    }
}
