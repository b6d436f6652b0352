//! Great-circle distance for the nearby-beaches query.
//!
//! The registry scans linearly and sorts by haversine distance; there is
//! no spatial index. At the scale of a beach registry (hundreds of rows)
//! a scan is cheaper than maintaining one.

use coastwatch_types::GeoPoint;

/// Mean Earth radius in meters (IUGG value).
const EARTH_RADIUS_METERS: f64 = 6_371_008.8;

/// Haversine great-circle distance between two points, in meters.
///
/// Accurate to well under 0.5% for the distances a radius query cares
/// about, which is more precision than the underlying coordinates carry.
pub fn haversine_meters(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let half_chord = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    let angle = 2.0 * half_chord.sqrt().asin();

    EARTH_RADIUS_METERS * angle
}
