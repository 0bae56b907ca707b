// src/services/geo.rs
// DOCUMENTATION: Great-circle distance between coordinates
// PURPOSE: Haversine formula used to rank schools by proximity

use geo_types::Point;

/// Mean Earth radius used for every distance in the service
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Build a point from latitude/longitude in degrees
/// DOCUMENTATION: geo_types stores x = longitude, y = latitude
pub fn point(latitude: f64, longitude: f64) -> Point<f64> {
    Point::new(longitude, latitude)
}

/// Calculate distance between two coordinates in kilometers
/// Uses Haversine formula
///
/// Inputs are degrees. Symmetric in its arguments and 0 for identical points.
pub fn haversine_km(from: Point<f64>, to: Point<f64>) -> f64 {
    let (lat1, lon1) = (from.y(), from.x());
    let (lat2, lon2) = (to.y(), to.x());

    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    // Rounding can push `a` a hair past 1 near antipodes
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
