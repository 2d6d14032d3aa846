//! # Geographic Utilities
//!
//! Core geodesic computations for recorded GPS paths.
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`haversine_distance`] | Great-circle distance between two points |
//! | [`total_distance_meters`] | Total length of a recorded path in meters |
//!
//! ## Example
//!
//! ```rust
//! use route_metrics::{GeoPoint, geo_utils};
//!
//! let path = vec![
//!     GeoPoint::new(100.5018, 13.7563),  // Bangkok
//!     GeoPoint::new(100.5118, 13.7663),
//! ];
//!
//! let length = geo_utils::total_distance_meters(&path);
//! assert!(length > 1300.0 && length < 1600.0);
//! ```
//!
//! ## Algorithm Notes
//!
//! The haversine formula gives the great-circle distance between two points on
//! a sphere. It is the standard method for GPS distance calculation, accurate
//! to within 0.3% for most practical applications.
//!
//! Reference: [Haversine formula (Wikipedia)](https://en.wikipedia.org/wiki/Haversine_formula)
//!
//! All functions expect WGS84 coordinates (longitude/latitude in degrees), the
//! standard used by GPS receivers and mapping services. None of them validate
//! their input: out-of-range or non-finite coordinates propagate through the
//! arithmetic unchanged. Use [`GeoPoint::is_valid`](crate::GeoPoint::is_valid)
//! at the ingestion boundary when that matters.

use crate::GeoPoint;

/// Mean Earth radius in meters, as used by the haversine formula.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Calculate the great-circle distance between two points using the haversine
/// formula.
///
/// Returns the distance in meters along the Earth's surface, assuming a
/// spherical Earth of radius [`EARTH_RADIUS_METERS`].
///
/// Identical points return exactly 0.0. Antipodal points return approximately
/// `PI * EARTH_RADIUS_METERS`; the `atan2` formulation is numerically stable
/// there.
///
/// # Example
///
/// ```rust
/// use route_metrics::{GeoPoint, geo_utils};
///
/// let london = GeoPoint::new(-0.1278, 51.5074);
/// let paris = GeoPoint::new(2.3522, 48.8566);
///
/// let distance = geo_utils::haversine_distance(&london, &paris);
/// assert!((distance - 343_560.0).abs() < 5_000.0); // ~344 km
/// ```
#[inline]
pub fn haversine_distance(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let d_phi = (b.latitude - a.latitude).to_radians();
    let d_lambda = (b.longitude - a.longitude).to_radians();

    let h = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Calculate the total traversed distance of a recorded path in meters.
///
/// Sums the haversine distance over each consecutive pair of points, in path
/// order. Paths with fewer than two points return exactly 0.0. The summation
/// order is fixed (left to right), so the result is bit-identical across runs
/// for the same input.
///
/// Note that this is the traversed length, not the distance between the
/// endpoints: a path that doubles back on itself counts both legs.
///
/// # Example
///
/// ```rust
/// use route_metrics::{GeoPoint, geo_utils};
///
/// let path = vec![
///     GeoPoint::new(100.5018, 13.7563),
///     GeoPoint::new(100.5068, 13.7613),
///     GeoPoint::new(100.5118, 13.7663),
/// ];
///
/// let total = geo_utils::total_distance_meters(&path);
/// let leg1 = geo_utils::haversine_distance(&path[0], &path[1]);
/// let leg2 = geo_utils::haversine_distance(&path[1], &path[2]);
/// assert_eq!(total, leg1 + leg2);
/// ```
pub fn total_distance_meters(points: &[GeoPoint]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }

    points
        .windows(2)
        .map(|w| haversine_distance(&w[0], &w[1]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    #[test]
    fn test_haversine_identity() {
        let p = GeoPoint::new(100.5018, 13.7563);
        assert_eq!(haversine_distance(&p, &p), 0.0);
    }

    #[test]
    fn test_haversine_symmetry() {
        let a = GeoPoint::new(100.5018, 13.7563);
        let b = GeoPoint::new(98.9853, 18.7883); // Chiang Mai
        assert_eq!(haversine_distance(&a, &b), haversine_distance(&b, &a));
    }

    #[test]
    fn test_haversine_known_value() {
        // London to Paris is approximately 344 km
        let london = GeoPoint::new(-0.1278, 51.5074);
        let paris = GeoPoint::new(2.3522, 48.8566);
        let dist = haversine_distance(&london, &paris);
        assert!(approx_eq(dist, 343_560.0, 5_000.0));
    }

    #[test]
    fn test_haversine_short_leg() {
        // Two points ~1.4 km apart in central Bangkok
        let a = GeoPoint::new(100.5018, 13.7563);
        let b = GeoPoint::new(100.5118, 13.7663);
        let dist = haversine_distance(&a, &b);
        assert!(dist > 1_300.0 && dist < 1_600.0);
    }

    #[test]
    fn test_haversine_antipodal() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(180.0, 0.0);
        let dist = haversine_distance(&a, &b);
        assert!(dist.is_finite());
        assert!(approx_eq(dist, std::f64::consts::PI * EARTH_RADIUS_METERS, 1.0));
    }

    #[test]
    fn test_haversine_triangle_inequality() {
        let a = GeoPoint::new(100.5018, 13.7563);
        let b = GeoPoint::new(100.5118, 13.7663);
        let c = GeoPoint::new(100.4918, 13.7463);
        let direct = haversine_distance(&a, &c);
        let via_b = haversine_distance(&a, &b) + haversine_distance(&b, &c);
        assert!(direct <= via_b + 1e-6);
    }

    #[test]
    fn test_total_distance_empty() {
        let empty: Vec<GeoPoint> = vec![];
        assert_eq!(total_distance_meters(&empty), 0.0);
    }

    #[test]
    fn test_total_distance_single_point() {
        let single = vec![GeoPoint::new(100.5018, 13.7563)];
        assert_eq!(total_distance_meters(&single), 0.0);
    }

    #[test]
    fn test_total_distance_additivity() {
        let p0 = GeoPoint::new(100.5018, 13.7563);
        let p1 = GeoPoint::new(100.5068, 13.7613);
        let p2 = GeoPoint::new(100.5118, 13.7663);
        let total = total_distance_meters(&[p0, p1, p2]);
        let legs = haversine_distance(&p0, &p1) + haversine_distance(&p1, &p2);
        assert_eq!(total, legs);
    }

    #[test]
    fn test_total_distance_counts_backtracking() {
        // Out-and-back path: traversed length is twice the one-way leg,
        // even though the endpoints coincide.
        let a = GeoPoint::new(100.5018, 13.7563);
        let b = GeoPoint::new(100.5118, 13.7663);
        let out_and_back = total_distance_meters(&[a, b, a]);
        let one_way = haversine_distance(&a, &b);
        assert!(approx_eq(out_and_back, 2.0 * one_way, 1e-9));
    }
}
