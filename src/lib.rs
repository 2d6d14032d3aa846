//! # Route Metrics
//!
//! Geodesic metrics for recorded GPS paths: great-circle distances, bounding
//! boxes and map viewport estimation.
//!
//! This library is the shared computation core behind a route-recording
//! product. The mobile recorder calls it after every captured point to keep
//! the on-screen distance and map camera current; the admin map viewer calls
//! it once per loaded route to frame the whole path. Both previously carried
//! their own copy of this math; this crate is the single source of truth.
//!
//! All computations are pure and synchronous: no I/O, no shared state, safe
//! to call from any thread.
//!
//! ## Features
//!
//! - **`parallel`** - Parallel batch summarization with rayon
//! - **`serde`** - Serde derives on all public types
//! - **`full`** - Enable all features
//!
//! ## Quick Start
//!
//! ```rust
//! use route_metrics::{GeoPoint, total_distance_meters, calculate_map_bounds};
//!
//! // A short recorded path in central Bangkok
//! let path = vec![
//!     GeoPoint::new(100.5018, 13.7563),
//!     GeoPoint::new(100.5068, 13.7613),
//!     GeoPoint::new(100.5118, 13.7663),
//! ];
//!
//! let distance = total_distance_meters(&path);
//! assert!(distance > 0.0);
//!
//! let viewport = calculate_map_bounds(&path);
//! assert!(viewport.zoom <= 20);
//! ```

use log::debug;

pub mod geo_utils;
pub mod viewport;

pub use geo_utils::{haversine_distance, total_distance_meters, EARTH_RADIUS_METERS};
pub use viewport::{calculate_map_bounds, calculate_map_bounds_with_config, ViewportConfig};

// ============================================================================
// Core Types
// ============================================================================

/// A geographic coordinate: longitude and latitude in degrees (WGS84).
///
/// Longitude comes first throughout this crate, matching GeoJSON ordering.
///
/// # Example
/// ```
/// use route_metrics::GeoPoint;
/// let point = GeoPoint::new(100.5018, 13.7563); // Bangkok
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}

impl GeoPoint {
    /// Create a new point from longitude and latitude in degrees.
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self { longitude, latitude }
    }

    /// Check if the point has finite, in-range coordinates.
    ///
    /// The metric functions themselves never validate; malformed coordinates
    /// propagate through the arithmetic. Call this at the ingestion boundary
    /// (sensor input, request bodies) when garbage must be rejected early.
    pub fn is_valid(&self) -> bool {
        self.longitude.is_finite()
            && self.latitude.is_finite()
            && self.longitude >= -180.0
            && self.longitude <= 180.0
            && self.latitude >= -90.0
            && self.latitude <= 90.0
    }
}

/// Axis-aligned bounding box of a recorded path.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl Bounds {
    /// Compute the bounding box of a path in a single pass.
    ///
    /// Returns `None` for an empty path.
    pub fn from_points(points: &[GeoPoint]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let mut min_lon = f64::MAX;
        let mut max_lon = f64::MIN;
        let mut min_lat = f64::MAX;
        let mut max_lat = f64::MIN;

        for p in points {
            min_lon = min_lon.min(p.longitude);
            max_lon = max_lon.max(p.longitude);
            min_lat = min_lat.min(p.latitude);
            max_lat = max_lat.max(p.latitude);
        }

        Some(Self { min_lon, max_lon, min_lat, max_lat })
    }

    /// Midpoint of the bounding box.
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.min_lon + self.max_lon) / 2.0,
            (self.min_lat + self.max_lat) / 2.0,
        )
    }
}

/// Map camera parameters framing a recorded path.
///
/// `zoom` is a slippy-map zoom level: a small integer, larger means more
/// zoomed in. Always finite and at most the configured maximum.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapViewport {
    pub center: GeoPoint,
    pub zoom: u8,
}

// ============================================================================
// Route Summaries
// ============================================================================

/// A recorded path with its route identifier, as handed over by the
/// persistence layer.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecordedPath {
    pub route_id: String,
    pub points: Vec<GeoPoint>,
}

/// A recorded path as a flat coordinate buffer: `[lon1, lat1, lon2, lat2, ...]`.
///
/// This is the shape GPS tracks arrive in from the mobile bridge, where
/// crossing the boundary with typed arrays is much cheaper than with arrays
/// of objects.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlatRecordedPath {
    pub route_id: String,
    /// Flat array of coordinates: `[lon1, lat1, lon2, lat2, ...]`
    pub coords: Vec<f64>,
}

impl FlatRecordedPath {
    /// Decode the flat buffer into points. A trailing unpaired value is
    /// ignored.
    pub fn points(&self) -> Vec<GeoPoint> {
        points_from_flat(&self.coords)
    }
}

/// Decode a flat `[lon, lat, lon, lat, ...]` buffer into points.
pub fn points_from_flat(coords: &[f64]) -> Vec<GeoPoint> {
    coords
        .chunks_exact(2)
        .map(|chunk| GeoPoint::new(chunk[0], chunk[1]))
        .collect()
}

/// Everything the map screens need about one route, computed in a single
/// pass over the path.
///
/// Recomputed from the path whenever it changes; never treated as persistent
/// truth.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteSummary {
    /// Identifier of the summarized route.
    pub route_id: String,
    /// Number of recorded points.
    pub point_count: usize,
    /// Total traversed distance in meters; 0.0 for fewer than two points.
    pub total_distance_meters: f64,
    /// Bounding box; `None` for an empty path.
    pub bounds: Option<Bounds>,
    /// Camera parameters framing the path (fallback viewport when empty).
    pub viewport: MapViewport,
}

impl RouteSummary {
    /// Summarize a recorded path.
    ///
    /// Defined for every input, including empty and single-point paths: an
    /// empty path gets zero distance, no bounds and the fallback viewport.
    ///
    /// # Example
    /// ```
    /// use route_metrics::{GeoPoint, RouteSummary, ViewportConfig};
    ///
    /// let points = vec![
    ///     GeoPoint::new(100.5018, 13.7563),
    ///     GeoPoint::new(100.5118, 13.7663),
    /// ];
    ///
    /// let summary = RouteSummary::from_points("route-1", &points, &ViewportConfig::default());
    /// assert_eq!(summary.point_count, 2);
    /// assert!(summary.total_distance_meters > 1_300.0);
    /// ```
    pub fn from_points(route_id: &str, points: &[GeoPoint], config: &ViewportConfig) -> Self {
        Self {
            route_id: route_id.to_string(),
            point_count: points.len(),
            total_distance_meters: geo_utils::total_distance_meters(points),
            bounds: Bounds::from_points(points),
            viewport: viewport::calculate_map_bounds_with_config(points, config),
        }
    }
}

/// Summarize a batch of recorded paths, preserving input order.
pub fn summarize_batch(paths: &[RecordedPath], config: &ViewportConfig) -> Vec<RouteSummary> {
    debug!("summarizing {} paths", paths.len());
    paths
        .iter()
        .map(|p| RouteSummary::from_points(&p.route_id, &p.points, config))
        .collect()
}

/// Summarize a batch of recorded paths in parallel, preserving input order.
///
/// Same output as [`summarize_batch`]; worthwhile from a few hundred routes
/// upward.
#[cfg(feature = "parallel")]
pub fn summarize_batch_parallel(
    paths: &[RecordedPath],
    config: &ViewportConfig,
) -> Vec<RouteSummary> {
    use rayon::prelude::*;

    debug!("summarizing {} paths in parallel", paths.len());
    paths
        .par_iter()
        .map(|p| RouteSummary::from_points(&p.route_id, &p.points, config))
        .collect()
}

/// Summarize a batch of flat-buffer paths, preserving input order.
pub fn summarize_flat_batch(
    paths: &[FlatRecordedPath],
    config: &ViewportConfig,
) -> Vec<RouteSummary> {
    debug!("summarizing {} flat paths", paths.len());
    paths
        .iter()
        .map(|p| RouteSummary::from_points(&p.route_id, &p.points(), config))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
