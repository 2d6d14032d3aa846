//! Map viewport estimation for recorded paths.
//!
//! Given a recorded path, derive the camera parameters that frame the whole
//! route: the midpoint of its bounding box and a slippy-map zoom level chosen
//! so both the latitude and longitude span fit inside an assumed viewport.
//!
//! The zoom heuristic follows the usual web-map construction: project the
//! latitude span through the Web-Mercator transform, express both spans as
//! fractions of the world, then pick the largest zoom at which each fraction
//! still fits in `viewport_px / tile_size_px` world tiles.

use std::f64::consts::PI;

use log::debug;

use crate::{Bounds, GeoPoint, MapViewport};

/// Side length of a world tile at zoom 0, in pixels.
pub const WORLD_TILE_SIZE_PX: f64 = 256.0;

/// Maximum zoom level the estimator will return.
pub const MAX_ZOOM: u8 = 20;

/// Assumed viewport width used by the zoom heuristic, in pixels.
///
/// This is an estimation constant, not a rendered canvas size; tune it via
/// [`ViewportConfig`] if the consuming map surface is very differently shaped.
pub const DEFAULT_VIEWPORT_WIDTH_PX: f64 = 200.0;

/// Assumed viewport height used by the zoom heuristic, in pixels.
pub const DEFAULT_VIEWPORT_HEIGHT_PX: f64 = 200.0;

/// Center returned for empty paths (central Bangkok).
pub const FALLBACK_CENTER: GeoPoint = GeoPoint {
    longitude: 100.5018,
    latitude: 13.7563,
};

/// Zoom returned for empty paths.
pub const FALLBACK_ZOOM: u8 = 12;

/// Configuration for viewport estimation.
///
/// The defaults reproduce the constants above; construct one explicitly when
/// the caller knows its real map dimensions or wants a different fallback
/// city.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportConfig {
    /// Assumed viewport width in pixels.
    pub width_px: f64,
    /// Assumed viewport height in pixels.
    pub height_px: f64,
    /// World tile side length in pixels. Default: 256.
    pub tile_size_px: f64,
    /// Upper bound on the returned zoom. Default: 20.
    pub max_zoom: u8,
    /// Viewport center returned for empty paths.
    pub fallback_center: GeoPoint,
    /// Zoom returned for empty paths. Default: 12.
    pub fallback_zoom: u8,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width_px: DEFAULT_VIEWPORT_WIDTH_PX,
            height_px: DEFAULT_VIEWPORT_HEIGHT_PX,
            tile_size_px: WORLD_TILE_SIZE_PX,
            max_zoom: MAX_ZOOM,
            fallback_center: FALLBACK_CENTER,
            fallback_zoom: FALLBACK_ZOOM,
        }
    }
}

/// Compute a map viewport framing an entire recorded path, using the default
/// configuration.
///
/// Empty paths yield the fallback viewport (central Bangkok at zoom 12).
/// Single-point paths yield that point at the maximum zoom. Never panics and
/// never returns a non-finite zoom for valid coordinates.
///
/// # Example
///
/// ```rust
/// use route_metrics::{GeoPoint, viewport};
///
/// let path = vec![
///     GeoPoint::new(100.5018, 13.7563),
///     GeoPoint::new(100.5118, 13.7663),
/// ];
///
/// let vp = viewport::calculate_map_bounds(&path);
/// assert!(vp.zoom <= 20);
/// assert!(vp.center.longitude >= 100.5018 && vp.center.longitude <= 100.5118);
/// ```
pub fn calculate_map_bounds(points: &[GeoPoint]) -> MapViewport {
    calculate_map_bounds_with_config(points, &ViewportConfig::default())
}

/// Compute a map viewport framing an entire recorded path.
///
/// See [`calculate_map_bounds`] for the behavior; this variant takes an
/// explicit [`ViewportConfig`].
pub fn calculate_map_bounds_with_config(
    points: &[GeoPoint],
    config: &ViewportConfig,
) -> MapViewport {
    let Some(bounds) = Bounds::from_points(points) else {
        debug!("empty path, returning fallback viewport");
        return MapViewport {
            center: config.fallback_center,
            zoom: config.fallback_zoom,
        };
    };

    // World-span fractions of each axis. The latitude span must go through
    // the Mercator transform because map pixels are not linear in latitude.
    let lat_fraction = (mercator_y(bounds.max_lat) - mercator_y(bounds.min_lat)) / PI;
    let lon_fraction = (bounds.max_lon - bounds.min_lon) / 360.0;

    let mut zoom = f64::from(config.max_zoom);
    // A zero fraction means the axis is degenerate (single point or a purely
    // horizontal/vertical path); log2 of its reciprocal would be infinite, so
    // that axis contributes no candidate and the other axis or max_zoom wins.
    if let Some(z) = zoom_candidate(config.height_px, config.tile_size_px, lat_fraction) {
        zoom = zoom.min(z);
    }
    if let Some(z) = zoom_candidate(config.width_px, config.tile_size_px, lon_fraction) {
        zoom = zoom.min(z);
    }

    MapViewport {
        center: bounds.center(),
        // World-spanning paths can push the candidate below zero; zoom 0
        // already shows the whole world.
        zoom: zoom.max(0.0) as u8,
    }
}

/// Largest zoom at which `fraction` of the world fits in `viewport_px`.
fn zoom_candidate(viewport_px: f64, tile_size_px: f64, fraction: f64) -> Option<f64> {
    if fraction <= 0.0 {
        return None;
    }
    Some((viewport_px / tile_size_px / fraction).log2().floor())
}

/// Web-Mercator vertical position of a latitude, in radians, clamped to the
/// projection's [-PI/2, PI/2] range so the poles stay finite.
fn mercator_y(lat_deg: f64) -> f64 {
    let sin = lat_deg.to_radians().sin();
    let y = ((1.0 + sin) / (1.0 - sin)).ln() / 2.0;
    y.clamp(-PI, PI) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_viewport_for_empty_path() {
        let vp = calculate_map_bounds(&[]);
        assert_eq!(vp.center, FALLBACK_CENTER);
        assert_eq!(vp.zoom, FALLBACK_ZOOM);
    }

    #[test]
    fn test_single_point_clamps_to_max_zoom() {
        let vp = calculate_map_bounds(&[GeoPoint::new(100.50, 13.75)]);
        assert_eq!(vp.center, GeoPoint::new(100.50, 13.75));
        assert_eq!(vp.zoom, MAX_ZOOM);
    }

    #[test]
    fn test_two_point_route_zoom() {
        // ~1.4 km diagonal in central Bangkok; both axes span 0.01 degrees,
        // which lands at zoom 14 for a 200x200 viewport.
        let path = vec![
            GeoPoint::new(100.5018, 13.7563),
            GeoPoint::new(100.5118, 13.7663),
        ];
        let vp = calculate_map_bounds(&path);
        assert_eq!(vp.zoom, 14);
    }

    #[test]
    fn test_center_within_bounds() {
        let path = vec![
            GeoPoint::new(100.5018, 13.7563),
            GeoPoint::new(100.5118, 13.7663),
            GeoPoint::new(100.5068, 13.7500),
        ];
        let vp = calculate_map_bounds(&path);
        assert!(vp.center.longitude >= 100.5018 && vp.center.longitude <= 100.5118);
        assert!(vp.center.latitude >= 13.7500 && vp.center.latitude <= 13.7663);
    }

    #[test]
    fn test_zoom_never_exceeds_max() {
        let cases: Vec<Vec<GeoPoint>> = vec![
            vec![GeoPoint::new(100.50, 13.75)],
            vec![GeoPoint::new(100.50, 13.75), GeoPoint::new(100.50, 13.75)],
            vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0001, 0.0001)],
            vec![GeoPoint::new(-0.1278, 51.5074), GeoPoint::new(100.5018, 13.7563)],
        ];
        for path in cases {
            let vp = calculate_map_bounds(&path);
            assert!(vp.zoom <= MAX_ZOOM);
        }
    }

    #[test]
    fn test_degenerate_axis_uses_other_axis() {
        // Purely north-south path: zero longitude span must not blow up the
        // zoom; the latitude axis supplies the only candidate.
        let path = vec![
            GeoPoint::new(100.50, 13.70),
            GeoPoint::new(100.50, 13.80),
        ];
        let vp = calculate_map_bounds(&path);
        assert!(vp.zoom < MAX_ZOOM);
        assert_eq!(vp.center.longitude, 100.50);
    }

    #[test]
    fn test_world_spanning_path_clamps_to_zero() {
        let path = vec![
            GeoPoint::new(-179.0, -85.0),
            GeoPoint::new(179.0, 85.0),
        ];
        let vp = calculate_map_bounds(&path);
        assert_eq!(vp.zoom, 0);
    }

    #[test]
    fn test_custom_config_fallbacks() {
        let config = ViewportConfig {
            fallback_center: GeoPoint::new(-0.1278, 51.5074),
            fallback_zoom: 10,
            ..ViewportConfig::default()
        };
        let vp = calculate_map_bounds_with_config(&[], &config);
        assert_eq!(vp.center, GeoPoint::new(-0.1278, 51.5074));
        assert_eq!(vp.zoom, 10);
    }

    #[test]
    fn test_larger_viewport_zooms_in_further() {
        let path = vec![
            GeoPoint::new(100.5018, 13.7563),
            GeoPoint::new(100.5118, 13.7663),
        ];
        let small = calculate_map_bounds(&path);
        let config = ViewportConfig {
            width_px: 800.0,
            height_px: 800.0,
            ..ViewportConfig::default()
        };
        let large = calculate_map_bounds_with_config(&path, &config);
        assert!(large.zoom > small.zoom);
    }

    #[test]
    fn test_mercator_y_finite_at_poles() {
        assert_eq!(mercator_y(90.0), PI / 2.0);
        assert_eq!(mercator_y(-90.0), -PI / 2.0);
        assert_eq!(mercator_y(0.0), 0.0);
    }
}
