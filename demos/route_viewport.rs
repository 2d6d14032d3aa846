//! Basic example: distance and map viewport for a recorded path.
//!
//! Run with: cargo run --example route_viewport

use route_metrics::{calculate_map_bounds, haversine_distance, total_distance_meters, GeoPoint};

fn main() {
    // A short recorded walk in central Bangkok
    let path = vec![
        GeoPoint::new(100.5018, 13.7563), // Start
        GeoPoint::new(100.5043, 13.7588),
        GeoPoint::new(100.5068, 13.7613),
        GeoPoint::new(100.5093, 13.7638),
        GeoPoint::new(100.5118, 13.7663), // End
    ];

    println!("Route Metrics Example\n");

    println!("1. Leg distances:");
    for (i, pair) in path.windows(2).enumerate() {
        let leg = haversine_distance(&pair[0], &pair[1]);
        println!("   leg {}: {:.1}m", i + 1, leg);
    }

    println!("\n2. Total distance: {:.1}m", total_distance_meters(&path));

    let viewport = calculate_map_bounds(&path);
    println!(
        "\n3. Viewport: center=({:.4}, {:.4}) zoom={}",
        viewport.center.longitude, viewport.center.latitude, viewport.zoom
    );

    // Degenerate inputs are defined, not errors
    let empty = calculate_map_bounds(&[]);
    println!(
        "\n4. Empty path fallback: center=({:.4}, {:.4}) zoom={}",
        empty.center.longitude, empty.center.latitude, empty.zoom
    );

    let single = calculate_map_bounds(&[GeoPoint::new(100.50, 13.75)]);
    println!("5. Single point: zoom={}", single.zoom);
}
