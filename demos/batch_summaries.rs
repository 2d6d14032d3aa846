//! Batch example: summarize many stored routes in parallel.
//!
//! Run with: cargo run --example batch_summaries --features parallel

use route_metrics::{summarize_batch_parallel, GeoPoint, RecordedPath, ViewportConfig};

fn main() {
    // Synthesize a few hundred routes fanning out from the city center
    let paths: Vec<RecordedPath> = (0..500)
        .map(|i| {
            let offset = i as f64 * 0.0002;
            RecordedPath {
                route_id: format!("route-{i}"),
                points: (0..20)
                    .map(|j| {
                        let step = j as f64 * 0.0005;
                        GeoPoint::new(100.5018 + offset + step, 13.7563 + step)
                    })
                    .collect(),
            }
        })
        .collect();

    let config = ViewportConfig::default();

    let start = std::time::Instant::now();
    let summaries = summarize_batch_parallel(&paths, &config);
    let elapsed = start.elapsed();

    println!("Summarized {} routes in {:?}\n", summaries.len(), elapsed);

    for summary in summaries.iter().take(3) {
        println!(
            "{}: {} points, {:.0}m, zoom {}",
            summary.route_id, summary.point_count, summary.total_distance_meters, summary.viewport.zoom
        );
    }
}
