//! Sort a jittered survey lot (UTM zone 17S) and print the closed ring.
//!
//! Usage:
//!   cargo run -p clockring --example survey_lot -- [seed]

use clockring::prelude::*;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(2025u64);
    let zone = UtmZone::default();
    let cfg = RadialCfg {
        vertex_count: VertexCount::Uniform { min: 5, max: 9 },
        ..RadialCfg::default()
    };
    let local = draw_points_radial(cfg, ReplayToken::new(seed, 0));
    let points = translate(&local, Point2::new(612_000.0, 9_781_000.0));

    let mut ring = sort_clockwise(&points);
    let area = signed_area(&ring);
    close_ring(&mut ring);

    println!("zone {} (EPSG:{})", zone, zone.epsg());
    for p in &ring {
        println!("{:.3} {:.3}", p.x, p.y);
    }
    println!(
        "area {:.1} m^2, clockwise={}",
        area.abs(),
        area < 0.0
    );
}
