//! Prints the pen path for a figure-eight drawn as two touching loops.
//!
//! Usage:
//! ```text
//! cargo run --example plot_order
//! RUST_LOG=stitchpath=trace cargo run --example plot_order
//! ```

use stitchpath::math::Point2;
use stitchpath::{CurveNetwork, CurvePoint, StartVertex, StrokeOrder2D};

fn main() -> stitchpath::Result<()> {
    // Default: WARN for everything, INFO for stitchpath.
    // Override with RUST_LOG env var.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("stitchpath=info".parse().unwrap_or_default())
        .add_directive("plot_order=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Two closed curves touching at the origin, each cut into four arcs.
    let mut network = CurveNetwork::new();
    for (curve, cx) in [(0, -1.0), (1, 1.0)] {
        let cuts = [
            (cx - 1.0, 0.0, 0.0),
            (cx, 1.0, 0.25),
            (cx + 1.0, 0.0, 0.5),
            (cx, -1.0, 0.75),
        ];
        for (x, y, t) in cuts {
            network.add_point(CurvePoint::at(x, y, curve, t));
        }
        network.closed_curve(curve);
    }

    let graph = network.build();
    tracing::info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        kind = %graph.classify(),
        "figure-eight network"
    );

    let order = StrokeOrder2D::new(graph)
        .with_start(StartVertex::Nearest(Point2::new(-3.0, 0.0)))
        .execute()?;

    println!("{} stroke from vertex {}:", order.kind, order.start);
    for p in order.trail.points() {
        println!("  ({:>5.2}, {:>5.2})  curve {}", p.point.x, p.point.y, p.curve.curve);
    }
    println!("pen travel: {:.3}", order.trail.length());
    Ok(())
}
