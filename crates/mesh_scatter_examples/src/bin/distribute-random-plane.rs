use glam::Vec2;
use mesh_scatter::prelude::*;
use mesh_scatter_examples::{grid_plane, init_tracing, render_points_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let mesh = grid_plane(10.0, 8)?;
    let config = DistributeConfig::new(DistributeMode::Random, 20.0).with_seed(7);
    let points = PointDistributor::try_new(config)?.run(Some(&mesh)).points;

    let render = RenderConfig::new((800, 800), Vec2::splat(-5.0), Vec2::splat(5.0))
        .with_background([18, 18, 24]);
    render_points_to_png(&points, &render, "distribute-random-plane.png")?;
    Ok(())
}
