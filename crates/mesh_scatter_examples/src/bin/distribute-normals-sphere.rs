use glam::Vec2;
use mesh_scatter::prelude::*;
use mesh_scatter_examples::{
    init_tracing, render_points_to_png, subdivided_sphere, PointColoring, Projection,
    RenderConfig,
};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let mesh = subdivided_sphere(3.0, 4)?;
    let config = DistributeConfig::new(DistributeMode::Poisson, 25.0)
        .with_minimum_distance(0.3)
        .with_point_radius(0.08);

    let result = PointDistributor::try_new(config)?.run_with_events(Some(&mesh), &mut TracingSink);

    let render = RenderConfig::new((800, 800), Vec2::splat(-3.2), Vec2::splat(3.2))
        .with_projection(Projection::Side)
        .with_coloring(PointColoring::Normal);
    render_points_to_png(&result.points, &render, "distribute-normals-sphere.png")?;
    Ok(())
}
