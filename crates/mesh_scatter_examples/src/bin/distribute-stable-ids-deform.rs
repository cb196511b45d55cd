use std::collections::HashMap;

use glam::Vec2;
use mesh_scatter::prelude::*;
use mesh_scatter_examples::{
    init_tracing, render_points_to_png, subdivided_sphere, PointColoring, Projection,
    RenderConfig,
};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let mut mesh = subdivided_sphere(2.0, 3)?;
    let config = DistributeConfig::new(DistributeMode::Poisson, 60.0)
        .with_minimum_distance(0.15)
        .with_seed(42);
    let distributor = PointDistributor::try_new(config)?;

    let before = distributor.run(Some(&mesh)).points;

    // Rigid move: ids depend only on triangle index and barycentric coordinate.
    for p in mesh.positions_mut() {
        p.x += 1.5;
    }
    let after = distributor.run(Some(&mesh)).points;

    let moved: HashMap<i32, glam::Vec3> = after.iter().map(|p| (p.id, p.position)).collect();
    let matched = before
        .iter()
        .filter(|p| moved.get(&p.id).is_some_and(|q| (*q - p.position).x > 1.0))
        .count();
    println!("{matched} of {} ids followed the deformation", before.len());

    let render = RenderConfig::new((800, 400), Vec2::new(-2.5, -2.5), Vec2::new(7.5, 2.5))
        .with_projection(Projection::Front)
        .with_coloring(PointColoring::Id)
        .with_pixel_radius(3);
    render_points_to_png(&before, &render, "distribute-ids-before.png")?;
    render_points_to_png(&after, &render, "distribute-ids-after.png")?;
    Ok(())
}
