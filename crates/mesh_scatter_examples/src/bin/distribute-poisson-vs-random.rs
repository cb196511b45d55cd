use glam::Vec2;
use mesh_scatter::prelude::*;
use mesh_scatter_examples::{grid_plane, init_tracing, render_points_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let mesh = grid_plane(10.0, 4)?;
    let render = RenderConfig::new((800, 800), Vec2::splat(-5.0), Vec2::splat(5.0))
        .with_background([10, 10, 10])
        .with_pixel_radius(3);

    // Same density: random clumps, poisson keeps a minimum spacing.
    let random = DistributeConfig::new(DistributeMode::Random, 12.0).with_seed(3);
    let poisson = random
        .clone()
        .with_mode(DistributeMode::Poisson)
        .with_minimum_distance(0.25);

    for (config, out) in [
        (random, "distribute-random.png"),
        (poisson, "distribute-poisson.png"),
    ] {
        let result = PointDistributor::try_new(config)?.run(Some(&mesh));
        println!("{out}: {:?}", result.stats);
        render_points_to_png(&result.points, &render, out)?;
    }
    Ok(())
}
