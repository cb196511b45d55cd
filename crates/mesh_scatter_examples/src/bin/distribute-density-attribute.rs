use glam::Vec2;
use mesh_scatter::prelude::*;
use mesh_scatter_examples::{
    init_tracing, render_points_to_png, GridPlane, PointColoring, RenderConfig,
};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let mesh = GridPlane::new(10.0, 40).build_with_height(|_, _| 0.0)?;

    // Radial falloff: dense in the middle, empty at the rim.
    let falloff: Vec<f32> = mesh
        .positions()
        .iter()
        .map(|p| (1.0 - p.truncate().length() / 5.0).clamp(0.0, 1.0))
        .collect();
    let mesh = mesh.with_vertex_attribute("falloff", falloff)?;

    let render = RenderConfig::new((800, 800), Vec2::splat(-5.0), Vec2::splat(5.0))
        .with_coloring(PointColoring::Solid([120, 220, 140]))
        .with_pixel_radius(2);

    for mode in [DistributeMode::Random, DistributeMode::Poisson] {
        let config = DistributeConfig::new(mode, 40.0)
            .with_minimum_distance(0.12)
            .with_density_attribute("falloff");
        let mut events: Vec<DistributeEvent> = Vec::new();
        let result = distribute_points_with_events(Some(&mesh), &config, &mut events);
        for event in &events {
            if let DistributeEvent::DensityMaskApplied {
                eliminated,
                remaining,
            } = event
            {
                println!("density mask: removed {eliminated}, kept {remaining}");
            }
        }
        let out = format!("distribute-density-{}.png", format!("{mode:?}").to_lowercase());
        render_points_to_png(&result.points, &render, out)?;
    }
    Ok(())
}
