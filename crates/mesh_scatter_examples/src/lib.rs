#![forbid(unsafe_code)]

mod meshes;
mod rendering;

pub use meshes::{grid_plane, subdivided_sphere, GridPlane};
pub use rendering::{
    init_tracing, render_points_to_png, PointColoring, Projection, RenderConfig,
};
