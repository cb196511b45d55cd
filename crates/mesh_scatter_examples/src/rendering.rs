use std::path::Path;

use glam::{Vec2, Vec3};
use image::{Rgb, RgbImage};
use mesh_scatter::point_cloud::PointCloud;
use mesh_scatter::sampling::hash::unit_from_id;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs a formatting subscriber honouring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Plane the points are projected onto.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Projection {
    /// Looking down `-Z`.
    #[default]
    Top,
    /// Looking along `+Y`.
    Front,
    /// Looking along `-X`.
    Side,
}

impl Projection {
    fn project(self, p: Vec3) -> Vec2 {
        match self {
            Projection::Top => Vec2::new(p.x, p.y),
            Projection::Front => Vec2::new(p.x, p.z),
            Projection::Side => Vec2::new(p.y, p.z),
        }
    }
}

/// How each point is colored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointColoring {
    Solid([u8; 3]),
    /// Normal direction mapped from `[-1, 1]` to RGB.
    Normal,
    /// Pseudo-random color per stable id.
    Id,
}

#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub image_size: (u32, u32),
    pub min: Vec2,
    pub max: Vec2,
    pub background: [u8; 3],
    pub projection: Projection,
    pub coloring: PointColoring,
    /// Radius in pixels. Zero derives it from each point's radius.
    pub pixel_radius: u32,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), min: Vec2, max: Vec2) -> Self {
        Self {
            image_size,
            min,
            max,
            background: [0, 0, 0],
            projection: Projection::Top,
            coloring: PointColoring::Solid([255, 255, 255]),
            pixel_radius: 0,
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    pub fn with_coloring(mut self, coloring: PointColoring) -> Self {
        self.coloring = coloring;
        self
    }

    pub fn with_pixel_radius(mut self, pixel_radius: u32) -> Self {
        self.pixel_radius = pixel_radius;
        self
    }

    fn to_pixel(&self, p: Vec2) -> Vec2 {
        let (w, h) = self.image_size;
        let t = (p - self.min) / (self.max - self.min).max(Vec2::splat(f32::EPSILON));
        // Image rows grow downwards.
        Vec2::new(t.x * w as f32, (1.0 - t.y) * h as f32)
    }

    fn pixels_per_unit(&self) -> f32 {
        let extent = (self.max - self.min).max(Vec2::splat(f32::EPSILON));
        (self.image_size.0 as f32 / extent.x).min(self.image_size.1 as f32 / extent.y)
    }
}

/// Renders `points` as filled discs and writes a PNG to `path`.
pub fn render_points_to_png(
    points: &PointCloud,
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let path = path.as_ref();
    let (w, h) = config.image_size;
    let mut img = RgbImage::from_pixel(w, h, Rgb(config.background));
    let scale = config.pixels_per_unit();

    for point in points.iter() {
        let center = config.to_pixel(config.projection.project(point.position));
        let radius = if config.pixel_radius > 0 {
            config.pixel_radius as f32
        } else {
            (point.radius * scale).max(1.0)
        };
        let color = match config.coloring {
            PointColoring::Solid(c) => c,
            PointColoring::Normal => normal_color(point.normal),
            PointColoring::Id => id_color(point.id),
        };
        draw_disc(&mut img, center, radius, Rgb(color));
    }

    img.save(path)?;
    info!("Wrote {} points to {}", points.len(), path.display());
    Ok(())
}

fn normal_color(normal: Vec3) -> [u8; 3] {
    let n = normal.normalize_or_zero() * 0.5 + Vec3::splat(0.5);
    [
        (n.x * 255.0) as u8,
        (n.y * 255.0) as u8,
        (n.z * 255.0) as u8,
    ]
}

fn id_color(id: i32) -> [u8; 3] {
    let channel = |salt: i32| {
        let u = unit_from_id(id.wrapping_mul(31).wrapping_add(salt));
        64 + (u * 191.0) as u8
    };
    [channel(1), channel(2), channel(3)]
}

fn draw_disc(img: &mut RgbImage, center: Vec2, radius: f32, color: Rgb<u8>) {
    let (w, h) = img.dimensions();
    let x0 = (center.x - radius).floor().max(0.0) as u32;
    let y0 = (center.y - radius).floor().max(0.0) as u32;
    let x1 = ((center.x + radius).ceil().max(0.0) as u32).min(w);
    let y1 = ((center.y + radius).ceil().max(0.0) as u32).min(h);
    let r2 = radius * radius;

    for y in y0..y1 {
        for x in x0..x1 {
            let d = Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - center;
            if d.length_squared() <= r2 {
                img.put_pixel(x, y, color);
            }
        }
    }
}
