//! Point distribution over mesh surfaces.
//!
//! Two modes are available:
//! - [`DistributeMode::Random`]: samples every triangle at the requested density scaled
//!   by the density attribute. Fast, allows arbitrarily close points.
//! - [`DistributeMode::Poisson`]: samples at maximum density, removes points closer than
//!   the minimum distance, applies the density attribute as a mask, then derives normals
//!   and stable ids from each survivor's surface location.
//!
//! A missing mesh, a mesh without triangles or a non-positive density all produce an
//! empty [`PointCloud`] rather than an error.
use tracing::{debug, debug_span, info};

use crate::error::{Error, Result};
use crate::mesh::{triangles, SurfaceMesh};
use crate::point_cloud::{PointCloud, DEFAULT_POINT_RADIUS};
use crate::sampling::hash::stable_id;
use crate::sampling::{uniform_distribution, Candidates, TriangleSampler};

pub mod density;
pub mod events;
pub mod finalize;
pub mod thinning;

pub use density::DensityFactors;
use events::{DistributeEvent, EventSink};
use finalize::{compute_point_data, PointData};

/// Distribution method.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistributeMode {
    /// Independent random points per triangle, no spacing guarantee.
    #[default]
    Random,
    /// Random points thinned to a minimum distance, with stable ids.
    Poisson,
}

/// Configuration for a distribution run.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistributeConfig {
    /// Points per unit area where the density factor is one.
    pub density_max: f32,
    /// Optional per-vertex attribute scaling the density, expected in [0, 1].
    pub density_attribute: Option<String>,
    /// Minimum distance between points. Only used in [`DistributeMode::Poisson`].
    pub minimum_distance: f32,
    /// Seed combined with each triangle index.
    pub seed: i32,
    /// Distribution method.
    pub mode: DistributeMode,
    /// Radius written to every output point.
    pub point_radius: f32,
}

impl Default for DistributeConfig {
    fn default() -> Self {
        Self {
            density_max: 1.0,
            density_attribute: None,
            minimum_distance: 0.1,
            seed: 0,
            mode: DistributeMode::Random,
            point_radius: DEFAULT_POINT_RADIUS,
        }
    }
}

impl DistributeConfig {
    /// Creates a new [`DistributeConfig`] with the given mode and maximum density.
    pub fn new(mode: DistributeMode, density_max: f32) -> Self {
        Self {
            mode,
            density_max,
            ..Default::default()
        }
    }

    /// Sets the maximum density.
    pub fn with_density_max(mut self, density_max: f32) -> Self {
        self.density_max = density_max;
        self
    }

    /// Sets the density attribute name.
    pub fn with_density_attribute(mut self, name: impl Into<String>) -> Self {
        self.density_attribute = Some(name.into());
        self
    }

    /// Sets the minimum distance.
    pub fn with_minimum_distance(mut self, minimum_distance: f32) -> Self {
        self.minimum_distance = minimum_distance;
        self
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: i32) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the distribution mode.
    pub fn with_mode(mut self, mode: DistributeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the output point radius.
    pub fn with_point_radius(mut self, point_radius: f32) -> Self {
        self.point_radius = point_radius;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    ///
    /// A zero density is valid and simply produces no points.
    pub fn validate(&self) -> Result<()> {
        if !(self.density_max >= 0.0) || self.density_max.is_infinite() {
            return Err(Error::InvalidConfig(
                "density_max must be finite and >= 0".into(),
            ));
        }
        if !(self.minimum_distance >= 0.0) || self.minimum_distance.is_infinite() {
            return Err(Error::InvalidConfig(
                "minimum_distance must be finite and >= 0".into(),
            ));
        }
        if !(self.point_radius > 0.0) {
            return Err(Error::InvalidConfig("point_radius must be > 0".into()));
        }

        Ok(())
    }
}

/// Counters describing one distribution run.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DistributeStats {
    /// Points generated before any elimination.
    pub candidates: usize,
    /// Points removed by minimum-distance thinning.
    pub eliminated_by_distance: usize,
    /// Points removed by the density attribute mask.
    pub eliminated_by_density: usize,
    /// Points in the output.
    pub points: usize,
}

/// Result of a distribution run.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistributeResult {
    pub points: PointCloud,
    pub stats: DistributeStats,
}

/// Runs distributions with a validated configuration.
#[derive(Debug, Clone)]
pub struct PointDistributor {
    /// Configuration applied to every run.
    pub config: DistributeConfig,
}

impl PointDistributor {
    pub fn try_new(config: DistributeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn new(config: DistributeConfig) -> Self {
        debug_assert!(
            config.minimum_distance >= 0.0,
            "minimum_distance must be >= 0"
        );
        debug_assert!(config.point_radius > 0.0, "point_radius must be > 0");
        Self { config }
    }

    /// Distributes points over `mesh`.
    pub fn run<M: SurfaceMesh + ?Sized>(&self, mesh: Option<&M>) -> DistributeResult {
        distribute_points_with_events(mesh, &self.config, &mut ())
    }

    pub fn run_with_events<M: SurfaceMesh + ?Sized>(
        &self,
        mesh: Option<&M>,
        sink: &mut dyn EventSink,
    ) -> DistributeResult {
        distribute_points_with_events(mesh, &self.config, sink)
    }
}

/// Distributes points over `mesh` according to `config`.
pub fn distribute_points<M: SurfaceMesh + ?Sized>(
    mesh: Option<&M>,
    config: &DistributeConfig,
) -> PointCloud {
    distribute_points_with_events(mesh, config, &mut ()).points
}

/// Distributes points over `mesh`, reporting progress to `sink`.
///
/// Panics in [`DistributeMode::Poisson`] if `config.minimum_distance` is negative or NaN.
pub fn distribute_points_with_events<M: SurfaceMesh + ?Sized>(
    mesh: Option<&M>,
    config: &DistributeConfig,
    sink: &mut dyn EventSink,
) -> DistributeResult {
    sink.send(DistributeEvent::RunStarted {
        config: config.clone(),
        triangle_count: mesh.map_or(0, |m| m.triangle_count()),
    });

    let Some(mesh) = mesh else {
        debug!("No mesh input; producing no points.");
        return finish(DistributeResult::default(), sink);
    };
    if mesh.triangle_count() == 0 {
        debug!("Mesh has no triangles; producing no points.");
        return finish(DistributeResult::default(), sink);
    }
    if !(config.density_max > 0.0) {
        debug!(
            "Density {} is not positive; producing no points.",
            config.density_max
        );
        return finish(DistributeResult::default(), sink);
    }

    let factors = resolve_density_factors(mesh, config, sink);
    let mut stats = DistributeStats::default();

    let (candidates, data) = match config.mode {
        DistributeMode::Random => {
            random_scatter_points(mesh, config.density_max, &factors, config.seed, &mut stats)
        }
        DistributeMode::Poisson => stable_scatter_with_minimum_distance(
            mesh,
            config.density_max,
            config.minimum_distance,
            &factors,
            config.seed,
            &mut stats,
            sink,
        ),
    };

    let (positions, _, _) = candidates.into_parts();
    let points = PointCloud::from_parts(positions, data.ids, data.normals, config.point_radius);
    stats.points = points.len();

    info!(
        "Distributed {} points ({:?}) over {} triangles | candidates: {}.",
        stats.points,
        config.mode,
        mesh.triangle_count(),
        stats.candidates,
    );

    finish(DistributeResult { points, stats }, sink)
}

fn finish(result: DistributeResult, sink: &mut dyn EventSink) -> DistributeResult {
    sink.send(DistributeEvent::RunFinished {
        stats: result.stats,
    });
    result
}

fn resolve_density_factors<'a, M: SurfaceMesh + ?Sized>(
    mesh: &'a M,
    config: &DistributeConfig,
    sink: &mut dyn EventSink,
) -> DensityFactors<'a> {
    let name = config.density_attribute.as_deref();
    let factors = DensityFactors::from_mesh(mesh, name);
    if let (Some(name), true) = (name.filter(|n| !n.is_empty()), factors.is_uniform()) {
        sink.send(DistributeEvent::Warning {
            context: format!("density_attribute:{name}"),
            message: "Density attribute unavailable; using 1.0".into(),
        });
    }
    factors
}

/// Samples every triangle at `density` scaled by its mean density factor. Ids and normals
/// are computed per point as it is generated.
fn random_scatter_points<M: SurfaceMesh + ?Sized>(
    mesh: &M,
    density: f32,
    factors: &DensityFactors<'_>,
    seed: i32,
    stats: &mut DistributeStats,
) -> (Candidates, PointData) {
    let sampler = TriangleSampler::new(seed);
    let mut candidates = Candidates::new();
    let mut data = PointData::default();

    for tri in triangles(mesh) {
        let start = candidates.len();
        let added = sampler.sample(&tri, density * factors.triangle_mean(&tri), &mut candidates);
        if added == 0 {
            continue;
        }
        let normal = tri.normal();
        for &bary in &candidates.bary_coords()[start..] {
            data.ids.push(stable_id(bary, tri.index));
            data.normals.push(normal);
        }
    }

    stats.candidates = candidates.len();
    (candidates, data)
}

/// Uniform pass at maximum density, minimum-distance thinning, density mask, then
/// normals and ids recomputed from the surviving surface locations.
fn stable_scatter_with_minimum_distance<M: SurfaceMesh + ?Sized>(
    mesh: &M,
    max_density: f32,
    minimum_distance: f32,
    factors: &DensityFactors<'_>,
    seed: i32,
    stats: &mut DistributeStats,
    sink: &mut dyn EventSink,
) -> (Candidates, PointData) {
    let _span = debug_span!("stable_scatter_with_minimum_distance").entered();

    let mut candidates = uniform_distribution(mesh, max_density, seed);
    stats.candidates = candidates.len();
    sink.send(DistributeEvent::CandidatesGenerated {
        count: candidates.len(),
    });

    stats.eliminated_by_distance =
        thinning::eliminate_close_points(&mut candidates, minimum_distance);
    sink.send(DistributeEvent::ThinningFinished {
        minimum_distance,
        eliminated: stats.eliminated_by_distance,
        remaining: candidates.len(),
    });

    if !factors.is_uniform() {
        let mask = density::density_elimination_mask(
            mesh,
            factors,
            candidates.bary_coords(),
            candidates.tri_indices(),
        );
        stats.eliminated_by_density =
            thinning::eliminate_points_based_on_mask(&mut candidates, &mask);
        sink.send(DistributeEvent::DensityMaskApplied {
            eliminated: stats.eliminated_by_density,
            remaining: candidates.len(),
        });
    }

    let data = compute_point_data(mesh, candidates.bary_coords(), candidates.tri_indices());
    (candidates, data)
}
