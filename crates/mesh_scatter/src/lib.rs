#![forbid(unsafe_code)]
//! mesh_scatter: Deterministic point distribution over triangle mesh surfaces.
//!
//! Modules:
//! - mesh: the `SurfaceMesh` input trait, an owned `TriangleMesh` and triangle helpers
//! - sampling: seeded per-triangle sampling, stable id hashing, candidate buffers
//! - spatial: static k-d tree for radius queries
//! - distribute: random and Poisson distribution, minimum-distance thinning, density masks, events
//! - point_cloud: output points with position, radius, id, normal and rotation channels
//!
//! For examples and docs, see README and docs.rs.
pub mod distribute;
pub mod error;
pub mod mesh;
pub mod point_cloud;
pub mod sampling;
pub mod spatial;

/// Convenient re-exports for common types. Import with `use mesh_scatter::prelude::*;`.
pub mod prelude {
    pub use crate::distribute::events::{DistributeEvent, EventSink, TracingSink};
    pub use crate::distribute::thinning::{
        eliminate_close_points, elimination_mask_for_close_points,
    };
    pub use crate::distribute::{
        distribute_points, distribute_points_with_events, DensityFactors, DistributeConfig,
        DistributeMode, DistributeResult, DistributeStats, PointDistributor,
    };
    pub use crate::error::{Error, Result};
    pub use crate::mesh::{SurfaceMesh, Triangle, TriangleMesh};
    pub use crate::point_cloud::{AttributeSlice, Point, PointCloud, DEFAULT_POINT_RADIUS};
    pub use crate::sampling::{uniform_distribution, Candidates, TriangleSampler};
    pub use crate::spatial::KdTree3;
}
