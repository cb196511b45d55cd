//! Spatial indexing for neighbourhood queries over candidate points.
pub mod kd_tree;

pub use kd_tree::KdTree3;
