//! Event types and sinks for observing distribution runs.
//!
//! This module defines [`DistributeEvent`] and sinks that ignore (`()`), collect
//! (`Vec<DistributeEvent>`) or log ([`TracingSink`]) events while running
//! [`crate::distribute::PointDistributor`] or
//! [`crate::distribute::distribute_points_with_events`].
use tracing::{debug, warn};

use crate::distribute::{DistributeConfig, DistributeStats};

/// Describes events emitted by a distribution run.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum DistributeEvent {
    /// Emitted when a run starts on a mesh.
    RunStarted {
        /// The configuration used.
        config: DistributeConfig,
        /// Number of triangles in the input mesh.
        triangle_count: usize,
    },

    /// Emitted once candidate points have been generated on all triangles.
    CandidatesGenerated {
        /// Number of candidates.
        count: usize,
    },

    /// Emitted after minimum-distance thinning.
    ThinningFinished {
        /// Minimum distance used.
        minimum_distance: f32,
        /// Number of eliminated candidates.
        eliminated: usize,
        /// Number of remaining candidates.
        remaining: usize,
    },

    /// Emitted after the density attribute mask was applied.
    DensityMaskApplied {
        /// Number of eliminated points.
        eliminated: usize,
        /// Number of remaining points.
        remaining: usize,
    },

    /// Emitted when the run finishes, including runs that produced no points.
    RunFinished {
        /// Counters for the whole run.
        stats: DistributeStats,
    },

    /// Non-fatal warning generated during the run.
    Warning {
        /// Context string (e.g. attribute name).
        context: String,
        /// Human-readable message.
        message: String,
    },
}

/// A generic event sink that accepts [`DistributeEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: DistributeEvent);
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: DistributeEvent) {}
}

/// Collects every event in order.
impl EventSink for Vec<DistributeEvent> {
    #[inline]
    fn send(&mut self, event: DistributeEvent) {
        self.push(event);
    }
}

/// Forwards events to `tracing`: warnings at warn level, stage reports at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn send(&mut self, event: DistributeEvent) {
        match event {
            DistributeEvent::Warning { context, message } => {
                warn!("[{}] {}", context, message);
            }
            DistributeEvent::RunStarted { config, triangle_count } => {
                debug!(
                    "Run started: {:?} mode over {} triangles.",
                    config.mode, triangle_count
                );
            }
            DistributeEvent::CandidatesGenerated { count } => {
                debug!("Generated {} candidates.", count);
            }
            DistributeEvent::ThinningFinished {
                minimum_distance,
                eliminated,
                remaining,
            } => {
                debug!(
                    "Thinned at {}: eliminated {}, remaining {}.",
                    minimum_distance, eliminated, remaining
                );
            }
            DistributeEvent::DensityMaskApplied {
                eliminated,
                remaining,
            } => {
                debug!(
                    "Density mask: eliminated {}, remaining {}.",
                    eliminated, remaining
                );
            }
            DistributeEvent::RunFinished { stats } => {
                debug!("Run finished: {:?}.", stats);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warning() -> DistributeEvent {
        DistributeEvent::Warning {
            context: "density".into(),
            message: "m".into(),
        }
    }

    #[test]
    fn vec_collects_events_in_order() {
        let mut events: Vec<DistributeEvent> = Vec::new();
        events.send(warning());
        events.send(DistributeEvent::CandidatesGenerated { count: 3 });
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], DistributeEvent::Warning { .. }));
        assert!(matches!(
            events[1],
            DistributeEvent::CandidatesGenerated { count: 3 }
        ));
    }

    #[test]
    fn tracing_sink_accepts_every_event() {
        let mut sink = TracingSink;
        sink.send(warning());
        sink.send(DistributeEvent::RunFinished {
            stats: DistributeStats::default(),
        });
    }
}
