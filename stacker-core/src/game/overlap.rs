//! Overlap Evaluator
//!
//! Decides what a tap does to the active box: computes the horizontal
//! overlap with the box directly beneath and shrinks the active box to
//! it, or declares the run lost when the overlap goes negative.

use serde::{Deserialize, Serialize};

/// Outcome of evaluating the active box against its support.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Placement {
    /// Exact positional alignment: footprint unchanged, trivial success.
    Aligned,
    /// Partial overlap: the active box shrinks along the oscillation axis.
    Trimmed {
        /// New footprint extent, `below_extent - offset`
        new_extent: f32,
        /// Scale factor applied along the axis, `new_extent / below_extent`
        scale: f32,
        /// Horizontal miss distance
        offset: f32,
    },
    /// The boxes no longer overlap: the run is lost.
    Miss {
        /// How far past the support edge the tap landed
        overshoot: f32,
    },
}

impl Placement {
    /// Whether the tap keeps the run going.
    pub fn is_success(&self) -> bool {
        !matches!(self, Placement::Miss { .. })
    }
}

/// Evaluate a tap.
///
/// `below_extent` is the full footprint width of the supporting box along
/// the oscillation axis. Exact equality of the two positions skips the
/// resize entirely; a zero-width overlap still counts as a success (only
/// a strictly negative overlap loses).
pub fn evaluate(active_z: f32, below_z: f32, below_extent: f32) -> Placement {
    if active_z == below_z {
        return Placement::Aligned;
    }

    let offset = (active_z - below_z).abs();
    let new_extent = below_extent - offset;

    if new_extent < 0.0 {
        Placement::Miss {
            overshoot: -new_extent,
        }
    } else {
        Placement::Trimmed {
            new_extent,
            scale: new_extent / below_extent,
            offset,
        }
    }
}
