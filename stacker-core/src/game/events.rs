//! Game Events
//!
//! Events generated during simulation, consumed by the presentation layer
//! (UI transitions, overlays) and by the headless simulator's log.

use serde::{Deserialize, Serialize};

/// An event emitted by the simulation. At most one per tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A tap landed and the active box froze onto the tower.
    BlockPlaced {
        /// Tick when the tap was processed
        tick: u64,
        /// Level the box froze at
        level: u32,
        /// Horizontal miss distance (0 for a perfect placement)
        offset: f32,
        /// Footprint extent after the cut
        new_extent: f32,
        /// Exact alignment, no resize happened
        perfect: bool,
        /// Score after this placement
        score: u32,
    },
    /// A tap missed the support entirely; the run is over.
    GameLost {
        /// Tick when the miss was processed
        tick: u64,
        /// Score to show on the game-over overlay
        final_score: u32,
    },
    /// A tap in the lost state started a fresh run.
    GameReset {
        /// Tick (of the old run) when the restart tap arrived
        tick: u64,
    },
}

impl GameEvent {
    /// Create a placement event.
    pub fn block_placed(
        tick: u64,
        level: u32,
        offset: f32,
        new_extent: f32,
        perfect: bool,
        score: u32,
    ) -> Self {
        GameEvent::BlockPlaced {
            tick,
            level,
            offset,
            new_extent,
            perfect,
            score,
        }
    }

    /// Create a loss event.
    pub fn game_lost(tick: u64, final_score: u32) -> Self {
        GameEvent::GameLost { tick, final_score }
    }

    /// Create a reset event.
    pub fn game_reset(tick: u64) -> Self {
        GameEvent::GameReset { tick }
    }
}
