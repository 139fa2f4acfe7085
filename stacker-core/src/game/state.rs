//! Game State Definitions
//!
//! Plain-data state for a Stacker session. The renderer derives its
//! transforms from these types every frame; nothing here depends on a
//! rendering representation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::config::GameConfig;
use crate::game::events::GameEvent;

// =============================================================================
// DIRECTION
// =============================================================================

/// Sweep direction of the active box along the oscillation axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Toward the positive bound
    #[default]
    Positive,
    /// Toward the negative bound
    Negative,
}

impl Direction {
    /// Signed unit factor for position updates.
    #[inline]
    pub fn signum(self) -> f32 {
        match self {
            Direction::Positive => 1.0,
            Direction::Negative => -1.0,
        }
    }

    /// The opposite direction.
    #[inline]
    pub fn flipped(self) -> Direction {
        match self {
            Direction::Positive => Direction::Negative,
            Direction::Negative => Direction::Positive,
        }
    }
}

// =============================================================================
// BLOCK
// =============================================================================

/// A rigid box in the tower.
///
/// Height is one stack level and the depth axis is never cut, so a block
/// is fully described by its level, its offset along the oscillation axis
/// and its footprint extent on that axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Stack level (0 = base box); world height is `level * block_height`
    pub level: u32,
    /// Center offset along the oscillation axis
    pub z: f32,
    /// Full footprint width along the oscillation axis (shrinks on cuts)
    pub extent: f32,
}

impl Block {
    /// The base box a run starts with, centered at the origin.
    pub fn base(config: &GameConfig) -> Self {
        Self {
            level: 0,
            z: 0.0,
            extent: config.base_extent,
        }
    }
}

// =============================================================================
// STACK
// =============================================================================

/// Stack invariant violation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StackError {
    /// The tap path needs a box beneath the active one; after init this
    /// cannot happen, so hitting it means the lifecycle was bypassed.
    #[error("stack invariant violated: no block beneath the active box")]
    NoSupportingBlock,
}

/// Ordered tower of blocks, bottom to top.
///
/// Never empty after initialization; the topmost entry is the active
/// (moving) box. Blocks are only ever appended during a run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stack {
    blocks: Vec<Block>,
}

impl Stack {
    /// Create a stack holding only the base box.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            blocks: vec![Block::base(config)],
        }
    }

    /// Number of blocks in the tower.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// A stack is never empty after init, but the trait-like pair is
    /// provided for completeness.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// All blocks, bottom to top.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// The active (topmost, moving) box.
    pub fn active(&self) -> &Block {
        self.blocks.last().expect("stack is never empty after init")
    }

    /// Mutable access to the active box.
    pub fn active_mut(&mut self) -> &mut Block {
        self.blocks
            .last_mut()
            .expect("stack is never empty after init")
    }

    /// The most recently placed static box, directly beneath the active
    /// one. Fails fast if the stack holds fewer than two entries.
    pub fn below_active(&self) -> Result<&Block, StackError> {
        if self.blocks.len() < 2 {
            return Err(StackError::NoSupportingBlock);
        }
        Ok(&self.blocks[self.blocks.len() - 2])
    }

    /// Append a freshly spawned box on top.
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }
}

// =============================================================================
// GAME PHASE
// =============================================================================

/// Current phase of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay: the top box sweeps, taps cut
    #[default]
    Playing,
    /// Terminal state after a missed cut; frozen until the restart tap
    Lost,
}

// =============================================================================
// GAME STATE
// =============================================================================

/// Complete session state (deterministic, serializable).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Simulation tick counter
    pub tick: u64,
    /// Successfully placed boxes this run
    pub score: u32,
    /// Camera height tracking the tower; rises one unit per placement
    pub camera_height: f32,
    /// Current sweep direction of the active box
    pub direction: Direction,
    /// Current phase
    pub phase: GamePhase,
    /// The tower
    pub stack: Stack,
    /// Events generated since the last drain
    pending_events: Vec<GameEvent>,
}

impl GameState {
    /// Start a fresh run: base box at the origin plus one active box
    /// already sweeping in from the negative bound.
    pub fn new(config: &GameConfig) -> Self {
        let mut state = Self {
            tick: 0,
            score: 0,
            camera_height: config.camera_start_height,
            direction: Direction::Positive,
            phase: GamePhase::Playing,
            stack: Stack::new(config),
            pending_events: Vec::new(),
        };
        state.spawn_active(config);
        state
    }

    /// Spawn the next active box one level above the current top, at the
    /// negative bound, sweeping toward the positive bound. The new box
    /// inherits the footprint of the box it will be cut against.
    pub fn spawn_active(&mut self, config: &GameConfig) {
        let top = *self.stack.active();
        self.stack.push(Block {
            level: top.level + 1,
            z: -config.bound,
            extent: top.extent,
        });
        self.direction = Direction::Positive;
    }

    /// Final score exposed to the presentation layer on loss.
    pub fn final_score(&self) -> u32 {
        self.score
    }

    /// Queue an event for this tick.
    pub fn push_event(&mut self, event: GameEvent) {
        self.pending_events.push(event);
    }

    /// Drain events generated since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending_events)
    }
}
