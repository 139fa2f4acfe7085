//! Game Logic Module
//!
//! All game simulation code. 100% deterministic.
//!
//! ## Module Structure
//!
//! - `config`: Tunable constants with validation
//! - `state`: Block, stack and game state
//! - `oscillator`: Back-and-forth motion of the active box
//! - `overlap`: Overlap evaluation when the player taps
//! - `tick`: Per-frame state machine and replay
//! - `events`: Events emitted by the simulation

pub mod config;
pub mod events;
pub mod oscillator;
pub mod overlap;
pub mod state;
pub mod tick;

// Re-export key types
pub use config::{ConfigError, GameConfig};
pub use events::GameEvent;
pub use overlap::Placement;
pub use state::{Block, Direction, GamePhase, GameState, Stack, StackError};
pub use tick::{TickInput, TickResult};
