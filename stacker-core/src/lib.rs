//! # Stacker Core
//!
//! Deterministic game logic for Stacker, a 3D stacking-blocks arcade game:
//! the active box sweeps back and forth along one axis, a tap cuts it down
//! to its overlap with the box beneath, and the run ends when the overlap
//! goes negative.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       STACKER CORE                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  game/              - Game logic (deterministic)            │
//! │  ├── config.rs      - Tunable constants + validation        │
//! │  ├── state.rs       - Blocks, stack, game state             │
//! │  ├── oscillator.rs  - Back-and-forth sweep of the active box│
//! │  ├── overlap.rs     - Cut/overlap evaluation on tap         │
//! │  ├── tick.rs        - Per-frame state machine + replay      │
//! │  └── events.rs      - Events emitted by the simulation      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism
//!
//! The simulation is single-threaded and frame-driven: one `tick` per
//! display frame, with tap input serialized by the frame loop. Given the
//! same config and the same tap script, `replay` reproduces a run exactly.
//! There is no randomness, no system time, and no rendering dependency;
//! the presentation layer derives transforms from this state each frame.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod game;

// Re-export commonly used types
pub use game::config::{ConfigError, GameConfig};
pub use game::events::GameEvent;
pub use game::overlap::Placement;
pub use game::state::{Block, Direction, GamePhase, GameState, Stack, StackError};
pub use game::tick::{replay, tick, TickInput, TickResult};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Simulation tick rate (Hz) - one tick per display frame
pub const TICK_RATE: u32 = 60;
