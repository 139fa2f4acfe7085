//! Components for the tower visuals

use bevy::prelude::*;

/// Ties a block entity to its index in the core stack (bottom to top).
///
/// The stack only ever appends during a run, so indices stay valid until
/// the tower is torn down on leaving the playing state.
#[derive(Component)]
pub struct BlockVisual {
    /// Index into `GameState::stack`
    pub index: usize,
}
