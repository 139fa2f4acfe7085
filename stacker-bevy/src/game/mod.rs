//! Game module - drives the core simulation and keeps the tower visuals
//! in sync with it.
//!
//! The core `GameState` is the single source of truth: taps captured each
//! render frame are handed to the next fixed tick, and block transforms
//! are derived from core state every frame, never the other way around.

use bevy::prelude::*;

use stacker::{GameConfig, GameEvent, GameState, TickInput};

use crate::AppState;

pub mod components;
pub mod visuals;

pub use components::*;

/// The core simulation owned by this client.
#[derive(Resource)]
pub struct Session {
    /// Validated tunables for this session
    pub config: GameConfig,
    /// Authoritative game state
    pub state: GameState,
}

impl Default for Session {
    fn default() -> Self {
        let config = GameConfig::default();
        config.validate().expect("default config is valid");
        let state = GameState::new(&config);
        Self { config, state }
    }
}

/// Tap captured during the render frame, consumed by the next fixed tick.
#[derive(Resource, Default)]
pub struct PendingTap(pub bool);

/// Score of the run that just ended, read by the game-over overlay.
#[derive(Resource)]
pub struct FinalScore(pub u32);

/// Shared box mesh/material, instanced per tower entry.
#[derive(Resource)]
pub struct TowerAssets {
    /// Unit box at the base footprint; entities scale it per cut
    pub mesh: Handle<Mesh>,
    /// The constant box color
    pub material: Handle<StandardMaterial>,
}

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app
            // Resources
            .init_resource::<Session>()
            .init_resource::<PendingTap>()
            // Assets shared by every block entity
            .add_systems(Startup, setup_tower_assets)
            // Tower visuals live only while playing
            .add_systems(OnEnter(AppState::Playing), setup_tower)
            .add_systems(OnExit(AppState::Playing), cleanup_tower)
            // Core simulation runs every fixed tick, in every app state:
            // the Lost phase owns the restart tap.
            .add_systems(
                FixedUpdate,
                (
                    drive_simulation,
                    spawn_new_blocks.run_if(in_state(AppState::Playing)),
                )
                    .chain(),
            )
            // Render-frame systems
            .add_systems(
                Update,
                (
                    capture_taps,
                    sync_block_transforms.run_if(in_state(AppState::Playing)),
                    visuals::camera_follow,
                ),
            );
    }
}

/// Create the shared box mesh and material once.
fn setup_tower_assets(
    mut commands: Commands,
    session: Res<Session>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let config = &session.config;
    let [r, g, b] = stacker::game::config::BOX_COLOR;

    commands.insert_resource(TowerAssets {
        mesh: meshes.add(Cuboid::new(
            config.base_depth,
            config.block_height,
            config.base_extent,
        )),
        material: materials.add(StandardMaterial {
            base_color: Color::srgb(r, g, b),
            ..default()
        }),
    });
}

/// Rebuild block entities from the current core state.
fn setup_tower(mut commands: Commands, session: Res<Session>, assets: Res<TowerAssets>) {
    for (index, block) in session.state.stack.blocks().iter().enumerate() {
        spawn_block_visual(&mut commands, &assets, &session.config, block, index);
    }
    info!(
        "Tower ready: {} blocks, camera at {}",
        session.state.stack.len(),
        session.state.camera_height
    );
}

/// Drop all block entities (the game-over screen shows only the overlay).
fn cleanup_tower(mut commands: Commands, query: Query<Entity, With<BlockVisual>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

/// Capture any pointer/touch/key press during the render frame. Taps have
/// no positional meaning.
fn capture_taps(
    mouse: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    touches: Res<Touches>,
    mut pending: ResMut<PendingTap>,
) {
    let tapped = mouse.get_just_pressed().next().is_some()
        || keyboard.get_just_pressed().next().is_some()
        || touches.any_just_pressed();
    if tapped {
        pending.0 = true;
    }
}

/// Hand the captured tap to the core tick and mirror its events onto the
/// app state machine.
fn drive_simulation(
    mut session: ResMut<Session>,
    mut pending: ResMut<PendingTap>,
    mut next_state: ResMut<NextState<AppState>>,
    mut commands: Commands,
) {
    let input = TickInput {
        tap: std::mem::take(&mut pending.0),
    };

    let Session { config, state } = &mut *session;
    match stacker::tick(state, &input, config) {
        Ok(result) => {
            for event in &result.events {
                match event {
                    GameEvent::GameLost { final_score, .. } => {
                        commands.insert_resource(FinalScore(*final_score));
                        next_state.set(AppState::GameOver);
                    }
                    GameEvent::GameReset { .. } => {
                        next_state.set(AppState::Playing);
                    }
                    GameEvent::BlockPlaced { .. } => {}
                }
            }
        }
        Err(e) => error!("simulation error: {e}"),
    }
}

/// Spawn visuals for stack entries that appeared this tick.
fn spawn_new_blocks(
    mut commands: Commands,
    session: Res<Session>,
    assets: Res<TowerAssets>,
    existing: Query<&BlockVisual>,
) {
    let spawned = existing.iter().count();
    for (index, block) in session
        .state
        .stack
        .blocks()
        .iter()
        .enumerate()
        .skip(spawned)
    {
        spawn_block_visual(&mut commands, &assets, &session.config, block, index);
    }
}

/// Derive every block transform from core state.
fn sync_block_transforms(
    session: Res<Session>,
    mut query: Query<(&BlockVisual, &mut Transform)>,
) {
    let config = &session.config;
    for (visual, mut transform) in query.iter_mut() {
        if let Some(block) = session.state.stack.blocks().get(visual.index) {
            transform.translation = block_translation(config, block);
            transform.scale = Vec3::new(1.0, 1.0, block.extent / config.base_extent);
        }
    }
}

fn spawn_block_visual(
    commands: &mut Commands,
    assets: &TowerAssets,
    config: &GameConfig,
    block: &stacker::Block,
    index: usize,
) {
    commands.spawn((
        Mesh3d(assets.mesh.clone()),
        MeshMaterial3d(assets.material.clone()),
        Transform::from_translation(block_translation(config, block)).with_scale(Vec3::new(
            1.0,
            1.0,
            block.extent / config.base_extent,
        )),
        BlockVisual { index },
    ));
}

fn block_translation(config: &GameConfig, block: &stacker::Block) -> Vec3 {
    Vec3::new(0.0, block.level as f32 * config.block_height, block.z)
}
