//! Stacker - 3D stacking blocks arcade game
//!
//! A tower of boxes slides back and forth; tap to drop the moving box
//! onto the one below. Whatever hangs over the edge is cut away, and the
//! run ends when a box misses the tower entirely.
//!
//! All rules live in `stacker-core`; this crate only renders the state
//! and forwards taps.

mod game;
mod ui;

use bevy::prelude::*;
use bevy::render::camera::ScalingMode;

use game::{GamePlugin, Session};
use ui::UiPlugin;

/// App states, mirroring the core game phases
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    /// Tower on screen, active box sweeping
    #[default]
    Playing,
    /// Final-score overlay, waiting for the restart tap
    GameOver,
}

fn main() {
    App::new()
        // Bevy defaults with the classic 640x480 window
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Stacker".into(),
                resolution: (640., 480.).into(),
                ..default()
            }),
            ..default()
        }))
        // One simulation tick per display frame at 60 Hz
        .insert_resource(Time::<Fixed>::from_hz(stacker::TICK_RATE as f64))
        // Game state
        .init_state::<AppState>()
        // Our plugins
        .add_plugins((GamePlugin, UiPlugin))
        // Startup
        .add_systems(Startup, setup_scene)
        .run();
}

/// Orthographic 3D camera looking down the tower diagonal, plus ambient
/// and directional lighting.
fn setup_scene(
    mut commands: Commands,
    session: Res<Session>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let start_height = session.config.camera_start_height;

    commands
        .spawn((
            Camera3d::default(),
            Projection::Orthographic(OrthographicProjection {
                // 640x480 window: 14.4 world units tall
                scaling_mode: ScalingMode::FixedVertical {
                    viewport_height: 14.4,
                },
                ..OrthographicProjection::default_3d()
            }),
            // Orientation is fixed here; only the height tracks the tower.
            Transform::from_xyz(5.0, start_height, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
        ))
        .with_children(|parent| {
            // Background gradient rides along behind everything in view.
            parent.spawn((
                Mesh3d(meshes.add(game::visuals::gradient_mesh())),
                MeshMaterial3d(materials.add(StandardMaterial {
                    unlit: true,
                    ..default()
                })),
                Transform::from_xyz(0.0, 0.0, -50.0),
            ));
        });

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::default().looking_to(Vec3::new(-1.0, -5.8, -0.2).normalize(), Vec3::Y),
    ));

    info!("Stacker initialized");
}
