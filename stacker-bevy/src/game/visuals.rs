//! Visuals - camera tracking and the background gradient

use bevy::prelude::*;
use bevy::render::mesh::Indices;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::PrimitiveTopology;

use stacker::game::config::{BG_BOTTOM_COLOR, BG_TOP_COLOR};

use super::Session;

// ============================================================================
// CAMERA FOLLOW
// ============================================================================

/// Camera height smoothly tracks the core's camera height; the diagonal
/// orientation set at startup never changes.
pub fn camera_follow(
    time: Res<Time>,
    session: Res<Session>,
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
) {
    let Ok(mut transform) = camera_query.get_single_mut() else {
        return;
    };

    let target = session.state.camera_height;
    let lerp_speed = 5.0;
    let t = (lerp_speed * time.delta_secs()).min(1.0);
    transform.translation.y += (target - transform.translation.y) * t;
}

// ============================================================================
// BACKGROUND GRADIENT
// ============================================================================

/// Full-screen vertical gradient, warm yellow at the bottom fading to
/// soft red at the top. Parented to the camera so it always fills the
/// view behind the tower.
pub fn gradient_mesh() -> Mesh {
    // Comfortably larger than the 19.2 x 14.4 orthographic viewport.
    let half_w = 60.0;
    let half_h = 45.0;

    let bottom = vertex_color(BG_BOTTOM_COLOR);
    let top = vertex_color(BG_TOP_COLOR);

    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    )
    .with_inserted_attribute(
        Mesh::ATTRIBUTE_POSITION,
        vec![
            [-half_w, -half_h, 0.0],
            [half_w, -half_h, 0.0],
            [half_w, half_h, 0.0],
            [-half_w, half_h, 0.0],
        ],
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, vec![[0.0, 0.0, 1.0]; 4])
    .with_inserted_attribute(
        Mesh::ATTRIBUTE_UV_0,
        vec![[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]],
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, vec![bottom, bottom, top, top])
    .with_inserted_indices(Indices::U32(vec![0, 1, 2, 0, 2, 3]))
}

fn vertex_color([r, g, b]: [f32; 3]) -> [f32; 4] {
    Color::srgb(r, g, b).to_linear().to_f32_array()
}
