//! UI module - score HUD and the game-over overlay
//!
//! The restart tap is not handled here: taps always flow through the
//! core simulation, whose lost phase performs the reset.

use bevy::prelude::*;

use crate::game::{FinalScore, Session};
use crate::AppState;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Playing), setup_hud)
            .add_systems(OnExit(AppState::Playing), cleanup_hud)
            .add_systems(
                Update,
                update_hud.run_if(in_state(AppState::Playing)),
            )
            .add_systems(OnEnter(AppState::GameOver), setup_game_over)
            .add_systems(OnExit(AppState::GameOver), cleanup_game_over);
    }
}

/// Marker for HUD UI
#[derive(Component)]
struct HudUI;

/// Marker for the score readout
#[derive(Component)]
struct ScoreText;

/// Marker for game-over UI
#[derive(Component)]
struct GameOverUI;

/// Score counter in the top-left corner.
fn setup_hud(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(10.0),
                left: Val::Px(10.0),
                ..default()
            },
            HudUI,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Score: 0"),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                ScoreText,
            ));
        });
}

fn update_hud(session: Res<Session>, mut score_text: Query<&mut Text, With<ScoreText>>) {
    if let Ok(mut text) = score_text.get_single_mut() {
        **text = format!("Score: {}", session.state.score);
    }
}

fn cleanup_hud(mut commands: Commands, query: Query<Entity, With<HudUI>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

/// Final-score overlay shown until the restart tap.
fn setup_game_over(mut commands: Commands, final_score: Option<Res<FinalScore>>) {
    let score = final_score.map(|s| s.0).unwrap_or(0);
    info!("Game over, final score {score}");

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.85)),
            GameOverUI,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(format!("Final score: {score}")),
                TextFont {
                    font_size: 36.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    margin: UiRect::bottom(Val::Px(20.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new("Game over."),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    margin: UiRect::bottom(Val::Px(10.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new("Tap Screen To Play Again."),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

fn cleanup_game_over(mut commands: Commands, query: Query<Entity, With<GameOverUI>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
