//! Stacker Headless Simulator
//!
//! Plays a scripted session without a renderer: taps at a fixed tick
//! interval, logs every placement and loss, verifies replay determinism,
//! and prints a JSON summary of the final tower.
//!
//! Usage: `stacker-sim [tap_interval] [tick_count]`

use serde::Serialize;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use stacker::{
    game::tick::{replay, tick, TickInput},
    GameConfig, GameEvent, GamePhase, GameState, StackError, TICK_RATE, VERSION,
};

/// Machine-readable run summary.
#[derive(Serialize)]
struct RunSummary {
    version: &'static str,
    ticks_run: u64,
    taps: usize,
    resets: usize,
    final_phase: GamePhase,
    final_score: u32,
    tower: Vec<TowerEntry>,
}

/// One block of the final tower.
#[derive(Serialize)]
struct TowerEntry {
    level: u32,
    z: f32,
    extent: f32,
}

fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    let mut args = std::env::args().skip(1);
    let tap_interval: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(47);
    let tick_count: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(40 * TICK_RATE as u64);

    info!("Stacker Simulator v{}", VERSION);
    info!("Tick Rate: {} Hz", TICK_RATE);
    info!(
        "Tapping every {} ticks for {} ticks total",
        tap_interval, tick_count
    );

    let config = GameConfig::default();
    if let Err(e) = config.validate() {
        error!("invalid config: {e}");
        return;
    }

    let taps: Vec<u64> = (1..)
        .map(|i| i * tap_interval)
        .take_while(|&t| t < tick_count)
        .collect();

    match demo_session(&config, &taps, tick_count) {
        Ok(()) => {}
        Err(e) => error!("simulation aborted: {e}"),
    }
}

/// Run the scripted session, then re-run it through `replay` and compare.
fn demo_session(config: &GameConfig, taps: &[u64], tick_count: u64) -> Result<(), StackError> {
    let mut state = GameState::new(config);
    let mut resets = 0usize;

    for t in 0..tick_count {
        let input = TickInput {
            tap: taps.contains(&t),
        };
        let result = tick(&mut state, &input, config)?;

        for event in &result.events {
            match event {
                GameEvent::BlockPlaced {
                    level,
                    offset,
                    new_extent,
                    perfect,
                    score,
                    ..
                } => {
                    if *perfect {
                        info!("level {level}: perfect placement, score {score}");
                    } else {
                        info!(
                            "level {level}: cut by {offset:.2} to {new_extent:.2}, score {score}"
                        );
                    }
                }
                GameEvent::GameLost { final_score, .. } => {
                    info!("run over at tick {t}, final score {final_score}");
                }
                GameEvent::GameReset { .. } => {
                    resets += 1;
                    info!("fresh run started at tick {t}");
                }
            }
        }
    }

    info!("=== Verifying Determinism ===");
    let (replayed, _) = replay(config, taps, tick_count)?;
    if replayed == state {
        info!("DETERMINISM VERIFIED: replay reproduced the run");
    } else {
        error!("DETERMINISM FAILURE: replay diverged from the run");
    }

    let summary = RunSummary {
        version: VERSION,
        ticks_run: tick_count,
        taps: taps.len(),
        resets,
        final_phase: state.phase,
        final_score: state.final_score(),
        tower: state
            .stack
            .blocks()
            .iter()
            .map(|b| TowerEntry {
                level: b.level,
                z: b.z,
                extent: b.extent,
            })
            .collect(),
    };

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => error!("failed to serialize summary: {e}"),
    }

    Ok(())
}
