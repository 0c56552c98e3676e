//! Carrot Chase entry point
//!
//! Initializes logging, loads the sprite set, and runs a headless attract
//! round at the fixed tick cadence. A windowed front end would hook a
//! renderer to the `GameState` accessors (repainting when `take_redraw`
//! fires) and feed key presses through `input::command_for_key` instead of
//! the chase script below.

use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use carrot_chase::assets::SpriteSet;
use carrot_chase::consts::TICK_INTERVAL;
use carrot_chase::sim::{Board, Direction, GameState, PlayerId, apply_input, tick};

/// Maximum attract-round length before giving up (ticks)
const DEMO_TICK_LIMIT: u64 = 600;

fn main() {
    env_logger::init();
    log::info!("Carrot Chase starting...");

    let sprites = SpriteSet::load_from(".");
    if !sprites.is_complete() {
        log::warn!("Some sprites are missing; rendering will degrade");
    }

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    let mut state = GameState::new(seed, Board::default());
    log::info!("Game initialized with seed: {seed}");

    let mut last_scores = (0, 0);
    for ticks in 1..=DEMO_TICK_LIMIT {
        let carrots_before = state.carrots().len();

        for id in PlayerId::BOTH {
            if let Some(direction) = chase_direction(&state, id) {
                apply_input(&mut state, id, direction);
            }
        }
        tick(&mut state);

        // Carrots can only grow back through a round restart
        if state.carrots().len() > carrots_before {
            log::info!(
                "Round complete after {ticks} ticks (last tally {} / {})",
                last_scores.0,
                last_scores.1
            );
            return;
        }

        let scores = (
            state.player(PlayerId::One).score,
            state.player(PlayerId::Two).score,
        );
        if scores != last_scores {
            log::debug!(
                "Tick {ticks}: scores {} / {}, {} carrots left",
                scores.0,
                scores.1,
                state.carrots().len()
            );
            last_scores = scores;
        }

        thread::sleep(TICK_INTERVAL);
    }

    log::info!(
        "Attract round timed out with {} carrots left (scores {} / {})",
        state.carrots().len(),
        state.player(PlayerId::One).score,
        state.player(PlayerId::Two).score
    );
}

/// Steer a bunny one step toward the nearest carrot
fn chase_direction(state: &GameState, id: PlayerId) -> Option<Direction> {
    let player = state.player(id);
    let target = state.carrots().iter().min_by_key(|carrot| {
        let delta = carrot.pos - player.pos;
        delta.x.abs() + delta.y.abs()
    })?;

    let delta = target.pos - player.pos;
    let direction = if delta.x.abs() >= delta.y.abs() {
        if delta.x > 0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if delta.y > 0 {
        Direction::Down
    } else {
        Direction::Up
    };
    Some(direction)
}
