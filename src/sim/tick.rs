//! Fixed timestep simulation tick and input application
//!
//! A periodic timer drives [`tick`]; discrete key events drive
//! [`apply_input`]. Both run on the caller's thread and both finish with a
//! collision sweep, so physics always precedes scoring within a step.

use super::collision::check_collisions;
use super::state::{Direction, GameState, PlayerId};
use crate::consts::*;

/// Advance the game by one tick: gravity and floor bounce for each player
/// independently, then the collision sweep
///
/// Only vertical physics is simulated; horizontal position changes come from
/// input alone. Nothing clamps the top, left, or right edges - a bunny
/// nudged off-canvas drifts back down under gravity or walks back on.
pub fn tick(state: &mut GameState) {
    for player in &mut state.players {
        player.dy += GRAVITY;
        player.pos.y += player.dy;

        // Floor contact: back the displacement out and reverse dy at 98%
        // efficiency, truncating toward zero so the bounce decays
        if player.pos.y + SPRITE_PIXELS >= state.board.height {
            player.pos.y -= player.dy;
            player.dy = (-BOUNCE_DAMPING * player.dy as f32) as i32;
        }
    }
    check_collisions(state);
    state.needs_redraw = true;
}

/// Apply one key press to the named player: a direct positional nudge,
/// independent of the gravity-driven vertical velocity
pub fn apply_input(state: &mut GameState, player: PlayerId, direction: Direction) {
    let nudge = direction.step();
    state.player_mut(player).pos += nudge;
    check_collisions(state);
    state.needs_redraw = true;
}
