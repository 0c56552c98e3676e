//! Raw key-press translation
//!
//! The windowing collaborator hands over key names as the platform reports
//! them; this module folds them onto the shared direction vocabulary. Arrow
//! keys steer Player One, WASD steers Player Two. Anything else is ignored.

use crate::sim::{Direction, PlayerId};

/// Translate one key press into a player command
///
/// Returns `None` for keys the game does not react to.
pub fn command_for_key(key: &str) -> Option<(PlayerId, Direction)> {
    match key {
        "ArrowUp" => Some((PlayerId::One, Direction::Up)),
        "ArrowDown" => Some((PlayerId::One, Direction::Down)),
        "ArrowLeft" => Some((PlayerId::One, Direction::Left)),
        "ArrowRight" => Some((PlayerId::One, Direction::Right)),
        "w" | "W" => Some((PlayerId::Two, Direction::Up)),
        "s" | "S" => Some((PlayerId::Two, Direction::Down)),
        "a" | "A" => Some((PlayerId::Two, Direction::Left)),
        "d" | "D" => Some((PlayerId::Two, Direction::Right)),
        _ => None,
    }
}
