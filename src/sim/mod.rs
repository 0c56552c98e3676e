//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::sprites_overlap;
pub use state::{Board, Carrot, Direction, GameState, Player, PlayerId};
pub use tick::{apply_input, tick};
