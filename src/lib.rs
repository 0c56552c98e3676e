//! Carrot Chase - a two-player catch-the-carrots arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (gravity, bounce, carrot collection)
//! - `input`: Raw key-press translation into player commands
//! - `assets`: Sprite loading with degrade-on-failure semantics
//!
//! Rendering and the window/event loop are external collaborators: they read
//! the simulation through its accessor methods and feed it timer ticks and
//! key presses.

pub mod assets;
pub mod input;
pub mod sim;

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Canvas dimensions (pixels); the board never resizes
    pub const BOARD_SIZE: i32 = 500;
    /// Square sprite edge length (pixels), shared by bunnies and carrots
    pub const SPRITE_PIXELS: i32 = 50;
    /// Keyboard nudge distance (pixels)
    pub const MOVE_STEP: i32 = 20;
    /// Downward acceleration (pixels per tick, applied each tick)
    pub const GRAVITY: i32 = 2;
    /// Carrots spawned per round
    pub const CARROT_COUNT: usize = 20;
    /// Points awarded per collected carrot
    pub const CARROT_POINTS: u32 = 5;
    /// Bounce efficiency on floor contact
    pub const BOUNCE_DAMPING: f32 = 0.98;
    /// Cadence of the timer that drives `sim::tick`
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);
}
