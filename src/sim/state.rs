//! Game state and core simulation types

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

/// Fixed player identity; both bunnies exist for the whole session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Both players, in scoring-priority order
    pub const BOTH: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    pub(crate) fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

/// Movement command vocabulary shared by both players
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Positional nudge for one key press
    pub fn step(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -MOVE_STEP),
            Direction::Down => IVec2::new(0, MOVE_STEP),
            Direction::Left => IVec2::new(-MOVE_STEP, 0),
            Direction::Right => IVec2::new(MOVE_STEP, 0),
        }
    }
}

/// A controllable bunny sprite
#[derive(Debug, Clone, Copy)]
pub struct Player {
    /// Upper-left corner of the sprite, in pixels
    pub pos: IVec2,
    /// Vertical velocity (pixels/tick), gravity-driven only
    pub dy: i32,
    /// Score for the current round
    pub score: u32,
}

/// A stationary collectible; removed when a bunny touches it
#[derive(Debug, Clone, Copy)]
pub struct Carrot {
    /// Upper-left corner of the sprite, in pixels
    pub pos: IVec2,
}

/// Canvas dimensions in pixels, fixed for the lifetime of a `GameState`
#[derive(Debug, Clone, Copy)]
pub struct Board {
    pub width: i32,
    pub height: i32,
}

impl Board {
    /// Both dimensions must exceed the sprite size, otherwise the carrot
    /// spawn range would be empty
    pub fn new(width: i32, height: i32) -> Self {
        assert!(
            width > SPRITE_PIXELS && height > SPRITE_PIXELS,
            "board dimensions must exceed the sprite size"
        );
        Self { width, height }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_SIZE, BOARD_SIZE)
    }
}

/// Complete game state
///
/// Owns every piece of mutable simulation data. The renderer reads through
/// the accessor methods; mutation happens only via [`reset`](Self::reset),
/// [`tick`](super::tick::tick), and [`apply_input`](super::tick::apply_input).
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) board: Board,
    pub(crate) players: [Player; 2],
    pub(crate) carrots: Vec<Carrot>,
    pub(crate) rng: Pcg32,
    pub(crate) needs_redraw: bool,
}

impl GameState {
    /// Create a new game with the first round's carrots already placed
    pub fn new(seed: u64, board: Board) -> Self {
        let mut state = Self {
            seed,
            board,
            players: [Player::at_start(board), Player::at_start(board)],
            carrots: Vec::with_capacity(CARROT_COUNT),
            rng: Pcg32::seed_from_u64(seed),
            needs_redraw: false,
        };
        state.reset();
        state
    }

    /// Start a round: fresh random carrots, both bunnies back at top-center
    /// with zero velocity
    ///
    /// Scores are left alone. They are zeroed only when a round completes
    /// naturally, in the collision sweep.
    pub fn reset(&mut self) {
        self.carrots.clear();
        for _ in 0..CARROT_COUNT {
            let pos = random_spawn(&mut self.rng, self.board);
            self.carrots.push(Carrot { pos });
        }
        for player in &mut self.players {
            player.pos = start_position(self.board);
            player.dy = 0;
        }
        self.needs_redraw = true;
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Live carrot collection, read-only
    pub fn carrots(&self) -> &[Carrot] {
        &self.carrots
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// Consume the pending redraw signal, if any
    ///
    /// Signals raised between two frames coalesce, like repaint requests.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }
}

impl Player {
    fn at_start(board: Board) -> Self {
        Self {
            pos: start_position(board),
            dy: 0,
            score: 0,
        }
    }
}

/// Top-center spawn point shared by both players
fn start_position(board: Board) -> IVec2 {
    IVec2::new(board.width / 2, 0)
}

/// Uniform random sprite position, leaving `SPRITE_PIXELS` of space at the
/// right and bottom edges
fn random_spawn(rng: &mut Pcg32, board: Board) -> IVec2 {
    IVec2::new(
        rng.random_range(0..board.width - SPRITE_PIXELS),
        rng.random_range(0..board.height - SPRITE_PIXELS),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn layout(state: &GameState) -> Vec<IVec2> {
        state.carrots().iter().map(|c| c.pos).collect()
    }

    #[test]
    fn test_new_places_players_at_top_center() {
        let state = GameState::new(42, Board::default());
        for player in state.players() {
            assert_eq!(player.pos, IVec2::new(250, 0));
            assert_eq!(player.dy, 0);
            assert_eq!(player.score, 0);
        }
        assert_eq!(state.carrots().len(), CARROT_COUNT);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = GameState::new(99999, Board::default());
        let b = GameState::new(99999, Board::default());
        assert_eq!(layout(&a), layout(&b));
    }

    #[test]
    fn test_reset_reshuffles_carrots_but_not_start_positions() {
        let mut state = GameState::new(7, Board::default());
        let first = layout(&state);

        state.players[0].pos = IVec2::new(13, 400);
        state.players[0].dy = 18;
        state.reset();

        assert_ne!(layout(&state), first);
        assert_eq!(state.player(PlayerId::One).pos, IVec2::new(250, 0));
        assert_eq!(state.player(PlayerId::One).dy, 0);
    }

    #[test]
    fn test_reset_keeps_scores() {
        let mut state = GameState::new(3, Board::default());
        state.players[1].score = 25;
        state.reset();
        assert_eq!(state.player(PlayerId::Two).score, 25);
    }

    #[test]
    fn test_take_redraw_consumes_signal() {
        let mut state = GameState::new(1, Board::default());
        assert!(state.take_redraw());
        assert!(!state.take_redraw());
    }

    #[test]
    #[should_panic(expected = "board dimensions must exceed the sprite size")]
    fn test_degenerate_board_rejected() {
        Board::new(SPRITE_PIXELS, 500);
    }

    proptest! {
        #[test]
        fn carrots_spawn_within_bounds(seed in any::<u64>()) {
            let state = GameState::new(seed, Board::default());
            for carrot in state.carrots() {
                prop_assert!(carrot.pos.x >= 0);
                prop_assert!(carrot.pos.x <= BOARD_SIZE - SPRITE_PIXELS);
                prop_assert!(carrot.pos.y >= 0);
                prop_assert!(carrot.pos.y <= BOARD_SIZE - SPRITE_PIXELS);
            }
        }
    }
}
