//! Carrot collection: the overlap test and the per-step scoring sweep

use glam::IVec2;

use super::state::{GameState, PlayerId};
use crate::consts::*;

/// Overlap test between two sprite origins
///
/// Compares coordinate deltas against the full sprite size, which accepts
/// contact well beyond visible overlap. The generous threshold is the game's
/// established feel; tightening it to half-extents would change scoring.
pub fn sprites_overlap(a: IVec2, b: IVec2) -> bool {
    (a.x - b.x).abs() <= SPRITE_PIXELS && (a.y - b.y).abs() <= SPRITE_PIXELS
}

/// Score and remove every carrot a bunny is touching, then restart the round
/// if none remain
///
/// Runs after physics in `tick` and after each nudge in `apply_input`. A
/// carrot scores for at most one player per sweep, Player One first. Removal
/// shifts the following carrots down one slot, so the index only advances
/// when nothing was collected.
pub(crate) fn check_collisions(state: &mut GameState) {
    let mut i = 0;
    while i < state.carrots.len() {
        let carrot = state.carrots[i].pos;
        let winner = PlayerId::BOTH
            .into_iter()
            .find(|id| sprites_overlap(carrot, state.player(*id).pos));
        match winner {
            Some(id) => {
                state.player_mut(id).score += CARROT_POINTS;
                state.carrots.remove(i);
                state.needs_redraw = true;
            }
            None => i += 1,
        }
    }

    // Round over: new carrot layout, scores back to zero
    if state.carrots.is_empty() {
        state.reset();
        for player in &mut state.players {
            player.score = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Board, Carrot};

    /// A state whose carrot layout is fully under test control
    fn state_with_carrots(positions: &[IVec2]) -> GameState {
        let mut state = GameState::new(555, Board::default());
        state.carrots = positions.iter().map(|&pos| Carrot { pos }).collect();
        state
    }

    #[test]
    fn test_overlap_threshold_boundaries() {
        let origin = IVec2::new(100, 100);
        assert!(sprites_overlap(origin, IVec2::new(100, 100)));
        assert!(sprites_overlap(origin, IVec2::new(150, 100)));
        assert!(sprites_overlap(origin, IVec2::new(50, 150)));
        assert!(!sprites_overlap(origin, IVec2::new(151, 100)));
        assert!(!sprites_overlap(origin, IVec2::new(100, 49)));
    }

    #[test]
    fn test_collection_awards_five_and_removes_one() {
        let mut state = state_with_carrots(&[IVec2::new(250, 0), IVec2::new(10, 400)]);
        check_collisions(&mut state);

        assert_eq!(state.player(PlayerId::One).score, CARROT_POINTS);
        assert_eq!(state.carrots().len(), 1);
        assert_eq!(state.carrots()[0].pos, IVec2::new(10, 400));
    }

    #[test]
    fn test_contested_carrot_scores_once_for_player_one() {
        // Both bunnies start at top-center, both overlap the same carrot
        let mut state = state_with_carrots(&[IVec2::new(240, 10), IVec2::new(10, 400)]);
        check_collisions(&mut state);

        assert_eq!(state.player(PlayerId::One).score, CARROT_POINTS);
        assert_eq!(state.player(PlayerId::Two).score, 0);
        assert_eq!(state.carrots().len(), 1);
    }

    #[test]
    fn test_adjacent_carrots_both_collected_in_one_sweep() {
        // After removing index 0 the next carrot shifts into its slot and
        // must still be checked
        let mut state = state_with_carrots(&[
            IVec2::new(250, 0),
            IVec2::new(260, 20),
            IVec2::new(10, 400),
        ]);
        check_collisions(&mut state);

        assert_eq!(state.player(PlayerId::One).score, 2 * CARROT_POINTS);
        assert_eq!(state.carrots().len(), 1);
    }

    #[test]
    fn test_last_carrot_triggers_round_restart() {
        let mut state = state_with_carrots(&[IVec2::new(250, 0)]);
        state.players[0].score = 35;
        state.players[1].score = 10;
        state.players[1].pos = IVec2::new(480, 430);
        state.players[1].dy = 14;

        check_collisions(&mut state);

        // Fresh round: full layout, zeroed scores, both back at top-center
        assert_eq!(state.carrots().len(), CARROT_COUNT);
        assert_eq!(state.player(PlayerId::One).score, 0);
        assert_eq!(state.player(PlayerId::Two).score, 0);
        for player in state.players() {
            assert_eq!(player.pos, IVec2::new(250, 0));
            assert_eq!(player.dy, 0);
        }
    }

    #[test]
    fn test_no_overlap_changes_nothing() {
        let mut state = state_with_carrots(&[IVec2::new(10, 400), IVec2::new(400, 400)]);
        check_collisions(&mut state);

        assert_eq!(state.player(PlayerId::One).score, 0);
        assert_eq!(state.player(PlayerId::Two).score, 0);
        assert_eq!(state.carrots().len(), 2);
    }
}
