//! Random playouts.
//!
//! A playout plays uniformly random legal moves until the game ends. They
//! drive the self-play demo's random opponent and the invariant sweeps in
//! the tests. The generator is passed in so runs are reproducible from a
//! seed.

use crate::board::Pit;
use crate::constants::MAX_GAME_LEN;
use crate::position::{GameState, Outcome};

/// Pick a uniformly random move for the side to move.
pub fn random_move(state: &GameState, rng: &mut fastrand::Rng) -> Option<Pit> {
    let moves = state.moves_to_play();
    if moves.is_empty() {
        None
    } else {
        Some(moves[rng.usize(..moves.len())])
    }
}

/// Play random moves from `state` until the game ends.
///
/// Returns the outcome, or `None` if `MAX_GAME_LEN` moves were played
/// without finishing.
pub fn playout(state: &mut GameState, rng: &mut fastrand::Rng) -> Option<Outcome> {
    playout_with(state, rng, |_| {})
}

/// Like [`playout`], calling `observe` with the state after every move.
pub fn playout_with(
    state: &mut GameState,
    rng: &mut fastrand::Rng,
    mut observe: impl FnMut(&GameState),
) -> Option<Outcome> {
    for _ in 0..MAX_GAME_LEN {
        let Some(pit) = random_move(state, rng) else {
            break;
        };
        if state.apply_move(pit).is_err() {
            break;
        }
        observe(state);
    }
    state.outcome()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TOTAL_STONES;

    #[test]
    fn test_playout_keeps_stones() {
        let mut rng = fastrand::Rng::with_seed(7);
        let mut state = GameState::new();
        let outcome = playout(&mut state, &mut rng);
        assert_eq!(outcome.is_some(), state.is_finished());
        assert_eq!(state.stone_count(), TOTAL_STONES);
    }

    #[test]
    fn test_playout_is_reproducible() {
        let mut a = GameState::new();
        let mut b = GameState::new();
        playout(&mut a, &mut fastrand::Rng::with_seed(42));
        playout(&mut b, &mut fastrand::Rng::with_seed(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_move_is_legal() {
        let mut rng = fastrand::Rng::with_seed(1);
        let state = GameState::new();
        for _ in 0..20 {
            let pit = random_move(&state, &mut rng).unwrap();
            assert!(state.is_legal_move(pit));
        }
    }
}
