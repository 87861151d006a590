//! Static position evaluation.
//!
//! Scores a position from one side's point of view by combining:
//! - Score difference
//! - Stones still on each side of the board
//! - Mobility (number of playable pits)
//! - Strategic placement (middle pits, corners, empty pits)
//! - Capture opportunities one ply ahead
//!
//! Finished games short-circuit to a fixed win/loss/tie value that dominates
//! every other term.

use crate::board::Side;
use crate::constants::{
    WEIGHT_BOARD, WEIGHT_CAPTURE, WEIGHT_CORNER, WEIGHT_EMPTY, WEIGHT_MIDDLE, WEIGHT_MOBILITY,
    WEIGHT_SCORE, WIN_SCORE,
};
use crate::position::{GameState, Outcome};

/// Heuristic value of `state` for `side`; higher is better for `side`.
pub fn evaluate(state: &GameState, side: Side) -> i32 {
    if let Some(outcome) = state.outcome() {
        return match outcome {
            Outcome::Winner(w) if w == side => WIN_SCORE,
            Outcome::Winner(_) => -WIN_SCORE,
            Outcome::Tie => 0,
        };
    }

    let opp = side.opponent();
    let board = state.board();

    let score = (state.score(side) as i32 - state.score(opp) as i32) * WEIGHT_SCORE;
    let stones = (board.side_total(side) as i32 - board.side_total(opp) as i32) * WEIGHT_BOARD;
    let mobility = (state.legal_moves(side).len() as i32 - state.legal_moves(opp).len() as i32)
        * WEIGHT_MOBILITY;

    score + stones + mobility + strategic_value(state, side) + capture_potential(state, side)
}

/// Placement term: stones in middle and corner pits, and empty pits.
pub fn strategic_value(state: &GameState, side: Side) -> i32 {
    let board = state.board();
    let opp = side.opponent();

    let middle =
        (board.get(side.middle()) as i32 - board.get(opp.middle()) as i32) * WEIGHT_MIDDLE;
    let corner_stones = |s: Side| s.corners().iter().map(|&p| board.get(p) as i32).sum::<i32>();
    let corners = (corner_stones(side) - corner_stones(opp)) * WEIGHT_CORNER;
    let empty = (board.empty_pits(opp) as i32 - board.empty_pits(side) as i32) * WEIGHT_EMPTY;

    middle + corners + empty
}

/// Stones `side` could capture right now, summed over all of its moves
/// and weighted. Each move is tried on a fork with `side` to move.
pub fn capture_potential(state: &GameState, side: Side) -> i32 {
    let probe = state.fork_as(side);
    let total: u32 = state
        .legal_moves(side)
        .into_iter()
        .filter_map(|pit| probe.preview(pit).ok())
        .map(|(_, outcome)| outcome.captured)
        .sum();
    total as i32 * WEIGHT_CAPTURE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::constants::PITS;

    #[test]
    fn test_opening_is_balanced() {
        let state = GameState::new();
        assert_eq!(evaluate(&state, Side::A), evaluate(&state, Side::B));
        assert_eq!(strategic_value(&state, Side::A), 0);
        assert_eq!(capture_potential(&state, Side::A), 0);
    }

    #[test]
    fn test_finished_scores() {
        let mut pits = [0; PITS];
        pits[6] = 1;
        pits[12] = 4;
        let mut state = GameState::from_parts(Board::from_pits(pits), 20, 2, Side::A);
        state.apply_move(6).unwrap();
        assert!(state.is_finished());
        assert_eq!(evaluate(&state, Side::A), WIN_SCORE);
        assert_eq!(evaluate(&state, Side::B), -WIN_SCORE);
    }

    #[test]
    fn test_tie_scores_zero() {
        let mut pits = [0; PITS];
        pits[6] = 1;
        pits[12] = 4;
        // B sweeps the stone sown into 7 plus pit 12: 5 + 5 = 10
        let mut state = GameState::from_parts(Board::from_pits(pits), 10, 5, Side::A);
        state.apply_move(6).unwrap();
        assert_eq!(state.outcome(), Some(Outcome::Tie));
        assert_eq!(evaluate(&state, Side::A), 0);
    }

    #[test]
    fn test_terms_by_hand() {
        // A: pit 0 = 2, pit 3 = 4, pit 5 = 1 (4 empty pits)
        // B: pit 7 = 3, pit 10 = 1 (5 empty pits)
        let mut pits = [0; PITS];
        pits[0] = 2;
        pits[3] = 4;
        pits[5] = 1;
        pits[7] = 3;
        pits[10] = 1;
        let state = GameState::from_parts(Board::from_pits(pits), 5, 3, Side::A);

        // middle (4 - 1) * 2 = 6, corners (2 - 3) * 1 = -1, empty (5 - 4) * 3 = 3
        assert_eq!(strategic_value(&state, Side::A), 8);

        // A's moves: 0 -> 1, 2 (own side); 3 -> 4..7 makes 7 hold 4;
        // 5 -> 6 (own side). None capture.
        assert_eq!(capture_potential(&state, Side::A), 0);

        // B's moves: 7 -> 8, 9, 10 (own side); 10 -> 11 (own side). None capture.
        assert_eq!(capture_potential(&state, Side::B), 0);

        let expected = (5 - 3) * 10 + (7 - 4) * 2 + (3 - 2) * 5 + 8;
        assert_eq!(evaluate(&state, Side::A), expected);
    }

    #[test]
    fn test_capture_potential_counts_captures() {
        // A plays 6 -> 7 alone, neighbor 8 holds 5: captures 6
        let mut pits = [0; PITS];
        pits[6] = 1;
        pits[8] = 5;
        pits[1] = 1;
        let state = GameState::from_parts(Board::from_pits(pits), 0, 0, Side::B);
        assert_eq!(capture_potential(&state, Side::A), 6 * WEIGHT_CAPTURE);
        assert_eq!(state.turn(), Side::B, "probing must not change the turn");
    }
}
