//! The authoritative game session.
//!
//! `Game` owns the live `GameState` and the history of executed moves.
//! It is the only place the real state is mutated; the search works on
//! forks handed out by `fork`.

use tracing::debug;

use crate::board::{Board, Pit, Side};
use crate::position::{GameState, IllegalMoveError, MoveOutcome, MoveRecord, Outcome};

/// One game session: the current state plus every move played so far.
#[derive(Clone, Debug, Default)]
pub struct Game {
    state: GameState,
    history: Vec<MoveRecord>,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from an existing position with an empty history.
    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            history: Vec::new(),
        }
    }

    /// Start over from the opening position.
    pub fn reset(&mut self) {
        self.state = GameState::new();
        self.history.clear();
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        self.state.board()
    }

    pub fn score(&self, side: Side) -> u32 {
        self.state.score(side)
    }

    pub fn turn(&self) -> Side {
        self.state.turn()
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.state.outcome()
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn is_legal_move(&self, pit: Pit) -> bool {
        self.state.is_legal_move(pit)
    }

    pub fn legal_moves(&self, side: Side) -> Vec<Pit> {
        self.state.legal_moves(side)
    }

    /// Independent copy of the live state for hypothetical play.
    pub fn fork(&self) -> GameState {
        self.state.fork()
    }

    /// Play `pit` for the side to move and record it in the history.
    ///
    /// # Errors
    /// Returns `IllegalMoveError` and leaves the game unchanged if the move
    /// is not legal.
    pub fn apply_move(&mut self, pit: Pit) -> Result<MoveOutcome, IllegalMoveError> {
        let outcome = self.state.apply_move(pit)?;
        debug!(
            side = %outcome.record.side,
            pit,
            captured = outcome.captured,
            bonus = outcome.bonus_turn,
            finished = outcome.finished,
            "move applied"
        );
        self.history.push(outcome.record.clone());
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_grows_with_moves() {
        let mut game = Game::new();
        game.apply_move(0).unwrap();
        game.apply_move(7).unwrap();
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.history()[0].start_pit, 0);
        assert_eq!(game.history()[1].side, Side::B);
    }

    #[test]
    fn test_illegal_move_not_recorded() {
        let mut game = Game::new();
        assert!(game.apply_move(8).is_err());
        assert!(game.history().is_empty());
        assert_eq!(game.state(), &GameState::new());
    }

    #[test]
    fn test_reset() {
        let mut game = Game::new();
        game.apply_move(2).unwrap();
        game.reset();
        assert!(game.history().is_empty());
        assert_eq!(game.state(), &GameState::new());
    }

    #[test]
    fn test_fork_is_independent() {
        let game = Game::new();
        let mut fork = game.fork();
        fork.apply_move(4).unwrap();
        assert_eq!(game.state(), &GameState::new());
        assert_ne!(&fork, game.state());
    }
}
