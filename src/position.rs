//! Game state and the move transition.
//!
//! This module holds the rules of the game:
//! - Move legality (own side, non-empty pit, game still running)
//! - Sowing stones around the circular board
//! - Neighbor captures when the last stone lands in an empty opponent pit
//! - Bonus turns when the last stone makes an own pit even
//! - End-of-game sweep and winner determination
//!
//! `GameState` is a plain value. Cloning it (`fork`) gives an independent
//! copy, which is how the search explores hypothetical futures without
//! touching the authoritative game.

use std::fmt;

use thiserror::Error;

use crate::board::{Board, Pit, Side, neighbors, successor};

/// Why a move was refused. The state is never modified when this is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IllegalMoveError {
    #[error("Illegal move: the game is over")]
    GameFinished,
    #[error("Illegal move: pit {pit} is not on the board")]
    PitOutOfRange { pit: Pit },
    #[error("Illegal move: pit {pit} does not belong to side {turn}")]
    NotYourPit { pit: Pit, turn: Side },
    #[error("Illegal move: pit {pit} is empty")]
    EmptyPit { pit: Pit },
}

/// Final result of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Winner(Side),
    Tie,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(side) => write!(f, "side {side} wins"),
            Outcome::Tie => write!(f, "tie"),
        }
    }
}

/// Stones removed from one pit by a capture.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Capture {
    pub pit: Pit,
    pub stones: u32,
}

/// What happened during one executed move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub side: Side,
    pub start_pit: Pit,
    /// Pits visited while sowing; `path[0]` is the start pit.
    pub path: Vec<Pit>,
    /// Captures in the order they were taken: left neighbor, right neighbor,
    /// then the landing pit.
    pub captures: Vec<Capture>,
    pub bonus_turn: bool,
}

impl MoveRecord {
    /// Stones sown by the move.
    pub fn stones_moved(&self) -> usize {
        self.path.len() - 1
    }

    /// The pit the last stone landed in.
    pub fn last_pit(&self) -> Pit {
        self.path.last().copied().unwrap_or(self.start_pit)
    }

    pub fn captured(&self) -> u32 {
        self.captures.iter().map(|c| c.stones).sum()
    }
}

/// Result of a successful `apply_move`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub record: MoveRecord,
    /// Total stones captured by this move.
    pub captured: u32,
    pub bonus_turn: bool,
    pub finished: bool,
    pub outcome: Option<Outcome>,
}

/// A complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    score_a: u32,
    score_b: u32,
    turn: Side,
    finished: bool,
    outcome: Option<Outcome>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// The opening position with side A to move.
    pub fn new() -> Self {
        Self::from_parts(Board::new(), 0, 0, Side::A)
    }

    /// Build an unfinished position from explicit parts.
    pub fn from_parts(board: Board, score_a: u32, score_b: u32, turn: Side) -> Self {
        GameState {
            board,
            score_a,
            score_b,
            turn,
            finished: false,
            outcome: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::A => self.score_a,
            Side::B => self.score_b,
        }
    }

    fn score_mut(&mut self, side: Side) -> &mut u32 {
        match side {
            Side::A => &mut self.score_a,
            Side::B => &mut self.score_b,
        }
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Winner or tie once the game is finished, `None` while it runs.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Board stones plus both scores. Constant over a game.
    pub fn stone_count(&self) -> u32 {
        self.board.total() + self.score_a + self.score_b
    }

    /// An independent copy of this state.
    pub fn fork(&self) -> GameState {
        self.clone()
    }

    /// A fork with `side` set to move, used to ask "what if this side
    /// played now" regardless of whose turn it really is.
    pub fn fork_as(&self, side: Side) -> GameState {
        GameState {
            turn: side,
            ..self.clone()
        }
    }

    /// Check whether `pit` may be played by the side to move.
    pub fn check_move(&self, pit: Pit) -> Result<(), IllegalMoveError> {
        if self.finished {
            return Err(IllegalMoveError::GameFinished);
        }
        match Side::of_pit(pit) {
            None => return Err(IllegalMoveError::PitOutOfRange { pit }),
            Some(owner) if owner != self.turn => {
                return Err(IllegalMoveError::NotYourPit {
                    pit,
                    turn: self.turn,
                });
            }
            Some(_) => {}
        }
        if self.board.get(pit) == 0 {
            return Err(IllegalMoveError::EmptyPit { pit });
        }
        Ok(())
    }

    #[inline]
    pub fn is_legal_move(&self, pit: Pit) -> bool {
        self.check_move(pit).is_ok()
    }

    /// Pits of `side` holding stones, ascending. Ignores whose turn it is.
    pub fn legal_moves(&self, side: Side) -> Vec<Pit> {
        self.board.occupied_pits(side)
    }

    /// Moves available to the side to move; empty once the game is over.
    pub fn moves_to_play(&self) -> Vec<Pit> {
        if self.finished {
            Vec::new()
        } else {
            self.legal_moves(self.turn)
        }
    }

    /// Play `pit` for the side to move.
    ///
    /// Sows the pit's stones one per pit around the ring, resolves a
    /// capture or bonus turn from where the last stone landed, and ends the
    /// game if either side has run out of stones.
    ///
    /// # Errors
    /// Returns `IllegalMoveError` without touching the state if the move is
    /// not legal.
    pub fn apply_move(&mut self, pit: Pit) -> Result<MoveOutcome, IllegalMoveError> {
        self.check_move(pit)?;
        let mover = self.turn;

        // Sow
        let stones = self.board.take(pit);
        let mut path = Vec::with_capacity(stones as usize + 1);
        path.push(pit);
        let mut cur = pit;
        for _ in 0..stones {
            cur = successor(cur);
            self.board.add_one(cur);
            path.push(cur);
        }
        let last = cur;

        // Capture: last stone alone in an opponent pit
        let mut captures = Vec::new();
        if mover.opponent().owns(last) && self.board.get(last) == 1 {
            for n in neighbors(last) {
                let taken = self.board.take(n);
                if taken > 0 {
                    captures.push(Capture {
                        pit: n,
                        stones: taken,
                    });
                }
            }
            if !captures.is_empty() {
                captures.push(Capture {
                    pit: last,
                    stones: self.board.take(last),
                });
            }
        }
        let captured: u32 = captures.iter().map(|c| c.stones).sum();
        *self.score_mut(mover) += captured;

        // Bonus turn: last stone makes an own pit even
        let landed = self.board.get(last);
        let bonus_turn = mover.owns(last) && landed > 0 && landed % 2 == 0;
        if !bonus_turn {
            self.turn = mover.opponent();
        }

        if self.board.side_is_empty(Side::A) || self.board.side_is_empty(Side::B) {
            self.finish();
        }

        let record = MoveRecord {
            side: mover,
            start_pit: pit,
            path,
            captures,
            bonus_turn,
        };
        Ok(MoveOutcome {
            record,
            captured,
            bonus_turn,
            finished: self.finished,
            outcome: self.outcome,
        })
    }

    /// Simulate `pit` on a fork, leaving `self` untouched.
    pub fn preview(&self, pit: Pit) -> Result<(GameState, MoveOutcome), IllegalMoveError> {
        let mut next = self.fork();
        let outcome = next.apply_move(pit)?;
        Ok((next, outcome))
    }

    /// Sweep each side's leftover stones into its own score and decide.
    fn finish(&mut self) {
        for side in [Side::A, Side::B] {
            let left: u32 = side.pits().map(|p| self.board.take(p)).sum();
            *self.score_mut(side) += left;
        }
        self.finished = true;
        self.outcome = Some(match self.score_a.cmp(&self.score_b) {
            std::cmp::Ordering::Greater => Outcome::Winner(Side::A),
            std::cmp::Ordering::Less => Outcome::Winner(Side::B),
            std::cmp::Ordering::Equal => Outcome::Tie,
        });
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)?;
        write!(f, "score A {} B {}", self.score_a, self.score_b)?;
        match self.outcome {
            Some(outcome) => writeln!(f, ", {outcome}"),
            None => writeln!(f, ", {} to move", self.turn),
        }
    }
}
