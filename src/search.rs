//! Minimax search with alpha-beta pruning.
//!
//! The search walks the game tree on forked states, so the position handed
//! in is never modified. Each node decides whether it maximizes or minimizes
//! from the side actually to move there: a bonus turn keeps the same side on
//! move, so roles do not simply alternate with depth.
//!
//! Move ordering is the ascending pit order of `legal_moves`, and a later
//! move only replaces the current best when it is strictly better. That
//! makes the result identical with and without pruning.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, info, trace};

use crate::board::{Pit, Side};
use crate::constants::{DEPTH_EASY, DEPTH_HARD, DEPTH_MEDIUM, SCORE_INF};
use crate::evaluation::evaluate;
use crate::explain::{Explanation, Hint, describe_move, explain_move};
use crate::position::GameState;

/// Engine strength. Each level maps to a fixed search depth.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown difficulty '{0}' (expected easy, medium or hard)")]
pub struct UnknownDifficulty(pub String);

impl Difficulty {
    /// Search depth in plies.
    pub fn depth(self) -> u32 {
        match self {
            Difficulty::Easy => DEPTH_EASY,
            Difficulty::Medium => DEPTH_MEDIUM,
            Difficulty::Hard => DEPTH_HARD,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Lenient lookup: unrecognized names fall back to `Medium`.
    pub fn from_name(name: &str) -> Difficulty {
        name.parse().unwrap_or_default()
    }
}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(UnknownDifficulty(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Counters collected during one search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, including the leaves.
    pub nodes: u64,
    /// Sibling lists abandoned because beta <= alpha.
    pub cutoffs: u64,
}

/// The engine's chosen move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decision {
    pub pit: Pit,
    /// Minimax value of the move; `None` when it was the only move.
    pub score: Option<i32>,
    pub explanation: Explanation,
    pub stats: SearchStats,
}

/// Chooses moves for one side by depth-limited minimax.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DecisionEngine {
    difficulty: Difficulty,
    depth: u32,
    pruning: bool,
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

impl DecisionEngine {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            depth: difficulty.depth(),
            pruning: true,
        }
    }

    /// Override the search depth (at least one ply).
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth.max(1);
        self
    }

    /// Turn alpha-beta pruning on or off. Off means exhaustive minimax.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Pick a move for the side to move in `state`, scoring positions for
    /// `side`.
    ///
    /// Returns `None` when there is nothing to play. A single legal move is
    /// returned without searching.
    pub fn choose_move(&self, state: &GameState, side: Side) -> Option<Decision> {
        let moves = state.moves_to_play();
        match moves.as_slice() {
            [] => None,
            &[pit] => {
                let explanation = describe_move(state, pit).ok()?.into_forced();
                Some(Decision {
                    pit,
                    score: None,
                    explanation,
                    stats: SearchStats::default(),
                })
            }
            _ => {
                let mut stats = SearchStats::default();
                let (pit, score) = self.search(state, side, &mut stats)?;
                info!(
                    pit,
                    score,
                    depth = self.depth,
                    nodes = stats.nodes,
                    cutoffs = stats.cutoffs,
                    "move chosen"
                );
                let explanation = explain_move(state, pit, self.difficulty).ok()?;
                Some(Decision {
                    pit,
                    score: Some(score),
                    explanation,
                    stats,
                })
            }
        }
    }

    /// Root search: the best move for the side to move and its value for
    /// `side`. The first move reaching the best value wins ties.
    pub fn search(
        &self,
        state: &GameState,
        side: Side,
        stats: &mut SearchStats,
    ) -> Option<(Pit, i32)> {
        stats.nodes += 1;
        let maximizing = state.turn() == side;
        let mut alpha = -SCORE_INF;
        let mut beta = SCORE_INF;
        let mut best: Option<(Pit, i32)> = None;

        for pit in state.moves_to_play() {
            let Ok((child, _)) = state.preview(pit) else {
                continue;
            };
            let score = self.minimax(&child, self.depth - 1, alpha, beta, side, stats);
            debug!(pit, score, "root move");

            let better = match best {
                None => true,
                Some((_, b)) if maximizing => score > b,
                Some((_, b)) => score < b,
            };
            if better {
                best = Some((pit, score));
                if maximizing {
                    alpha = alpha.max(score);
                } else {
                    beta = beta.min(score);
                }
            }
        }
        best
    }

    fn minimax(
        &self,
        state: &GameState,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        side: Side,
        stats: &mut SearchStats,
    ) -> i32 {
        stats.nodes += 1;
        let moves = state.moves_to_play();
        if depth == 0 || moves.is_empty() {
            return evaluate(state, side);
        }

        let maximizing = state.turn() == side;
        let mut best = if maximizing { -SCORE_INF } else { SCORE_INF };
        for pit in moves {
            let Ok((child, _)) = state.preview(pit) else {
                continue;
            };
            let score = self.minimax(&child, depth - 1, alpha, beta, side, stats);
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if self.pruning && beta <= alpha {
                trace!(depth, pit, alpha, beta, "cutoff");
                stats.cutoffs += 1;
                break;
            }
        }
        best
    }
}

/// Hint for the human side: the move with the best one-ply evaluation from
/// that side's own view. Ties go to the lowest pit.
///
/// Returns `None` when the game is over or the engine side is to move.
pub fn suggest_move(state: &GameState) -> Option<Hint> {
    let side = Side::HUMAN;
    if state.turn() != side {
        return None;
    }
    let mut best: Option<(Pit, i32)> = None;
    for pit in state.moves_to_play() {
        let Ok((child, _)) = state.preview(pit) else {
            continue;
        };
        let score = evaluate(&child, side);
        if best.is_none_or(|(_, b)| score > b) {
            best = Some((pit, score));
        }
    }

    let (pit, score) = best?;
    let explanation = describe_move(state, pit).ok()?;
    Some(Hint {
        pit,
        score,
        explanation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::constants::PITS;

    #[test]
    fn test_difficulty_depths() {
        assert_eq!(Difficulty::Easy.depth(), 2);
        assert_eq!(Difficulty::Medium.depth(), 4);
        assert_eq!(Difficulty::Hard.depth(), 6);
    }

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("expert".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::from_name("expert"), Difficulty::Medium);
        assert_eq!(Difficulty::from_name("easy"), Difficulty::Easy);
    }

    #[test]
    fn test_no_move_when_finished() {
        let mut pits = [0; PITS];
        pits[6] = 1;
        pits[12] = 1;
        let mut state = GameState::from_parts(Board::from_pits(pits), 0, 0, Side::A);
        state.apply_move(6).unwrap();
        assert!(state.is_finished());
        let engine = DecisionEngine::new(Difficulty::Hard);
        assert!(engine.choose_move(&state, Side::B).is_none());
        assert!(suggest_move(&state).is_none());
    }

    #[test]
    fn test_forced_move_skips_search() {
        let mut pits = [0; PITS];
        pits[9] = 2;
        pits[1] = 3;
        let state = GameState::from_parts(Board::from_pits(pits), 0, 0, Side::B);
        let decision = DecisionEngine::new(Difficulty::Hard)
            .choose_move(&state, Side::B)
            .unwrap();
        assert_eq!(decision.pit, 9);
        assert_eq!(decision.score, None);
        assert!(decision.explanation.forced);
        assert_eq!(decision.stats, SearchStats::default());
    }

    #[test]
    fn test_search_leaves_state_untouched() {
        let state = GameState::new();
        let before = state.clone();
        let decision = DecisionEngine::new(Difficulty::Medium)
            .choose_move(&state, Side::A)
            .unwrap();
        assert_eq!(state, before);
        assert!(state.is_legal_move(decision.pit));
        assert!(decision.stats.nodes > 1);
    }

    #[test]
    fn test_no_hint_on_engine_turn() {
        let mut state = GameState::new();
        state.apply_move(2).unwrap();
        assert_eq!(state.turn(), Side::B);
        assert!(suggest_move(&state).is_none());

        let hint = suggest_move(&GameState::new()).unwrap();
        assert!(Side::HUMAN.owns(hint.pit));
    }

    #[test]
    fn test_with_depth_floor() {
        let engine = DecisionEngine::new(Difficulty::Easy).with_depth(0);
        assert_eq!(engine.depth(), 1);
    }
}
