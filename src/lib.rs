//! Mancala-Rust: a 14-pit sowing game engine with a minimax opponent.
//!
//! The crate has two layers. The rules engine owns the board and scores and
//! knows nothing about strategy; the decision engine reads positions, forks
//! hypothetical futures, and picks moves with alpha-beta search.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, search depths, evaluation weights
//! - [`board`] - Pit ring, sides, and board display
//! - [`position`] - Game state and the move transition (sowing, captures, bonus turns)
//! - [`game`] - The authoritative game session with move history
//! - [`evaluation`] - Heuristic position scoring
//! - [`search`] - Minimax with alpha-beta pruning and hint search
//! - [`explain`] - Move explanations and hints
//! - [`playout`] - Random playouts
//! - [`protocol`] - Text command protocol for front-ends
//!
//! ## Example
//!
//! ```
//! use mancala_rust::board::Side;
//! use mancala_rust::game::Game;
//! use mancala_rust::search::{DecisionEngine, Difficulty};
//!
//! // Create a new game; side A moves first
//! let mut game = Game::new();
//! game.apply_move(2).unwrap();
//!
//! // Let the engine answer for side B
//! let engine = DecisionEngine::new(Difficulty::Easy);
//! let decision = engine.choose_move(game.state(), Side::B).unwrap();
//! println!("Engine plays {}: {}", decision.pit, decision.explanation);
//! game.apply_move(decision.pit).unwrap();
//! ```

pub mod board;
pub mod constants;
pub mod evaluation;
pub mod explain;
pub mod game;
pub mod playout;
pub mod position;
pub mod protocol;
pub mod search;
