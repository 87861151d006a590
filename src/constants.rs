//! Constants for board geometry, search depths, and evaluation weights.
//!
//! The board is a fixed ring of 14 pits. Side A owns pits 0-6 and side B
//! owns pits 7-13; each side has one middle pit holding a double load of
//! stones at the start of the game.

// =============================================================================
// Board Geometry
// =============================================================================

/// Total number of pits on the board.
pub const PITS: usize = 14;

/// Number of pits owned by each side.
pub const SIDE_PITS: usize = PITS / 2;

/// First pit index of side A.
pub const A_FIRST: usize = 0;

/// Last pit index of side A.
pub const A_LAST: usize = 6;

/// First pit index of side B.
pub const B_FIRST: usize = 7;

/// Last pit index of side B.
pub const B_LAST: usize = 13;

/// Middle pit of side A.
pub const A_MIDDLE: usize = 3;

/// Middle pit of side B.
pub const B_MIDDLE: usize = 10;

// =============================================================================
// Stones
// =============================================================================

/// Stones placed in every ordinary pit at the start of a game.
pub const INITIAL_STONES: u32 = 6;

/// Stones placed in each middle pit at the start of a game.
pub const INITIAL_MIDDLE_STONES: u32 = 12;

/// Stones in play for the whole game (board plus both scores).
pub const TOTAL_STONES: u32 =
    INITIAL_STONES * (PITS as u32 - 2) + INITIAL_MIDDLE_STONES * 2;

// =============================================================================
// Search Parameters
// =============================================================================

/// Search depth (plies) for the easy level.
pub const DEPTH_EASY: u32 = 2;

/// Search depth (plies) for the medium level.
pub const DEPTH_MEDIUM: u32 = 4;

/// Search depth (plies) for the hard level.
pub const DEPTH_HARD: u32 = 6;

/// Bound used for the initial alpha-beta window.
pub const SCORE_INF: i32 = i32::MAX / 2;

// =============================================================================
// Evaluation Weights
// =============================================================================

/// Score awarded for a won game (negated for a loss).
pub const WIN_SCORE: i32 = 1000;

/// Weight of the score difference.
pub const WEIGHT_SCORE: i32 = 10;

/// Weight of the difference in stones still on the board.
pub const WEIGHT_BOARD: i32 = 2;

/// Weight of the difference in available moves.
pub const WEIGHT_MOBILITY: i32 = 5;

/// Weight per stone sitting in a middle pit.
pub const WEIGHT_MIDDLE: i32 = 2;

/// Weight per stone sitting in a corner pit.
pub const WEIGHT_CORNER: i32 = 1;

/// Weight per empty pit (penalty for own, bonus for opponent).
pub const WEIGHT_EMPTY: i32 = 3;

/// Weight per stone a one-ply move could capture.
pub const WEIGHT_CAPTURE: i32 = 15;

// =============================================================================
// Explanation Thresholds
// =============================================================================

/// Gain in the mover's score lead above which a move counts as a
/// significant improvement.
pub const REMARK_SWING: i32 = 5;

/// Board-stone lead above which a move is said to maintain an advantage.
pub const REMARK_BOARD_LEAD: i32 = 10;

// =============================================================================
// Playouts
// =============================================================================

/// Move cap for random playouts; a playout reaching it has no outcome.
pub const MAX_GAME_LEN: usize = 1000;
