//! Move explanations and hints.
//!
//! An `Explanation` records the facts about a move (stones sown, stones
//! captured, bonus turn) and, for the stronger levels, one strategic remark.
//! The text is produced by the `Display` impls; `Hint` words the same facts
//! for the human player.

use std::fmt;

use crate::board::{Pit, Side};
use crate::constants::{REMARK_BOARD_LEAD, REMARK_SWING};
use crate::position::{GameState, IllegalMoveError};
use crate::search::Difficulty;

/// The single strategic comment attached to an engine move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StrategicRemark {
    /// The score lead grew by more than `REMARK_SWING`.
    SignificantImprovement,
    /// The middle pit was played.
    DistributionOptions,
    /// A corner pit was played.
    CaptureSetup,
    /// The mover leads by more than `REMARK_BOARD_LEAD` stones on the board.
    MaintainsAdvantage,
    GoodPosition,
}

impl fmt::Display for StrategicRemark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StrategicRemark::SignificantImprovement => {
                "This move significantly improves the position."
            }
            StrategicRemark::DistributionOptions => {
                "Playing the middle pit gives maximum distribution options."
            }
            StrategicRemark::CaptureSetup => "Playing a corner pit sets up a capture opportunity.",
            StrategicRemark::MaintainsAdvantage => "This maintains the advantage on the board.",
            StrategicRemark::GoodPosition => "This leads to a good position.",
        };
        f.write_str(text)
    }
}

/// Facts about one move, as seen before it was played.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Explanation {
    pub side: Side,
    pub pit: Pit,
    pub stones_moved: u32,
    pub captured: u32,
    pub bonus_turn: bool,
    /// The move was the only one available.
    pub forced: bool,
    pub remark: Option<StrategicRemark>,
}

impl Explanation {
    pub fn into_forced(self) -> Explanation {
        Explanation {
            forced: true,
            remark: None,
            ..self
        }
    }
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.forced {
            return write!(f, "Only one move available: pit {}.", self.pit);
        }
        write!(
            f,
            "Moving {} from pit {}.",
            stones(self.stones_moved),
            self.pit
        )?;
        if self.captured > 0 {
            write!(f, " Captured {}!", stones(self.captured))?;
        }
        if self.bonus_turn {
            write!(f, " Earned a bonus turn.")?;
        }
        if let Some(remark) = self.remark {
            write!(f, " {remark}")?;
        }
        Ok(())
    }
}

/// A suggested move for the human player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hint {
    pub pit: Pit,
    /// One-ply evaluation after the move, from the player's side.
    pub score: i32,
    pub explanation: Explanation,
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = &self.explanation;
        match (e.captured > 0, e.bonus_turn) {
            (true, true) => write!(
                f,
                "Try pit {}: you capture {} and get another turn.",
                self.pit,
                stones(e.captured)
            ),
            (true, false) => write!(
                f,
                "Try pit {}: you capture {}.",
                self.pit,
                stones(e.captured)
            ),
            (false, true) => write!(f, "Try pit {}: you get another turn.", self.pit),
            (false, false) => write!(f, "Try pit {}: it leaves you in the best shape.", self.pit),
        }
    }
}

fn stones(n: u32) -> String {
    if n == 1 {
        "1 stone".to_string()
    } else {
        format!("{n} stones")
    }
}

/// The plain facts of playing `pit` from `state`, without a remark.
///
/// # Errors
/// Returns `IllegalMoveError` if `pit` cannot be played.
pub fn describe_move(state: &GameState, pit: Pit) -> Result<Explanation, IllegalMoveError> {
    let (_, outcome) = state.preview(pit)?;
    Ok(Explanation {
        side: state.turn(),
        pit,
        stones_moved: state.board().get(pit),
        captured: outcome.captured,
        bonus_turn: outcome.bonus_turn,
        forced: false,
        remark: None,
    })
}

/// Explain an engine move. Medium and hard levels add one strategic remark,
/// picked by the first rule that applies.
///
/// # Errors
/// Returns `IllegalMoveError` if `pit` cannot be played.
pub fn explain_move(
    state: &GameState,
    pit: Pit,
    difficulty: Difficulty,
) -> Result<Explanation, IllegalMoveError> {
    let mut explanation = describe_move(state, pit)?;
    if difficulty != Difficulty::Easy {
        let (after, _) = state.preview(pit)?;
        explanation.remark = Some(strategic_remark(state, &after, pit));
    }
    Ok(explanation)
}

fn strategic_remark(before: &GameState, after: &GameState, pit: Pit) -> StrategicRemark {
    let mover = before.turn();
    let opp = mover.opponent();
    let lead = |s: &GameState| s.score(mover) as i32 - s.score(opp) as i32;

    if lead(after) - lead(before) > REMARK_SWING {
        StrategicRemark::SignificantImprovement
    } else if pit == mover.middle() {
        StrategicRemark::DistributionOptions
    } else if mover.corners().contains(&pit) {
        StrategicRemark::CaptureSetup
    } else if after.board().side_total(mover) as i32 - after.board().side_total(opp) as i32
        > REMARK_BOARD_LEAD
    {
        StrategicRemark::MaintainsAdvantage
    } else {
        StrategicRemark::GoodPosition
    }
}
