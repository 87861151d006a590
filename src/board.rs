//! The pit ring and side ownership.

use std::fmt;
use std::ops::RangeInclusive;

use crate::constants::{
    A_FIRST, A_LAST, A_MIDDLE, B_FIRST, B_LAST, B_MIDDLE, INITIAL_MIDDLE_STONES, INITIAL_STONES,
    PITS,
};

/// A pit index in `0..PITS`.
pub type Pit = usize;

/// One of the two players. `A` is the human side, `B` the engine side.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// The side hints are given for.
    pub const HUMAN: Side = Side::A;

    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Pit indices owned by this side, in ascending order.
    #[inline]
    pub fn pits(self) -> RangeInclusive<Pit> {
        match self {
            Side::A => A_FIRST..=A_LAST,
            Side::B => B_FIRST..=B_LAST,
        }
    }

    /// The side's middle pit.
    #[inline]
    pub fn middle(self) -> Pit {
        match self {
            Side::A => A_MIDDLE,
            Side::B => B_MIDDLE,
        }
    }

    /// The two boundary pits of the side's range.
    #[inline]
    pub fn corners(self) -> [Pit; 2] {
        let range = self.pits();
        [*range.start(), *range.end()]
    }

    /// Whether `pit` belongs to this side.
    #[inline]
    pub fn owns(self, pit: Pit) -> bool {
        self.pits().contains(&pit)
    }

    /// The side owning `pit`, or `None` if the index is off the board.
    pub fn of_pit(pit: Pit) -> Option<Side> {
        if Side::A.owns(pit) {
            Some(Side::A)
        } else if Side::B.owns(pit) {
            Some(Side::B)
        } else {
            None
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

/// Next pit in sowing order. Strictly circular, ignoring side boundaries.
#[inline]
pub fn successor(pit: Pit) -> Pit {
    if pit + 1 < PITS { pit + 1 } else { 0 }
}

/// Previous pit on the ring.
#[inline]
pub fn predecessor(pit: Pit) -> Pit {
    if pit == 0 { PITS - 1 } else { pit - 1 }
}

/// The left and right neighbors of a pit on the ring.
#[inline]
pub fn neighbors(pit: Pit) -> [Pit; 2] {
    [predecessor(pit), successor(pit)]
}

/// Stone counts for all 14 pits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pits: [u32; PITS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The opening layout: 6 stones per pit and 12 in each middle pit.
    pub fn new() -> Self {
        let mut pits = [INITIAL_STONES; PITS];
        pits[A_MIDDLE] = INITIAL_MIDDLE_STONES;
        pits[B_MIDDLE] = INITIAL_MIDDLE_STONES;
        Self { pits }
    }

    /// A board with arbitrary counts, for setting up positions directly.
    pub fn from_pits(pits: [u32; PITS]) -> Self {
        Self { pits }
    }

    #[inline]
    pub fn get(&self, pit: Pit) -> u32 {
        self.pits[pit]
    }

    /// Empty a pit and return what it held.
    #[inline]
    pub(crate) fn take(&mut self, pit: Pit) -> u32 {
        std::mem::take(&mut self.pits[pit])
    }

    #[inline]
    pub(crate) fn add_one(&mut self, pit: Pit) {
        self.pits[pit] += 1;
    }

    pub fn pits(&self) -> &[u32; PITS] {
        &self.pits
    }

    /// Stones on the board across both sides.
    pub fn total(&self) -> u32 {
        self.pits.iter().sum()
    }

    /// Stones on one side of the board.
    pub fn side_total(&self, side: Side) -> u32 {
        side.pits().map(|p| self.pits[p]).sum()
    }

    pub fn side_is_empty(&self, side: Side) -> bool {
        side.pits().all(|p| self.pits[p] == 0)
    }

    /// Number of empty pits on one side.
    pub fn empty_pits(&self, side: Side) -> usize {
        side.pits().filter(|&p| self.pits[p] == 0).count()
    }

    /// Pits of `side` holding at least one stone, ascending.
    pub fn occupied_pits(&self, side: Side) -> Vec<Pit> {
        side.pits().filter(|&p| self.pits[p] > 0).collect()
    }
}

impl fmt::Display for Board {
    /// Side B is drawn on top, right to left, so the ring reads
    /// counter-clockwise the way sowing travels.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B ")?;
        for pit in Side::B.pits().rev() {
            write!(f, "{:>3}", self.pits[pit])?;
        }
        writeln!(f)?;
        write!(f, "A ")?;
        for pit in Side::A.pits() {
            write!(f, "{:>3}", self.pits[pit])?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{SIDE_PITS, TOTAL_STONES};

    #[test]
    fn test_initial_board() {
        let board = Board::new();
        assert_eq!(board.get(A_MIDDLE), 12);
        assert_eq!(board.get(B_MIDDLE), 12);
        assert_eq!(board.get(0), 6);
        assert_eq!(board.total(), TOTAL_STONES);
        assert_eq!(board.side_total(Side::A), 48);
    }

    #[test]
    fn test_ring_wraps() {
        assert_eq!(successor(13), 0);
        assert_eq!(successor(6), 7);
        assert_eq!(predecessor(0), 13);
        assert_eq!(neighbors(0), [13, 1]);
        assert_eq!(neighbors(7), [6, 8]);
    }

    #[test]
    fn test_side_geometry() {
        assert_eq!(Side::A.corners(), [0, 6]);
        assert_eq!(Side::B.corners(), [7, 13]);
        assert_eq!(Side::A.pits().count(), SIDE_PITS);
        assert_eq!(Side::B.pits().count(), SIDE_PITS);
        assert_eq!(Side::of_pit(6), Some(Side::A));
        assert_eq!(Side::of_pit(7), Some(Side::B));
        assert_eq!(Side::of_pit(14), None);
        assert_eq!(Side::A.opponent(), Side::B);
    }

    #[test]
    fn test_occupied_and_empty() {
        let mut pits = [0; PITS];
        pits[1] = 2;
        pits[5] = 1;
        pits[9] = 4;
        let board = Board::from_pits(pits);
        assert_eq!(board.occupied_pits(Side::A), vec![1, 5]);
        assert_eq!(board.empty_pits(Side::A), 5);
        assert!(!board.side_is_empty(Side::B));
        assert_eq!(board.occupied_pits(Side::B), vec![9]);
    }
}
