//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the chess board, stored as its 0-63 index (a1 = 0, h8 = 63).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// Create a square from file and rank with bounds checking
    #[must_use]
    pub const fn new(file: usize, rank: usize) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square((rank * 8 + file) as u8))
        } else {
            None
        }
    }

    /// Create a square from an index (0-63).
    ///
    /// # Panics
    /// Panics if `idx` is not a board index.
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        assert!(idx < 64, "square index out of range");
        Square(idx as u8)
    }

    /// Get the square's index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.0 as usize % 8
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.0 as usize / 8
    }

    /// The square `df` files and `dr` ranks away, if it is still on the board.
    #[inline]
    #[must_use]
    pub const fn offset(self, df: isize, dr: isize) -> Option<Self> {
        let file = self.file() as isize + df;
        let rank = self.rank() as isize + dr;
        if file < 0 || file > 7 || rank < 0 || rank > 7 {
            None
        } else {
            Some(Square((rank * 8 + file) as u8))
        }
    }

    /// Iterate over all 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }

    /// Flip the square vertically (e.g., a1 <-> a8)
    #[inline]
    #[must_use]
    pub const fn flip_vertical(self) -> Self {
        Square(self.0 ^ 56)
    }

    /// True for light squares (b1, a2, ...).
    #[inline]
    #[must_use]
    pub const fn is_light(self) -> bool {
        (self.file() + self.rank()) % 2 == 1
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file() as u8 + b'a') as char, self.rank() + 1)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    /// Build a square from `(file, rank)`.
    fn try_from((file, rank): (usize, usize)) -> Result<Self, Self::Error> {
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        Ok(Square((rank * 8 + file) as u8))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let file = match bytes[0] {
            b @ b'a'..=b'h' => (b - b'a') as usize,
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b @ b'1'..=b'8' => (b - b'1') as usize,
            _ => return Err(invalid()),
        };

        Ok(Square((rank * 8 + file) as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_and_coordinates() {
        let a1 = Square::from_index(0);
        let h8 = Square::from_index(63);
        assert_eq!((a1.file(), a1.rank()), (0, 0));
        assert_eq!((h8.file(), h8.rank()), (7, 7));
        assert_eq!(Square::new(4, 3), Some(Square::from_index(28)));
        assert_eq!(Square::new(8, 0), None);
    }

    #[test]
    fn test_parse_and_display() {
        let e4: Square = "e4".parse().unwrap();
        assert_eq!(e4.index(), 28);
        assert_eq!(e4.to_string(), "e4");
        assert!("i1".parse::<Square>().is_err());
        assert!("e9".parse::<Square>().is_err());
        assert!("e".parse::<Square>().is_err());
    }

    #[test]
    fn test_offset_stays_on_board() {
        let h1: Square = "h1".parse().unwrap();
        assert_eq!(h1.offset(1, 0), None);
        assert_eq!(h1.offset(-1, 1), Some("g2".parse().unwrap()));
        assert_eq!(h1.offset(0, -1), None);
    }

    #[test]
    fn test_try_from_reports_axis() {
        assert_eq!(
            Square::try_from((9, 0)),
            Err(SquareError::FileOutOfBounds { file: 9 })
        );
        assert_eq!(
            Square::try_from((0, 8)),
            Err(SquareError::RankOutOfBounds { rank: 8 })
        );
    }
}
