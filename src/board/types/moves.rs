//! Move types and move list.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

use super::piece::{Piece, PieceType};
use super::square::Square;

// Move flags (4 bits, values 0-15)
const FLAG_QUIET: u16 = 0;
const FLAG_DOUBLE_PAWN: u16 = 1;
const FLAG_CASTLE_KINGSIDE: u16 = 2;
const FLAG_CASTLE_QUEENSIDE: u16 = 3;
const FLAG_CAPTURE: u16 = 4;
const FLAG_EN_PASSANT: u16 = 5;
// 6-7 reserved
const FLAG_PROMOTION: u16 = 8;
const FLAG_PROMO_KNIGHT: u16 = 8;
const FLAG_PROMO_BISHOP: u16 = 9;
const FLAG_PROMO_ROOK: u16 = 10;
const FLAG_PROMO_QUEEN: u16 = 11;

/// Compact 16-bit move representation.
///
/// Encoding:
/// - bits 0-5:   from square (0-63)
/// - bits 6-11:  to square (0-63)
/// - bits 12-15: flags (move type)
///
/// Promotions set bit 3 of the flags and pick the piece with the low two
/// bits (knight, bishop, rook, queen); a capturing promotion also sets the
/// capture bit. The captured piece rides next to the packed bits and is
/// only consulted when the move is undone.
#[derive(Clone, Copy)]
pub struct Move {
    bits: u16,
    captured: Option<Piece>,
}

impl Move {
    /// Create a null/empty move (used for initialization)
    #[inline]
    #[must_use]
    pub const fn null() -> Self {
        Move {
            bits: 0,
            captured: None,
        }
    }

    /// Create a quiet move (no capture, no special flags)
    #[inline]
    #[must_use]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, FLAG_QUIET, None)
    }

    /// Create a capture move
    #[inline]
    #[must_use]
    pub const fn capture(from: Square, to: Square, captured: Option<Piece>) -> Self {
        Move::with_flag(from, to, FLAG_CAPTURE, captured)
    }

    /// Create a double pawn push move
    #[inline]
    #[must_use]
    pub const fn double_pawn_push(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, FLAG_DOUBLE_PAWN, None)
    }

    /// Create an en passant capture of `captured` (the enemy pawn)
    #[inline]
    #[must_use]
    pub const fn en_passant(from: Square, to: Square, captured: Piece) -> Self {
        Move::with_flag(from, to, FLAG_EN_PASSANT, Some(captured))
    }

    /// Create a kingside castle move
    #[inline]
    #[must_use]
    pub const fn castle_kingside(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, FLAG_CASTLE_KINGSIDE, None)
    }

    /// Create a queenside castle move
    #[inline]
    #[must_use]
    pub const fn castle_queenside(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, FLAG_CASTLE_QUEENSIDE, None)
    }

    /// Create a promotion move; a `captured` piece makes it a capturing promotion.
    #[inline]
    #[must_use]
    pub const fn promotion(from: Square, to: Square, kind: PieceType, captured: Option<Piece>) -> Self {
        let mut flag = match kind {
            PieceType::Knight => FLAG_PROMO_KNIGHT,
            PieceType::Bishop => FLAG_PROMO_BISHOP,
            PieceType::Rook => FLAG_PROMO_ROOK,
            _ => FLAG_PROMO_QUEEN, // Default to queen for invalid pieces
        };
        if captured.is_some() {
            flag |= FLAG_CAPTURE;
        }
        Move::with_flag(from, to, flag, captured)
    }

    /// Create a move with a specific flag
    #[inline]
    const fn with_flag(from: Square, to: Square, flag: u16, captured: Option<Piece>) -> Self {
        let from_idx = from.index() as u16;
        let to_idx = to.index() as u16;
        Move {
            bits: from_idx | (to_idx << 6) | (flag << 12),
            captured,
        }
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        Square::from_index((self.bits & 0x3F) as usize)
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        Square::from_index(((self.bits >> 6) & 0x3F) as usize)
    }

    /// Get the flag bits
    #[inline]
    #[must_use]
    pub const fn flag(self) -> u16 {
        self.bits >> 12
    }

    /// The piece removed by this move, if any
    #[inline]
    #[must_use]
    pub const fn captured(self) -> Option<Piece> {
        self.captured
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.flag() & FLAG_CAPTURE != 0
    }

    /// Returns true if this move is en passant
    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        self.flag() == FLAG_EN_PASSANT
    }

    /// Returns true if this move is castling (kingside or queenside)
    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        let f = self.flag();
        f == FLAG_CASTLE_KINGSIDE || f == FLAG_CASTLE_QUEENSIDE
    }

    /// Returns true if this is kingside castling (O-O)
    #[inline]
    #[must_use]
    pub const fn is_castle_kingside(self) -> bool {
        self.flag() == FLAG_CASTLE_KINGSIDE
    }

    /// Returns true if this is queenside castling (O-O-O)
    #[inline]
    #[must_use]
    pub const fn is_castle_queenside(self) -> bool {
        self.flag() == FLAG_CASTLE_QUEENSIDE
    }

    /// Returns true if this move is a double pawn push
    #[inline]
    #[must_use]
    pub const fn is_double_pawn_push(self) -> bool {
        self.flag() == FLAG_DOUBLE_PAWN
    }

    /// Returns true if this move is a pawn promotion
    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.flag() & FLAG_PROMOTION != 0
    }

    /// Get the promotion piece type, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion_type(self) -> Option<PieceType> {
        if !self.is_promotion() {
            return None;
        }
        match self.flag() & 0b11 {
            0 => Some(PieceType::Knight),
            1 => Some(PieceType::Bishop),
            2 => Some(PieceType::Rook),
            _ => Some(PieceType::Queen),
        }
    }

    /// Get the raw 16-bit value
    #[inline]
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.bits
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits && self.captured.is_some() == other.captured.is_some()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
        self.captured.is_some().hash(state);
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from(), self.to())?;
        if let Some(promo) = self.promotion_type() {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if let Some(captured) = self.captured {
            write!(f, " x{captured}")?;
        }
        if self.is_castling() {
            write!(f, " castle")?;
        }
        if self.is_en_passant() {
            write!(f, " ep")?;
        }
        write!(f, ")")
    }
}

/// Coordinate notation: `e2e4`, `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())?;
        if let Some(promo) = self.promotion_type() {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

pub(crate) const MAX_MOVES: usize = 256;
pub(crate) const EMPTY_MOVE: Move = Move::null();

/// List of moves with fixed-size backing array.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.as_slice().contains(mv)
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        if idx < self.len {
            Some(self.moves[idx])
        } else {
            None
        }
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.get(0)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let mv = self.list.moves[self.idx];
            self.idx += 1;
            Some(mv)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_packing_layout() {
        let mv = Move::double_pawn_push(sq("e2"), sq("e4"));
        assert_eq!(mv.as_u16() & 0x3F, 12);
        assert_eq!((mv.as_u16() >> 6) & 0x3F, 28);
        assert_eq!(mv.flag(), 0b0001);
        assert!(mv.is_double_pawn_push());
        assert!(!mv.is_capture());
    }

    #[test]
    fn test_promotion_flags_select_piece() {
        let black_rook = Piece::new(PieceType::Rook, Color::Black);
        for (kind, low_bits) in [
            (PieceType::Knight, 0),
            (PieceType::Bishop, 1),
            (PieceType::Rook, 2),
            (PieceType::Queen, 3),
        ] {
            let quiet = Move::promotion(sq("a7"), sq("a8"), kind, None);
            assert_eq!(quiet.flag(), 0b1000 | low_bits);
            assert_eq!(quiet.promotion_type(), Some(kind));
            assert!(!quiet.is_capture());

            let capture = Move::promotion(sq("a7"), sq("b8"), kind, Some(black_rook));
            assert!(capture.is_capture());
            assert_eq!(capture.promotion_type(), Some(kind));
        }
    }

    #[test]
    fn test_equality_uses_capture_presence_only() {
        let knight = Piece::new(PieceType::Knight, Color::Black);
        let bishop = Piece::new(PieceType::Bishop, Color::Black);
        let a = Move::capture(sq("d4"), sq("e5"), Some(knight));
        let b = Move::capture(sq("d4"), sq("e5"), Some(bishop));
        let c = Move::capture(sq("d4"), sq("e5"), None);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(Move::quiet(sq("d4"), sq("e5")), a);
    }

    #[test]
    fn test_display_coordinate_notation() {
        assert_eq!(Move::quiet(sq("g1"), sq("f3")).to_string(), "g1f3");
        let promo = Move::promotion(sq("e7"), sq("e8"), PieceType::Knight, None);
        assert_eq!(promo.to_string(), "e7e8n");
    }
}
