use super::Board;

impl Board {
    /// Material balance in centipawns from White's point of view.
    ///
    /// Pawn 100, knight 300, bishop 300, rook 500, queen 900; kings count
    /// for nothing.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        self.squares
            .iter()
            .flatten()
            .map(|piece| piece.color.sign() * piece.kind.value())
            .sum()
    }
}
