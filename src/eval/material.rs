use crate::{Piece, Side};

use super::{Phase, Score};


/// Material values indexed by phase, side and piece kind.
///
/// Material is colourblind: once built, the black half always mirrors the
/// white half. The empty piece kind is worth nothing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MaterialTable {
    values: [[[i32; Piece::COUNT]; 2]; 2],
}

impl MaterialTable {
    /// A table holding only the white half. The black half is left zeroed
    /// until [`MaterialTable::mirror_piece`] copies it over.
    pub(crate) fn from_white(white: &[[i32; Piece::COUNT]; 2]) -> Self {
        let mut table = Self::default();
        for phase in Phase::ALL {
            table.values[phase.us()][Side::White.us()] = white[phase.us()];
        }
        table
    }

    /// Copies the white value of `piece` into the black entry, for both phases.
    pub(crate) fn mirror_piece(&mut self, piece: Piece) {
        for phase in Phase::ALL {
            let [white, black] = &mut self.values[phase.us()];
            black[piece.us()] = white[piece.us()];
        }
    }

    /// Value of `piece` for `side`, zero for the empty piece kind.
    #[inline]
    pub fn value(&self, phase: Phase, side: Side, piece: Option<Piece>) -> i32 {
        match piece {
            Some(piece) => self.values[phase.us()][side.us()][piece.us()],
            None => 0,
        }
    }

    /// Both phase values of a piece, as a single score.
    #[inline]
    pub fn score(&self, side: Side, piece: Piece) -> Score {
        Score::new(
            self.values[Phase::Mg.us()][side.us()][piece.us()],
            self.values[Phase::Eg.us()][side.us()][piece.us()],
        )
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_piece() {
        let white = [[1, 2, 3, 4, 5, 0], [10, 20, 30, 40, 50, 0]];
        let mut table = MaterialTable::from_white(&white);

        assert_eq!(table.value(Phase::Mg, Side::White, Some(Piece::Rook)), 4);
        assert_eq!(table.value(Phase::Mg, Side::Black, Some(Piece::Rook)), 0);

        table.mirror_piece(Piece::Rook);
        assert_eq!(table.value(Phase::Mg, Side::Black, Some(Piece::Rook)), 4);
        assert_eq!(table.value(Phase::Eg, Side::Black, Some(Piece::Rook)), 40);
        assert_eq!(table.value(Phase::Eg, Side::Black, Some(Piece::Queen)), 0);

        assert_eq!(table.score(Side::White, Piece::Knight), Score::new(2, 20));
    }

    #[test]
    fn test_empty_piece_is_worthless() {
        let table = MaterialTable::from_white(&[[100; 6], [100; 6]]);
        for phase in Phase::ALL {
            for side in Side::ALL {
                assert_eq!(table.value(phase, side, None), 0);
            }
        }
    }
}
