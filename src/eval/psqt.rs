//! Piece-square tables.
//!
//! Each entry folds a piece's material value together with its positional
//! bonus on a square into one two-phase [`Score`]. Bonuses are only supplied
//! for files a..d from white's point of view: files e..h are mirrored across
//! the board's vertical axis, and black's entries are white's flipped
//! vertically with their sign changed.

use once_cell::sync::Lazy;

use crate::board::SQUARES;
use crate::{Piece, Side, Sq};

use super::material::MaterialTable;
use super::params::EvalParams;
use super::Score;


/// Process-wide tables built from the default parameters.
static PSQT: Lazy<Psqt> = Lazy::new(|| Psqt::new(&EvalParams::default()));

/// Build the process-wide tables if that hasn't happened yet.
///
/// Calling this during startup keeps the one-off construction cost out of
/// the first evaluation. Further calls do nothing.
pub fn init() {
    Lazy::force(&PSQT);
}

/// The process-wide tables, built on first access.
#[inline]
pub fn psqt() -> &'static Psqt {
    &PSQT
}

/// Piece-square score from the process-wide tables.
#[inline]
pub fn score(side: Side, piece: Piece, sq: Sq) -> Score {
    PSQT.score(side, piece, sq)
}


/// Material table and per-square scores for every side and piece kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Psqt {
    material: MaterialTable,
    table: [[[Score; SQUARES]; Piece::COUNT]; 2],
}

impl Psqt {
    pub fn new(params: &EvalParams) -> Self {
        let mut material = MaterialTable::from_white(&params.piece_values);
        let mut table = [[[Score::ZERO; SQUARES]; Piece::COUNT]; 2];

        for piece in Piece::ALL {
            material.mirror_piece(piece);
            let value = material.score(Side::White, piece);

            for sq in Sq::iter() {
                let score = value + params.bonus.get(piece, sq.rank(), sq.fold_file());
                table[Side::White.us()][piece.us()][sq.us()] = score;
                table[Side::Black.us()][piece.us()][sq.flip().us()] = -score;
            }
        }

        tracing::debug!("piece-square tables built");

        Self { material, table }
    }

    /// Material values, with the black half mirrored from white.
    #[inline]
    pub fn material(&self) -> &MaterialTable {
        &self.material
    }

    #[inline]
    pub fn score(&self, side: Side, piece: Piece, sq: Sq) -> Score {
        self.table[side.us()][piece.us()][sq.us()]
    }

    /// Like [`Psqt::score`], but empty squares score zero.
    #[inline]
    pub fn get(&self, side: Side, piece: Option<Piece>, sq: Sq) -> Score {
        piece.map_or(Score::ZERO, |piece| self.score(side, piece, sq))
    }

    /// All 64 entries for one side and piece kind, indexed by square.
    #[inline]
    pub fn side_table(&self, side: Side, piece: Piece) -> &[Score; SQUARES] {
        &self.table[side.us()][piece.us()]
    }
}

impl Default for Psqt {
    fn default() -> Self {
        Self::new(&EvalParams::default())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::params::{PAWN_EG, PAWN_MG};
    use crate::eval::{Phase, S};

    #[test]
    fn test_idempotent() {
        let params = EvalParams::default();
        assert_eq!(Psqt::new(&params), Psqt::new(&params));

        init();
        init();
        assert!(std::ptr::eq(psqt(), psqt()));
        assert_eq!(psqt(), &Psqt::default());
    }

    #[test]
    fn test_material_colourblind() {
        let psqt = Psqt::default();
        for piece in Piece::ALL {
            for phase in Phase::ALL {
                assert_eq!(
                    psqt.material().value(phase, Side::Black, Some(piece)),
                    psqt.material().value(phase, Side::White, Some(piece)),
                );
            }
            assert_eq!(psqt.material().score(Side::Black, piece), psqt.material().score(Side::White, piece));
        }
        assert_eq!(psqt.material().value(Phase::Mg, Side::White, Some(Piece::Pawn)), PAWN_MG);
    }

    #[test]
    fn test_left_right_fold() {
        let psqt = Psqt::default();
        for piece in Piece::ALL {
            for rank in 0..8 {
                for file in 0..8 {
                    assert_eq!(
                        psqt.score(Side::White, piece, Sq::file_rank(file, rank)),
                        psqt.score(Side::White, piece, Sq::file_rank(7 - file, rank)),
                        "{} not mirrored on rank {}, file {}", piece, rank, file,
                    );
                }
            }
        }
    }

    #[test]
    fn test_colour_antisymmetry() {
        let psqt = Psqt::default();
        for piece in Piece::ALL {
            for sq in Sq::iter() {
                assert_eq!(
                    psqt.score(Side::Black, piece, sq.flip()),
                    -psqt.score(Side::White, piece, sq),
                    "{} not mirrored on {}", piece, sq,
                );
                assert_eq!(
                    psqt.score(Side::Black, piece, sq.cflip(Side::Black)),
                    -psqt.score(Side::White, piece, sq.cflip(Side::White)),
                );
            }
        }
    }

    #[test]
    fn test_reconstruction() {
        let params = EvalParams::default();
        let psqt = Psqt::new(&params);
        for piece in Piece::ALL {
            let value = S(params.piece_value(Phase::Mg, piece), params.piece_value(Phase::Eg, piece));
            for sq in Sq::iter() {
                let half_file = sq.file().min(7 - sq.file());
                assert_eq!(
                    psqt.score(Side::White, piece, sq),
                    value + params.bonus.get(piece, sq.rank(), half_file),
                );
            }
        }
    }

    #[test]
    fn test_pawn_a2_a7() {
        let psqt = Psqt::default();
        let a2 = Sq::from_alg("a2").unwrap();
        let a7 = Sq::from_alg("a7").unwrap();

        assert_eq!(psqt.score(Side::White, Piece::Pawn, a2), S(PAWN_MG - 16, PAWN_EG + 7));
        assert_eq!(psqt.score(Side::Black, Piece::Pawn, a7), S(-(PAWN_MG - 16), -(PAWN_EG + 7)));
        assert_eq!(score(Side::White, Piece::Pawn, a2), S(PAWN_MG - 16, PAWN_EG + 7));
        // h2 folds onto a2
        assert_eq!(score(Side::White, Piece::Pawn, Sq::from_alg("h2").unwrap()), S(PAWN_MG - 16, PAWN_EG + 7));
    }

    #[test]
    fn test_king_has_no_material() {
        let psqt = Psqt::default();
        // g1 folds onto b1
        assert_eq!(psqt.score(Side::White, Piece::King, Sq::from_alg("g1").unwrap()), S(346, 67));
        assert_eq!(psqt.score(Side::Black, Piece::King, Sq::from_alg("g8").unwrap()), S(-346, -67));
    }

    #[test]
    fn test_empty_piece_scores_zero() {
        let psqt = Psqt::default();
        for side in Side::ALL {
            for sq in Sq::iter() {
                assert_eq!(psqt.get(side, None, sq), Score::ZERO);
            }
        }
        assert_eq!(
            psqt.get(Side::White, Some(Piece::Queen), Sq::A1),
            psqt.score(Side::White, Piece::Queen, Sq::A1),
        );
    }

    #[test]
    fn test_custom_params() {
        let mut params = EvalParams::default();
        params.piece_values[Phase::Mg.us()][Piece::Knight.us()] = 300;
        params.piece_values[Phase::Eg.us()][Piece::Knight.us()] = 280;
        params.bonus.0[Piece::Knight.us()][3][3] = S(50, -50);

        let psqt = Psqt::new(&params);
        let d4 = Sq::from_alg("d4").unwrap();
        let e4 = Sq::from_alg("e4").unwrap();
        let e5 = Sq::from_alg("e5").unwrap();

        assert_eq!(psqt.score(Side::White, Piece::Knight, d4), S(350, 230));
        assert_eq!(psqt.score(Side::White, Piece::Knight, e4), S(350, 230));
        assert_eq!(psqt.score(Side::Black, Piece::Knight, e5), S(-350, -230));
        assert_eq!(psqt.material().value(Phase::Eg, Side::Black, Some(Piece::Knight)), 280);
    }

    #[test]
    fn test_side_table() {
        let psqt = Psqt::default();
        let white = psqt.side_table(Side::White, Piece::Rook);
        let black = psqt.side_table(Side::Black, Piece::Rook);
        for sq in Sq::iter() {
            assert_eq!(white[sq.us()], -black[sq.flip().us()]);
        }
    }

    #[test]
    fn test_concurrent_readers() {
        use rayon::prelude::*;

        init();
        let expected = Psqt::default();
        let squares: Vec<Sq> = Sq::iter().collect();
        squares.par_iter().for_each(|&sq| {
            for side in Side::ALL {
                for piece in Piece::ALL {
                    assert_eq!(score(side, piece, sq), expected.score(side, piece, sq));
                }
            }
        });
    }
}
