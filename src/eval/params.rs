//! Evaluation constants: piece values and folded piece-square bonuses.
//!
//! The compiled-in defaults can be replaced by a JSON document of the form
//! `{ "piece_values": [[mg; 6], [eg; 6]], "bonus": [[[[mg, eg]; 4]; 8]; 6] }`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::as_result;
use crate::board::{HALF_FILES, RANKS};
use crate::Piece;

use super::{Phase, Score, S};


/// Largest magnitude accepted for any value or bonus component.
pub const MAX_PARAM: i32 = 10_000;

pub const PAWN_MG: i32 = 188;
pub const PAWN_EG: i32 = 248;
pub const KNIGHT_MG: i32 = 753;
pub const KNIGHT_EG: i32 = 832;
pub const BISHOP_MG: i32 = 826;
pub const BISHOP_EG: i32 = 897;
pub const ROOK_MG: i32 = 1285;
pub const ROOK_EG: i32 = 1371;
pub const QUEEN_MG: i32 = 2513;
pub const QUEEN_EG: i32 = 2650;

/// White piece values by phase then piece kind. Kings carry no material.
pub const PIECE_VALUES: [[i32; Piece::COUNT]; 2] = [
    [PAWN_MG, KNIGHT_MG, BISHOP_MG, ROOK_MG, QUEEN_MG, 0],
    [PAWN_EG, KNIGHT_EG, BISHOP_EG, ROOK_EG, QUEEN_EG, 0],
];


/// Piece-square bonuses for white, indexed by piece kind, rank, then folded
/// file (a..d). Files e..h mirror d..a.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BonusTable(pub [[[Score; HALF_FILES]; RANKS]; Piece::COUNT]);

impl BonusTable {
    #[inline]
    pub fn get(&self, piece: Piece, rank: u8, half_file: u8) -> Score {
        self.0[piece.us()][rank as usize][half_file as usize]
    }
}

impl Default for BonusTable {
    fn default() -> Self {
        BONUS
    }
}

// Stockfish 8 piece-square bonuses: https://github.com/official-stockfish/Stockfish/blob/sf_8/src/psqt.cpp
#[rustfmt::skip]
pub const BONUS: BonusTable = BonusTable([
    [ // Pawn
        [ S(  0, 0), S(  0, 0), S(  0, 0), S( 0, 0) ],
        [ S(-16, 7), S(  1,-4), S(  7, 8), S( 3,-2) ],
        [ S(-23,-4), S( -7,-5), S( 20, 5), S(23, 4) ],
        [ S(-22, 3), S(-15, 3), S( 20,-8), S(34,-3) ],
        [ S(-11, 8), S(  0, 9), S(  3, 7), S(20,-6) ],
        [ S(-11, 8), S(-13,-5), S( -6, 2), S(-2, 4) ],
        [ S( -9, 3), S( 15,-9), S( -8, 1), S(-4,18) ],
        [ S(  0, 0), S(  0, 0), S(  0, 0), S( 0, 0) ],
    ],
    [ // Knight
        [ S(-140, -92), S(-91,-81), S(-82,-47), S(-76,-14) ],
        [ S( -87, -68), S(-42,-57), S(-21,-17), S(-10,  9) ],
        [ S( -68, -49), S(-21,-37), S(  0, -8), S(  9, 28) ],
        [ S( -24, -43), S( 17,-26), S( 40,  7), S( 48, 36) ],
        [ S( -26, -46), S( 16,-25), S( 35,  2), S( 50, 40) ],
        [ S( -11, -56), S( 36,-37), S( 57, -8), S( 69, 26) ],
        [ S( -62, -63), S(-18,-51), S(  5,-23), S( 13, 13) ],
        [ S(-192,-102), S(-67,-97), S(-41,-48), S(-29,-13) ],
    ],
    [ // Bishop
        [ S(-56,-67), S(-23,-39), S(-34,-45), S(-44,-28) ],
        [ S(-29,-44), S( 10,-16), S(  2,-23), S( -9, -5) ],
        [ S(-19,-32), S( 17, -9), S( 11,-13), S(  1,  8) ],
        [ S(-21,-37), S( 17,-13), S( 11,-15), S(  0,  7) ],
        [ S(-21,-34), S( 14,-13), S(  6,-17), S( -1,  3) ],
        [ S(-27,-35), S(  6,-14), S(  2,-10), S( -8,  1) ],
        [ S(-33,-44), S(  7,-22), S( -4,-22), S(-12, -4) ],
        [ S(-45,-64), S(-21,-42), S(-29,-44), S(-39,-28) ],
    ],
    [ // Rook
        [ S(-25, 0), S(-15, 0), S(-15, 0), S(-9, 0) ],
        [ S(-23, 0), S( -8, 0), S( -3, 0), S( 0, 0) ],
        [ S(-21, 0), S( -9, 0), S( -4, 0), S( 2, 0) ],
        [ S(-22, 0), S( -6, 0), S( -1, 0), S( 2, 0) ],
        [ S(-22, 0), S( -7, 0), S(  0, 0), S( 1, 0) ],
        [ S(-21, 0), S( -7, 0), S(  0, 0), S( 2, 0) ],
        [ S(-12, 0), S(  4, 0), S(  8, 0), S(12, 0) ],
        [ S(-25, 0), S(-15, 0), S(-11, 0), S(-5, 0) ],
    ],
    [ // Queen
        [ S( 0,-69), S(-3,-57), S(-4,-44), S(-1,-28) ],
        [ S(-4,-54), S( 6,-29), S( 9,-21), S( 8, -4) ],
        [ S(-2,-38), S( 6,-16), S( 9, -7), S( 9,  5) ],
        [ S(-1,-29), S( 8, -5), S( 9,  9), S( 7, 18) ],
        [ S(-3,-27), S( 9, -5), S( 8, 10), S( 7, 24) ],
        [ S(-2,-39), S( 5,-16), S( 7,-11), S(10,  3) ],
        [ S(-2,-56), S( 7,-29), S( 7,-22), S( 6, -7) ],
        [ S(-1,-75), S(-4,-53), S(-1,-44), S( 0,-30) ],
    ],
    [ // King
        [ S(282, 28), S(346, 67), S(292,102), S(227,108) ],
        [ S(293, 61), S(326,118), S(255,162), S(210,156) ],
        [ S(224,104), S(269,164), S(204,178), S(135,189) ],
        [ S(203,118), S(215,190), S(180,196), S(134,196) ],
        [ S(169,123), S(210,177), S(144,222), S( 92,221) ],
        [ S(141,112), S(198,175), S(114,193), S( 68,190) ],
        [ S(111, 66), S(165,116), S( 93,142), S( 47,162) ],
        [ S( 91, 22), S(112, 73), S( 78, 97), S( 30,106) ],
    ],
]);


/// Inputs to the piece-square table builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalParams {
    /// White material values, indexed by phase then piece kind.
    pub piece_values: [[i32; Piece::COUNT]; 2],
    pub bonus: BonusTable,
}

impl Default for EvalParams {
    fn default() -> Self {
        Self { piece_values: PIECE_VALUES, bonus: BONUS }
    }
}

impl EvalParams {
    #[inline]
    pub fn piece_value(&self, phase: Phase, piece: Piece) -> i32 {
        self.piece_values[phase.us()][piece.us()]
    }

    /// Checks that every constant is in a sane range and kings have no value.
    pub fn validate(&self) -> Result<(), &'static str> {
        let in_range = |v: i32| (-MAX_PARAM..=MAX_PARAM).contains(&v);

        as_result!(self.piece_values.iter().flatten().all(|&v| in_range(v)))?;
        as_result!(self.piece_value(Phase::Mg, Piece::King) == 0)?;
        as_result!(self.piece_value(Phase::Eg, Piece::King) == 0)?;
        as_result!(self.bonus.0.iter().flatten().flatten().all(|s| in_range(s.mg()) && in_range(s.eg())))?;
        Ok(())
    }

    /// Parse and validate parameters from JSON.
    pub fn from_json(json: &str) -> Result<Self, &'static str> {
        let params = serde_json::from_str::<Self>(json)
            .map_err(|_| "Malformed evaluation parameters JSON")?;
        params.validate()?;
        Ok(params)
    }

    /// Read, parse and validate a JSON parameters file.
    pub fn from_path(path: &Path) -> Result<Self, &'static str> {
        let json = std::fs::read_to_string(path)
            .map_err(|_| "Evaluation parameters file could not be read")?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> String {
        // serializing plain integer arrays can't fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Load parameters from `path` if given, falling back to the defaults when
    /// the file can't be used.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            None => Self::default(),
            Some(path) => match Self::from_path(path) {
                Ok(params) => {
                    tracing::info!(path = %path.display(), "loaded evaluation parameters");
                    params
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), err, "falling back to default evaluation parameters");
                    Self::default()
                }
            },
        }
    }
}
