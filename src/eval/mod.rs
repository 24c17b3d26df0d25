//! Static evaluation terms: two-phase scores, material and piece-square tables.

pub mod material;
pub mod params;
pub mod psqt;
pub mod score;

pub use score::{Score, S};


/// Game phase. Scores carry one value per phase; blending them is up to the
/// evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Phase {
    /// Middlegame.
    Mg = 0,
    /// Endgame.
    Eg = 1,
}

impl Phase {
    pub const ALL: [Phase; 2] = [Phase::Mg, Phase::Eg];

    #[inline]
    pub const fn us(self) -> usize {
        self as usize
    }
}
