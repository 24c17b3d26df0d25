//! Two-phase (middlegame, endgame) evaluation score.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};


/// A (middlegame, endgame) pair treated as a single arithmetic unit.
///
/// All arithmetic is component-wise. Each component is an `i32`: material
/// values reach the low thousands and bonuses a few hundred, so sums of
/// several such terms stay far away from overflow.
///
/// Serialized as the array `[mg, eg]`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Score {
    mg: i32,
    eg: i32,
}

impl Score {
    pub const ZERO: Score = Score { mg: 0, eg: 0 };

    #[inline]
    pub const fn new(mg: i32, eg: i32) -> Score {
        Score { mg, eg }
    }

    /// Middlegame component.
    #[inline]
    pub const fn mg(self) -> i32 {
        self.mg
    }

    /// Endgame component.
    #[inline]
    pub const fn eg(self) -> i32 {
        self.eg
    }

    /// `const` counterpart to `+`, for building tables at compile time.
    #[inline]
    pub const fn plus(self, rhs: Score) -> Score {
        Score::new(self.mg + rhs.mg, self.eg + rhs.eg)
    }

    /// `const` counterpart to unary `-`.
    #[inline]
    pub const fn negated(self) -> Score {
        Score::new(-self.mg, -self.eg)
    }
}

/// Shorthand constructor, `S(mg, eg) == Score::new(mg, eg)`.
#[allow(non_snake_case)]
#[inline]
pub const fn S(mg: i32, eg: i32) -> Score {
    Score::new(mg, eg)
}

impl From<[i32; 2]> for Score {
    fn from([mg, eg]: [i32; 2]) -> Self {
        Score::new(mg, eg)
    }
}
impl From<Score> for [i32; 2] {
    fn from(score: Score) -> Self {
        [score.mg, score.eg]
    }
}

impl Add for Score {
    type Output = Score;

    #[inline]
    fn add(self, rhs: Score) -> Score {
        self.plus(rhs)
    }
}
impl AddAssign for Score {
    #[inline]
    fn add_assign(&mut self, rhs: Score) {
        *self = *self + rhs;
    }
}

impl Sub for Score {
    type Output = Score;

    #[inline]
    fn sub(self, rhs: Score) -> Score {
        Score::new(self.mg - rhs.mg, self.eg - rhs.eg)
    }
}
impl SubAssign for Score {
    #[inline]
    fn sub_assign(&mut self, rhs: Score) {
        *self = *self - rhs;
    }
}

impl Neg for Score {
    type Output = Score;

    #[inline]
    fn neg(self) -> Score {
        self.negated()
    }
}

impl Mul<i32> for Score {
    type Output = Score;

    #[inline]
    fn mul(self, rhs: i32) -> Score {
        Score::new(self.mg * rhs, self.eg * rhs)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.mg, self.eg)
    }
}
