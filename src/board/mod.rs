//! Board coordinates and piece identities.

/// Number of files (and ranks) on the board.
pub const FILES: u8 = 8;
/// Number of files covered by folded, left-half data.
pub const HALF_FILES: usize = FILES as usize / 2;
/// Number of ranks on the board.
pub const RANKS: usize = 8;
/// Number of squares on the board.
pub const SQUARES: usize = 64;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Side {
    White = 0,
    Black = 1,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::White, Side::Black];

    #[inline]
    pub const fn us(self) -> usize {
        self as usize
    }
}


/// Piece kinds, in ascending value order. The empty kind is expressed as
/// `Option::<Piece>::None` wherever it can occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Piece {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl Piece {
    pub const COUNT: usize = 6;
    pub const ALL: [Piece; Piece::COUNT] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    #[inline]
    pub const fn us(self) -> usize {
        self as usize
    }

    /// Returns `None` if `index` doesn't name a piece kind.
    pub const fn from_index(index: u8) -> Option<Piece> {
        match index {
            0 => Some(Piece::Pawn),
            1 => Some(Piece::Knight),
            2 => Some(Piece::Bishop),
            3 => Some(Piece::Rook),
            4 => Some(Piece::Queen),
            5 => Some(Piece::King),
            _ => None,
        }
    }
}


/// Board square, `rank * 8 + file`: a1 is zero, h1 is 7, h8 is 63.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Sq(u8);

impl Sq {
    pub const A1: Sq = Sq(0o00);
    pub const H8: Sq = Sq(0o77);

    /// ### Panics:
    /// Debug builds panic when `sq` is bigger than 63.
    #[inline]
    pub const fn new(sq: u8) -> Self {
        debug_assert!(sq < 64);
        Self(sq)
    }

    #[inline]
    pub const fn file_rank(file: u8, rank: u8) -> Self {
        debug_assert!(file < FILES && rank < FILES);
        Self(rank * 0o10 + file)
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.0 & 0o7
    }
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 >> 3
    }

    #[inline]
    pub const fn us(self) -> usize {
        self.0 as usize
    }

    /// Flip the rank of the square, keeping its file.
    #[inline]
    pub const fn flip(self) -> Self {
        Self(self.0 ^ 0o70)
    }

    /// Flip the rank of the square if `side` is black.
    #[inline]
    pub const fn cflip(self, side: Side) -> Self {
        match side {
            Side::White => self,
            Side::Black => self.flip(),
        }
    }

    /// Fold the file onto the a..d half of the board: `min(file, 7 - file)`.
    #[inline]
    pub const fn fold_file(self) -> u8 {
        let file = self.file();
        if file & 0o4 != 0 { file ^ 0o7 } else { file }
    }

    /// Iterate over all squares from a1 to h8.
    pub fn iter() -> impl Iterator<Item = Sq> + Clone {
        (0..SQUARES as u8).map(Sq)
    }
}
