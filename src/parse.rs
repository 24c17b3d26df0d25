//! Square, piece, and side string coding and conversion.

use std::fmt;

use crate::{Piece, Side, Sq};


impl Sq {
    /// Converts from algebraic notation.
    pub fn from_alg(alg: &str) -> Option<Self> {
        let mut chars = alg.trim().chars();
        let file = chars.next()?.to_ascii_lowercase();
        let rank = chars.next()?;
        if chars.next().is_some() { return None; }

        if matches!(file, 'a'..='h') && matches!(rank, '1'..='8') {
            Some(Self::file_rank(file as u8 - b'a', rank as u8 - b'1'))
        } else {
            None
        }
    }

    /// Converts to algebraic notation. File is in lowercase.
    pub fn to_alg(self) -> String {
        let mut alg_pos = String::with_capacity(2);
        alg_pos.push((self.file() + b'a') as char);
        alg_pos.push((self.rank() + b'1') as char);
        alg_pos
    }
}

impl fmt::Display for Sq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_alg().as_str())
    }
}


impl Piece {
    /// Convert from algebraic piece characters. Either case is accepted.
    pub fn from_char(ch: char) -> Option<Piece> {
        match ch.to_ascii_uppercase() {
            'K' => Some(Piece::King),
            'Q' => Some(Piece::Queen),
            'R' => Some(Piece::Rook),
            'B' => Some(Piece::Bishop),
            'N' => Some(Piece::Knight),
            'P' => Some(Piece::Pawn),
            _   => None,
        }
    }

    /// Convert to uppercase algebraic piece characters.
    pub fn to_char(self) -> char {
        match self {
            Piece::King =>   'K',
            Piece::Queen =>  'Q',
            Piece::Rook =>   'R',
            Piece::Bishop => 'B',
            Piece::Knight => 'N',
            Piece::Pawn =>   'P',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Piece::King =>   "King",
            Piece::Queen =>  "Queen",
            Piece::Rook =>   "Rook",
            Piece::Bishop => "Bishop",
            Piece::Knight => "Knight",
            Piece::Pawn =>   "Pawn",
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}


impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Side::White => "White",
            Side::Black => "Black",
        })
    }
}
