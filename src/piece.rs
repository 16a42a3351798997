use std::fmt;

use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Colour {
    White = 0,
    Black = 1,
}

impl Colour {
    pub fn opposite(&self) -> Colour {
        match self {
            Colour::White => Colour::Black,
            Colour::Black => Colour::White,
        }
    }

    pub fn initial(&self) -> char {
        match self {
            Colour::White => 'W',
            Colour::Black => 'B',
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    pub fn letter(&self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Rook => 'R',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

/// A piece is a plain value. Two pieces of the same colour and kind are
/// indistinguishable.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub colour: Colour,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(colour: Colour, kind: PieceKind) -> Self {
        Piece { colour, kind }
    }
}

/// Two letter board label, e.g. `WB` for a white bishop.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.colour.initial(), self.kind.letter())
    }
}
