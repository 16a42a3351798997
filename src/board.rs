use std::fmt;

use crate::coord::{self, Coordinate, BOARD_SIZE};
use crate::error::Error;
use crate::piece::{Colour, Piece, PieceKind};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Space {
    Empty,
    Occupied(Piece),
}

impl Space {
    pub fn piece(&self) -> Option<Piece> {
        match self {
            Space::Occupied(piece) => Some(*piece),
            Space::Empty => None,
        }
    }
}

/// An 8x8 grid indexed `[rank][file]`.
///
/// The board only tracks occupancy. It does not know any chess rules and
/// accepts any arrangement of pieces handed to [`Board::place`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    spaces: [[Space; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Board {
            spaces: [[Space::Empty; 8]; 8],
        }
    }

    pub fn get_space(&self, coord: Coordinate) -> Space {
        self.spaces[coord.rank() as usize][coord.file() as usize]
    }

    fn set_space(&mut self, coord: Coordinate, space: Space) {
        self.spaces[coord.rank() as usize][coord.file() as usize] = space;
    }

    /// Puts a new piece on the square named by `coord`.
    pub fn place(&mut self, kind: PieceKind, colour: Colour, coord: &str) -> Result<(), Error> {
        let coordinates = coord::parse(coord)?;
        if !self.is_vacant(coordinates) {
            return Err(Error::OccupiedCell(coordinates));
        }
        self.set_space(coordinates, Space::Occupied(Piece::new(colour, kind)));
        Ok(())
    }

    /// Like [`Board::place`] but with the kind and colour given by name,
    /// e.g. `place_named("bishop", "white", "e2")`.
    pub fn place_named(&mut self, kind: &str, colour: &str, coord: &str) -> Result<(), Error> {
        let kind: PieceKind = kind
            .trim()
            .parse()
            .map_err(|_| Error::InvalidPiece(kind.to_string()))?;
        let colour: Colour = colour
            .trim()
            .parse()
            .map_err(|_| Error::InvalidPiece(colour.to_string()))?;
        self.place(kind, colour, coord)
    }

    pub fn occupant(&self, coord: Coordinate) -> Option<Piece> {
        self.get_space(coord).piece()
    }

    pub fn is_vacant(&self, coord: Coordinate) -> bool {
        matches!(self.get_space(coord), Space::Empty)
    }

    /// Moves whatever stands on `from` to `to`, replacing anything there.
    ///
    /// No legality checks happen here. Callers validate the move first and
    /// guarantee `from` is occupied and differs from `to`.
    pub fn move_piece(&mut self, from: Coordinate, to: Coordinate) {
        self.set_space(to, self.get_space(from));
        self.set_space(from, Space::Empty);
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        Coordinate::all().filter_map(move |coord| self.occupant(coord).map(|piece| (coord, piece)))
    }

    pub fn len(&self) -> usize {
        self.pieces().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn render(&self) -> String {
        let separator = format!("  {}\n", "-".repeat(41));
        let mut out = separator.clone();
        for rank in 0..BOARD_SIZE {
            let cells: Vec<String> = (0..BOARD_SIZE)
                .map(|file| match self.spaces[rank as usize][file as usize] {
                    Space::Occupied(piece) => piece.to_string(),
                    Space::Empty => "  ".to_string(),
                })
                .collect();
            let label = Coordinate::rank_label(rank);
            out.push_str(&format!("{label} | {} |\n", cells.join(" | ")));
            out.push_str(&separator);
        }
        let files: Vec<String> = (0..BOARD_SIZE)
            .map(|file| Coordinate::file_label(file).to_string())
            .collect();
        out.push_str(&format!("    {}\n", files.join("    ")));
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
