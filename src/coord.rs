use std::fmt;
use std::str::FromStr;

use crate::error::Error;

pub const BOARD_SIZE: i8 = 8;

const FILE_LETTERS: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// A square on the board as grid indices.
///
/// `rank` counts rows in display order: rank 0 is the row labelled `8` at the
/// top of the board and rank 7 is the row labelled `1` at the bottom.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug)]
pub struct Coordinate {
    file: i8,
    rank: i8,
}

impl Coordinate {
    pub fn new(file: i8, rank: i8) -> Option<Coordinate> {
        let coordinate = Coordinate { file, rank };
        if coordinate.is_off_board() {
            None
        } else {
            Some(coordinate)
        }
    }

    pub fn file(&self) -> i8 {
        self.file
    }

    pub fn rank(&self) -> i8 {
        self.rank
    }

    fn is_off_board(&self) -> bool {
        self.file < 0 || self.file >= BOARD_SIZE || self.rank < 0 || self.rank >= BOARD_SIZE
    }

    /// The square `(d_file, d_rank)` away, if it is still on the board.
    pub fn step(&self, d_file: i8, d_rank: i8) -> Option<Coordinate> {
        Coordinate::new(self.file.checked_add(d_file)?, self.rank.checked_add(d_rank)?)
    }

    /// Offset from `self` to `other` as `(d_file, d_rank)`.
    pub fn delta_to(&self, other: Coordinate) -> (i8, i8) {
        (other.file - self.file, other.rank - self.rank)
    }

    /// Iterates over all 64 squares, top row first.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE)
            .flat_map(|rank| (0..BOARD_SIZE).map(move |file| Coordinate { file, rank }))
    }

    /// Label of a display row, `'8'` for rank 0 down to `'1'` for rank 7.
    /// Only called with ranks in `0..BOARD_SIZE`.
    pub(crate) fn rank_label(rank: i8) -> char {
        (b'8' - rank as u8) as char
    }

    /// Only called with files in `0..BOARD_SIZE`.
    pub(crate) fn file_label(file: i8) -> char {
        FILE_LETTERS[file as usize]
    }
}

/// Parses two character algebraic notation such as `e4`.
///
/// The text must already be lower case.
pub fn parse(text: &str) -> Result<Coordinate, Error> {
    let invalid = || Error::InvalidCoordinate(text.to_string());
    let mut chars = text.chars();
    let (file_char, rank_char) = match (chars.next(), chars.next(), chars.next()) {
        (Some(file_char), Some(rank_char), None) => (file_char, rank_char),
        _ => return Err(invalid()),
    };

    let file = FILE_LETTERS
        .iter()
        .position(|&letter| letter == file_char)
        .ok_or_else(invalid)? as i8;
    let rank = match rank_char {
        '1'..='8' => (b'8' - rank_char as u8) as i8,
        _ => return Err(invalid()),
    };

    Ok(Coordinate { file, rank })
}

impl FromStr for Coordinate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = Coordinate::file_label(self.file);
        let rank = Coordinate::rank_label(self.rank);
        write!(f, "{file}{rank}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_axis_is_inverted() {
        assert_eq!(parse("a1"), Ok(Coordinate { file: 0, rank: 7 }));
        assert_eq!(parse("h8"), Ok(Coordinate { file: 7, rank: 0 }));
        assert_eq!(parse("e2"), Ok(Coordinate { file: 4, rank: 6 }));
        assert_eq!(parse("g6"), Ok(Coordinate { file: 6, rank: 2 }));
    }

    #[test]
    fn every_square_round_trips() {
        let mut seen = 0;
        for coordinate in Coordinate::all() {
            let text = coordinate.to_string();
            assert_eq!(parse(&text), Ok(coordinate), "{text}");
            seen += 1;
        }
        assert_eq!(seen, 64);
    }

    #[test]
    fn rejects_malformed_text() {
        for text in ["", "e", "e44", "i9", "a0", "a9", "E4", "4e", " e4", "é4"] {
            let expected = Err(Error::InvalidCoordinate(text.to_string()));
            assert_eq!(parse(text), expected, "{text:?}");
        }
    }

    #[test]
    fn step_stays_on_board() {
        let corner = Coordinate::new(0, 0).unwrap();
        assert_eq!(corner.step(-1, 0), None);
        assert_eq!(corner.step(1, 1), Coordinate::new(1, 1));
        assert_eq!(Coordinate::new(8, 0), None);
        assert_eq!(corner.delta_to(Coordinate::new(3, 5).unwrap()), (3, 5));
    }

    #[test]
    fn step_far_off_board_is_none() {
        let h8 = Coordinate::new(7, 0).unwrap();
        assert_eq!(h8.step(i8::MAX, 0), None);
        assert_eq!(h8.step(0, i8::MIN), None);
        assert_eq!(h8.step(i8::MIN, i8::MAX), None);
        assert_eq!(h8.step(-7, 7), Coordinate::new(0, 7));
    }

    #[test]
    fn labels_cover_the_board() {
        let files: String = (0..BOARD_SIZE).map(Coordinate::file_label).collect();
        let ranks: String = (0..BOARD_SIZE).map(Coordinate::rank_label).collect();
        assert_eq!(files, "abcdefgh");
        assert_eq!(ranks, "87654321");
    }
}
