use thiserror::Error;

use crate::coord::Coordinate;
use crate::piece::{Colour, PieceKind};

/// Every way setting up the board or attempting a turn can fail.
///
/// None of these leave the board modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid coordinates '{0}', expected a file a-h followed by a rank 1-8")]
    InvalidCoordinate(String),
    #[error("invalid piece '{0}'")]
    InvalidPiece(String),
    #[error("{0} is already occupied")]
    OccupiedCell(Coordinate),
    #[error("no piece at {0}")]
    EmptySquare(Coordinate),
    #[error("it is {expected}'s turn, you cannot move a {found} piece")]
    WrongColour { expected: Colour, found: Colour },
    #[error("{0} is occupied by your own piece")]
    FriendlyCapture(Coordinate),
    #[error("you must move the piece to a different square")]
    NullMove,
    #[error("a {kind} cannot move from {from} to {to}")]
    IllegalMove { kind: PieceKind, from: Coordinate, to: Coordinate },
    #[error("movement rules for the {0} are not implemented")]
    NotImplemented(PieceKind),
}
