use std::fmt;

use log::{debug, info, trace};

use crate::board::Board;
use crate::coord::{self, Coordinate};
use crate::error::Error;
use crate::piece::{Colour, Piece, PieceKind};
use crate::rules::{self, Verdict};

/// How far a single turn attempt got.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TurnStage {
    AwaitingSource,
    AwaitingDestination { from: Coordinate, piece: Piece },
    Validated { from: Coordinate, to: Coordinate, piece: Piece },
    Applied,
}

impl fmt::Display for TurnStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnStage::AwaitingSource => write!(f, "awaiting source"),
            TurnStage::AwaitingDestination { from, piece } => {
                write!(f, "awaiting destination for {piece} on {from}")
            }
            TurnStage::Validated { from, to, piece } => write!(f, "validated {piece} {from}-{to}"),
            TurnStage::Applied => write!(f, "applied"),
        }
    }
}

/// What happened in a successful turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MoveSummary {
    pub colour: Colour,
    pub kind: PieceKind,
    pub from: Coordinate,
    pub to: Coordinate,
    pub captured: Option<Piece>,
}

impl fmt::Display for MoveSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Moved {} {} from {} to {}", self.colour, self.kind, self.from, self.to)?;
        if let Some(captured) = self.captured {
            write!(f, ", capturing {} {}", captured.colour, captured.kind)?;
        }
        Ok(())
    }
}

/// Owns the board for the length of a game and applies one half-move at a
/// time. White moves first.
#[derive(Clone, Debug)]
pub struct TurnController {
    board: Board,
    side_to_move: Colour,
    turns_played: usize,
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new(Board::new())
    }
}

impl TurnController {
    pub fn new(board: Board) -> Self {
        TurnController {
            board,
            side_to_move: Colour::White,
            turns_played: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Colour {
        self.side_to_move
    }

    pub fn turns_played(&self) -> usize {
        self.turns_played
    }

    /// Attempts a half-move for whoever is to move. The turn only passes to
    /// the other side when the move is applied.
    pub fn play(&mut self, source: &str, destination: &str) -> Result<MoveSummary, Error> {
        let summary = self.attempt_turn(self.side_to_move, source, destination)?;
        self.side_to_move = self.side_to_move.opposite();
        self.turns_played += 1;
        Ok(summary)
    }

    /// Resolves and validates a move of a `colour` piece from `source` to
    /// `destination` and applies it to the board.
    ///
    /// Every check runs before the board is touched, so an error always
    /// leaves the board as it was.
    pub fn attempt_turn(
        &mut self,
        colour: Colour,
        source: &str,
        destination: &str,
    ) -> Result<MoveSummary, Error> {
        let mut stage = TurnStage::AwaitingSource;
        let result = self.resolve(colour, source, destination, &mut stage);
        match &result {
            Ok(summary) => info!("{summary}"),
            Err(err) => {
                debug!("{colour} turn {source}-{destination} rejected while {stage}: {err}")
            }
        }
        result
    }

    fn resolve(
        &mut self,
        colour: Colour,
        source: &str,
        destination: &str,
        stage: &mut TurnStage,
    ) -> Result<MoveSummary, Error> {
        let from = coord::parse(source)?;
        let piece = self.board.occupant(from).ok_or(Error::EmptySquare(from))?;
        if piece.colour != colour {
            return Err(Error::WrongColour { expected: colour, found: piece.colour });
        }
        advance(stage, TurnStage::AwaitingDestination { from, piece });

        let to = coord::parse(destination)?;
        let target = self.board.occupant(to);
        if matches!(target, Some(occupant) if occupant.colour == colour) {
            return Err(Error::FriendlyCapture(to));
        }
        if from == to {
            return Err(Error::NullMove);
        }
        match rules::is_legal(&self.board, piece, from, to) {
            Verdict::Legal => {}
            Verdict::Illegal => return Err(Error::IllegalMove { kind: piece.kind, from, to }),
            Verdict::NotImplemented(kind) => return Err(Error::NotImplemented(kind)),
        }
        advance(stage, TurnStage::Validated { from, to, piece });

        self.board.move_piece(from, to);
        advance(stage, TurnStage::Applied);

        Ok(MoveSummary {
            colour,
            kind: piece.kind,
            from,
            to,
            captured: target,
        })
    }
}

fn advance(stage: &mut TurnStage, next: TurnStage) {
    trace!("{stage} -> {next}");
    *stage = next;
}
