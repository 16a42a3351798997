//! Piece specific movement rules.
//!
//! These only look at the shape of a move and, for sliding pieces, the squares
//! it passes over. Whether the destination holds a friendly piece and whether
//! the move goes anywhere at all are checked by the turn controller before it
//! asks for a verdict.

use crate::board::Board;
use crate::coord::Coordinate;
use crate::piece::{Piece, PieceKind};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Verdict {
    Legal,
    Illegal,
    /// There is no rule for this kind of piece yet. This is not the same as
    /// the move being illegal.
    NotImplemented(PieceKind),
}

impl From<bool> for Verdict {
    fn from(legal: bool) -> Self {
        if legal {
            Verdict::Legal
        } else {
            Verdict::Illegal
        }
    }
}

pub fn is_legal(board: &Board, piece: Piece, from: Coordinate, to: Coordinate) -> Verdict {
    match piece.kind {
        PieceKind::Knight => knight_move(from, to).into(),
        PieceKind::Bishop => bishop_move(board, from, to).into(),
        PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen | PieceKind::King => {
            Verdict::NotImplemented(piece.kind)
        }
    }
}

fn knight_move(from: Coordinate, to: Coordinate) -> bool {
    let (d_file, d_rank) = from.delta_to(to);
    matches!((d_file.abs(), d_rank.abs()), (2, 1) | (1, 2))
}

fn bishop_move(board: &Board, from: Coordinate, to: Coordinate) -> bool {
    let (d_file, d_rank) = from.delta_to(to);
    if d_file.abs() != d_rank.abs() || d_file == 0 {
        return false;
    }
    path_is_clear(board, from, to)
}

/// Walks from `from` towards `to` one diagonal step at a time and checks
/// that every square strictly between them is empty.
fn path_is_clear(board: &Board, from: Coordinate, to: Coordinate) -> bool {
    let (d_file, d_rank) = from.delta_to(to);
    let (step_file, step_rank) = (d_file.signum(), d_rank.signum());
    let mut current = from;
    loop {
        current = match current.step(step_file, step_rank) {
            Some(next) => next,
            None => return false,
        };
        if current == to {
            return true;
        }
        if !board.is_vacant(current) {
            return false;
        }
    }
}
