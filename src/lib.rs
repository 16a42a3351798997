pub mod board;
pub mod coord;
pub mod driver;
pub mod error;
pub mod piece;
pub mod rules;
pub mod turn;

pub use board::{Board, Space};
pub use coord::Coordinate;
pub use driver::{ConsoleInput, Game, MoveSource, ScriptedMoves};
pub use error::Error;
pub use piece::{Colour, Piece, PieceKind};
pub use rules::Verdict;
pub use turn::{MoveSummary, TurnController};
