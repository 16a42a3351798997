use chessboard::{
    Board, Colour, Coordinate, Error, Game, Piece, PieceKind, ScriptedMoves, TurnController,
};
use pretty_assertions::assert_eq;

fn at(text: &str) -> Coordinate {
    text.parse().unwrap()
}

#[test]
fn knight_hops_then_null_move() {
    let mut board = Board::new();
    board.place(PieceKind::Knight, Colour::White, "b1").unwrap();
    let mut controller = TurnController::new(board);

    let summary = controller.attempt_turn(Colour::White, "b1", "a3").unwrap();
    assert_eq!((summary.from, summary.to), (at("b1"), at("a3")));
    let white_knight = Piece::new(Colour::White, PieceKind::Knight);
    assert_eq!(controller.board().occupant(at("a3")), Some(white_knight));
    assert_eq!(controller.board().occupant(at("b1")), None);

    assert_eq!(controller.attempt_turn(Colour::White, "a3", "a3"), Err(Error::NullMove));
}

#[test]
fn blocked_bishop_cannot_capture_behind_blocker() {
    let mut board = Board::new();
    board.place(PieceKind::Bishop, Colour::White, "a1").unwrap();
    board.place(PieceKind::Pawn, Colour::White, "c3").unwrap();
    board.place(PieceKind::Rook, Colour::Black, "f6").unwrap();
    let mut controller = TurnController::new(board);
    let before = controller.board().clone();

    assert_eq!(
        controller.attempt_turn(Colour::White, "a1", "f6"),
        Err(Error::IllegalMove { kind: PieceKind::Bishop, from: at("a1"), to: at("f6") })
    );
    assert_eq!(controller.board(), &before);
    assert!(controller.attempt_turn(Colour::White, "a1", "b2").is_ok());
}

#[test]
fn a_short_game() {
    let mut board = Board::new();
    board.place(PieceKind::Bishop, Colour::White, "e2").unwrap();
    board.place(PieceKind::Knight, Colour::Black, "d3").unwrap();
    board.place(PieceKind::Knight, Colour::Black, "g8").unwrap();
    let mut game = Game::new(TurnController::new(board));
    game.use_colour_output = false;

    let mut moves = ScriptedMoves::new([("e2", "d3"), ("d3", "h7"), ("g8", "f6"), ("d3", "h7")]);
    let mut out = Vec::new();
    game.run(&mut moves, &mut out).unwrap();

    let board = game.controller.board();
    assert_eq!(board.len(), 2);
    assert_eq!(board.occupant(at("h7")), Some(Piece::new(Colour::White, PieceKind::Bishop)));
    assert_eq!(board.occupant(at("f6")), Some(Piece::new(Colour::Black, PieceKind::Knight)));
    assert_eq!(game.controller.turns_played(), 3);
    assert_eq!(game.controller.side_to_move(), Colour::Black);
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Moved White Bishop from e2 to d3, capturing Black Knight"));
    assert!(out.contains("Black: it is Black's turn, you cannot move a White piece"));
    assert!(out.contains("Moved White Bishop from d3 to h7"));
}
