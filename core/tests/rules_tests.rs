// SPDX-License-Identifier: MIT OR Apache-2.0

use weiqi_core::{find_group, Board, BoardSize, Color, Coord, MoveRejection, RuleValidator};

#[test]
fn ko_detection() {
    // Black has just captured a white stone at (1,1) by playing (1,2)
    //   . B W .
    //   B . B W
    //   . B W .
    let mut previous = Board::new(BoardSize::Nine);
    previous.place(Coord::new(0, 1), Color::Black);
    previous.place(Coord::new(1, 0), Color::Black);
    previous.place(Coord::new(2, 1), Color::Black);
    previous.place(Coord::new(0, 2), Color::White);
    previous.place(Coord::new(1, 3), Color::White);
    previous.place(Coord::new(2, 2), Color::White);
    previous.place(Coord::new(1, 1), Color::White);

    let mut current = previous.clone();
    current.remove(Coord::new(1, 1));
    current.place(Coord::new(1, 2), Color::Black);

    let validator = RuleValidator::new(&current, Some(&previous));
    assert_eq!(
        validator.check_move(Coord::new(1, 1), Color::White),
        Err(MoveRejection::KoViolation)
    );
    // the occupied point is refused before ko is considered
    assert_eq!(
        validator.check_move(Coord::new(1, 2), Color::White),
        Err(MoveRejection::SpotTaken)
    );
}

#[test]
fn ko_ignores_older_positions() {
    // same shape, but the reference snapshot is from an earlier turn
    let mut older = Board::new(BoardSize::Nine);
    older.place(Coord::new(0, 1), Color::Black);
    older.place(Coord::new(1, 0), Color::Black);
    older.place(Coord::new(2, 1), Color::Black);
    older.place(Coord::new(0, 2), Color::White);
    older.place(Coord::new(1, 3), Color::White);
    older.place(Coord::new(2, 2), Color::White);
    older.place(Coord::new(1, 1), Color::White);

    let mut current = older.clone();
    current.remove(Coord::new(1, 1));
    current.place(Coord::new(1, 2), Color::Black);

    let mut intermediate = current.clone();
    intermediate.remove(Coord::new(1, 2));

    let validator = RuleValidator::new(&current, Some(&intermediate));
    let placement = validator.apply(Coord::new(1, 1), Color::White).unwrap();
    assert_eq!(placement.board, older);
    assert_eq!(placement.captured, vec![Coord::new(1, 2)]);
}

#[test]
fn self_capture() {
    // White stones surrounding an empty point
    let mut board = Board::new(BoardSize::Nine);
    for (row, col) in [(0, 0), (0, 1), (1, 0), (1, 2), (2, 1), (2, 2)] {
        board.place(Coord::new(row, col), Color::White);
    }

    let validator = RuleValidator::new(&board, None);

    // Black can't play (self-capture), but White can fill its own eye
    assert_eq!(
        validator.check_move(Coord::new(1, 1), Color::Black),
        Err(MoveRejection::SuicideMove)
    );
    assert!(validator.check_move(Coord::new(1, 1), Color::White).is_ok());
}

#[test]
fn capture_detection() {
    // White pair with black around it, one liberty left at (4,3)
    let mut board = Board::new(BoardSize::Nine);
    board.place(Coord::new(3, 3), Color::White);
    board.place(Coord::new(3, 4), Color::White);
    for (row, col) in [(3, 2), (2, 3), (2, 4), (3, 5), (4, 4)] {
        board.place(Coord::new(row, col), Color::Black);
    }

    let pair = find_group(&board, Coord::new(3, 3)).unwrap();
    assert_eq!(pair.len(), 2);
    assert_eq!(pair.liberties, vec![Coord::new(4, 3)]);

    let validator = RuleValidator::new(&board, None);
    let placement = validator.apply(Coord::new(4, 3), Color::Black).unwrap();
    assert_eq!(placement.captured_count(), 2);
    assert_eq!(placement.board.count_stones(Color::White), 0);
}

#[test]
fn capturing_move_is_never_suicide() {
    // black fills the corner, which has no liberties of its own,
    // but the white stone at (0,1) falls with it
    //   . W B
    //   W B .
    //   B . .
    let mut board = Board::new(BoardSize::Nine);
    board.place(Coord::new(0, 1), Color::White);
    board.place(Coord::new(1, 0), Color::White);
    board.place(Coord::new(0, 2), Color::Black);
    board.place(Coord::new(1, 1), Color::Black);
    board.place(Coord::new(2, 0), Color::Black);

    let validator = RuleValidator::new(&board, None);
    let placement = validator.apply(Coord::new(0, 0), Color::Black).unwrap();
    assert_eq!(placement.captured, vec![Coord::new(1, 0), Coord::new(0, 1)]);
}

#[test]
fn board_creation() {
    let board = Board::new(BoardSize::Nineteen);
    assert_eq!(board.size(), 19);
    assert_eq!(board.get(Coord::new(0, 0)), None);
    assert!(board.is_clear());
}
