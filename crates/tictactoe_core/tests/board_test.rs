//! Tests for the N×N board contract.

use tictactoe_core::{Board, BoardErrorKind, Line, LineKind, Outcome, Player, Square};

fn players() -> (Player, Player) {
    (Player::new("Alice", "X"), Player::new("Bob", "O"))
}

#[test]
fn test_move_succeeds_only_on_empty_in_range_squares() {
    let (a, _) = players();
    for dimension in 1..=5 {
        let n2 = (dimension * dimension) as i64;
        for position in -1..=n2 + 1 {
            let mut board = Board::new(dimension).unwrap();
            let before = board.clone();
            let accepted = board.make_move(position, &a);
            assert_eq!(accepted, (1..=n2).contains(&position), "N={dimension} pos={position}");
            if accepted {
                let index = (position - 1) as usize;
                for (i, square) in board.squares().iter().enumerate() {
                    if i == index {
                        assert_eq!(square, &Square::Occupied(a.clone()));
                    } else {
                        assert_eq!(square, &before.squares()[i]);
                    }
                }
            } else {
                assert_eq!(board, before);
            }
        }
    }
}

#[test]
fn test_second_move_on_same_square_rejected() {
    let (a, b) = players();
    let mut board = Board::default();
    assert!(board.make_move(5, &a));
    let snapshot = board.clone();
    assert!(!board.make_move(5, &b));
    assert!(!board.make_move(5, &a));
    assert_eq!(board, snapshot);
    assert_eq!(board.square(4).and_then(Square::occupant), Some(&a));
}

#[test]
fn test_zero_dimension_fails_fast() {
    let err = Board::new(0).unwrap_err();
    assert_eq!(err.kind, BoardErrorKind::ZeroDimension);
    assert!(err.to_string().contains("at least 1"));
}

#[test]
fn test_every_full_line_wins_for_every_dimension() {
    let (a, b) = players();
    for dimension in 1..=6 {
        for line in tictactoe_core::rules::lines(dimension) {
            let mut board = Board::new(dimension).unwrap();
            for index in line.indices(dimension) {
                assert!(board.make_move(index as i64 + 1, &a));
            }
            assert_eq!(board.winner(), Some(&a), "N={dimension} {line}");

            // One foreign square spoils the line.
            if dimension > 1 {
                let mut mixed = Board::new(dimension).unwrap();
                for (q, index) in line.indices(dimension).enumerate() {
                    let player = if q == dimension - 1 { &b } else { &a };
                    assert!(mixed.make_move(index as i64 + 1, player));
                }
                assert_eq!(
                    tictactoe_core::rules::line_owner(&mixed, line),
                    None,
                    "N={dimension} {line}"
                );
            }
        }
    }
}

#[test]
fn test_same_name_and_icon_do_not_share_lines() {
    let twin_a = Player::new("Sam", "X");
    let twin_b = Player::new("Sam", "X");
    let mut board = Board::default();
    assert!(board.make_move(1, &twin_a));
    assert!(board.make_move(2, &twin_b));
    assert!(board.make_move(3, &twin_a));
    assert_eq!(board.winner(), None);
    assert_eq!(board.render()[0], "X X X");
}

#[test]
fn test_top_row_scenario() {
    let (a, _) = players();
    let mut board = Board::default();
    assert!(board.make_move(1, &a));
    assert!(board.make_move(2, &a));
    assert_eq!(board.winner(), None);
    assert!(board.make_move(3, &a));
    assert_eq!(board.winner(), Some(&a));
}

#[test]
fn test_partial_overlap_reports_no_winner() {
    let (a, b) = players();
    let mut board = Board::default();
    let moves = [(1, &a), (2, &b), (3, &a), (4, &a), (5, &a), (6, &b)];
    for (position, player) in moves {
        assert!(board.make_move(position, player));
        assert_eq!(board.winner(), None, "after position {position}");
    }
    // 7 completes column 1 (1, 4, 7) and the anti-diagonal (7, 5, 3).
    assert!(board.make_move(7, &a));
    assert_eq!(board.winner(), Some(&a));
    let (line, _) = tictactoe_core::rules::winning_line(&board).unwrap();
    assert_eq!(line, Line { kind: LineKind::Column, offset: 0 });
}

#[test]
fn test_render_empty_and_center() {
    let (a, _) = players();
    let mut board = Board::default();
    assert_eq!(board.render(), vec!["1 2 3", "4 5 6", "7 8 9"]);
    assert!(board.make_move(5, &a));
    assert_eq!(board.render(), vec!["1 2 3", "4 X 6", "7 8 9"]);
    assert_eq!(board.to_string(), "1 2 3\n4 X 6\n7 8 9");
}

#[test]
fn test_outcome_progression() {
    let (a, b) = players();
    let mut board = Board::new(2).unwrap();
    assert_eq!(board.outcome(), None);
    board.make_move(1, &a);
    board.make_move(2, &b);
    assert_eq!(board.outcome(), None);
    board.make_move(4, &a);
    assert_eq!(board.outcome(), Some(Outcome::Winner(a.clone())));
    assert_eq!(board.outcome().unwrap().to_string(), "Alice wins");
}

#[test]
fn test_full_board_without_line_is_draw() {
    let (a, b) = players();
    let mut board = Board::default();
    // A B A / A B B / B A A
    for (position, player) in [
        (1, &a),
        (2, &b),
        (3, &a),
        (5, &b),
        (4, &a),
        (6, &b),
        (8, &a),
        (7, &b),
        (9, &a),
    ] {
        assert!(board.make_move(position, player));
    }
    assert!(board.is_full());
    assert_eq!(board.winner(), None);
    assert!(board.outcome().unwrap().is_draw());
}
