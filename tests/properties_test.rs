//! Property tests for collision classification and piece transitions.
//!
//! Invariants covered:
//! - On an empty board the classification depends only on the squares'
//!   positions, with the floor taking precedence over the walls.
//! - Four rotations bring a piece back to where it started.
//! - A rejected transition never changes the piece.
//! - During play the active piece never overlaps anything, and every lock
//!   adds exactly four squares.

use proptest::prelude::*;
use tui_tetromino::core::{classify, get_frame, Board, Collision, Game, Piece};
use tui_tetromino::types::{Cell, ColorId, Command, Rotation, TetrominoKind};

fn kind() -> impl Strategy<Value = TetrominoKind> {
    prop::sample::select(TetrominoKind::ALL.to_vec())
}

fn rotation() -> impl Strategy<Value = Rotation> {
    (0usize..4).prop_map(Rotation::from_index)
}

fn command() -> impl Strategy<Value = Command> {
    prop::sample::select(vec![
        Command::MoveLeft,
        Command::MoveRight,
        Command::MoveDown,
        Command::Rotate,
        Command::Tick,
    ])
}

proptest! {
    #[test]
    fn empty_board_classification_follows_square_positions(
        kind in kind(),
        rotation in rotation(),
        x in -4i8..12,
        y in -6i8..22,
    ) {
        let frame = get_frame(kind, rotation);
        let squares: Vec<(i8, i8)> = frame.minos().into_iter().map(|(dx, dy)| (x + dx, y + dy)).collect();

        let below = squares.iter().any(|&(_, sy)| sy >= 20);
        let outside = squares.iter().any(|&(sx, _)| !(0..10).contains(&sx));
        let expected = if below {
            Collision::LowerBoundary
        } else if outside {
            Collision::SideBoundary
        } else {
            Collision::None
        };
        prop_assert_eq!(classify(frame, x, y, &Board::new()), expected);
    }

    #[test]
    fn full_board_overlaps_every_in_bounds_placement(
        kind in kind(),
        rotation in rotation(),
        x in 0i8..7,
        y in 0i8..17,
    ) {
        let mut board = Board::new();
        for by in 0..20 {
            for bx in 0..10 {
                board.set(bx, by, Cell::Occupied(ColorId::Red));
            }
        }
        let frame = get_frame(kind, rotation);
        // Placements fully on the board are only ever stack collisions.
        let on_board = frame
            .minos()
            .into_iter()
            .all(|(dx, dy)| (0..10).contains(&(x + dx)) && (0..20).contains(&(y + dy)));
        if on_board {
            prop_assert_eq!(classify(frame, x, y, &board), Collision::StackOverlap);
        }
    }

    #[test]
    fn four_rotations_are_identity(kind in kind(), x in 0i8..6, y in -2i8..15) {
        let board = Board::new();
        let mut piece = Piece::at(kind, x, y);
        let start = piece;
        for _ in 0..4 {
            prop_assert_eq!(piece.rotate(&board), Collision::None);
        }
        prop_assert_eq!(piece, start);
    }

    #[test]
    fn rejected_transitions_leave_piece_unchanged(
        kind in kind(),
        rotation in rotation(),
        x in -1i8..9,
        y in -2i8..19,
        command in command(),
    ) {
        let board = Board::new();
        let mut piece = Piece { rotation, ..Piece::at(kind, x, y) };
        prop_assume!(piece.collision(&board).is_none());

        let before = piece;
        let collision = match command {
            Command::MoveLeft => piece.move_left(&board),
            Command::MoveRight => piece.move_right(&board),
            Command::Rotate => piece.rotate(&board),
            _ => piece.move_down(&board),
        };
        if collision.is_none() {
            prop_assert_ne!(piece, before);
        } else {
            prop_assert_eq!(piece, before);
        }
    }

    #[test]
    fn random_play_keeps_board_consistent(
        seed in 1u32..u32::MAX,
        commands in prop::collection::vec(command(), 1..400),
    ) {
        let mut game = Game::seeded(seed);
        for command in commands {
            game.apply(command);
            if game.is_game_over() {
                break;
            }
            prop_assert!(game.active().collision(game.board()).is_none());
            prop_assert_eq!(game.board().occupied_count(), 4 * game.pieces_locked() as usize);
        }
    }
}
