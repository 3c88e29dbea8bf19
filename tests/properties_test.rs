//! Property tests for collision, merge, rotation, sweep and the controller.
//!
//! Invariants covered:
//! - An in-bounds, non-overlapping piece does not collide; pushing it one
//!   cell past the left wall, right wall or floor does.
//! - A merged footprint always collides afterwards.
//! - Four quarter turns are the identity.
//! - A sweep keeps the incomplete rows in order and scores `10 * (2^k - 1)`.
//! - Random play never commits a colliding piece.

use proptest::prelude::*;
use tui_blocks::core::{
    create_piece, line_clear_score, rotate_square, Board, GameState, Piece,
};
use tui_blocks::types::{
    GameAction, PieceKind, RotateDir, BOARD_HEIGHT, BOARD_WIDTH, EMPTY,
};

const W: i16 = BOARD_WIDTH as i16;
const H: i16 = BOARD_HEIGHT as i16;

fn rotated_piece(kind: usize, turns: usize, x: i16, y: i16) -> Piece {
    let mut shape = create_piece(PieceKind::ALL[kind]);
    for _ in 0..turns {
        shape.rotate(RotateDir::Clockwise);
    }
    Piece::new(shape, x, y)
}

fn in_bounds(piece: &Piece) -> bool {
    piece
        .cells()
        .all(|(x, y, _)| (0..W).contains(&x) && (0..H).contains(&y))
}

fn extent(piece: &Piece) -> (i16, i16, i16) {
    let min_x = piece.cells().map(|c| c.0).min().unwrap_or(0);
    let max_x = piece.cells().map(|c| c.0).max().unwrap_or(0);
    let max_y = piece.cells().map(|c| c.1).max().unwrap_or(0);
    (min_x, max_x, max_y)
}

fn board_from(filled: &[(i16, i16, u8)]) -> Board {
    let mut board = Board::new();
    for &(x, y, c) in filled {
        board.set(x, y, c);
    }
    board
}

fn filled_cells() -> impl Strategy<Value = Vec<(i16, i16, u8)>> {
    prop::collection::vec((0..W, 0..H, 1u8..=7), 0..60)
}

proptest! {
    #[test]
    fn test_in_bounds_piece_collides_only_past_a_bound(
        kind in 0usize..7,
        turns in 0usize..4,
        x in -3i16..12,
        y in -3i16..20,
    ) {
        let piece = rotated_piece(kind, turns, x, y);
        prop_assume!(in_bounds(&piece));

        let board = Board::new();
        prop_assert!(!board.collides(&piece));

        let (min_x, max_x, max_y) = extent(&piece);
        let mut left = piece;
        left.x -= min_x + 1;
        prop_assert!(board.collides(&left));

        let mut right = piece;
        right.x += W - max_x;
        prop_assert!(board.collides(&right));

        let mut below = piece;
        below.y += H - max_y;
        prop_assert!(board.collides(&below));
    }

    #[test]
    fn test_merge_then_collide(
        kind in 0usize..7,
        turns in 0usize..4,
        x in -3i16..12,
        y in -3i16..20,
        filled in filled_cells(),
    ) {
        let piece = rotated_piece(kind, turns, x, y);
        prop_assume!(in_bounds(&piece));
        // Keep the random blocks off the piece's footprint.
        let free: Vec<_> = filled
            .into_iter()
            .filter(|&(fx, fy, _)| !piece.cells().any(|(px, py, _)| px == fx && py == fy))
            .collect();
        let mut board = board_from(&free);
        prop_assert!(!board.collides(&piece));

        board.merge(&piece);
        prop_assert!(board.collides(&piece));
    }

    #[test]
    fn test_overlapping_a_locked_cell_collides(
        kind in 0usize..7,
        turns in 0usize..4,
        x in -3i16..12,
        y in -3i16..20,
        pick in 0usize..4,
    ) {
        let piece = rotated_piece(kind, turns, x, y);
        prop_assume!(in_bounds(&piece));
        let cells: Vec<_> = piece.cells().collect();
        let (cx, cy, _) = cells[pick % cells.len()];

        let board = board_from(&[(cx, cy, 1)]);
        prop_assert!(board.collides(&piece));
    }

    #[test]
    fn test_four_turns_are_identity(
        side in 2usize..=4,
        values in prop::collection::vec(0u8..=7, 16),
        clockwise in any::<bool>(),
    ) {
        let dir = if clockwise { RotateDir::Clockwise } else { RotateDir::CounterClockwise };
        let original: Vec<u8> = values[..side * side].to_vec();
        let mut cells = original.clone();
        for _ in 0..4 {
            rotate_square(&mut cells, side, dir);
        }
        prop_assert_eq!(&cells, &original);

        rotate_square(&mut cells, side, dir);
        rotate_square(&mut cells, side, dir.reverse());
        prop_assert_eq!(cells, original);
    }

    #[test]
    fn test_sweep_keeps_partial_rows_and_scores(
        full in prop::collection::vec(any::<bool>(), BOARD_HEIGHT as usize),
        seed_cells in prop::collection::vec(1u8..=7, BOARD_HEIGHT as usize),
    ) {
        // Each row is either complete or holds a single block in column 0.
        let rows: Vec<[u8; BOARD_WIDTH as usize]> = full
            .iter()
            .zip(&seed_cells)
            .map(|(&is_full, &c)| {
                let mut row = [EMPTY; BOARD_WIDTH as usize];
                if is_full {
                    row = [c; BOARD_WIDTH as usize];
                } else {
                    row[0] = c;
                }
                row
            })
            .collect();
        let mut board = Board::from_rows(&rows).unwrap();
        let k = full.iter().filter(|&&f| f).count();

        let sweep = board.sweep();
        prop_assert_eq!(sweep.lines() as usize, k);
        prop_assert_eq!(sweep.points, line_clear_score(k as u32));

        let kept: Vec<_> = rows
            .iter()
            .zip(&full)
            .filter(|(_, is_full)| !**is_full)
            .map(|(r, _)| *r)
            .collect();
        let after: Vec<_> = board.rows().map(|r| r.to_vec()).collect();
        let (top, bottom) = after.split_at(k);
        prop_assert!(top.iter().all(|r| r.iter().all(|&c| c == EMPTY)));
        let bottom_rows: Vec<Vec<u8>> = kept.iter().map(|r| r.to_vec()).collect();
        prop_assert_eq!(bottom, bottom_rows.as_slice());
        prop_assert!(board.rows().all(|r| r.iter().any(|&c| c == EMPTY)));
    }

    #[test]
    fn test_random_play_never_commits_a_collision(
        seed in any::<u32>(),
        moves in prop::collection::vec((0usize..5, 0u32..400), 1..300),
    ) {
        let mut state = GameState::new(seed);
        for (action, elapsed) in moves {
            state.apply_action(GameAction::ALL[action]);
            state.tick(elapsed);

            prop_assert!(!state.board().collides(state.active()));
            prop_assert_eq!(state.score() % 10, 0);
            prop_assert!(state.board().cells().iter().all(|&c| c <= 7));
            prop_assert!(state.active().cells().all(|(_, _, c)| (1..=7).contains(&c)));
        }
    }
}
