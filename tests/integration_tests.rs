//! Integration tests for the session controller and frame loop.

use anyhow::Result;

use tui_blocks::core::{
    create_piece, DropOutcome, GameConfig, GameSnapshot, GameState, KickSearch, SequenceSource,
};
use tui_blocks::engine::{ManualClock, Runner};
use tui_blocks::term::{GameView, Viewport};
use tui_blocks::types::{GameAction, PieceKind, RotateDir, BOARD_WIDTH};

fn only(kind: PieceKind) -> GameState<SequenceSource<1>> {
    GameState::with_source(GameConfig::default(), SequenceSource::new([kind]))
}

#[test]
fn test_o_spawns_centered() {
    let state = only(PieceKind::O);
    assert_eq!(state.active().x, 5);
    assert_eq!(state.active().y, 0);
    assert!(!state.board().collides(state.active()));
}

#[test]
fn test_seeded_sessions_are_reproducible() {
    let mut a = GameState::new(777);
    let mut b = GameState::new(777);
    for _ in 0..200 {
        assert_eq!(a.active().kind(), b.active().kind());
        assert_eq!(a.drop_piece(), b.drop_piece());
    }
    assert_eq!(a.board(), b.board());
}

#[test]
fn test_gravity_needs_more_than_the_interval() {
    let mut state = only(PieceKind::O);
    assert_eq!(state.tick(1000), None);
    assert_eq!(state.active().y, 0);
    assert_eq!(state.tick(1), Some(DropOutcome::Fell));
    assert_eq!(state.active().y, 1);
    assert_eq!(state.drop_counter_ms(), 0);
}

#[test]
fn test_kick_near_right_wall_takes_second_offset() {
    let mut state = only(PieceKind::I);
    assert_eq!(state.active().x, 4);
    for _ in 0..5 {
        assert!(state.move_piece(1));
    }
    // The vertical bar now sits in column 10.
    let origin = state.active().x;
    assert_eq!(origin, 9);

    // Lying flat it spans four columns: +1 still hangs off the wall, -1 fits.
    let tried: Vec<i16> = KickSearch::new(4).map(|dx| origin + dx).collect();
    assert_eq!(tried, vec![10, 8, 11]);

    assert!(state.rotate(RotateDir::Clockwise));
    assert_eq!(state.active().x, 8);
    let cells: Vec<_> = state.active().cells().map(|(x, y, _)| (x, y)).collect();
    assert_eq!(cells, vec![(8, 1), (9, 1), (10, 1), (11, 1)]);
    assert!(!state.board().collides(state.active()));
}

/// A fresh T at x = 5 with locked cells at `blocked` in row 0.
///
/// Turned clockwise in place the T reaches into row 0 at column `x + 1`, so
/// each blocked cell rules out the kick candidates that would cover it.
fn t_under(blocked: &[i16]) -> GameState<SequenceSource<1>> {
    let mut state = only(PieceKind::T);
    assert_eq!((state.active().x, state.active().y), (5, 0));
    for &x in blocked {
        state.board_mut().set(x, 0, 1);
    }
    assert!(!state.board().collides(state.active()));
    state
}

#[test]
fn test_kick_takes_first_candidate_right() {
    let mut state = t_under(&[6]);
    assert!(state.rotate(RotateDir::Clockwise));
    assert_eq!(state.active().x, 6);
}

#[test]
fn test_kick_takes_second_candidate_left() {
    // +1 is blocked by column 7, so the search steps back to -1.
    let mut state = t_under(&[6, 7]);
    assert!(state.rotate(RotateDir::Clockwise));
    assert_eq!(state.active().x, 4);
}

#[test]
fn test_kick_takes_third_candidate_two_right() {
    // +1 and -1 are both blocked; only +2 clears.
    let mut state = t_under(&[5, 6, 7]);
    assert!(state.rotate(RotateDir::Clockwise));
    assert_eq!(state.active().x, 7);
    let cells: Vec<_> = state.active().cells().map(|(x, y, _)| (x, y)).collect();
    assert_eq!(cells, vec![(8, 0), (7, 1), (8, 1), (8, 2)]);
}

#[test]
fn test_kick_gives_up_after_third_candidate() {
    // Width 3 never tries -2, so blocking +2 exhausts the search.
    let mut state = t_under(&[5, 6, 7, 8]);
    let before = *state.active();
    assert!(!state.rotate(RotateDir::Clockwise));
    assert_eq!(*state.active(), before);
}

#[test]
fn test_kick_against_right_wall_fails_and_restores() {
    let mut state = only(PieceKind::I);
    while state.move_piece(1) {}
    assert_eq!(state.active().x, 10);
    let before = *state.active();

    // Every tested column (11, 9, 12) still overlaps the wall.
    assert!(!state.rotate(RotateDir::Clockwise));
    assert_eq!(*state.active(), before);
    assert_eq!(state.active().shape, create_piece(PieceKind::I));
}

#[test]
fn test_kick_off_left_wall() {
    let mut state = only(PieceKind::I);
    while state.move_piece(-1) {}
    assert_eq!(state.active().x, -1);

    assert!(state.rotate(RotateDir::CounterClockwise));
    assert_eq!(state.active().x, 0);
}

#[test]
fn test_blocked_rotation_by_locked_cells() {
    let mut state = only(PieceKind::I);
    // Wall off row 1 on both sides of the bar so no flat position fits.
    for x in 0..BOARD_WIDTH as i16 {
        if x != 5 {
            state.board_mut().set(x, 1, 1);
        }
    }
    let before = *state.active();
    assert!(!state.rotate(RotateDir::Clockwise));
    assert_eq!(*state.active(), before);
}

#[test]
fn test_lock_clears_rows_and_scores() {
    let mut state = only(PieceKind::O);
    // Bottom two rows complete except the O's landing columns.
    for y in [18, 19] {
        for x in 0..BOARD_WIDTH as i16 {
            if x != 5 && x != 6 {
                state.board_mut().set(x, y, 3);
            }
        }
    }

    let outcome = loop {
        match state.drop_piece() {
            DropOutcome::Fell => continue,
            other => break other,
        }
    };
    assert_eq!(outcome, DropOutcome::Locked { lines: 2, points: 30 });
    assert_eq!(state.score(), 30);
    assert!(state.board().is_empty());
    assert_eq!(state.active().y, 0);
}

#[test]
fn test_score_accumulates_across_locks() {
    let mut state = only(PieceKind::O);
    for round in 1..=2u32 {
        for x in 0..BOARD_WIDTH as i16 {
            if x != 5 && x != 6 {
                state.board_mut().set(x, 19, 3);
                state.board_mut().set(x, 18, 3);
            }
        }
        while state.drop_piece() == DropOutcome::Fell {}
        assert_eq!(state.score(), 30 * round);
    }
}

#[test]
fn test_spawn_collision_resets_session() {
    let mut state = only(PieceKind::O);
    // A ledge under the spawn point locks the O immediately, so the next O
    // spawns on top of it.
    state.board_mut().set(5, 2, 1);
    state.board_mut().set(0, 19, 1);

    let outcome = state.drop_piece();
    assert_eq!(outcome, DropOutcome::Reset { lines: 0, points: 0 });
    assert!(state.board().is_empty());
    assert_eq!(state.score(), 0);
    assert_eq!(state.episode(), 1);
    assert!(!state.board().collides(state.active()));
}

#[test]
fn test_game_over_discards_score() {
    let mut state = only(PieceKind::O);
    for x in 0..BOARD_WIDTH as i16 {
        if x != 5 && x != 6 {
            state.board_mut().set(x, 19, 3);
            state.board_mut().set(x, 18, 3);
        }
    }
    while state.drop_piece() == DropOutcome::Fell {}
    assert_eq!(state.score(), 30);

    state.board_mut().set(6, 1, 2);
    assert!(state.spawn());
    assert_eq!(state.score(), 0);
    assert_eq!(state.episode(), 1);
}

#[test]
fn test_soft_drop_action_matches_gravity() {
    let mut by_action = only(PieceKind::T);
    let mut by_gravity = only(PieceKind::T);
    for _ in 0..30 {
        by_action.apply_action(GameAction::SoftDrop);
        by_gravity.tick(1001);
        assert_eq!(by_action.snapshot(), by_gravity.snapshot());
    }
}

#[test]
fn test_runner_redraws_after_frames_and_input() {
    let state = only(PieceKind::O);
    let mut runner = Runner::new(state, ManualClock::new(0));
    let view = GameView::new();
    let mut last = GameSnapshot::default();
    let mut draws = 0;
    let mut presenter = |snap: &GameSnapshot| -> Result<()> {
        let fb = view.render(snap, Viewport::new(60, 30));
        assert!((0..fb.height()).any(|y| fb.row_text(y).contains("Score: 0")));
        last = *snap;
        draws += 1;
        Ok(())
    };

    runner.time_mut().set(16);
    assert_eq!(runner.frame(&mut presenter).unwrap(), None);
    assert!(runner.dispatch(GameAction::MoveLeft, &mut presenter).unwrap());
    runner.time_mut().set(1100);
    assert_eq!(
        runner.frame(&mut presenter).unwrap(),
        Some(DropOutcome::Fell)
    );

    assert_eq!(draws, 3);
    let active = last.active.unwrap();
    assert_eq!((active.x, active.y), (4, 1));
}
