//! Tests for the game engine's placement rules and state machine.

use tictactoe_engine::{Board, GameEngine, GameStatus, Mark, PlacementError, Position, Square};

fn play(engine: &mut GameEngine, moves: &[(i32, i32)]) {
    for &(row, col) in moves {
        engine.place(row, col).expect("Valid move");
    }
}

#[test]
fn test_new_engine_is_empty_and_in_progress() {
    let engine = GameEngine::new();
    assert_eq!(engine.board(), &Board::new());
    assert_eq!(engine.turn(), 0);
    assert_eq!(engine.to_move(), Mark::X);
    assert_eq!(engine.status(), GameStatus::InProgress);
    assert_eq!(engine.check_winner(), None);
    assert!(!engine.is_draw());
}

#[test]
fn test_place_sets_square_and_advances_turn() {
    let mut engine = GameEngine::new();
    let placement = engine.place(1, 2).unwrap();

    assert_eq!(placement.action.mark, Mark::X);
    assert_eq!(placement.action.position, Position::MiddleRight);
    assert_eq!(placement.status, GameStatus::InProgress);
    assert_eq!(engine.board().get(Position::MiddleRight), Square::Occupied(Mark::X));
    assert_eq!(engine.turn(), 1);
    assert_eq!(engine.to_move(), Mark::O);
}

#[test]
fn test_occupied_square_rejected_without_change() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[(0, 0)]);
    let before = engine.clone();

    let result = engine.place(0, 0);
    assert_eq!(result, Err(PlacementError::CellOccupied(Position::TopLeft)));
    assert_eq!(engine, before);
}

#[test]
fn test_out_of_bounds_rejected_without_change() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[(2, 2)]);
    let before = engine.clone();

    assert_eq!(
        engine.place(3, 0),
        Err(PlacementError::OutOfBounds { row: 3, col: 0 })
    );
    assert_eq!(
        engine.place(1, -1),
        Err(PlacementError::OutOfBounds { row: 1, col: -1 })
    );
    assert_eq!(engine, before);
}

#[test]
fn test_wrong_mark_rejected() {
    let mut engine = GameEngine::new();
    let result = engine.validate_and_place(0, 0, Mark::O);
    assert_eq!(result, Err(PlacementError::WrongTurn(Mark::O)));
    assert_eq!(engine.turn(), 0);
}

#[test]
fn test_top_row_win_for_x() {
    let mut engine = GameEngine::new();
    // X: (0,0) (0,1) (0,2); O: (1,0) (2,2)
    play(&mut engine, &[(0, 0), (1, 0), (0, 1), (2, 2)]);
    assert_eq!(engine.check_winner(), None);

    let placement = engine.place(0, 2).unwrap();
    assert_eq!(placement.status, GameStatus::Won(Mark::X));
    assert_eq!(engine.check_winner(), Some(Mark::X));
    assert!(!engine.is_draw());
}

#[test]
fn test_diagonal_win_for_o() {
    let mut engine = GameEngine::new();
    // O: (0,0) (1,1) (2,2)
    play(&mut engine, &[(0, 1), (0, 0), (0, 2), (1, 1), (1, 0), (2, 2)]);
    assert_eq!(engine.check_winner(), Some(Mark::O));
    assert_eq!(engine.status(), GameStatus::Won(Mark::O));
    assert_eq!(engine.to_move(), Mark::O);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut engine = GameEngine::new();
    // X O X / X O O / O X X
    play(
        &mut engine,
        &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
    );
    assert_eq!(engine.turn(), 9);
    assert!(engine.is_draw());
    assert_eq!(engine.check_winner(), None);
    assert_eq!(engine.status(), GameStatus::Draw);
}

#[test]
fn test_win_on_last_move_is_not_draw() {
    let mut engine = GameEngine::new();
    // X O X / O X O / O X X  -> X completes the diagonal on move 9
    play(
        &mut engine,
        &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 1), (2, 0)],
    );
    assert_eq!(engine.status(), GameStatus::InProgress);

    let placement = engine.place(2, 2).unwrap();
    assert_eq!(placement.status, GameStatus::Won(Mark::X));
    assert_eq!(engine.turn(), 9);
    assert!(!engine.is_draw());
}

#[test]
fn test_finished_game_rejects_moves() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    let before = engine.clone();

    assert_eq!(engine.place(2, 2), Err(PlacementError::GameOver));
    assert!(engine.valid_moves().is_empty());
    assert_eq!(engine, before);
}

#[test]
fn test_reset_restores_fresh_game() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert!(engine.is_over());

    engine.reset();
    assert_eq!(engine, GameEngine::new());
    assert_eq!(engine.check_winner(), None);
    assert!(engine.history().is_empty());
    assert_eq!(engine.valid_moves().len(), 9);
}

#[test]
fn test_history_records_moves_in_order() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[(1, 1), (0, 0)]);

    let marks: Vec<_> = engine.history().iter().map(|m| (m.mark, m.position)).collect();
    assert_eq!(
        marks,
        vec![(Mark::X, Position::Center), (Mark::O, Position::TopLeft)]
    );
}

#[test]
fn test_placement_error_messages() {
    assert_eq!(
        PlacementError::OutOfBounds { row: 3, col: 0 }.to_string(),
        "Position (3, 0) is off the board"
    );
    assert!(
        PlacementError::CellOccupied(Position::Center)
            .to_string()
            .contains("occupied")
    );
}
