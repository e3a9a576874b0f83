//! Board model integration tests.

use ttt_solver::core::{Action, Board, Cell, Error, Mark};
use ttt_solver::rules::{
    apply, find_winner, initial_state, is_terminal, legal_actions, outcome, reachable_boards,
    turn_of, utility, Outcome,
};

const X: Cell = Cell::Taken(Mark::A);
const O: Cell = Cell::Taken(Mark::B);
const E: Cell = Cell::Empty;

fn board(s: &str) -> Board {
    s.parse().unwrap()
}

// =============================================================================
// Turn Order
// =============================================================================

#[test]
fn test_turn_alternates_from_initial_state() {
    let mut b = initial_state();
    let mut expected = Mark::A;

    for index in [4, 0, 2, 6, 3, 5, 1, 7, 8] {
        assert_eq!(turn_of(&b), expected);
        b = apply(&b, Action::from_index(index).unwrap()).unwrap();
        expected = expected.opponent();
    }
}

#[test]
fn test_turn_of_empty_board_is_a() {
    assert_eq!(turn_of(&initial_state()), Mark::A);
}

// =============================================================================
// Legal Actions
// =============================================================================

#[test]
fn test_initial_state_has_nine_actions() {
    let actions = legal_actions(&initial_state()).unwrap();
    assert_eq!(actions.len(), 9);
    for (i, action) in actions.iter().enumerate() {
        assert_eq!(action.index(), i);
    }
}

#[test]
fn test_legal_actions_only_empty_cells() {
    let b = Board::from_rows(&[[X, O, E], [E, X, E], [O, E, E]]).unwrap();
    for action in legal_actions(&b).unwrap() {
        assert_eq!(b.at(action), Cell::Empty);
    }
    assert_eq!(legal_actions(&b).unwrap().len(), b.empty_count());
}

#[test]
fn test_legal_actions_none_after_win_with_empty_cells() {
    let b = board("XXX/OO./...");
    assert!(b.empty_count() > 0);
    assert!(legal_actions(&b).is_none());
}

// =============================================================================
// Apply
// =============================================================================

#[test]
fn test_apply_does_not_alias() {
    let b0 = initial_state();
    let b1 = apply(&b0, Action::new(0, 0)).unwrap();
    let b1_snapshot = b1;
    let b2 = apply(&b1, Action::new(1, 1)).unwrap();

    assert_eq!(b1, b1_snapshot);
    assert_eq!(b1.get(1, 1), Cell::Empty);
    assert_eq!(b2.get(1, 1), O);
    assert_eq!(b0, initial_state());
}

#[test]
fn test_apply_occupied_cell_is_invalid_action() {
    let b = board("X../.O./...");
    let before = b;

    let result = apply(&b, Action::new(1, 1));

    assert_eq!(result, Err(Error::InvalidAction { row: 1, col: 1 }));
    assert_eq!(b, before);
}

#[test]
fn test_from_rows_wrong_shape_is_invalid_board() {
    let rows = vec![vec![E, E, E, E], vec![E, E, E, E], vec![E, E, E, E]];
    assert!(matches!(Board::from_rows(&rows), Err(Error::InvalidBoard(_))));
}

// =============================================================================
// Terminal Detection
// =============================================================================

#[test]
fn test_nearly_full_board_is_not_terminal() {
    // X O X / X O O / O X .
    let b = Board::from_rows(&[[X, O, X], [X, O, O], [O, X, E]]).unwrap();

    assert!(!is_terminal(&b));
    assert_eq!(find_winner(&b), None);
    assert_eq!(utility(&b), 0);
    assert_eq!(outcome(&b), None);

    let actions = legal_actions(&b).unwrap();
    assert_eq!(actions.as_slice(), &[Action::new(2, 2)]);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let b = apply(&board("XOX/XOO/OX."), Action::new(2, 2)).unwrap();

    assert!(b.is_full());
    assert!(is_terminal(&b));
    assert_eq!(find_winner(&b), None);
    assert_eq!(utility(&b), 0);
    assert_eq!(outcome(&b), Some(Outcome::Draw));
}

#[test]
fn test_winner_on_last_move_of_full_board() {
    // X fills the final cell and completes the main diagonal.
    let b = apply(&board("XOO/OXX/XO."), Action::new(2, 2)).unwrap();
    assert!(b.is_full());
    assert_eq!(find_winner(&b), Some(Mark::A));
    assert_eq!(utility(&b), 1);
}

#[test]
fn test_terminal_iff_line_or_full() {
    for b in reachable_boards() {
        let expected = find_winner(&b).is_some() || b.is_full();
        assert_eq!(is_terminal(&b), expected, "\n{b}");
    }
}

#[test]
fn test_utility_matches_winner() {
    for b in reachable_boards() {
        let expected = match find_winner(&b) {
            Some(Mark::A) => 1,
            Some(Mark::B) => -1,
            None => 0,
        };
        assert_eq!(utility(&b), expected, "\n{b}");
        if let Some(result) = outcome(&b) {
            assert_eq!(result.utility(), expected);
        }
    }
}

#[test]
fn test_reachable_boards_have_at_most_one_winner() {
    for b in reachable_boards() {
        if let Some(mark) = find_winner(&b) {
            // The winner is the side that just moved.
            assert_eq!(turn_of(&b), mark.opponent(), "\n{b}");
        }
    }
}
