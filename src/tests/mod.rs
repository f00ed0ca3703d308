#[cfg(test)]
mod board_tests;

#[cfg(test)]
use std::str::FromStr;

#[cfg(test)]
use board_game_traits::GameResult;

#[cfg(test)]
use crate::game::GameState;
#[cfg(test)]
use crate::position::{squares_iterator, Move};
#[cfg(test)]
use crate::search;

/// Play every move in `move_strings`, checking that each one is generated by the move generator.
/// Returns the result after the last move.
#[cfg(test)]
fn do_moves_and_check_validity(state: &mut GameState, move_strings: &[&str]) -> Option<GameResult> {
    let mut result = None;
    for move_string in move_strings.iter() {
        assert!(
            result.is_none(),
            "Game ended with {:?} before {}",
            result,
            move_string
        );
        let mv = Move::from_str(move_string).unwrap();
        let moves = search::legal_moves(state);
        assert!(
            moves.contains(&mv),
            "Move {} was not among legal moves: {:?}\n{:?}",
            mv,
            moves,
            state
        );
        result = state.play_move(&mv).unwrap();
    }
    result
}

/// Move strings that fill the board in a checkerboard pattern, white on the even squares.
/// Nothing is ever adjacent to a stone of its own color, so no road is possible.
#[cfg(test)]
fn checkerboard_moves() -> Vec<String> {
    let (white, black): (Vec<_>, Vec<_>) =
        squares_iterator().partition(|square| (square.row + square.col) % 2 == 0);
    let mut moves = vec![];
    for i in 0..white.len() {
        moves.push(format!("F({},{})", white[i].row, white[i].col));
        if let Some(square) = black.get(i) {
            moves.push(format!("F({},{})", square.row, square.col));
        }
    }
    moves
}
