use lazy_static::lazy_static;

use crate::game::GameState;
use crate::position::{squares_iterator, Direction, Drops, Move, Role};
use crate::position::{BOARD_SIZE, CARRY_LIMIT};

/// A stack can never travel further than to the opposite edge.
pub const MAX_DROP_STOPS: usize = BOARD_SIZE - 1;

/// Every ordered way to split `count` stones into at most `max_parts` positive drops.
pub fn drop_patterns(count: u8, max_parts: usize) -> Vec<Drops> {
    if count == 0 {
        return vec![Drops::new()];
    }
    if max_parts == 0 {
        return vec![];
    }
    let mut patterns = vec![];
    for first in 1..=count {
        for rest in drop_patterns(count - first, max_parts - 1) {
            let mut pattern = Drops::new();
            pattern.push(first);
            pattern.extend(rest);
            patterns.push(pattern);
        }
    }
    patterns
}

lazy_static! {
    /// Drop patterns for every carry count from 0 to `CARRY_LIMIT`, indexed by count.
    static ref DROP_PATTERNS: Vec<Vec<Drops>> = (0..=CARRY_LIMIT as u8)
        .map(|count| drop_patterns(count, MAX_DROP_STOPS))
        .collect();
}

/// All placements and stack moves worth trying for the side to move.
/// Stack moves are only checked against the drop pattern table, not against the board,
/// so many of them are illegal.
pub fn candidate_moves(state: &GameState, moves: &mut Vec<Move>) {
    let board = state.board();
    let player = state.next_player();

    for square in board.empty_cells() {
        if player.stones_left() > 0 {
            moves.push(Move::Place(Role::Flat, square));
            moves.push(Move::Place(Role::Standing, square));
        }
        if player.capstones_left() > 0 {
            moves.push(Move::Place(Role::Cap, square));
        }
    }

    for square in squares_iterator().filter(|&square| board.owns_stack(player.color(), square)) {
        let height = board.stack(square).map(|stack| stack.len()).unwrap_or_default();
        for direction in Direction::all() {
            for count in 1..=height.min(CARRY_LIMIT) {
                for drops in DROP_PATTERNS[count].iter() {
                    moves.push(Move::Move(square, direction, drops.clone()));
                }
            }
        }
    }
}

/// Every legal move for the side to move, paired with the game state it leads to.
/// Candidate moves that turn out to be illegal are skipped.
pub fn legal_children(state: &GameState) -> Vec<(Move, GameState)> {
    let mut moves = vec![];
    candidate_moves(state, &mut moves);
    moves
        .into_iter()
        .filter_map(|mv| {
            let mut child = state.clone();
            child.play_move(&mv).ok()?;
            Some((mv, child))
        })
        .collect()
}

pub fn legal_moves(state: &GameState) -> Vec<Move> {
    legal_children(state).into_iter().map(|(mv, _)| mv).collect()
}
