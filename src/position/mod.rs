//! The rules of 5x5 Tak: stones, stacks, the board and move notation.

pub use board::{Board, RoadGraph, Stack};
pub use error::{IllegalMove, IllegalStone, TakError};
pub use mv::{Drops, Move};
pub use square::{squares_iterator, AbstractBoard, Direction, Square};
pub use stone::{Orientation, Role, Stone, StoneKind};

mod board;
mod error;
mod mv;
mod square;
mod stone;

pub const BOARD_SIZE: usize = 5;

/// Maximum number of stones that can be lifted from a stack in one move.
pub const CARRY_LIMIT: usize = 5;

pub const STARTING_STONES: u8 = 21;

pub const STARTING_CAPSTONES: u8 = 1;
