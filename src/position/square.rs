use std::fmt;
use std::ops::{Index, IndexMut};

use super::BOARD_SIZE;
use self::Direction::*;

/// A location on the board, as `(row, col)`. `(0, 0)` is the bottom left corner.
///
/// Squares are not required to be on the board: move commands may name any single digit
/// coordinate, and the board rejects those that fall outside it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Self {
        Square { row, col }
    }

    pub const fn is_on_board(self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    pub fn go_direction(self, direction: Direction) -> Option<Self> {
        self.jump_direction(direction, 1)
    }

    /// The square `len` steps away in `direction`, if it is on the board.
    pub fn jump_direction(self, direction: Direction, len: u8) -> Option<Self> {
        let (row, col) = (self.row as usize, self.col as usize);
        let len = len as usize;
        let (row, col) = match direction {
            North => (row + len, col),
            South => (row.checked_sub(len)?, col),
            East => (row, col + len),
            West => (row, col.checked_sub(len)?),
        };
        let square = Square::new(row as u8, col as u8);
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(square)
        } else {
            None
        }
    }

    pub fn neighbours(self) -> impl Iterator<Item = Square> {
        Direction::all().filter_map(move |direction| self.go_direction(direction))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Iterates over every square on the board, row by row from the bottom.
pub fn squares_iterator() -> impl Iterator<Item = Square> {
    (0..BOARD_SIZE).flat_map(|row| {
        (0..BOARD_SIZE).map(move |col| Square::new(row as u8, col as u8))
    })
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Direction {
    North,
    West,
    East,
    South,
}

impl Direction {
    pub fn all() -> impl Iterator<Item = Direction> {
        [North, West, South, East].into_iter()
    }

    pub fn parse(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(North),
            '<' => Some(West),
            '>' => Some(East),
            '-' => Some(South),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            North => '+',
            West => '<',
            East => '>',
            South => '-',
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            North => South,
            West => East,
            East => West,
            South => North,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            North => "NORTH",
            West => "WEST",
            East => "EAST",
            South => "SOUTH",
        };
        write!(f, "{}", name)
    }
}

/// A full board of `T`s, one for each square.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AbstractBoard<T> {
    raw: [[T; BOARD_SIZE]; BOARD_SIZE],
}

impl<T> AbstractBoard<T> {
    pub fn new_from_fn<F: FnMut(Square) -> T>(mut f: F) -> Self {
        AbstractBoard {
            raw: std::array::from_fn(|row| {
                std::array::from_fn(|col| f(Square::new(row as u8, col as u8)))
            }),
        }
    }

    pub fn get(&self, square: Square) -> Option<&T> {
        self.raw
            .get(square.row as usize)
            .and_then(|row| row.get(square.col as usize))
    }

    pub fn get_mut(&mut self, square: Square) -> Option<&mut T> {
        self.raw
            .get_mut(square.row as usize)
            .and_then(|row| row.get_mut(square.col as usize))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.raw.iter().flatten()
    }
}

/// Panics if the square is off the board. Use `get` for untrusted coordinates.
impl<T> Index<Square> for AbstractBoard<T> {
    type Output = T;

    fn index(&self, square: Square) -> &Self::Output {
        &self.raw[square.row as usize][square.col as usize]
    }
}

impl<T> IndexMut<Square> for AbstractBoard<T> {
    fn index_mut(&mut self, square: Square) -> &mut Self::Output {
        &mut self.raw[square.row as usize][square.col as usize]
    }
}
