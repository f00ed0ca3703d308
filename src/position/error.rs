use std::error;
use std::fmt;

/// A capstone was constructed or set as a flat stone.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct IllegalStone;

impl fmt::Display for IllegalStone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A capstone cannot be flat")
    }
}

impl error::Error for IllegalStone {}

/// A syntactically valid move that breaks a rule of the game.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IllegalMove {
    OutOfBounds,
    Occupied,
    NoStonesLeft,
    NoCapstonesLeft,
    CarryLimit(u8),
    DropsMismatch,
    EmptyStack,
    NotEnoughStones,
    CaptureCapstone,
    ToppleStanding,
    NotOwner,
    NoLegalMoves,
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMove::OutOfBounds => write!(f, "Out of bounds"),
            IllegalMove::Occupied => write!(f, "Cannot place new stone onto occupied cell"),
            IllegalMove::NoStonesLeft => write!(f, "No more regular stones"),
            IllegalMove::NoCapstonesLeft => write!(f, "No more capstones"),
            IllegalMove::CarryLimit(n) => write!(f, "Invalid carry amount {}", n),
            IllegalMove::DropsMismatch => write!(f, "Carry amount does not match drops"),
            IllegalMove::EmptyStack => write!(f, "Can't move empty stack"),
            IllegalMove::NotEnoughStones => write!(f, "Not enough stones"),
            IllegalMove::CaptureCapstone => write!(f, "Can't capture capstone"),
            IllegalMove::ToppleStanding => write!(f, "Can't topple standing stone"),
            IllegalMove::NotOwner => write!(f, "You can't move the stack here"),
            IllegalMove::NoLegalMoves => write!(f, "No legal moves"),
        }
    }
}

impl error::Error for IllegalMove {}

/// The two ways a turn can be rejected. Neither leaves any trace on the game state.
#[derive(Debug)]
pub enum TakError {
    InvalidCommand(pgn_traits::Error),
    IllegalMove(IllegalMove),
}

impl TakError {
    pub fn is_invalid_command(&self) -> bool {
        matches!(self, TakError::InvalidCommand(_))
    }

    pub fn is_illegal_move(&self) -> bool {
        matches!(self, TakError::IllegalMove(_))
    }
}

impl fmt::Display for TakError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TakError::InvalidCommand(err) => write!(f, "Invalid command: {}", err),
            TakError::IllegalMove(err) => write!(f, "Illegal move: {}", err),
        }
    }
}

impl error::Error for TakError {}

impl From<IllegalMove> for TakError {
    fn from(err: IllegalMove) -> Self {
        TakError::IllegalMove(err)
    }
}

impl From<pgn_traits::Error> for TakError {
    fn from(err: pgn_traits::Error) -> Self {
        TakError::InvalidCommand(err)
    }
}
