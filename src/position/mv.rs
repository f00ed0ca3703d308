use std::fmt;
use std::str::FromStr;

use arrayvec::ArrayVec;

use crate::position::error::IllegalMove;
use crate::position::square::{Direction, Square};
use crate::position::stone::Role;

/// One drop count per square passed over. Every entry is at least 1, and the count taken
/// is a single digit, so there can never be more than 9 entries.
pub type Drops = ArrayVec<u8, 9>;

/// A parsed move command. Moves are checked for syntax only: whether they are legal
/// depends on the position they are played in.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub enum Move {
    Place(Role, Square),
    Move(Square, Direction, Drops),
}

impl Move {
    /// A stack move carrying the sum of `drops`.
    ///
    /// Every drop must be at least 1, and the total must fit in the single digit of the
    /// move notation.
    pub fn new_stack_move(
        square: Square,
        direction: Direction,
        drops: &[u8],
    ) -> Result<Self, IllegalMove> {
        if drops.is_empty() || drops.contains(&0) {
            return Err(IllegalMove::DropsMismatch);
        }
        let count: u32 = drops.iter().map(|&drop| drop as u32).sum();
        if count > 9 {
            return Err(IllegalMove::CarryLimit(count.min(u8::MAX as u32) as u8));
        }
        let mut move_drops = Drops::new();
        move_drops
            .try_extend_from_slice(drops)
            .map_err(|_| IllegalMove::CarryLimit(count as u8))?;
        Ok(Move::Move(square, direction, move_drops))
    }

    pub fn origin_square(&self) -> Square {
        match self {
            Move::Place(_, square) => *square,
            Move::Move(square, _, _) => *square,
        }
    }

    /// Number of stones lifted. Zero for placements.
    pub fn count(&self) -> u8 {
        match self {
            Move::Place(_, _) => 0,
            Move::Move(_, _, drops) => drops.iter().sum(),
        }
    }

    /// Human readable description, e.g. `Move stack at (2,2): 5 stones EAST with pattern 32`.
    pub fn describe(&self) -> String {
        match self {
            Move::Place(Role::Flat, square) => format!("Place flat stone at {}", square),
            Move::Place(Role::Standing, square) => format!("Place standing stone at {}", square),
            Move::Place(Role::Cap, square) => format!("Place capstone at {}", square),
            Move::Move(square, direction, drops) => {
                let pattern: String = drops.iter().map(|drop| drop.to_string()).collect();
                format!(
                    "Move stack at {}: {} stones {} with pattern {}",
                    square,
                    self.count(),
                    direction,
                    pattern
                )
            }
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place(role, square) => {
                let letter = match role {
                    Role::Flat => 'F',
                    Role::Standing => 'S',
                    Role::Cap => 'C',
                };
                write!(f, "{}({},{})", letter, square.row, square.col)
            }
            Move::Move(square, direction, drops) => {
                write!(f, "M({},{}){}", square.row, square.col, direction.to_char())?;
                // The short form is only used when a single stone is moved one square
                if drops.as_slice() != [1] {
                    write!(f, "{}[", self.count())?;
                    for drop in drops {
                        write!(f, "{}", drop)?;
                    }
                    write!(f, "]")?;
                }
                Ok(())
            }
        }
    }
}

fn parse_error(input: &str, reason: &str) -> pgn_traits::Error {
    pgn_traits::Error::new_parse_error(format!("Couldn't parse move \"{}\": {}", input, reason))
}

fn parse_digit(input: &str, ch: u8) -> Result<u8, pgn_traits::Error> {
    if ch.is_ascii_digit() {
        Ok(ch - b'0')
    } else {
        Err(parse_error(input, "expected a digit"))
    }
}

impl FromStr for Move {
    type Err = pgn_traits::Error;

    /// Parse a move command:
    ///
    /// * `F(r,c)`, `S(r,c)` and `C(r,c)` place a flat stone, standing stone or capstone
    /// * `M(r,c)D` moves one stone in direction `D`, one of `+-<>`
    /// * `M(r,c)Dn[p]` moves `n` stones, dropping the number of stones in each digit of `p`
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if !input.is_ascii() {
            return Err(parse_error(input, "contained non-ascii characters"));
        }
        let bytes = input.as_bytes();
        if bytes.len() < 6 {
            return Err(parse_error(input, "too short"));
        }
        if bytes[1] != b'(' || bytes[3] != b',' || bytes[5] != b')' {
            return Err(parse_error(input, "expected coordinates on the form (r,c)"));
        }
        let square = Square::new(parse_digit(input, bytes[2])?, parse_digit(input, bytes[4])?);

        let role = match bytes[0] {
            b'F' => Role::Flat,
            b'S' => Role::Standing,
            b'C' => Role::Cap,
            b'M' => return parse_stack_move(input, square),
            _ => return Err(parse_error(input, "unknown move type")),
        };
        if bytes.len() != 6 {
            return Err(parse_error(input, "unexpected characters after placement"));
        }
        Ok(Move::Place(role, square))
    }
}

fn parse_stack_move(input: &str, square: Square) -> Result<Move, pgn_traits::Error> {
    let bytes = input.as_bytes();
    let direction = bytes
        .get(6)
        .and_then(|&ch| Direction::parse(ch as char))
        .ok_or_else(|| parse_error(input, "bad direction"))?;

    if bytes.len() == 7 {
        let mut drops = Drops::new();
        drops.push(1);
        return Ok(Move::Move(square, direction, drops));
    }
    if bytes.len() < 11 || bytes[8] != b'[' || bytes[bytes.len() - 1] != b']' {
        return Err(parse_error(input, "expected a drop pattern on the form n[p]"));
    }
    let count = parse_digit(input, bytes[7])?;

    let mut drops = Drops::new();
    for &ch in &bytes[9..bytes.len() - 1] {
        let drop = parse_digit(input, ch)?;
        if drop == 0 {
            return Err(parse_error(input, "cannot drop zero stones"));
        }
        drops
            .try_push(drop)
            .map_err(|_| parse_error(input, "too many drops"))?;
    }
    if drops.iter().map(|&drop| drop as u32).sum::<u32>() != count as u32 {
        return Err(parse_error(input, "drops do not add up to the number of stones"));
    }
    Ok(Move::Move(square, direction, drops))
}
