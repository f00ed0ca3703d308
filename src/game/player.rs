use std::fmt;
use std::str::FromStr;

use board_game_traits::Color;
use rand::Rng;

use crate::evaluation::Strategy;
use crate::game::GameState;
use crate::position::{Board, IllegalMove, Move, Role, Stone, TakError};
use crate::position::{STARTING_CAPSTONES, STARTING_STONES};
use crate::search::Engine;

/// Who decides a player's moves.
#[derive(Clone, PartialEq, Debug)]
pub enum PlayerKind {
    /// Plays whatever command text it is given.
    Human,
    Engine(Engine),
}

impl PlayerKind {
    /// Build a player kind from its name, e.g. `Human` or `ClusterBuilder`.
    /// The depth is ignored for players that do not search.
    pub fn from_name(name: &str, depth: u16) -> Result<Self, String> {
        if name.eq_ignore_ascii_case("human") {
            Ok(PlayerKind::Human)
        } else {
            let strategy = Strategy::from_str(name)?;
            Ok(PlayerKind::Engine(Engine::new(strategy, depth)))
        }
    }

    pub fn is_engine(&self) -> bool {
        matches!(self, PlayerKind::Engine(_))
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Human => write!(f, "Human"),
            PlayerKind::Engine(engine) if engine.strategy() == Strategy::Random => {
                write!(f, "{}", engine.strategy())
            }
            PlayerKind::Engine(engine) => {
                write!(f, "{} (depth {})", engine.strategy(), engine.depth())
            }
        }
    }
}

/// One side of the game, with its remaining pieces.
#[derive(Clone, PartialEq, Debug)]
pub struct Player {
    color: Color,
    stones: u8,
    capstones: u8,
    kind: PlayerKind,
}

impl Player {
    pub fn new(color: Color, kind: PlayerKind) -> Self {
        Player {
            color,
            stones: STARTING_STONES,
            capstones: STARTING_CAPSTONES,
            kind,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn kind(&self) -> &PlayerKind {
        &self.kind
    }

    pub fn stones_left(&self) -> u8 {
        self.stones
    }

    pub fn capstones_left(&self) -> u8 {
        self.capstones
    }

    /// A player with no pieces left ends the game.
    pub fn is_out(&self) -> bool {
        self.stones == 0 && self.capstones == 0
    }

    /// Decide which move to play. Humans play the move in `input`,
    /// engines ignore it and search `state`.
    pub fn take_turn<R: Rng>(
        &self,
        state: &GameState,
        input: &str,
        rng: &mut R,
    ) -> Result<Move, TakError> {
        match &self.kind {
            PlayerKind::Human => Ok(Move::from_str(input)?),
            PlayerKind::Engine(engine) => engine
                .choose_move(state, rng)
                .ok_or(TakError::IllegalMove(IllegalMove::NoLegalMoves)),
        }
    }

    /// Play `mv` on `board` as this player.
    /// On failure, neither the board nor the inventory is changed.
    pub fn execute(&mut self, board: &mut Board, mv: &Move) -> Result<(), IllegalMove> {
        match mv {
            Move::Place(role, square) => {
                let (inventory, empty_error) = match role {
                    Role::Cap => (&mut self.capstones, IllegalMove::NoCapstonesLeft),
                    Role::Flat | Role::Standing => (&mut self.stones, IllegalMove::NoStonesLeft),
                };
                if *inventory == 0 {
                    return Err(empty_error);
                }
                board.add_stone(Stone::from_role_color(*role, self.color), *square)?;
                *inventory -= 1;
            }
            Move::Move(square, direction, drops) => {
                if board
                    .top_color(*square)?
                    .is_some_and(|color| color != self.color)
                {
                    return Err(IllegalMove::NotOwner);
                }
                board.move_stack(mv.count(), *direction, drops, *square)?;
            }
        }
        Ok(())
    }
}
