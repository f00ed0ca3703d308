//! Game state: the board, both players, turn order and move history.

use std::cmp::Ordering;
use std::fmt;

use board_game_traits::{Color, GameResult};
use log::{info, warn};
use rand::Rng;

pub use player::{Player, PlayerKind};

use crate::position::{AbstractBoard, Board, IllegalMove, Move, Stone, TakError};

mod player;

pub(crate) fn color_index(color: Color) -> usize {
    match color {
        Color::White => 0,
        Color::Black => 1,
    }
}

pub fn win_for(color: Color) -> GameResult {
    match color {
        Color::White => GameResult::WhiteWin,
        Color::Black => GameResult::BlackWin,
    }
}

/// The move that was played in a successful turn, and the game result afterwards.
#[derive(Clone, PartialEq, Debug)]
pub struct TurnOutcome {
    pub mv: Move,
    pub result: Option<GameResult>,
}

/// A read-only copy of everything a front end needs to draw the game.
#[derive(Clone, PartialEq, Debug)]
pub struct GameSnapshot {
    pub top_stones: AbstractBoard<Option<Stone>>,
    /// Regular stones left, indexed by player
    pub stones_left: [u8; 2],
    pub capstones_left: [u8; 2],
    pub plies: u32,
    pub last_move: Option<String>,
    pub side_to_move: Color,
    pub engine_to_move: bool,
}

/// A full game of Tak. Player 1 is always white and moves first.
///
/// Cloning a game gives a fully independent copy, which is what the search explores.
#[derive(Clone, PartialEq)]
pub struct GameState {
    board: Board,
    players: [Player; 2],
    next: usize,
    plies: u32,
    history: Vec<String>,
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new(PlayerKind::Human, PlayerKind::Human)
    }
}

impl GameState {
    pub fn new(player1: PlayerKind, player2: PlayerKind) -> Self {
        GameState {
            board: Board::default(),
            players: [
                Player::new(Color::White, player1),
                Player::new(Color::Black, player2),
            ],
            next: 0,
            plies: 0,
            history: vec![],
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self, color: Color) -> &Player {
        &self.players[color_index(color)]
    }

    pub fn next_player(&self) -> &Player {
        &self.players[self.next]
    }

    pub fn side_to_move(&self) -> Color {
        self.next_player().color()
    }

    pub fn plies(&self) -> u32 {
        self.plies
    }

    /// Every move played so far, in move notation.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    /// Let the player to move take their turn. Human players play the move in `input`.
    ///
    /// If the turn is rejected, the game state is left unchanged.
    pub fn make_move<R: Rng>(&mut self, input: &str, rng: &mut R) -> Result<TurnOutcome, TakError> {
        let mv = self
            .next_player()
            .take_turn(self, input, rng)
            .inspect_err(|err| {
                warn!(
                    "Rejected \"{}\" from {}: {}",
                    input,
                    self.side_to_move(),
                    err
                )
            })?;
        let result = self.play_move(&mv)?;
        info!("Ply {}: {} played {}", self.plies, !self.side_to_move(), mv);
        Ok(TurnOutcome { mv, result })
    }

    /// Play `mv` for the player to move, regardless of who controls them.
    /// Returns the game result as seen right after the move.
    pub fn play_move(&mut self, mv: &Move) -> Result<Option<GameResult>, IllegalMove> {
        let mover = self.next;
        self.players[mover].execute(&mut self.board, mv)?;
        let result = self.game_result_for(self.players[mover].color());
        self.next = 1 - mover;
        self.plies += 1;
        self.history.push(mv.to_string());
        Ok(result)
    }

    /// The game result, given that `last_mover` just moved.
    ///
    /// Roads are checked for the last mover first, then for their opponent. Without a road,
    /// the game ends on flat count once the board is full or a player is out of pieces.
    pub fn game_result_for(&self, last_mover: Color) -> Option<GameResult> {
        for color in [last_mover, !last_mover] {
            if self.board.to_graph(color).has_road() {
                return Some(win_for(color));
            }
        }
        if self.board.is_full() || self.players.iter().any(Player::is_out) {
            let white_flats = self.board.num_owned_road_cells(Color::White);
            let black_flats = self.board.num_owned_road_cells(Color::Black);
            Some(match white_flats.cmp(&black_flats) {
                Ordering::Greater => GameResult::WhiteWin,
                Ordering::Less => GameResult::BlackWin,
                Ordering::Equal => GameResult::Draw,
            })
        } else {
            None
        }
    }

    /// The game result, assuming the player not to move made the last move.
    pub fn game_result(&self) -> Option<GameResult> {
        self.game_result_for(!self.side_to_move())
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            top_stones: AbstractBoard::new_from_fn(|square| {
                self.board.top_stone(square).ok().flatten()
            }),
            stones_left: [self.players[0].stones_left(), self.players[1].stones_left()],
            capstones_left: [
                self.players[0].capstones_left(),
                self.players[1].capstones_left(),
            ],
            plies: self.plies,
            last_move: self.history.last().cloned(),
            side_to_move: self.side_to_move(),
            engine_to_move: self.next_player().kind().is_engine(),
        }
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.board)?;
        for (i, player) in self.players.iter().enumerate() {
            writeln!(
                f,
                "Player {} ({}, {}): {} stones, {} capstones left.",
                i + 1,
                player.color(),
                player.kind(),
                player.stones_left(),
                player.capstones_left()
            )?;
        }
        writeln!(f, "{} plies played, {} to move.", self.plies, self.side_to_move())
    }
}
