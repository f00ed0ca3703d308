extern crate arrayvec;
extern crate board_game_traits;
extern crate pgn_traits;
extern crate rand;

pub mod evaluation;
pub mod game;
pub mod game_log;
pub mod minmax;
pub mod position;
pub mod search;
mod tests;
