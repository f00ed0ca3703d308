//! Heuristic evaluation of game states, from one player's point of view.

use std::fmt;
use std::str::FromStr;

use board_game_traits::{Color, GameResult};
use rand::Rng;

use crate::game::{win_for, GameState};
use crate::position::{squares_iterator, Board};

/// Score of a position that is already won.
pub const WIN_SCORE: f64 = f64::MAX;
pub const LOSS_SCORE: f64 = f64::MIN;
pub const DRAW_SCORE: f64 = 0.0;

/// Upper bound of the random term added to each heuristic score. The heuristics are whole
/// numbers, so anything below 1.0 only reorders positions that would otherwise be equal.
pub const DEFAULT_TIE_BREAK: f64 = 0.5;

/// The evaluation functions an engine can play with.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Strategy {
    /// Uniformly random scores. Engines with this strategy do not search.
    Random,
    /// Maximize the number of stacks we control
    Selfish,
    /// Minimize the number of stacks the opponent controls
    Attacker,
    SelfishAttacker,
    /// Maximize the stones under stacks we control, minus those under the opponent's stacks
    Gatherer,
    /// Maximize adjacent pairs of our road stones, counting each pair from both ends
    ClusterBuilder,
    ClusterBuilderGatherer,
}

impl Strategy {
    pub const ALL: [Strategy; 7] = [
        Strategy::Random,
        Strategy::Selfish,
        Strategy::Attacker,
        Strategy::SelfishAttacker,
        Strategy::Gatherer,
        Strategy::ClusterBuilder,
        Strategy::ClusterBuilderGatherer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Random => "Random",
            Strategy::Selfish => "Selfish",
            Strategy::Attacker => "Attacker",
            Strategy::SelfishAttacker => "SelfishAttacker",
            Strategy::Gatherer => "Gatherer",
            Strategy::ClusterBuilder => "ClusterBuilder",
            Strategy::ClusterBuilderGatherer => "ClusterBuilderGatherer",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(input))
            .copied()
            .ok_or_else(|| format!("Unknown strategy \"{}\"", input))
    }
}

/// Evaluate `state` for `color`, with the default tie-breaking noise.
pub fn evaluate<R: Rng>(state: &GameState, color: Color, strategy: Strategy, rng: &mut R) -> f64 {
    Evaluator::new(strategy).evaluate(state, color, rng)
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Evaluator {
    strategy: Strategy,
    tie_break: f64,
}

impl Evaluator {
    pub fn new(strategy: Strategy) -> Self {
        Evaluator {
            strategy,
            tie_break: DEFAULT_TIE_BREAK,
        }
    }

    /// Set the range of the random tie-breaking term. With 0.0, evaluation is deterministic
    /// for every strategy except `Random`.
    pub fn with_tie_break(mut self, tie_break: f64) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Finished games score as won, lost or drawn for `color`.
    /// Otherwise, the strategy's heuristic is used.
    pub fn evaluate<R: Rng>(&self, state: &GameState, color: Color, rng: &mut R) -> f64 {
        match state.game_result() {
            Some(GameResult::Draw) => DRAW_SCORE,
            Some(result) if result == win_for(color) => WIN_SCORE,
            Some(_) => LOSS_SCORE,
            None if self.strategy == Strategy::Random => rng.gen(),
            None if self.tie_break > 0.0 => {
                self.heuristic(state.board(), color) + rng.gen_range(0.0..self.tie_break)
            }
            None => self.heuristic(state.board(), color),
        }
    }

    /// The deterministic part of the evaluation. Always 0 for `Random`.
    pub fn heuristic(&self, board: &Board, color: Color) -> f64 {
        let score = match self.strategy {
            Strategy::Random => 0,
            Strategy::Selfish => board.num_owned_stacks(color) as i32,
            Strategy::Attacker => -(board.num_owned_stacks(!color) as i32),
            Strategy::SelfishAttacker => {
                board.num_owned_stacks(color) as i32 - board.num_owned_stacks(!color) as i32
            }
            Strategy::Gatherer => gatherer(board, color),
            Strategy::ClusterBuilder => cluster_builder(board, color),
            Strategy::ClusterBuilderGatherer => {
                2 * cluster_builder(board, color) + gatherer(board, color)
            }
        };
        score as f64
    }
}

fn gatherer(board: &Board, color: Color) -> i32 {
    squares_iterator()
        .filter_map(|square| board.stack(square).ok())
        .filter_map(|stack| {
            let top = stack.top_stone()?;
            let height = stack.len() as i32;
            Some(if top.color() == color { height } else { -height })
        })
        .sum()
}

fn cluster_builder(board: &Board, color: Color) -> i32 {
    board.to_graph(color).total_degree() as i32
}
