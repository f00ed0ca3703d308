//! A fixed-depth minimax search with alpha-beta pruning.
//!
//! Every node is a fully cloned `GameState`. Children are sorted by their static evaluation
//! before being searched, best first for the side to move, which makes cutoffs happen early.

use board_game_traits::Color;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::evaluation::{Evaluator, Strategy};
use crate::game::GameState;
use crate::position::Move;

pub use move_gen::{candidate_moves, drop_patterns, legal_children, legal_moves, MAX_DROP_STOPS};

mod move_gen;

/// A child of a search node, with its static evaluation from the searching player's view.
#[derive(Clone, Debug)]
pub(crate) struct Child {
    pub mv: Move,
    pub state: GameState,
    pub score: f64,
}

/// Engine settings: which evaluation to maximize, and how many plies to look ahead.
#[derive(Clone, PartialEq, Debug)]
pub struct Engine {
    evaluator: Evaluator,
    depth: u16,
}

impl Engine {
    /// Search engines look at least one ply ahead, so a depth of 0 is raised to 1.
    pub fn new(strategy: Strategy, depth: u16) -> Self {
        Engine {
            evaluator: Evaluator::new(strategy),
            depth: depth.max(1),
        }
    }

    pub fn with_tie_break(mut self, tie_break: f64) -> Self {
        self.evaluator = self.evaluator.with_tie_break(tie_break);
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.evaluator.strategy()
    }

    pub fn depth(&self) -> u16 {
        self.depth
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    pub fn choose_move<R: Rng>(&self, state: &GameState, rng: &mut R) -> Option<Move> {
        self.search(state, rng).map(|(mv, _)| mv)
    }

    /// Find the best move for the side to move, and its backed-up score.
    /// Returns `None` if there are no legal moves.
    pub fn search<R: Rng>(&self, state: &GameState, rng: &mut R) -> Option<(Move, f64)> {
        let color = state.side_to_move();
        if self.strategy() == Strategy::Random {
            let (mv, child) = legal_children(state).choose(rng).cloned()?;
            let score = self.evaluator.evaluate(&child, color, rng);
            debug!("{} picked random move {}", color, mv);
            return Some((mv, score));
        }

        let mut nodes = 0;
        let mut alpha = f64::NEG_INFINITY;
        let mut best: Option<(Move, f64)> = None;

        for child in self.ordered_children(state, true, color, rng) {
            let score = self.alpha_beta(
                &child.state,
                child.score,
                self.depth - 1,
                alpha,
                f64::INFINITY,
                false,
                color,
                rng,
                &mut nodes,
            );
            if best.as_ref().map_or(true, |(_, best_score)| score > *best_score) {
                best = Some((child.mv, score));
                alpha = alpha.max(score);
            }
        }
        if let Some((mv, score)) = &best {
            debug!(
                "{} searched {} nodes at depth {}, chose {} with score {}",
                color, nodes, self.depth, mv, score
            );
        }
        best
    }

    /// All legal children of `state`, scored for `color`
    /// and sorted best first for the side to move.
    pub(crate) fn ordered_children<R: Rng>(
        &self,
        state: &GameState,
        maximizing: bool,
        color: Color,
        rng: &mut R,
    ) -> Vec<Child> {
        let mut children: Vec<Child> = legal_children(state)
            .into_iter()
            .map(|(mv, state)| {
                let score = self.evaluator.evaluate(&state, color, rng);
                Child { mv, state, score }
            })
            .collect();
        if maximizing {
            children.sort_by(|a, b| b.score.total_cmp(&a.score));
        } else {
            children.sort_by(|a, b| a.score.total_cmp(&b.score));
        }
        children
    }

    #[allow(clippy::too_many_arguments)]
    fn alpha_beta<R: Rng>(
        &self,
        state: &GameState,
        static_score: f64,
        depth: u16,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
        color: Color,
        rng: &mut R,
        nodes: &mut u64,
    ) -> f64 {
        *nodes += 1;
        if depth == 0 || state.game_result().is_some() {
            return static_score;
        }
        let children = self.ordered_children(state, maximizing, color, rng);
        if children.is_empty() {
            return static_score;
        }

        if maximizing {
            let mut best = f64::NEG_INFINITY;
            for child in children {
                let score = self.alpha_beta(
                    &child.state,
                    child.score,
                    depth - 1,
                    alpha,
                    beta,
                    false,
                    color,
                    rng,
                    nodes,
                );
                if score > best {
                    best = score;
                }
                if best >= beta {
                    return best;
                }
                alpha = alpha.max(best);
            }
            best
        } else {
            let mut best = f64::INFINITY;
            for child in children {
                let score = self.alpha_beta(
                    &child.state,
                    child.score,
                    depth - 1,
                    alpha,
                    beta,
                    true,
                    color,
                    rng,
                    nodes,
                );
                if score < best {
                    best = score;
                }
                if best <= alpha {
                    return best;
                }
                beta = beta.min(best);
            }
            best
        }
    }
}
