//! A very simple implementation of the minmax search algorithm, without any pruning.
//! It visits children in the same order as `search::Engine`, so with deterministic evaluation
//! both always agree on the best move and its score. Mostly useful for testing.

use board_game_traits::Color;
use rand::Rng;

use crate::game::GameState;
use crate::position::Move;
use crate::search::Engine;

/// Returns the best move for the side to move and its score, searching the engine's full depth.
pub fn minmax<R: Rng>(engine: &Engine, state: &GameState, rng: &mut R) -> (Option<Move>, f64) {
    let color = state.side_to_move();
    let mut best: (Option<Move>, f64) = (None, f64::NEG_INFINITY);
    for child in engine.ordered_children(state, true, color, rng) {
        let score = minmax_value(
            engine,
            &child.state,
            child.score,
            engine.depth() - 1,
            false,
            color,
            rng,
        );
        if best.0.is_none() || score > best.1 {
            best = (Some(child.mv), score);
        }
    }
    best
}

fn minmax_value<R: Rng>(
    engine: &Engine,
    state: &GameState,
    static_score: f64,
    depth: u16,
    maximizing: bool,
    color: Color,
    rng: &mut R,
) -> f64 {
    if depth == 0 || state.game_result().is_some() {
        return static_score;
    }
    let child_scores = engine
        .ordered_children(state, maximizing, color, rng)
        .into_iter()
        .map(|child| {
            minmax_value(
                engine,
                &child.state,
                child.score,
                depth - 1,
                !maximizing,
                color,
                rng,
            )
        })
        .collect::<Vec<f64>>();
    if child_scores.is_empty() {
        return static_score;
    }
    if maximizing {
        child_scores.into_iter().fold(f64::NEG_INFINITY, f64::max)
    } else {
        child_scores.into_iter().fold(f64::INFINITY, f64::min)
    }
}
