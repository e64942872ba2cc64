//! Fixed-depth minimax search over the ordered legal-move list.
//!
//! `search_tree` enumerates the root's legal moves (already ordered by
//! shallow evaluation), recurses by play/undo, and tracks the best value
//! with max-for-Black / min-for-White propagation. No alpha-beta pruning
//! is implemented; `alpha_cut`/`beta_cut` are carried in the stats for a
//! future pruning pass and read `0` here.

use std::time::{Duration, Instant};

use crate::board::{BoardState, Color};
use crate::brains::{evaluate, Weights};
use crate::mov::{self, Move, MoveHistory};
use crate::movegen;
use crate::worm::WormIndex;

/// A chosen move: a placement or a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectedMove {
    Play(u8, u8),
    Pass,
}

/// Reporting fields for a completed root search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchStats {
    pub color: Color,
    pub mv: SelectedMove,
    pub depth: u32,
    pub duration: Duration,
    pub node_count: u64,
    pub nodes_per_sec: f64,
    pub qsearch_count: u64,
    pub alpha_cut: u64,
    pub beta_cut: u64,
    pub value: i64,
}

/// Runs a fixed-depth minimax search for `to_move` and returns the chosen
/// move plus reporting statistics.
///
/// At `depth == 0` and an empty legal-move list the chosen move is `Pass`
/// with a node count of `0` and value equal to the current evaluation.
pub fn search_tree(
    board: &mut BoardState,
    worms: &mut WormIndex,
    history: &mut MoveHistory,
    weights: &Weights,
    to_move: Color,
    depth: u32,
) -> SearchStats {
    let start = Instant::now();
    let mut node_count = 0u64;

    let moves = movegen::legal_moves(board, worms, history, weights, to_move);

    let (mv, value) = if moves.is_empty() {
        worms.scan(board);
        let eval = evaluate(board, worms, weights, true);
        (SelectedMove::Pass, eval.total)
    } else if depth == 0 {
        let best = &moves[0];
        (SelectedMove::Play(best.i, best.j), best.heuristic_value)
    } else {
        let mut best_move = SelectedMove::Play(moves[0].i, moves[0].j);
        let mut best_value: Option<i64> = None;

        for candidate in &moves {
            mov::play(board, worms, history, to_move, candidate.i, candidate.j)
                .expect("legal_moves only returns legal candidates");
            node_count += 1;

            let child_value = minimax(
                board,
                worms,
                history,
                weights,
                to_move.opponent(),
                depth - 1,
                &mut node_count,
            );

            mov::undo(board, worms, history).expect("just played, must be undoable");

            let improves = match (to_move, best_value) {
                (_, None) => true,
                (Color::Black, Some(v)) => child_value > v,
                (Color::White, Some(v)) => child_value < v,
                (Color::Empty, _) => false,
            };
            if improves {
                best_value = Some(child_value);
                best_move = SelectedMove::Play(candidate.i, candidate.j);
            }
        }

        (best_move, best_value.unwrap_or(0))
    };

    let duration = start.elapsed();
    let nodes_per_sec = if duration.as_secs_f64() > 0.0 {
        node_count as f64 / duration.as_secs_f64()
    } else {
        0.0
    };

    SearchStats {
        color: to_move,
        mv,
        depth,
        duration,
        node_count,
        nodes_per_sec,
        qsearch_count: 0,
        alpha_cut: 0,
        beta_cut: 0,
        value,
    }
}

fn minimax(
    board: &mut BoardState,
    worms: &mut WormIndex,
    history: &mut MoveHistory,
    weights: &Weights,
    to_move: Color,
    depth: u32,
    node_count: &mut u64,
) -> i64 {
    if depth == 0 {
        worms.scan(board);
        return evaluate(board, worms, weights, true).total;
    }

    let moves = movegen::legal_moves(board, worms, history, weights, to_move);
    if moves.is_empty() {
        worms.scan(board);
        return evaluate(board, worms, weights, true).total;
    }

    let mut best: Option<i64> = None;
    for candidate in &moves {
        mov::play(board, worms, history, to_move, candidate.i, candidate.j)
            .expect("legal_moves only returns legal candidates");
        *node_count += 1;

        let value = minimax(board, worms, history, weights, to_move.opponent(), depth - 1, node_count);

        mov::undo(board, worms, history).expect("just played, must be undoable");

        best = Some(match (to_move, best) {
            (_, None) => value,
            (Color::Black, Some(v)) => v.max(value),
            (Color::White, Some(v)) => v.min(value),
            (Color::Empty, Some(v)) => v,
        });
    }
    best.unwrap_or(0)
}

/// Last move's textual vertex, for `search_stats`' human-readable `move`
/// field. `coord` owns the real label formatting; this is a thin adapter
/// over `SelectedMove`.
pub fn last_move_record(history: &MoveHistory) -> Option<&Move> {
    history.last()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_on_fully_occupied_board_returns_pass_scenario_s6() {
        let mut board = BoardState::new(2).unwrap();
        for (i, j) in board.points().collect::<Vec<_>>() {
            board.set_stone(Color::White, i, j);
        }
        let mut worms = WormIndex::new(2);
        let mut history = MoveHistory::new();
        let weights = Weights::default();

        let stats = search_tree(&mut board, &mut worms, &mut history, &weights, Color::Black, 0);
        assert_eq!(stats.mv, SelectedMove::Pass);
        assert_eq!(stats.node_count, 0);
    }

    #[test]
    fn search_returns_immediate_best_move_at_depth_zero() {
        let mut board = BoardState::new(9).unwrap();
        let mut worms = WormIndex::new(9);
        let mut history = MoveHistory::new();
        let weights = Weights::default();

        mov::play(&mut board, &mut worms, &mut history, Color::White, 0, 0).unwrap();
        mov::play(&mut board, &mut worms, &mut history, Color::Black, 1, 0).unwrap();

        let stats = search_tree(&mut board, &mut worms, &mut history, &weights, Color::Black, 0);
        assert_eq!(stats.mv, SelectedMove::Play(0, 1));
        assert_eq!(stats.node_count, 0);
    }

    #[test]
    fn search_restores_position_after_recursing() {
        let mut board = BoardState::new(9).unwrap();
        let mut worms = WormIndex::new(9);
        let mut history = MoveHistory::new();
        let weights = Weights::default();

        let before = board.clone();
        let history_len_before = history.len();
        let _ = search_tree(&mut board, &mut worms, &mut history, &weights, Color::Black, 2);

        for (i, j) in board.points() {
            assert_eq!(board.get_stone(i, j), before.get_stone(i, j));
        }
        assert_eq!(history.len(), history_len_before);
    }
}
