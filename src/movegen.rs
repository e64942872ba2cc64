//! Move generation: pseudo-legal candidates, then the legal subset tagged
//! with feature bits and ordered by a fast (non-`full`) evaluation.
//!
//! Legality and feature tags are both derived by trying each pseudo-legal
//! point — making the move, reading the liberty/atari deltas it produced,
//! then undoing it — rather than predicting them from the pre-move
//! position.

use crate::board::{BoardState, Color};
use crate::brains::{evaluate, Weights};
use crate::mov::{self, MoveHistory};
use crate::worm::WormIndex;

/// Feature bits computed relative to the pre-move position, plus the
/// heuristic value used for move ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveFeatures {
    pub i: u8,
    pub j: u8,
    pub captures: u32,
    pub inflicts_atari: bool,
    pub avoids_atari: bool,
    pub reduces_opponent_liberties: bool,
    pub heuristic_value: i64,
}

/// Every empty on-board point that is not the ko point forbidden to
/// `color`.
pub fn pseudo_legal_moves(board: &BoardState, history: &MoveHistory, color: Color) -> Vec<(u8, u8)> {
    let ko = mov::last_ko(history, color);
    board
        .points()
        .filter(|&(i, j)| board.get_stone(i, j) == Color::Empty)
        .filter(|&point| Some(point) != ko)
        .collect()
}

/// The legal subset of `pseudo_legal_moves`, each tagged with feature bits
/// and a fast heuristic value, sorted for search move ordering: descending
/// by value for Black, ascending for White.
pub fn legal_moves(
    board: &mut BoardState,
    worms: &mut WormIndex,
    history: &mut MoveHistory,
    weights: &Weights,
    color: Color,
) -> Vec<MoveFeatures> {
    let candidates = pseudo_legal_moves(board, history, color);
    let opponent = color.opponent();

    worms.scan(board);
    let atari_before_opp = worms.count_atari(opponent);
    let atari_before_own = worms.count_atari(color);
    let liberties_before_opp = worms.count_group_liberties(opponent);

    let mut out = Vec::with_capacity(candidates.len());
    for (i, j) in candidates {
        let history_len = history.len();
        match mov::play(board, worms, history, color, i, j) {
            Ok(()) => {
                let mv = history.last().expect("just pushed");
                let captures = mv.captured.len() as u32;

                worms.scan(board);
                let atari_after_opp = worms.count_atari(opponent);
                let atari_after_own = worms.count_atari(color);
                let liberties_after_opp = worms.count_group_liberties(opponent);

                let eval = evaluate(board, worms, weights, false);

                out.push(MoveFeatures {
                    i,
                    j,
                    captures,
                    inflicts_atari: atari_after_opp > atari_before_opp,
                    avoids_atari: atari_after_own < atari_before_own,
                    reduces_opponent_liberties: liberties_after_opp < liberties_before_opp,
                    heuristic_value: eval.total,
                });

                mov::undo(board, worms, history).expect("just played, must be undoable");
            }
            Err(_) => {
                debug_assert_eq!(history.len(), history_len);
            }
        }
    }

    worms.scan(board);
    match color {
        Color::Black => out.sort_by(|a, b| b.heuristic_value.cmp(&a.heuristic_value)),
        Color::White => out.sort_by(|a, b| a.heuristic_value.cmp(&b.heuristic_value)),
        Color::Empty => {}
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pseudo_legal_excludes_occupied_and_ko_point() {
        let mut board = BoardState::new(9).unwrap();
        let mut worms = WormIndex::new(9);
        let mut history = MoveHistory::new();
        board.set_stone(Color::Black, 0, 0);

        let moves = pseudo_legal_moves(&board, &history, Color::White);
        assert!(!moves.contains(&(0, 0)));

        worms.scan(&board);
        // Fabricate a ko on (1, 1) forbidding white there.
        let mut mv = mov::Move::pass(Color::Black, 1);
        mv.ko = Some((1, 1));
        history.push(mv).unwrap();
        let moves = pseudo_legal_moves(&board, &history, Color::White);
        assert!(!moves.contains(&(1, 1)));
        assert!(moves.contains(&(2, 2)));
    }

    #[test]
    fn legal_moves_tags_captures_and_restores_position() {
        let mut board = BoardState::new(9).unwrap();
        let mut worms = WormIndex::new(9);
        let mut history = MoveHistory::new();
        let weights = Weights::default();

        mov::play(&mut board, &mut worms, &mut history, Color::White, 0, 0).unwrap();
        mov::play(&mut board, &mut worms, &mut history, Color::Black, 1, 0).unwrap();

        let before = board.clone();
        let moves = legal_moves(&mut board, &mut worms, &mut history, &weights, Color::Black);

        assert_eq!(board.get_stone(0, 0), before.get_stone(0, 0));
        assert_eq!(board.get_stone(1, 0), before.get_stone(1, 0));

        let capturing = moves.iter().find(|m| (m.i, m.j) == (0, 1)).unwrap();
        assert_eq!(capturing.captures, 1);
    }

    #[test]
    fn legal_moves_sort_direction_depends_on_color() {
        let mut board = BoardState::new(9).unwrap();
        let mut worms = WormIndex::new(9);
        let mut history = MoveHistory::new();
        let weights = Weights::default();

        let black_moves = legal_moves(&mut board, &mut worms, &mut history, &weights, Color::Black);
        for pair in black_moves.windows(2) {
            assert!(pair[0].heuristic_value >= pair[1].heuristic_value);
        }

        let white_moves = legal_moves(&mut board, &mut worms, &mut history, &weights, Color::White);
        for pair in white_moves.windows(2) {
            assert!(pair[0].heuristic_value <= pair[1].heuristic_value);
        }
    }
}
