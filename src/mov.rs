//! Move records and the bounded move history.
//!
//! A fixed-capacity history (`MOVE_HISTORY_MAX`) storing moves by value,
//! with a ko field carried on the move that captured the single stone
//! rather than recomputed on demand. The legality-checked
//! `play`/`pass`/`undo` sequence operates directly on a `BoardState` and
//! `WormIndex`; `Engine` in `engine.rs` owns the instances it's called
//! with.

use crate::board::{BoardState, Color};
use crate::constants::MOVE_HISTORY_MAX;
use crate::error::GoError;
use crate::worm::WormIndex;

/// What a recorded move did: place a stone, or pass the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Play { i: u8, j: u8 },
    Pass,
}

/// One committed move, with everything `undo` needs to reverse it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub color: Color,
    pub kind: MoveKind,
    /// Vertices of opponent stones removed by this move.
    pub captured: Vec<(u8, u8)>,
    /// The forbidden recapture point, set iff this move captured exactly
    /// one stone into a size-1, single-liberty worm of its own color.
    pub ko: Option<(u8, u8)>,
    /// 1-based move number.
    pub number: u64,
}

impl Move {
    pub fn pass(color: Color, number: u64) -> Self {
        Move { color, kind: MoveKind::Pass, captured: Vec::new(), ko: None, number }
    }
}

/// An ordered, bounded sequence of committed moves.
#[derive(Debug, Clone, Default)]
pub struct MoveHistory {
    moves: Vec<Move>,
}

impl MoveHistory {
    pub fn new() -> Self {
        MoveHistory { moves: Vec::new() }
    }

    /// Appends `mv`. Fails with `HistoryOverflow` once the history holds
    /// `MOVE_HISTORY_MAX` moves already.
    pub fn push(&mut self, mv: Move) -> Result<(), GoError> {
        if self.moves.len() >= MOVE_HISTORY_MAX {
            return Err(GoError::HistoryOverflow);
        }
        self.moves.push(mv);
        Ok(())
    }

    /// Removes and returns the most recent move, if any.
    pub fn pop(&mut self) -> Option<Move> {
        self.moves.pop()
    }

    /// The most recent move, if any.
    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The number that would be assigned to the next pushed move.
    pub fn next_move_number(&self) -> u64 {
        self.moves.len() as u64 + 1
    }
}

/// The point `color` is forbidden from playing into by the simple-ko rule,
/// derived from the top of `history`.
pub fn last_ko(history: &MoveHistory, color: Color) -> Option<(u8, u8)> {
    let mv = history.last()?;
    let point = mv.ko?;
    if mv.color != color { Some(point) } else { None }
}

/// Plays a stone for `color` at `(i, j)`, checking legality, resolving
/// captures, and detecting simple ko — the full sequence of checks:
///
/// 1. The point must be on-board and empty.
/// 2. The point must not be the ko point forbidden to `color`.
/// 3. After placing, any zero-liberty opponent worms are removed; if the
///    placed stone's own worm is then still at zero liberties, the whole
///    move is rolled back as a suicide.
///
/// On success, pushes a `Move` recording the capture list and ko field.
pub fn play(
    board: &mut BoardState,
    worms: &mut WormIndex,
    history: &mut MoveHistory,
    color: Color,
    i: u8,
    j: u8,
) -> Result<(), GoError> {
    if !board.on_board(i as i32, j as i32) || board.get_stone(i, j) != Color::Empty {
        return Err(GoError::OccupiedOrOff);
    }
    if last_ko(history, color) == Some((i, j)) {
        return Err(GoError::KoRecapture);
    }

    board.set_stone(color, i, j);
    worms.scan(board);

    let opp = color.opponent();
    let zero_liberty_ids: Vec<u32> = (1..worms.free_worm_id(opp))
        .filter(|&id| worms.worm_liberties(opp, id) == 0)
        .collect();

    let mut captured = Vec::new();
    if !zero_liberty_ids.is_empty() {
        for (pi, pj) in board.points() {
            let id = worms.worm_of(opp, pi, pj);
            if id != 0 && zero_liberty_ids.contains(&id) {
                board.set_stone(Color::Empty, pi, pj);
                captured.push((pi, pj));
            }
        }
        board.add_captured(color, captured.len() as u32);
        worms.scan(board);
    }

    let own_id = worms.worm_of(color, i, j);
    if worms.worm_liberties(color, own_id) == 0 {
        board.set_stone(Color::Empty, i, j);
        for &(ci, cj) in &captured {
            board.set_stone(opp, ci, cj);
        }
        board.sub_captured(color, captured.len() as u32);
        worms.scan(board);
        return Err(GoError::Suicide);
    }

    let ko = if captured.len() == 1
        && worms.worm_size(color, own_id) == 1
        && worms.worm_liberties(color, own_id) == 1
    {
        Some(captured[0])
    } else {
        None
    };

    let mv = Move {
        color,
        kind: MoveKind::Play { i, j },
        captured,
        ko,
        number: history.next_move_number(),
    };
    history.push(mv)
}

/// Records a pass for `color`.
pub fn pass(history: &mut MoveHistory, color: Color) -> Result<(), GoError> {
    let number = history.next_move_number();
    history.push(Move::pass(color, number))
}

/// Reverses the most recent move: restores the emptied or captured points
/// and decrements the capture counter it had incremented. Fails with
/// `NoMove` if the history is empty.
pub fn undo(board: &mut BoardState, worms: &mut WormIndex, history: &mut MoveHistory) -> Result<(), GoError> {
    let mv = history.pop().ok_or(GoError::NoMove)?;
    if let MoveKind::Play { i, j } = mv.kind {
        board.set_stone(Color::Empty, i, j);
        let opp = mv.color.opponent();
        for &(ci, cj) in &mv.captured {
            board.set_stone(opp, ci, cj);
        }
        board.sub_captured(mv.color, mv.captured.len() as u32);
    }
    worms.scan(board);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_past_capacity_overflows() {
        let mut history = MoveHistory::new();
        for n in 0..MOVE_HISTORY_MAX {
            history.push(Move::pass(Color::Black, n as u64 + 1)).unwrap();
        }
        assert_eq!(
            history.push(Move::pass(Color::Black, MOVE_HISTORY_MAX as u64 + 1)),
            Err(GoError::HistoryOverflow)
        );
    }

    #[test]
    fn ko_only_forbidden_for_the_opponent() {
        let mut history = MoveHistory::new();
        let mut mv = Move::pass(Color::Black, 1);
        mv.ko = Some((0, 0));
        history.push(mv).unwrap();

        assert_eq!(last_ko(&history, Color::White), Some((0, 0)));
        assert_eq!(last_ko(&history, Color::Black), None);
    }

    #[test]
    fn pop_returns_pushed_move() {
        let mut history = MoveHistory::new();
        history.push(Move::pass(Color::Black, 1)).unwrap();
        let mv = history.pop().unwrap();
        assert_eq!(mv.color, Color::Black);
        assert!(history.is_empty());
    }

    #[test]
    fn corner_atari_and_capture_scenario_s1() {
        let mut board = BoardState::new(19).unwrap();
        let mut worms = WormIndex::new(19);
        let mut history = MoveHistory::new();

        play(&mut board, &mut worms, &mut history, Color::Black, 0, 0).unwrap(); // A1
        play(&mut board, &mut worms, &mut history, Color::White, 0, 1).unwrap(); // A2
        play(&mut board, &mut worms, &mut history, Color::Black, 1, 0).unwrap(); // B1
        play(&mut board, &mut worms, &mut history, Color::White, 1, 1).unwrap(); // B2
        play(&mut board, &mut worms, &mut history, Color::White, 2, 0).unwrap(); // C1

        assert_eq!(board.captured(Color::White), 2);
        assert_eq!(board.get_stone(0, 0), Color::Empty);
        assert_eq!(board.get_stone(1, 0), Color::Empty);
    }

    #[test]
    fn simple_ko_forbids_immediate_recapture() {
        // A minimal ko shape on a 9x9 board: white stones wall in (4,4) and
        // (3,4) from every side except their shared edge. Black takes
        // (3,4), capturing the lone white stone at (4,4); the black stone
        // left behind has exactly one liberty, at (4,4) itself, so that
        // point becomes the forbidden recapture point.
        let mut board = BoardState::new(9).unwrap();
        let mut worms = WormIndex::new(9);
        let mut history = MoveHistory::new();

        play(&mut board, &mut worms, &mut history, Color::White, 3, 3).unwrap();
        play(&mut board, &mut worms, &mut history, Color::White, 3, 5).unwrap();
        play(&mut board, &mut worms, &mut history, Color::White, 2, 4).unwrap();
        play(&mut board, &mut worms, &mut history, Color::White, 4, 4).unwrap();
        play(&mut board, &mut worms, &mut history, Color::Black, 4, 3).unwrap();
        play(&mut board, &mut worms, &mut history, Color::Black, 4, 5).unwrap();
        play(&mut board, &mut worms, &mut history, Color::Black, 5, 4).unwrap();
        play(&mut board, &mut worms, &mut history, Color::Black, 3, 4).unwrap();

        assert_eq!(board.get_stone(4, 4), Color::Empty);
        assert_eq!(board.captured(Color::Black), 1);
        assert_eq!(history.last().unwrap().ko, Some((4, 4)));

        let result = play(&mut board, &mut worms, &mut history, Color::White, 4, 4);
        assert_eq!(result, Err(GoError::KoRecapture));

        // Once black plays elsewhere, the ko restriction lapses and white
        // can recapture.
        play(&mut board, &mut worms, &mut history, Color::Black, 8, 8).unwrap();
        play(&mut board, &mut worms, &mut history, Color::White, 4, 4).unwrap();
        assert_eq!(board.get_stone(4, 4), Color::White);
        assert_eq!(board.get_stone(3, 4), Color::Empty);
        assert_eq!(board.captured(Color::White), 1);
    }

    #[test]
    fn suicide_is_rejected_without_state_change() {
        let mut board = BoardState::new(9).unwrap();
        let mut worms = WormIndex::new(9);
        let mut history = MoveHistory::new();

        play(&mut board, &mut worms, &mut history, Color::White, 1, 0).unwrap();
        play(&mut board, &mut worms, &mut history, Color::Black, 8, 8).unwrap(); // elsewhere
        play(&mut board, &mut worms, &mut history, Color::White, 0, 1).unwrap();

        let before = board.clone();
        let result = play(&mut board, &mut worms, &mut history, Color::Black, 0, 0);
        assert_eq!(result, Err(GoError::Suicide));
        assert_eq!(board.get_stone(0, 0), before.get_stone(0, 0));
        assert_eq!(board.captured(Color::Black), before.captured(Color::Black));
    }

    #[test]
    fn play_then_undo_restores_bits_and_counters_scenario_s4() {
        let mut board = BoardState::new(19).unwrap();
        let mut worms = WormIndex::new(19);
        let mut history = MoveHistory::new();

        play(&mut board, &mut worms, &mut history, Color::Black, 0, 0).unwrap();
        play(&mut board, &mut worms, &mut history, Color::White, 0, 1).unwrap();
        play(&mut board, &mut worms, &mut history, Color::Black, 1, 0).unwrap();
        play(&mut board, &mut worms, &mut history, Color::White, 1, 1).unwrap();
        play(&mut board, &mut worms, &mut history, Color::White, 2, 0).unwrap();

        undo(&mut board, &mut worms, &mut history).unwrap();

        assert_eq!(board.get_stone(0, 0), Color::Black);
        assert_eq!(board.get_stone(1, 0), Color::Black);
        assert_eq!(board.captured(Color::White), 0);
        assert_eq!(board.get_stone(2, 0), Color::Empty);
        assert_eq!(history.len(), 4);
    }
}
