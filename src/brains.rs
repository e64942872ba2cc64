//! Evaluators ("brains"): independent scalar heuristics over a position,
//! combined by a configurable weight table into one signed value where
//! positive favors Black.
//!
//! Each brain is a variant of `BrainKind` dispatched by `match` against a
//! weight table, rather than a runtime-populated table of function
//! pointers — adding a brain means adding a variant and a computation.

use crate::board::{BoardState, Color};
use crate::worm::WormIndex;

/// One named heuristic. `ALL` gives the fixed evaluation order, matching
/// the default weight table `{82, 15, 1, 1, 0, 4, 1, 0}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrainKind {
    Capture,
    Atari,
    AvgLiberties,
    EdgeStones,
    HoshiStones,
    Kosumi,
    Chains,
    Influence,
}

impl BrainKind {
    pub const ALL: [BrainKind; 8] = [
        BrainKind::Capture,
        BrainKind::Atari,
        BrainKind::AvgLiberties,
        BrainKind::EdgeStones,
        BrainKind::HoshiStones,
        BrainKind::Kosumi,
        BrainKind::Chains,
        BrainKind::Influence,
    ];

    /// Whether this brain only contributes under `full` evaluation
    /// (expensive chain/influence analysis).
    pub fn expensive(self) -> bool {
        matches!(self, BrainKind::Chains | BrainKind::Influence)
    }
}

/// A weight per `BrainKind::ALL` entry; `0` disables that brain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights(pub [i64; 8]);

impl Weights {
    pub fn get(&self, kind: BrainKind) -> i64 {
        self.0[BrainKind::ALL.iter().position(|&k| k == kind).unwrap()]
    }

    pub fn set(&mut self, kind: BrainKind, value: i64) {
        let idx = BrainKind::ALL.iter().position(|&k| k == kind).unwrap();
        self.0[idx] = value;
    }
}

impl Default for Weights {
    fn default() -> Self {
        Weights(crate::constants::DEFAULT_WEIGHTS)
    }
}

/// The combined evaluation: a total and each brain's raw value, in
/// `BrainKind::ALL` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub total: i64,
    pub per_brain: [i64; 8],
}

/// Computes `Σ weight_i · brain_i()`, skipping zero-weighted brains.
/// `full` includes `Chains`/`Influence`; move-ordering calls pass
/// `full = false` to skip them even if weighted.
pub fn evaluate(board: &BoardState, worms: &WormIndex, weights: &Weights, full: bool) -> Evaluation {
    let mut per_brain = [0i64; 8];
    for (idx, &kind) in BrainKind::ALL.iter().enumerate() {
        let weight = weights.0[idx];
        if weight == 0 {
            continue;
        }
        if kind.expensive() && !full {
            continue;
        }
        per_brain[idx] = brain_value(kind, board, worms);
    }
    let total = per_brain
        .iter()
        .zip(weights.0.iter())
        .map(|(&value, &weight)| value * weight)
        .sum();
    Evaluation { total, per_brain }
}

fn brain_value(kind: BrainKind, board: &BoardState, worms: &WormIndex) -> i64 {
    match kind {
        BrainKind::Capture => brain_capture(board),
        BrainKind::Atari => brain_atari(worms),
        BrainKind::AvgLiberties => brain_avg_liberties(worms),
        BrainKind::EdgeStones => brain_edge_stones(board),
        BrainKind::HoshiStones => brain_hoshi_stones(board),
        BrainKind::Kosumi => brain_kosumi(board),
        BrainKind::Chains => brain_chains(worms),
        BrainKind::Influence => brain_influence(board),
    }
}

/// `black_captured - white_captured`.
fn brain_capture(board: &BoardState) -> i64 {
    board.captured(Color::Black) as i64 - board.captured(Color::White) as i64
}

/// `atari_stones(white) - atari_stones(black)`: stones sitting in a
/// one-liberty worm, summed per color, white minus black so that a black
/// atari against white favors Black.
fn brain_atari(worms: &WormIndex) -> i64 {
    worms.count_atari(Color::White) as i64 - worms.count_atari(Color::Black) as i64
}

/// `clamp(avg_liberties(Black), 0, 4) - clamp(avg_liberties(White), 0, 4)`,
/// with the per-color divisor floored at 1 so an empty board never divides
/// by zero.
fn brain_avg_liberties(worms: &WormIndex) -> i64 {
    let avg = |color: Color| -> i64 {
        let groups = worms.worm_count(color).max(1);
        let liberties = worms.count_group_liberties(color);
        (liberties as i64 / groups as i64).clamp(0, 4)
    };
    avg(Color::Black) - avg(Color::White)
}

/// `-(stones_on_edge(Black) - stones_on_edge(White))`: edge occupation is
/// penalized in favor of contact away from the border. The four border
/// lines are summed separately, so a corner stone is counted twice (once
/// as part of its row, once as part of its column).
fn brain_edge_stones(board: &BoardState) -> i64 {
    let n = board.size();
    let mut black = 0i64;
    let mut white = 0i64;
    let mut tally = |i: u8, j: u8| match board.get_stone(i, j) {
        Color::Black => black += 1,
        Color::White => white += 1,
        Color::Empty => {}
    };
    for i in 0..n {
        tally(i, 0);
        tally(i, n - 1);
    }
    for j in 0..n {
        tally(0, j);
        tally(n - 1, j);
    }
    -(black - white)
}

/// Signed count of stones on star points: Black `+1` each, White `-1`
/// each, unnormalized.
fn brain_hoshi_stones(board: &BoardState) -> i64 {
    let mut total = 0i64;
    for (i, j) in board.points() {
        if board.is_hoshi(i, j) {
            match board.get_stone(i, j) {
                Color::Black => total += 1,
                Color::White => total -= 1,
                Color::Empty => {}
            }
        }
    }
    total
}

/// `diagonal_shapes(Black) - diagonal_shapes(White)`: counts 4-diagonal
/// same-color neighbor pairs whose two shared orthogonal neighbors are
/// both *not* that color, restricted to interior points — the 2x2 block
/// a pair sits in must not touch the last row or column, so every
/// diagonal pair has two in-board orthogonal neighbors to check. Each
/// pair is counted once (not once per endpoint), so no `/2` is needed.
fn brain_kosumi(board: &BoardState) -> i64 {
    let n = board.size();
    if n < 3 {
        return 0;
    }
    let count = |color: Color| -> i64 {
        let mut total = 0i64;
        for i in 0..n - 2 {
            for j in 0..n - 2 {
                // NE diagonal: (i, j) and (i+1, j+1), shared orthogonal
                // neighbors (i+1, j) and (i, j+1).
                if board.get_stone(i, j) == color && board.get_stone(i + 1, j + 1) == color {
                    let shared_a = board.get_stone(i + 1, j) == color;
                    let shared_b = board.get_stone(i, j + 1) == color;
                    if !shared_a && !shared_b {
                        total += 1;
                    }
                }
                // NW diagonal: (i+1, j) and (i, j+1), shared orthogonal
                // neighbors (i, j) and (i+1, j+1).
                if board.get_stone(i + 1, j) == color && board.get_stone(i, j + 1) == color {
                    let shared_a = board.get_stone(i, j) == color;
                    let shared_b = board.get_stone(i + 1, j + 1) == color;
                    if !shared_a && !shared_b {
                        total += 1;
                    }
                }
            }
        }
        total
    };
    count(Color::Black) - count(Color::White)
}

/// Chain-merging analysis across worms. Unimplemented; returns 0
/// unconditionally. Ships with default weight `1` so it never silently
/// perturbs the default evaluation.
fn brain_chains(_worms: &WormIndex) -> i64 {
    0
}

/// Territory-influence map. Unimplemented; returns 0 unconditionally.
/// Ships with default weight `0`.
fn brain_influence(_board: &BoardState) -> i64 {
    0
}
