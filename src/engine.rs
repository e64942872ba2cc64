//! The `Engine` aggregate: a single value owning the board, worm index,
//! move history, brain weights, komi, and search depth.
//!
//! Every mutating controller command is a method that takes and returns
//! ordinary values rather than touching module-scope state, so an
//! `Engine` is always valid from construction onward and independent
//! engines can run side by side.

use crate::board::{BoardState, Color};
use crate::brains::Weights;
use crate::constants::{BOARD_SIZE_DEFAULT, DEFAULT_KOMI, DEFAULT_SEARCH_DEPTH, MAX_SEARCH_DEPTH};
use crate::coord;
use crate::error::GoError;
use crate::mov::{self, MoveHistory};
use crate::search::{self, SearchStats};
use crate::sgf;
use crate::worm::WormIndex;

/// Owns every piece of mutable state a game session needs.
#[derive(Debug, Clone)]
pub struct Engine {
    board: BoardState,
    worms: WormIndex,
    history: MoveHistory,
    weights: Weights,
    komi: f32,
    search_depth: u32,
}

impl Engine {
    /// A fresh engine at the default board size, default weights, default
    /// komi, and an empty history.
    pub fn new() -> Self {
        Self::with_size(BOARD_SIZE_DEFAULT).expect("default board size is always valid")
    }

    /// A fresh engine at a specific starting size.
    pub fn with_size(size: u8) -> Result<Self, GoError> {
        let board = BoardState::new(size)?;
        let worms = WormIndex::new(size);
        Ok(Engine {
            board,
            worms,
            history: MoveHistory::new(),
            weights: Weights::default(),
            komi: DEFAULT_KOMI,
            search_depth: DEFAULT_SEARCH_DEPTH,
        })
    }

    pub fn size(&self) -> u8 {
        self.board.size()
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn set_weight(&mut self, kind: crate::brains::BrainKind, value: i64) {
        self.weights.set(kind, value);
    }

    pub fn komi(&self) -> f32 {
        self.komi
    }

    pub fn set_search_depth(&mut self, depth: u32) -> Result<(), GoError> {
        if depth > MAX_SEARCH_DEPTH {
            return Err(GoError::InvalidSize);
        }
        self.search_depth = depth;
        Ok(())
    }

    /// `boardsize <N>`: reallocates the board and worm index at the new
    /// size and resets the move history.
    pub fn boardsize(&mut self, size: u8) -> Result<(), GoError> {
        self.board = BoardState::new(size)?;
        self.worms = WormIndex::new(size);
        self.history = MoveHistory::new();
        Ok(())
    }

    /// `clear_board`: resets stones, captures, and history at the current
    /// size.
    pub fn clear_board(&mut self) {
        self.board.clear();
        self.worms = WormIndex::new(self.board.size());
        self.history = MoveHistory::new();
    }

    /// `komi <f>`: stores a komi value. Scoring is out of scope; this is
    /// bookkeeping only.
    pub fn set_komi(&mut self, komi: f32) {
        self.komi = komi;
    }

    /// `fixed_handicap <k>`: places `k` handicap stones at the canonical
    /// points for the current board size and returns their vertices in
    /// placement order.
    pub fn fixed_handicap(&mut self, handicap: u32) -> Result<Vec<(u8, u8)>, GoError> {
        if !self.history.is_empty() {
            return Err(GoError::BoardNotEmpty);
        }

        let size = self.board.size();
        if size <= 6 {
            return Err(GoError::InvalidHandicap);
        }

        let edge_distance: u8 = if size > 12 { 4 } else { 3 };
        let max_handicap: u32 = if size == 7 {
            4
        } else if size % 2 == 0 {
            4
        } else {
            9
        };
        if !(2..=max_handicap).contains(&handicap) {
            return Err(GoError::InvalidHandicap);
        }

        let mut points = Vec::new();
        let mut place = |engine: &mut Engine, i: u8, j: u8| {
            engine.board.set_stone(Color::Black, i, j);
            points.push((i, j));
        };

        place(self, size - edge_distance, size - edge_distance);
        place(self, edge_distance - 1, edge_distance - 1);
        if handicap == 2 {
            self.worms.scan(&self.board);
            return Ok(points);
        }

        place(self, size - edge_distance, edge_distance - 1);
        if handicap == 3 {
            self.worms.scan(&self.board);
            return Ok(points);
        }

        place(self, edge_distance - 1, size - edge_distance);
        if handicap == 4 {
            self.worms.scan(&self.board);
            return Ok(points);
        }

        if matches!(handicap, 5 | 7 | 9) {
            place(self, size / 2, size / 2);
        }
        if handicap == 5 {
            self.worms.scan(&self.board);
            return Ok(points);
        }

        place(self, edge_distance - 1, size / 2);
        place(self, size - edge_distance, size / 2);
        if matches!(handicap, 6 | 7) {
            self.worms.scan(&self.board);
            return Ok(points);
        }

        place(self, size / 2, edge_distance - 1);
        place(self, size / 2, size - edge_distance);
        self.worms.scan(&self.board);
        Ok(points)
    }

    /// `play <color> <vertex>`: the full legality-checked placement of
    /// §4.3.
    pub fn play(&mut self, color: Color, i: u8, j: u8) -> Result<(), GoError> {
        mov::play(&mut self.board, &mut self.worms, &mut self.history, color, i, j)
    }

    /// Records a pass for `color`.
    pub fn pass(&mut self, color: Color) -> Result<(), GoError> {
        mov::pass(&mut self.history, color)
    }

    /// `undo`: pops and reverses the last move.
    pub fn undo(&mut self) -> Result<(), GoError> {
        mov::undo(&mut self.board, &mut self.worms, &mut self.history)
    }

    /// `genmove <color>`: runs the configured search and commits its
    /// chosen move (playing it, or passing if no legal move exists).
    pub fn genmove(&mut self, color: Color) -> SearchStats {
        let stats = search::search_tree(
            &mut self.board,
            &mut self.worms,
            &mut self.history,
            &self.weights,
            color,
            self.search_depth,
        );
        match stats.mv {
            search::SelectedMove::Play(i, j) => {
                self.play(color, i, j).expect("search only returns legal moves");
            }
            search::SelectedMove::Pass => {
                self.pass(color).expect("pass always succeeds while history has room");
            }
        }
        stats
    }

    /// `showboard`: renders the current position.
    pub fn render(&self) -> String {
        coord::render(&self.board)
    }

    /// `loadsgf <path> [<move_number>]`'s post-read half: applies the
    /// parsed SGF's main-line nodes in order, dispatching `SZ`/`KO`/`AB`/
    /// `AW`/`B`/`W` properties, stopping once a node whose number equals
    /// `stop_at` has been applied.
    pub fn load_sgf(&mut self, content: &str, stop_at: Option<usize>) -> Result<(), GoError> {
        let nodes = sgf::parse(content)?;

        for node in nodes.iter().take_while(|n| n.is_main) {
            for property in &node.properties {
                match property.name.as_str() {
                    "FF" => {}
                    "SZ" => {
                        let size: u8 = property
                            .values
                            .first()
                            .and_then(|v| v.parse().ok())
                            .ok_or(GoError::LoadFailed)?;
                        self.boardsize(size).map_err(|_| GoError::LoadFailed)?;
                    }
                    "KO" => {
                        let komi: f32 = property
                            .values
                            .first()
                            .and_then(|v| v.parse().ok())
                            .ok_or(GoError::LoadFailed)?;
                        self.set_komi(komi);
                    }
                    "AB" | "AW" => {
                        let color = if property.name == "AB" { Color::Black } else { Color::White };
                        for value in &property.values {
                            let (i, j) = sgf::decode_vertex(value, self.board.size())?
                                .ok_or(GoError::LoadFailed)?;
                            self.board.set_stone(color, i, j);
                        }
                        self.worms.scan(&self.board);
                    }
                    "B" | "W" => {
                        let color = if property.name == "B" { Color::Black } else { Color::White };
                        match sgf::decode_vertex(
                            property.values.first().map(String::as_str).unwrap_or(""),
                            self.board.size(),
                        )? {
                            Some((i, j)) => self.play(color, i, j).map_err(|_| GoError::LoadFailed)?,
                            None => self.pass(color).map_err(|_| GoError::LoadFailed)?,
                        }
                    }
                    _ => continue,
                }
            }
            if Some(node.number) == stop_at {
                break;
            }
        }
        Ok(())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}
