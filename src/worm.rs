//! The worm index: flood-fill-derived connected-component labels, rebuilt
//! from scratch after every committed board mutation.
//!
//! Each unlabeled point starts a breadth-first flood fill over its
//! 4-connected same-color neighborhood via an explicit `VecDeque` work
//! queue, rather than per-neighbor recursion, to keep stack depth
//! independent of board size at `N = 25`.

use std::collections::{HashSet, VecDeque};

use crate::board::{BoardState, Color};

/// A single maximal 4-connected region of one color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Worm {
    pub size: u32,
    pub liberty_count: u32,
}

/// Per-color worm labels and worm table, derived from a `BoardState`.
///
/// `worm_of[c][p]` is `0` until `scan` has run, and stays `0` for any point
/// not of color `c`. Worm ids start at `1`; `worms[c][0]` is an unused
/// placeholder kept so `worms[c].len() == free_worm_id(c)`.
#[derive(Debug, Clone)]
pub struct WormIndex {
    size: u8,
    worm_of: [Vec<u32>; 3],
    worms: [Vec<Worm>; 3],
}

impl WormIndex {
    /// Allocates an index for a board of the given size, with no scan run
    /// yet (every `worm_of` entry reads `0`).
    pub fn new(size: u8) -> Self {
        let n = size as usize * size as usize;
        WormIndex {
            size,
            worm_of: [vec![0u32; n], vec![0u32; n], vec![0u32; n]],
            worms: [vec![Worm::default()], vec![Worm::default()], vec![Worm::default()]],
        }
    }

    #[inline]
    fn point_index(&self, i: u8, j: u8) -> usize {
        j as usize * self.size as usize + i as usize
    }

    /// Recomputes every color's worm labels and worm table from `board`.
    /// Total function of the board's current bits; cannot fail.
    pub fn scan(&mut self, board: &BoardState) {
        for worm_of in self.worm_of.iter_mut() {
            worm_of.iter_mut().for_each(|x| *x = 0);
        }
        for worms in self.worms.iter_mut() {
            worms.clear();
            worms.push(Worm::default());
        }

        for (i, j) in board.points() {
            let color = board.get_stone(i, j);
            let ci = color.index();
            if self.worm_of[ci][self.point_index(i, j)] != 0 {
                continue;
            }

            let id = self.worms[ci].len() as u32;
            let mut queue = VecDeque::new();
            queue.push_back((i, j));
            self.worm_of[ci][self.point_index(i, j)] = id;

            let mut size = 0u32;
            let mut liberties = HashSet::new();
            while let Some((ci2, cj2)) = queue.pop_front() {
                size += 1;
                for (ni, nj) in board.neighbors(ci2, cj2) {
                    let neighbor_color = board.get_stone(ni, nj);
                    if neighbor_color == color {
                        let nidx = self.point_index(ni, nj);
                        if self.worm_of[ci][nidx] == 0 {
                            self.worm_of[ci][nidx] = id;
                            queue.push_back((ni, nj));
                        }
                    } else if color != Color::Empty && neighbor_color == Color::Empty {
                        liberties.insert((ni, nj));
                    }
                }
            }

            let liberty_count = if color == Color::Empty { 0 } else { liberties.len() as u32 };
            self.worms[ci].push(Worm { size, liberty_count });
        }
    }

    /// The worm id at `(i, j)` for `color`, or `0` if that point is not
    /// `color`.
    #[inline]
    pub fn worm_of(&self, color: Color, i: u8, j: u8) -> u32 {
        self.worm_of[color.index()][self.point_index(i, j)]
    }

    /// Stone count of worm `id` of `color`, or `0` for an unknown id.
    pub fn worm_size(&self, color: Color, id: u32) -> u32 {
        self.worms[color.index()]
            .get(id as usize)
            .map(|w| w.size)
            .unwrap_or(0)
    }

    /// Liberty count of worm `id` of `color`, or `0` for an unknown id.
    pub fn worm_liberties(&self, color: Color, id: u32) -> u32 {
        self.worms[color.index()]
            .get(id as usize)
            .map(|w| w.liberty_count)
            .unwrap_or(0)
    }

    /// The next id that would be assigned to a new worm of `color`.
    #[inline]
    pub fn free_worm_id(&self, color: Color) -> u32 {
        self.worms[color.index()].len() as u32
    }

    /// Total stones of `color` sitting in a one-liberty worm.
    pub fn count_atari(&self, color: Color) -> u32 {
        self.worms[color.index()][1..]
            .iter()
            .filter(|w| w.liberty_count == 1)
            .map(|w| w.size)
            .sum()
    }

    /// Sum of liberty counts over every worm of `color`.
    pub fn count_group_liberties(&self, color: Color) -> u32 {
        self.worms[color.index()][1..]
            .iter()
            .map(|w| w.liberty_count)
            .sum()
    }

    /// Number of distinct worms of `color` (excludes the unused id-0 slot).
    pub fn worm_count(&self, color: Color) -> u32 {
        self.free_worm_id(color) - 1
    }
}
