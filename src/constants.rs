//! Engine-wide limits and defaults.
//!
//! Board size is a runtime value (`N` in `[2, 25]`), chosen by
//! `boardsize`/`loadsgf` rather than fixed at compile time.

/// Smallest accepted board size.
pub const BOARD_SIZE_MIN: u8 = 2;

/// Largest accepted board size.
pub const BOARD_SIZE_MAX: u8 = 25;

/// Board size used when none is given at startup.
pub const BOARD_SIZE_DEFAULT: u8 = 19;

/// Bound on the move history ring; pushing past this is `HistoryOverflow`.
pub const MOVE_HISTORY_MAX: usize = 1024;

/// Hard cap on search depth accepted by `genmove`/`search_tree`.
pub const MAX_SEARCH_DEPTH: u32 = 9;

/// Search depth used when none has been configured.
pub const DEFAULT_SEARCH_DEPTH: u32 = 2;

/// Default brain weights, in `brains::BrainKind::ALL` order:
/// `{Capture:82, Atari:15, AvgLiberties:1, EdgeStones:1, HoshiStones:0, Kosumi:4, Chains:1, Influence:0}`
pub const DEFAULT_WEIGHTS: [i64; 8] = [82, 15, 1, 1, 0, 4, 1, 0];

/// Protocol version string reported by `protocol_version`.
pub const PROTOCOL_VERSION: &str = "2";

/// Program identity reported by `name`.
pub const PROGRAM_NAME: &str = "haigo";

/// Default komi, the standard compensation value for a 7.5-point komi.
pub const DEFAULT_KOMI: f32 = 7.5;
