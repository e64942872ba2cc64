//! Domain error kinds for the board/move/search core.
//!
//! A plain tagged enum with a manual `Display` giving each error's
//! protocol-facing wording, rather than a derive-macro error crate.
//! I/O-boundary errors (SGF files, CLI parsing) use `anyhow` instead; see
//! `sgf.rs` and `main.rs`.

use std::fmt;

/// Every way a core operation can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoError {
    /// Requested board size is outside `[BOARD_SIZE_MIN, BOARD_SIZE_MAX]`.
    InvalidSize,
    /// Operation attempted on a board that was never initialized.
    ///
    /// Kept for protocol-surface completeness; this crate's own
    /// construction (`Engine::new`) never leaves the board in this state.
    Uninitialized,
    /// Target vertex is off-board or already occupied.
    OccupiedOrOff,
    /// Move would recapture the simple-ko point.
    KoRecapture,
    /// Move leaves the placed stone's worm with zero liberties.
    Suicide,
    /// Controller supplied an unrecognized color token.
    InvalidColor,
    /// Controller supplied a vertex that does not parse to a board point.
    InvalidCoordinate,
    /// `fixed_handicap` argument is out of range for the current board size.
    InvalidHandicap,
    /// `fixed_handicap` requested on a board that already has moves played.
    BoardNotEmpty,
    /// `undo` called with an empty move history.
    NoMove,
    /// Move history exceeded `MOVE_HISTORY_MAX`; fatal.
    HistoryOverflow,
    /// SGF file could not be read or parsed.
    LoadFailed,
}

impl fmt::Display for GoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            GoError::InvalidSize => "unacceptable size",
            GoError::Uninitialized => "board not initialized",
            GoError::OccupiedOrOff => "illegal move",
            GoError::KoRecapture => "illegal move",
            GoError::Suicide => "illegal move",
            GoError::InvalidColor => "invalid color",
            GoError::InvalidCoordinate => "invalid coordinate",
            GoError::InvalidHandicap => "invalid handicap",
            GoError::BoardNotEmpty => "board not empty",
            GoError::NoMove => "cannot undo",
            GoError::HistoryOverflow => "move history exceeded MOVE_HISTORY_MAX",
            GoError::LoadFailed => "cannot load file",
        };
        write!(f, "{msg}")
    }
}

impl std::error::Error for GoError {}
