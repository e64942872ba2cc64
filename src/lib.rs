//! Haigo: a Go (Weiqi) engine with a bitboard core, a flood-fill worm index,
//! fixed-depth minimax search over a handful of weighted heuristics, an SGF
//! subset loader, and a line-oriented controller protocol.
//!
//! ## Modules
//!
//! - [`constants`] - engine-wide limits and defaults
//! - [`error`] - the core's error enum
//! - [`board`] - bitboard board state and stone colors
//! - [`worm`] - flood-fill worm (connected-group) index
//! - [`mov`] - move history and the `play`/`pass`/`undo` legality engine
//! - [`movegen`] - pseudo-legal and legal move generation with ordering
//! - [`brains`] - weighted position evaluators
//! - [`search`] - fixed-depth minimax over the move generator
//! - [`coord`] - vertex parsing and board rendering
//! - [`sgf`] - SGF subset parser
//! - [`engine`] - the aggregate game session
//! - [`protocol`] - the line-oriented controller command loop
//!
//! ## Example
//!
//! ```
//! use haigo::board::Color;
//! use haigo::engine::Engine;
//!
//! let mut engine = Engine::with_size(9).unwrap();
//! engine.play(Color::Black, 2, 2).unwrap();
//! println!("{}", engine.render());
//! ```

pub mod board;
pub mod brains;
pub mod constants;
pub mod coord;
pub mod engine;
pub mod error;
pub mod mov;
pub mod movegen;
pub mod protocol;
pub mod search;
pub mod sgf;
pub mod worm;
