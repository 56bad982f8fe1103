//! In-memory live scoreboard for two-team matches.
//!
//! [`Board`] tracks active matches keyed by their ordered (home, away) pair,
//! accepts score updates and produces a ranked summary: highest combined
//! score first, ties going to the most recently started match.
//!
//! ```
//! use live_scoreboard::Board;
//!
//! let mut board = Board::new();
//! board.start("Mexico", "Canada")?;
//! board.start("Spain", "Brazil")?;
//! board.update_score("Spain", "Brazil", 10, 2)?;
//!
//! let lines: Vec<String> = board.summary().iter().map(|e| e.to_string()).collect();
//! assert_eq!(lines, ["Spain 10 - Brazil 2", "Mexico 0 - Canada 0"]);
//! # Ok::<(), live_scoreboard::BoardError>(())
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod script;

pub use board::{Board, Match, MatchKey, SharedBoard, SummaryEntry};
pub use error::BoardError;
