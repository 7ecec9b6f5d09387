//! # Boggle Solver
//!
//! Finds every dictionary word that can be traced on a Boggle board by
//! chaining adjacent tiles, without using any tile twice in one word.
//!
//! The dictionary is held in a prefix tree so that the backtracking search can
//! abandon a path as soon as its letters stop leading to any word.
//!
//! ```
//! use boggle_solver::{find_words, Board, Lexicon};
//!
//! let lexicon = Lexicon::from_words(["cat", "cats", "car", "care"]);
//! let mut board = Board::new(2, 2, ["c", "a", "s", "t"])?;
//! let words = find_words(&mut board, &lexicon);
//!
//! assert_eq!(words.get(3), Some(&["cat".to_string()][..]));
//! assert_eq!(words.get(4), Some(&["cats".to_string()][..]));
//! # Ok::<(), boggle_solver::Error>(())
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod search;

pub use board::{Board, Position, Tile};
pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use lexicon::{Lexicon, Miss, WordCheck};
pub use search::{find_words, solve_all, SearchReport, SearchStats, WordGroups};

/// Shortest word the solver will report. Also the length of a lexicon root key.
pub const MIN_WORD_LENGTH: usize = 3;
