//! Error type shared by the lexicon loader, board construction and the CLI.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The dictionary file could not be opened or read.
    #[error("failed to read dictionary {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A dictionary stream failed part way through.
    #[error("failed to read dictionary: {0}")]
    Read(#[from] io::Error),

    /// A batch file of boards could not be read.
    #[error("failed to read boards {}: {source}", path.display())]
    Boards {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Token count does not match the declared board dimensions.
    #[error("board is {width}x{height} but {tokens} tokens were given")]
    DimensionMismatch {
        width: usize,
        height: usize,
        tokens: usize,
    },

    #[error("board must have a non-zero width and height")]
    EmptyBoard,

    #[error("tile {index} has an empty token")]
    EmptyToken { index: usize },

    /// Square inference was requested for a token count with no integer root.
    #[error("{tokens} tokens cannot form a square board")]
    NotSquare { tokens: usize },

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
