use std::path::PathBuf;

use clap::ValueEnum;

use crate::board::Board;
use crate::error::Result;
use crate::lexicon::Lexicon;

/// How the CLI prints results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Runtime configuration for the command-line front end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Word list to load. The bundled list is used when unset.
    pub dictionary: Option<PathBuf>,
    /// Board width; inferred from the token count when unset.
    pub width: Option<usize>,
    /// Board height; inferred from the token count when unset.
    pub height: Option<usize>,
    pub format: OutputFormat,
    /// Print the tile path for each word found.
    pub show_paths: bool,
}

impl Config {
    pub fn load_lexicon(&self) -> Result<Lexicon> {
        match &self.dictionary {
            Some(path) => Lexicon::load(path),
            None => Ok(Lexicon::embedded()),
        }
    }

    pub fn parse_board(&self, input: &str) -> Result<Board> {
        Board::parse_shape(input, self.width, self.height)
    }
}
