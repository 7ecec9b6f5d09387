//! Prefix tree over the dictionary.
//!
//! Words are keyed by their first three characters as a single root key,
//! since no shorter word can ever be found on a board. Everything past the
//! root is a plain one-character-per-level trie:
//!
//! ```text
//! test, tests, testy, testing
//!
//! [tes] -- [t]* -- [i] -- [n] -- [g]*
//!             \
//!              [s]*  [y]*
//! ```
//!
//! A `*` marks a terminal node, where some inserted word ends.

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::{Error, Result};
use crate::MIN_WORD_LENGTH;

/// Why a lookup fell off the tree. Diagnostic only: every reason prunes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Miss {
    /// Shorter than a root key.
    TooShort,
    /// No dictionary word starts with these three characters.
    NoRoot,
    /// Some character past the root has no matching child.
    Deviated,
}

/// Outcome of looking a candidate string up in the lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WordCheck {
    /// No dictionary word has this string as a prefix.
    NotFound(Miss),
    /// The string is a proper prefix of some word but not a word itself.
    Invalid,
    /// The string is a dictionary word.
    Valid,
}

impl WordCheck {
    /// Whether a search should stop extending the current path.
    pub fn is_dead_end(self) -> bool {
        matches!(self, WordCheck::NotFound(_))
    }

    pub fn is_valid(self) -> bool {
        self == WordCheck::Valid
    }
}

impl fmt::Display for WordCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordCheck::NotFound(Miss::TooShort) => write!(f, "not found (too short)"),
            WordCheck::NotFound(Miss::NoRoot) => write!(f, "not found (no word has this prefix)"),
            WordCheck::NotFound(Miss::Deviated) => write!(f, "not found (deviates from every word)"),
            WordCheck::Invalid => write!(f, "prefix only"),
            WordCheck::Valid => write!(f, "valid"),
        }
    }
}

#[derive(Debug, Clone, Default)]
struct Node {
    terminal: bool,
    children: HashMap<char, Node>,
}

/// Dictionary indexed for prefix-aware lookups.
///
/// Read-only once built, so one instance can back any number of concurrent
/// searches.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    roots: HashMap<String, Node>,
    words: usize,
}

/// Split a word into its root key and the remainder, by characters.
fn split_root(word: &str) -> Option<(&str, &str)> {
    let end = word
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .nth(MIN_WORD_LENGTH - 1)?;
    Some(word.split_at(end))
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words.into_iter().collect()
    }

    /// Build from a newline-delimited word source.
    ///
    /// Lines that are not valid UTF-8 are skipped along with words too short
    /// to index. Only I/O failures abort the load.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut lexicon = Self::new();
        let mut skipped = 0usize;
        for line in reader.split(b'\n') {
            let line = line?;
            let Ok(line) = std::str::from_utf8(&line) else {
                skipped += 1;
                continue;
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            if !lexicon.insert(word) {
                skipped += 1;
            }
        }
        info!(
            words = lexicon.words,
            roots = lexicon.roots.len(),
            skipped,
            "lexicon loaded"
        );
        Ok(lexicon)
    }

    /// Load a word list from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let with_path = |source| Error::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(with_path)?;
        Self::from_reader(BufReader::new(file)).map_err(|e| match e {
            Error::Read(source) => with_path(source),
            other => other,
        })
    }

    /// The word list bundled with the crate.
    pub fn embedded() -> Self {
        let lexicon = Self::from_words(include_str!("../dictionary/words.txt").lines().map(str::trim));
        info!(
            words = lexicon.words,
            roots = lexicon.roots.len(),
            "bundled lexicon loaded"
        );
        lexicon
    }

    /// Index one word. Returns `false` if it is too short to be indexed.
    pub fn insert(&mut self, word: &str) -> bool {
        let Some((root, rest)) = split_root(word) else {
            return false;
        };

        let mut node = self.roots.entry(root.to_owned()).or_default();
        for c in rest.chars() {
            node = node.children.entry(c).or_default();
        }
        if !node.terminal {
            node.terminal = true;
            self.words += 1;
        }
        true
    }

    /// Look a candidate string up, distinguishing dead ends from live prefixes.
    pub fn check_word(&self, word: &str) -> WordCheck {
        let Some((root, rest)) = split_root(word) else {
            return WordCheck::NotFound(Miss::TooShort);
        };
        let Some(mut node) = self.roots.get(root) else {
            return WordCheck::NotFound(Miss::NoRoot);
        };
        for c in rest.chars() {
            match node.children.get(&c) {
                Some(child) => node = child,
                None => return WordCheck::NotFound(Miss::Deviated),
            }
        }
        if node.terminal {
            WordCheck::Valid
        } else {
            WordCheck::Invalid
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.check_word(word).is_valid()
    }

    /// Number of distinct words indexed.
    pub fn word_count(&self) -> usize {
        self.words
    }

    /// Number of distinct three-character root keys.
    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }
}

impl<S: AsRef<str>> FromIterator<S> for Lexicon {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut lexicon = Self::new();
        for word in iter {
            lexicon.insert(word.as_ref());
        }
        lexicon
    }
}

impl<S: AsRef<str>> Extend<S> for Lexicon {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}
