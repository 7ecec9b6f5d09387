//! Backtracking word search.
//!
//! A depth-first walk starts from every tile and extends the current path
//! into each unvisited neighbour. After three characters the accumulated
//! string is checked against the lexicon at every step: a dead end stops the
//! walk right there, a live prefix or a complete word keeps it going.

use std::collections::{BTreeMap, BTreeSet};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{neighbor_positions, Board, Position};
use crate::lexicon::{Lexicon, WordCheck};
use crate::MIN_WORD_LENGTH;

/// Found words grouped by length, each group sorted and free of duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordGroups(BTreeMap<usize, Vec<String>>);

impl WordGroups {
    /// Words of exactly `len` characters.
    pub fn get(&self, len: usize) -> Option<&[String]> {
        self.0.get(&len).map(Vec::as_slice)
    }

    /// Word lengths present, ascending.
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[String])> + '_ {
        self.0.iter().map(|(&len, words)| (len, words.as_slice()))
    }

    /// All words, shortest group first.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.values().flatten().map(String::as_str)
    }

    pub fn word_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.get(word.chars().count())
            .is_some_and(|group| group.binary_search_by(|w| w.as_str().cmp(word)).is_ok())
    }

    pub fn into_inner(self) -> BTreeMap<usize, Vec<String>> {
        self.0
    }
}

impl<S: Into<String>> FromIterator<S> for WordGroups {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut groups: BTreeMap<usize, BTreeSet<String>> = BTreeMap::new();
        for word in iter {
            let word = word.into();
            let len = word.chars().count();
            if len < MIN_WORD_LENGTH {
                continue;
            }
            groups.entry(len).or_default().insert(word);
        }
        Self(
            groups
                .into_iter()
                .map(|(len, words)| (len, words.into_iter().collect()))
                .collect(),
        )
    }
}

/// Counters describing how much of the board a search explored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Times a tile was added to the current path.
    pub tiles_entered: u64,
    pub lexicon_checks: u64,
    /// Paths abandoned because no word could follow.
    pub pruned: u64,
    /// Longest path observed, in tiles.
    pub max_depth: usize,
}

/// Everything a single search produced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchReport {
    pub words: WordGroups,
    /// The first path found for each word, in the order it was walked.
    pub paths: BTreeMap<String, Vec<Position>>,
    pub stats: SearchStats,
}

struct Frame {
    pos: Position,
    byte_mark: usize,
    char_mark: usize,
}

/// The word being spelled along the current path.
#[derive(Default)]
struct Accumulator {
    word: String,
    chars: usize,
    frames: Vec<Frame>,
    found: BTreeMap<String, Vec<Position>>,
    stats: SearchStats,
}

impl Accumulator {
    fn push(&mut self, pos: Position, token: &str) {
        self.frames.push(Frame {
            pos,
            byte_mark: self.word.len(),
            char_mark: self.chars,
        });
        self.word.push_str(token);
        self.chars += token.chars().count();

        self.stats.tiles_entered += 1;
        self.stats.max_depth = self.stats.max_depth.max(self.frames.len());
    }

    fn pop(&mut self) {
        if let Some(frame) = self.frames.pop() {
            self.word.truncate(frame.byte_mark);
            self.chars = frame.char_mark;
        }
    }

    fn record(&mut self) {
        if !self.found.contains_key(&self.word) {
            let path = self.frames.iter().map(|f| f.pos).collect();
            self.found.insert(self.word.clone(), path);
        }
    }
}

struct Search<'a> {
    board: &'a mut Board,
    lexicon: &'a Lexicon,
    acc: Accumulator,
}

impl Search<'_> {
    fn run(mut self) -> SearchReport {
        let starts: Vec<Position> = self.board.positions().collect();
        for pos in starts {
            self.visit(pos);
        }

        let Accumulator { found, stats, .. } = self.acc;
        SearchReport {
            words: found.keys().cloned().collect(),
            paths: found,
            stats,
        }
    }

    fn visit(&mut self, pos: Position) {
        let Some(index) = self.board.index(pos) else {
            return;
        };
        let Some(tile) = self.board.tile_at(index) else {
            return;
        };
        if tile.is_visited() {
            return;
        }

        self.acc.push(pos, tile.token());

        if self.acc.chars >= MIN_WORD_LENGTH {
            self.acc.stats.lexicon_checks += 1;
            match self.lexicon.check_word(&self.acc.word) {
                WordCheck::NotFound(_) => {
                    self.acc.stats.pruned += 1;
                    self.acc.pop();
                    return;
                }
                WordCheck::Valid => self.acc.record(),
                WordCheck::Invalid => {}
            }
        }

        self.board.set_visited(index, true);
        for next in neighbor_positions(pos, self.board.width(), self.board.height()) {
            self.visit(next);
        }
        self.board.set_visited(index, false);

        self.acc.pop();
    }
}

impl Board {
    /// Search the board, returning the words together with their paths and
    /// exploration counters.
    ///
    /// Takes `&mut self` because tiles are flagged while on the current path;
    /// every flag is cleared again by the time this returns.
    pub fn search(&mut self, lexicon: &Lexicon) -> SearchReport {
        let tiles = self.len();
        let report = Search {
            board: self,
            lexicon,
            acc: Accumulator::default(),
        }
        .run();

        debug!(
            tiles,
            words = report.words.word_count(),
            tiles_entered = report.stats.tiles_entered,
            pruned = report.stats.pruned,
            max_depth = report.stats.max_depth,
            "board searched"
        );
        report
    }

    pub fn find_words(&mut self, lexicon: &Lexicon) -> WordGroups {
        self.search(lexicon).words
    }
}

/// Find every word on `board`, grouped by length.
pub fn find_words(board: &mut Board, lexicon: &Lexicon) -> WordGroups {
    board.find_words(lexicon)
}

/// Search many boards in parallel against one shared lexicon.
///
/// Results are returned in the same order as `boards`.
pub fn solve_all(boards: &mut [Board], lexicon: &Lexicon) -> Vec<WordGroups> {
    boards
        .par_iter_mut()
        .map(|board| board.find_words(lexicon))
        .collect()
}
