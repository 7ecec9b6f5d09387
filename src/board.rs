//! The tile grid.
//!
//! Tiles are stored row-major: tile `(x, y)` lives at index `y * width + x`.
//! The only mutable state is each tile's `visited` flag, which a search sets
//! while the tile is on its current path and always clears before returning.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Neighbour offsets, clockwise starting from the tile to the right.
///
/// ```text
/// 6 7 8
/// 5 . 1
/// 4 3 2
/// ```
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// A tile coordinate, `x` across and `y` down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// True if the two positions are distinct and touch, diagonals included.
    pub fn is_adjacent(self, other: Position) -> bool {
        self != other && self.x.abs_diff(other.x) <= 1 && self.y.abs_diff(other.y) <= 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One cell of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    token: String,
    visited: bool,
}

impl Tile {
    fn new(token: String) -> Self {
        Self {
            token,
            visited: false,
        }
    }

    /// The letter, or letter group such as "qu", painted on the tile.
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Board {
    /// Build a board from tokens listed row by row.
    ///
    /// Fails if the token count does not match `width * height` or any
    /// token is empty. Tokens are otherwise taken as given.
    pub fn new<I, S>(width: usize, height: usize, tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if width == 0 || height == 0 {
            return Err(Error::EmptyBoard);
        }

        let tiles: Vec<Tile> = tokens.into_iter().map(|t| Tile::new(t.into())).collect();
        if width.checked_mul(height) != Some(tiles.len()) {
            return Err(Error::DimensionMismatch {
                width,
                height,
                tokens: tiles.len(),
            });
        }
        if let Some(index) = tiles.iter().position(|t| t.token.is_empty()) {
            return Err(Error::EmptyToken { index });
        }

        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    /// Parse a textual board such as `"a,b,c,qu"` or `"a b c qu"`.
    ///
    /// Tokens may be separated by commas, whitespace or both, and are
    /// lower-cased.
    pub fn parse(input: &str, width: usize, height: usize) -> Result<Self> {
        Self::new(width, height, tokenize(input))
    }

    /// Parse a textual board, inferring a square shape from the token count.
    pub fn parse_square(input: &str) -> Result<Self> {
        Self::parse_shape(input, None, None)
    }

    /// Parse a textual board where either dimension may be left out.
    ///
    /// A missing dimension is derived from the token count; with neither
    /// given the board must be square.
    pub fn parse_shape(input: &str, width: Option<usize>, height: Option<usize>) -> Result<Self> {
        let tokens = tokenize(input);
        let count = tokens.len();
        let (width, height) = match (width, height) {
            (Some(w), Some(h)) => (w, h),
            (Some(w), None) if w > 0 => (w, count / w),
            (None, Some(h)) if h > 0 => (count / h, h),
            (Some(_), None) | (None, Some(_)) => return Err(Error::EmptyBoard),
            (None, None) => {
                let side = square_side(count).ok_or(Error::NotSquare { tokens: count })?;
                (side, side)
            }
        };
        Self::new(width, height, tokens)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tile(&self, pos: Position) -> Option<&Tile> {
        self.index(pos).map(|i| &self.tiles[i])
    }

    /// Tokens in row-major order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.tiles.iter().map(Tile::token)
    }

    /// Every position on the board, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Position::new(x, y)))
    }

    /// In-bounds neighbours of `pos`, clockwise from the right.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> {
        neighbor_positions(pos, self.width, self.height)
    }

    /// True if no tile is currently marked as visited.
    pub fn is_settled(&self) -> bool {
        self.tiles.iter().all(|t| !t.visited)
    }

    /// Flat index for an in-bounds position.
    pub(crate) fn index(&self, pos: Position) -> Option<usize> {
        (pos.x < self.width && pos.y < self.height).then_some(pos.y * self.width + pos.x)
    }

    pub(crate) fn tile_at(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    pub(crate) fn set_visited(&mut self, index: usize, visited: bool) {
        if let Some(tile) = self.tiles.get_mut(index) {
            tile.visited = visited;
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell = self
            .tiles
            .iter()
            .map(|t| t.token.chars().count())
            .max()
            .unwrap_or(1)
            + 2;
        let inner = cell * self.width;

        writeln!(f, "┌{}┐", "─".repeat(inner))?;
        for row in self.tiles.chunks(self.width) {
            f.write_str("│")?;
            for tile in row {
                write!(f, "{:^cell$}", tile.token.to_uppercase())?;
            }
            writeln!(f, "│")?;
        }
        write!(f, "└{}┘", "─".repeat(inner))
    }
}

/// Neighbours of `pos` on a `width x height` grid. Owns nothing from the
/// board, so a search can keep mutating tiles while iterating.
pub(crate) fn neighbor_positions(
    pos: Position,
    width: usize,
    height: usize,
) -> impl Iterator<Item = Position> {
    NEIGHBOR_OFFSETS.into_iter().filter_map(move |(dx, dy)| {
        let x = pos.x.checked_add_signed(dx)?;
        let y = pos.y.checked_add_signed(dy)?;
        (x < width && y < height).then_some(Position::new(x, y))
    })
}

fn tokenize(input: &str) -> Vec<String> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn square_side(n: usize) -> Option<usize> {
    if n == 0 {
        return None;
    }
    let side = (n as f64).sqrt().round() as usize;
    (side * side == n).then_some(side)
}
