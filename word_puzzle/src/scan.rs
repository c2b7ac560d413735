use std::{fmt, hash::BuildHasher};

use itertools::{iproduct, Either};
use qprobe::HashSet;

use crate::grid::Grid;

pub const MIN_WORD_LEN: usize = 3;
pub const MAX_WORD_LEN: usize = 23;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    South,
    West,
    North,
    SouthEast,
    SouthWest,
    NorthWest,
    NorthEast,
}

impl Direction {
    // scan order
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::North,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
        Direction::NorthEast,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Direction::East => "E",
            Direction::South => "S",
            Direction::West => "W",
            Direction::North => "N",
            Direction::SouthEast => "SE",
            Direction::SouthWest => "SW",
            Direction::NorthWest => "NW",
            Direction::NorthEast => "NE",
        }
    }

    /// `(drow, dcol)` of one step, rows growing southward.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
            Direction::North => (-1, 0),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (1, -1),
            Direction::NorthWest => (-1, -1),
            Direction::NorthEast => (-1, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub word: String,
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}): {}",
            self.row, self.col, self.direction, self.word
        )
    }
}

/// Looks up every run of `MIN_WORD_LEN..=MAX_WORD_LEN` letters in every
/// direction from every cell.
///
/// Matches come grouped by direction in `Direction::ALL` order. Within a
/// direction rows are visited top down, or bottom up when the direction
/// heads north, and columns left to right, or right to left when it heads
/// west. Shorter words come first from one cell.
pub fn scan<S: BuildHasher>(grid: &Grid, dictionary: &HashSet<String, S>) -> Vec<Match> {
    let mut matches = Vec::new();
    for direction in Direction::ALL {
        let (drow, dcol) = direction.delta();
        let rows = span(grid.rows(), drow < 0);
        let cols = span(grid.cols(), dcol < 0);
        for (row, col) in iproduct!(rows, cols) {
            scan_from(grid, dictionary, row, col, direction, &mut matches);
        }
    }
    matches
}

// start indices, counting down when the ray runs toward index 0
fn span(len: usize, reversed: bool) -> impl Iterator<Item = usize> + Clone {
    if reversed {
        Either::Right((0..len).rev())
    } else {
        Either::Left(0..len)
    }
}

fn scan_from<S: BuildHasher>(
    grid: &Grid,
    dictionary: &HashSet<String, S>,
    row: usize,
    col: usize,
    direction: Direction,
    matches: &mut Vec<Match>,
) {
    let mut word = String::new();
    for (len, letter) in (1..).zip(grid.ray(row, col, direction.delta()).take(MAX_WORD_LEN)) {
        word.push(letter);
        if len >= MIN_WORD_LEN && dictionary.contains(word.as_str()) {
            matches.push(Match {
                row,
                col,
                direction,
                word: word.clone(),
            });
        }
    }
}
