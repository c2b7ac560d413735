use std::{iter::successors, num::NonZeroUsize};

use nom::{Finish, IResult};
use thiserror::Error;

/// Rectangular letter grid stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: NonZeroUsize,
    cols: NonZeroUsize,
    cells: Vec<char>,
}

#[derive(Error, Debug)]
pub enum GridError {
    #[error("parsing error")]
    Nom(#[from] nom::error::Error<String>),
    #[error("number of rows or columns is 0")]
    HasZeroDimension,
    #[error("a {rows}x{cols} grid doesn't fit a usize")]
    TooLarge { rows: usize, cols: usize },
    #[error("expected {expected} letters, found {found}")]
    TooFewLetters { expected: usize, found: usize },
    #[error("row {row} has {found} letters, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl Grid {
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let first = rows.first().ok_or(GridError::HasZeroDimension)?;
        let cols = first.as_ref().chars().count();
        let len = rows.len().checked_mul(cols).ok_or(GridError::TooLarge {
            rows: rows.len(),
            cols,
        })?;
        let mut cells = Vec::with_capacity(len);
        for (row, letters) in rows.iter().enumerate() {
            let before = cells.len();
            cells.extend(letters.as_ref().chars());
            if cells.len() - before != cols {
                return Err(GridError::RaggedRow {
                    row,
                    expected: cols,
                    found: cells.len() - before,
                });
            }
        }
        Ok(Grid {
            rows: NonZeroUsize::new(rows.len()).ok_or(GridError::HasZeroDimension)?,
            cols: NonZeroUsize::new(cols).ok_or(GridError::HasZeroDimension)?,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows.get()
    }

    pub fn cols(&self) -> usize {
        self.cols.get()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row < self.rows() && col < self.cols() {
            Some(self.cells[row * self.cols() + col])
        } else {
            None
        }
    }

    // letters from (row, col) stepping by (drow, dcol) until the grid edge
    pub fn ray(
        &self,
        row: usize,
        col: usize,
        (drow, dcol): (isize, isize),
    ) -> impl Iterator<Item = char> + '_ {
        successors(Some((row, col)), move |&(r, c)| {
            Some((r.checked_add_signed(drow)?, c.checked_add_signed(dcol)?))
        })
        .map_while(move |(r, c)| self.get(r, c))
    }
}

/// Parses the puzzle format: the row count and the column count on their own
/// lines, then a single line holding the letters row after row.
///
/// Letters past `rows * cols` are ignored.
pub fn parse_grid(input: &str) -> Result<Grid, GridError> {
    fn inner(input: &str) -> IResult<&str, (usize, usize, &str)> {
        use nom::{
            character::complete::{digit1, line_ending, not_line_ending, space0},
            combinator::map_res,
            sequence::{delimited, pair},
        };

        fn dimension(input: &str) -> IResult<&str, usize> {
            delimited(
                space0,
                map_res(digit1, str::parse),
                pair(space0, line_ending),
            )(input)
        }

        let (input, rows) = dimension(input)?;
        let (input, cols) = dimension(input)?;
        let (input, letters) = not_line_ending(input)?;
        Ok((input, (rows, cols, letters)))
    }

    let (_, (rows, cols, letters)) =
        inner(input)
            .finish()
            .map_err(|nom::error::Error { input, code }| nom::error::Error {
                input: input.to_string(),
                code,
            })?;
    let (rows, cols) = (
        NonZeroUsize::new(rows).ok_or(GridError::HasZeroDimension)?,
        NonZeroUsize::new(cols).ok_or(GridError::HasZeroDimension)?,
    );
    let expected = rows
        .get()
        .checked_mul(cols.get())
        .ok_or(GridError::TooLarge {
            rows: rows.get(),
            cols: cols.get(),
        })?;
    let cells: Vec<char> = letters.chars().take(expected).collect();
    if cells.len() < expected {
        return Err(GridError::TooFewLetters {
            expected,
            found: cells.len(),
        });
    }
    Ok(Grid { rows, cols, cells })
}
