#![deny(clippy::disallowed_methods)]

pub mod dictionary;
pub mod grid;
pub mod scan;

pub use dictionary::{load_dictionary, load_dictionary_file, new_dictionary, Dictionary, LoadError};
pub use grid::{parse_grid, Grid, GridError};
pub use scan::{scan, Direction, Match, MAX_WORD_LEN, MIN_WORD_LEN};
