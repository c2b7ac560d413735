use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use qprobe::HashSet;
use thiserror::Error;
use tracing::debug;

pub type Dictionary = HashSet<String>;

// twice the expected word count keeps the table under half full without a rehash
pub fn new_dictionary(expected_words: usize) -> Dictionary {
    HashSet::with_capacity(expected_words.saturating_mul(2))
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to open dictionary {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read dictionary after {loaded} words")]
    Read {
        loaded: usize,
        #[source]
        source: io::Error,
    },
}

/// Inserts every line of `reader`, blank ones included, and returns how many
/// were new.
///
/// A read error stops the load. Words inserted before the error stay in
/// `dictionary`.
pub fn load_dictionary<R: BufRead>(
    reader: R,
    dictionary: &mut Dictionary,
) -> Result<usize, LoadError> {
    let mut loaded = 0;
    for line in reader.lines() {
        let word = line.map_err(|source| LoadError::Read { loaded, source })?;
        if dictionary.insert(word) {
            loaded += 1;
        }
    }
    debug!(loaded, capacity = dictionary.capacity(), "dictionary loaded");
    Ok(loaded)
}

pub fn load_dictionary_file(
    path: impl AsRef<Path>,
    dictionary: &mut Dictionary,
) -> Result<usize, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_owned(),
        source,
    })?;
    load_dictionary(BufReader::new(file), dictionary)
}
