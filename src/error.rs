use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid letter {letter:?} in word {word:?}")]
    InvalidLetter { word: String, letter: char },

    #[error("could not read word list {path}: {source}")]
    ReadWords {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(
        "scratch buffer capacity {capacity} exceeded for first words #{first} and #{second}"
    )]
    ScratchCapacity {
        capacity: usize,
        first: usize,
        second: usize,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("could not build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
