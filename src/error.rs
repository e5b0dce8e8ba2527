// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to fetch template from gitignore.io: {0}")]
    Fetch(String),

    #[error(".gitignore file does not exist at {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read confirmation: {0}")]
    Prompt(#[source] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
