//! Error types for stylesheet generation.

use std::{path::PathBuf, result};

/// Errors reported for a single entry. None of them should stop a batch.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{}: streaming is not supported", .0.display())]
    StreamingNotSupported(PathBuf),

    #[error("{}: file name is not valid UTF-8", .0.display())]
    InvalidFileName(PathBuf),
}

pub type Result<T> = result::Result<T, Error>;
