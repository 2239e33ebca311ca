//! Error types
//!
//! Two failure kinds exist: the branch list could not be read, or the
//! terminal could not be driven. Both end the program.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Branch enumeration failed
#[derive(Debug, Error)]
pub enum ListError {
    #[error("not inside a git repository: {}", path.display())]
    NotARepository {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    #[error("failed to query branches")]
    Backend(#[from] git2::Error),

    #[error("branch name is not valid UTF-8")]
    InvalidName,
}

/// The interactive terminal failed to start, run or stop
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("failed to initialize terminal")]
    Setup(#[source] io::Error),

    #[error("failed to restore terminal")]
    Teardown(#[source] io::Error),

    #[error("failed to read input")]
    Input(#[source] io::Error),

    #[error("failed to draw")]
    Draw(#[source] io::Error),
}
