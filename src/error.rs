use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("cannot read {path}: {reason}")]
    InputNotFound { path: PathBuf, reason: String },

    #[error("chapter {index} ('{title}'): {reason}")]
    Range {
        index: usize,
        title: String,
        reason: String,
    },

    #[error("chapters '{first}' and '{second}' both resolve to output name '{name}'")]
    NamingCollision {
        first: String,
        second: String,
        name: String,
    },

    #[error("cannot write {path}: {reason}")]
    OutputWrite { path: PathBuf, reason: String },

    #[error("invalid chapter table: {reason}")]
    ChapterTable { reason: String },
}
