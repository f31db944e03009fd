use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a conversion run.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("record {key} in {}: {reason}", path.display())]
    Shape {
        path: PathBuf,
        key: String,
        reason: String,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("cannot scale record {key}: {reason}")]
    Computation { key: String, reason: String },

    #[error("cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Feature and label datasets disagree with each other or with the config.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("feature count ({features}) does not match label count ({labels})")]
    LengthMismatch { features: usize, labels: usize },

    #[error("feature record {key} is missing")]
    MissingFeature { key: String },

    #[error("label record {key} is missing")]
    MissingLabel { key: String },

    #[error("feature record {key} has {found} columns, expected {expected}")]
    ColumnMismatch {
        key: String,
        expected: usize,
        found: usize,
    },

    #[error("label {key} has value {value:?}, which is not a declared class value")]
    UnknownClass { key: String, value: String },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
