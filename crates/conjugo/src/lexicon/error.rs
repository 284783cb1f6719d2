//! Error and warning types for loading verb data.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that prevent a verb database or override file from loading.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading an input file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON.
    #[error("{path}:{line}:{column}: {message}")]
    Json {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// The JSON is well formed but has the wrong top-level shape.
    #[error("{path}: {message}")]
    Shape { path: PathBuf, message: String },
}

/// A non-fatal problem found while loading.
///
/// The offending record, tag or override is skipped or degraded and loading
/// continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadWarning {
    /// A verb record could not be decoded and was skipped.
    #[error("record {index}: {message}")]
    InvalidRecord { index: usize, message: String },

    /// Two records share a lemma; the later one wins.
    #[error("duplicate lemma '{lemma}', keeping the later record")]
    DuplicateLemma { lemma: String },

    /// A property category outside the known set.
    #[error("'{lemma}': unknown property category '{category}'")]
    UnknownCategory { lemma: String, category: String },

    /// A tag that does not follow the tag grammar; kept verbatim.
    #[error("'{lemma}': malformed tag '{tag}': {message}")]
    MalformedTag {
        lemma: String,
        tag: String,
        message: String,
    },

    /// An override entry that is not a JSON object and was skipped.
    #[error("override for '{lemma}': {message}")]
    InvalidOverride { lemma: String, message: String },
}

/// Errors that reject a single verb record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("record has an empty lemma")]
    EmptyLemma,

    #[error("'{lemma}' has {count} principal parts, at most 3 are allowed")]
    TooManyPrincipalParts { lemma: String, count: usize },
}

/// A tag that does not match `name` or `name(args)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagParseError {
    #[error("syntax error at column {column}: {message}")]
    Syntax { column: usize, message: String },
}
