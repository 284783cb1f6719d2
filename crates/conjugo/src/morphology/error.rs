//! Errors raised while assembling paradigms.

use thiserror::Error;

/// An irregular override that could not be merged into a generated paradigm.
#[derive(Debug, Error)]
pub enum MergeError {
    /// The generated paradigm could not be serialized for merging.
    #[error("failed to encode '{lemma}': {source}")]
    Encode {
        lemma: String,
        #[source]
        source: serde_json::Error,
    },

    /// The merged tree no longer matches the paradigm layout.
    #[error("override for '{lemma}' does not fit the paradigm layout: {source}")]
    Decode {
        lemma: String,
        #[source]
        source: serde_json::Error,
    },
}
