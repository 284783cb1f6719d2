//! Hand-authored irregular paradigm overrides.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::lexicon::error::{LoadError, LoadWarning};

/// Sparse paradigm trees keyed by lemma.
///
/// Each entry uses the serialized branch names of
/// [`Paradigm`](crate::Paradigm) and is merged over the generated paradigm.
#[derive(Debug, Default, Clone)]
pub struct IrregularTable {
    entries: HashMap<String, Value>,
    warnings: Vec<LoadWarning>,
}

impl IrregularTable {
    /// A table with no overrides.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load overrides from a file. A whitespace-only file is an empty table.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::load_internal(&content, path)
    }

    /// Load overrides from a string.
    pub fn load_str(content: &str) -> Result<Self, LoadError> {
        Self::load_internal(content, Path::new("<string>"))
    }

    fn load_internal(content: &str, path: &Path) -> Result<Self, LoadError> {
        if content.trim().is_empty() {
            return Ok(Self::empty());
        }
        let value: Value = serde_json::from_str(content).map_err(|e| LoadError::Json {
            path: path.to_path_buf(),
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        })?;
        let Value::Object(object) = value else {
            return Err(LoadError::Shape {
                path: path.to_path_buf(),
                message: "expected a JSON object mapping lemmas to paradigms".to_string(),
            });
        };

        let mut table = Self::empty();
        for (lemma, entry) in object {
            if entry.is_object() {
                table.entries.insert(lemma, entry);
            } else {
                table.warnings.push(LoadWarning::InvalidOverride {
                    lemma,
                    message: "expected a JSON object".to_string(),
                });
            }
        }
        debug!(
            path = %path.display(),
            overrides = table.len(),
            warnings = table.warnings.len(),
            "loaded irregular overrides"
        );
        Ok(table)
    }

    /// Add or replace one override.
    pub fn insert(&mut self, lemma: impl Into<String>, entry: Value) {
        self.entries.insert(lemma.into(), entry);
    }

    pub fn get(&self, lemma: &str) -> Option<&Value> {
        self.entries.get(lemma)
    }

    pub fn contains(&self, lemma: &str) -> bool {
        self.entries.contains_key(lemma)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lemmas with an override, sorted.
    pub fn lemmas(&self) -> Vec<&str> {
        let mut lemmas: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        lemmas.sort_unstable();
        lemmas
    }

    pub fn warnings(&self) -> &[LoadWarning] {
        &self.warnings
    }
}
