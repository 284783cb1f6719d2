//! Loading the verb database and override files named on the command line.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use conjugo::{IrregularTable, Lexicon, LoadError};
use miette::miette;
use tracing::debug;

use crate::output::ConjugoDiagnostic;

/// Input files shared by every command.
#[derive(Debug, clap::Args)]
pub struct SourceArgs {
    /// Verb database (JSON array of verb records)
    #[arg(long, env = "CONJUGO_VERBS")]
    pub verbs: PathBuf,

    /// Irregular paradigm overrides (JSON object keyed by lemma)
    #[arg(long, env = "CONJUGO_IRREGULARS")]
    pub irregulars: Option<PathBuf>,
}

impl SourceArgs {
    pub fn load_lexicon(&self) -> miette::Result<Lexicon> {
        let content = read_input(&self.verbs, "verb database")?;
        Lexicon::load_str(&content).map_err(|e| load_error(&self.verbs, &content, e))
    }

    /// The override table, or an empty one when no file was given.
    pub fn load_irregulars(&self) -> miette::Result<IrregularTable> {
        let Some(path) = &self.irregulars else {
            return Ok(IrregularTable::empty());
        };
        let content = read_input(path, "override file")?;
        IrregularTable::load_str(&content).map_err(|e| load_error(path, &content, e))
    }
}

fn read_input(path: &Path, what: &str) -> miette::Result<String> {
    debug!(path = %path.display(), "reading {what}");
    read_to_string(path).map_err(|e| miette!("Cannot read {} {}: {}", what, path.display(), e))
}

/// Loaders see string input, so errors are re-attributed to `path`.
fn load_error(path: &Path, content: &str, error: LoadError) -> miette::Report {
    match error {
        LoadError::Json {
            line,
            column,
            message,
            ..
        } => ConjugoDiagnostic::from_json_error(path, content, line, column, message).into(),
        LoadError::Shape { message, .. } => miette!("{}: {}", path.display(), message),
        LoadError::Io { source, .. } => miette!("Cannot read {}: {}", path.display(), source),
    }
}
